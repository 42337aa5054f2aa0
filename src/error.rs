use thiserror::Error;

/// Errors raised while a round is being dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck exhausted, no card left to deal")]
    DeckExhausted,
}

/// Errors raised while checking round input, before any table exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("{requested} players requested, a single deck seats at most {max}")]
    TooManyPlayers { requested: usize, max: usize },

    #[error("player name {0:?} appears more than once")]
    DuplicateName(String),

    #[error("player names must not be empty")]
    EmptyName,

    #[error("no player named {0:?} at this table")]
    UnknownPlayer(String),

    #[error("invalid round input: {0}")]
    Parse(#[from] serde_json::Error),
}
