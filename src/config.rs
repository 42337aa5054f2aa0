use std::collections::HashSet;

use serde::Deserialize;

use crate::{deck::DECK_SIZE, error::ConfigError};

/// Every seat gets two cards before anyone draws.
pub const MAX_PLAYERS: usize = DECK_SIZE / 2;

/// The functional rendition deals the dealer a hand of its own on top of
/// the seated names.
pub const MAX_FUNCTIONAL_PLAYERS: usize = DECK_SIZE / 2 - 1;

fn default_players() -> Players {
    Players::Count(2)
}

/// Who sits at the table: explicit names, or a head count of anonymous
/// players named `Player 0`, `Player 1`, ...
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Players {
    Named(Vec<String>),
    Count(u32),
}

impl Players {
    pub fn len(&self) -> usize {
        match self {
            Players::Named(names) => names.len(),
            Players::Count(count) => *count as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<String> {
        match self {
            Players::Named(names) => names.clone(),
            Players::Count(count) => (0..*count).map(|i| format!("Player {i}")).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Stateful table with a draw phase.
    #[default]
    Table,
    /// Pure functions, two cards per hand.
    Functional,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoundInput {
    #[serde(default = "default_players")]
    pub players: Players,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub variant: Variant,
}

impl Default for RoundInput {
    fn default() -> Self {
        RoundInput {
            players: default_players(),
            seed: None,
            variant: Variant::default(),
        }
    }
}

/// Round settings that passed [`RoundInput::validate`]: one to
/// [`MAX_PLAYERS`] distinct, non-blank names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    names: Vec<String>,
    seed: Option<u64>,
    variant: Variant,
}

impl TableConfig {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
}

impl Variant {
    pub fn max_players(self) -> usize {
        match self {
            Variant::Table => MAX_PLAYERS,
            Variant::Functional => MAX_FUNCTIONAL_PLAYERS,
        }
    }
}

impl RoundInput {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(self) -> Result<TableConfig, ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        let max = self.variant.max_players();
        if self.players.len() > max {
            return Err(ConfigError::TooManyPlayers {
                requested: self.players.len(),
                max,
            });
        }
        let names = self.players.names();
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }
        Ok(TableConfig {
            names,
            seed: self.seed,
            variant: self.variant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_names_players_from_zero() {
        assert_eq!(
            Players::Count(3).names(),
            vec!["Player 0", "Player 1", "Player 2"]
        );
    }

    #[test]
    fn parses_a_name_list() {
        let input = RoundInput::from_json(r#"{"players": ["Alice", "Bob"], "seed": 9}"#).unwrap();
        assert_eq!(
            input.players,
            Players::Named(vec!["Alice".to_string(), "Bob".to_string()])
        );
        assert_eq!(input.seed, Some(9));
        assert_eq!(input.variant, Variant::Table);
    }

    #[test]
    fn parses_a_count_and_variant() {
        let input = RoundInput::from_json(r#"{"players": 8, "variant": "functional"}"#).unwrap();
        assert_eq!(input.players, Players::Count(8));
        assert_eq!(input.variant, Variant::Functional);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = RoundInput::from_json("{}").unwrap().validate().unwrap();
        assert_eq!(config.names, vec!["Player 0", "Player 1"]);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            RoundInput::from_json(r#"{"players": true}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_tables() {
        let input = RoundInput {
            players: Players::Count(0),
            ..RoundInput::default()
        };
        assert!(matches!(input.validate(), Err(ConfigError::NoPlayers)));

        let input = RoundInput {
            players: Players::Named(Vec::new()),
            ..RoundInput::default()
        };
        assert!(matches!(input.validate(), Err(ConfigError::NoPlayers)));
    }

    #[test]
    fn rejects_more_players_than_the_deck_seats() {
        let input = RoundInput {
            players: Players::Count(27),
            ..RoundInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(ConfigError::TooManyPlayers { requested: 27, max: 26 })
        ));
    }

    #[test]
    fn huge_counts_fail_before_naming_anyone() {
        let input = RoundInput {
            players: Players::Count(u32::MAX),
            ..RoundInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(ConfigError::TooManyPlayers { requested, max: 26 })
                if requested == u32::MAX as usize
        ));
    }

    #[test]
    fn functional_rounds_leave_room_for_the_dealer() {
        let names: Vec<String> = (0..26).map(|i| format!("P{i}")).collect();
        let input = RoundInput {
            players: Players::Named(names.clone()),
            variant: Variant::Functional,
            ..RoundInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(ConfigError::TooManyPlayers { requested: 26, max: 25 })
        ));

        let input = RoundInput {
            players: Players::Named(names[..25].to_vec()),
            variant: Variant::Functional,
            ..RoundInput::default()
        };
        assert_eq!(input.validate().unwrap().names().len(), 25);
    }

    #[test]
    fn rejects_duplicate_and_blank_names() {
        let input = RoundInput {
            players: Players::Named(vec!["Ann".into(), "Bo".into(), "Ann".into()]),
            ..RoundInput::default()
        };
        assert!(matches!(input.validate(), Err(ConfigError::DuplicateName(name)) if name == "Ann"));

        let input = RoundInput {
            players: Players::Named(vec!["Ann".into(), " ".into()]),
            ..RoundInput::default()
        };
        assert!(matches!(input.validate(), Err(ConfigError::EmptyName)));
    }
}
