use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod functional;
pub mod hand;
pub mod render;
pub mod table;

pub use card::{Card, Rank, Suit};
pub use config::{Players, RoundInput, TableConfig, Variant};
pub use deck::Deck;
pub use error::{ConfigError, DealError};
pub use hand::Hand;
pub use table::{RoundResult, Table};

/// A finished round from either rendition of the game.
#[derive(Debug, Serialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum Outcome {
    Table(RoundResult),
    Functional(functional::FunctionalRound),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Table(round) => write!(f, "{round}"),
            Outcome::Functional(round) => write!(f, "{round}"),
        }
    }
}

pub fn rng_for(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Plays one round as configured.
///
/// The table rendition never fails: a short deck is recorded in the result.
/// The functional rendition has no partial hands and returns the error.
pub fn play(config: &TableConfig) -> Result<Outcome, DealError> {
    let mut rng = rng_for(config.seed());
    match config.variant() {
        Variant::Table => Ok(Outcome::Table(Table::new(config, &mut rng).run())),
        Variant::Functional => {
            functional::play(config.names(), &mut rng).map(Outcome::Functional)
        }
    }
}

fn play_from_js(params: &JsValue) -> Result<Outcome, JsValue> {
    console_error_panic_hook::set_once();
    let input: RoundInput = if params.is_undefined() || params.is_null() {
        RoundInput::default()
    } else {
        serde_wasm_bindgen::from_value(params.clone())
            .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?
    };
    let config = input
        .validate()
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    play(&config).map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))
}

#[wasm_bindgen]
pub fn play_round(params: &JsValue) -> Result<JsValue, JsValue> {
    let outcome = play_from_js(params)?;
    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn play_round_text(params: &JsValue) -> Result<String, JsValue> {
    Ok(play_from_js(params)?.to_string())
}

#[wasm_bindgen]
pub fn print_round(params: &JsValue) -> Result<(), JsValue> {
    let report = play_from_js(params)?.to_string();
    web_sys::console::log_1(&JsValue::from_str(&report));
    Ok(())
}
