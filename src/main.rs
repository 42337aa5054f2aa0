use std::{fs, path::PathBuf, process};

use blackjack_table::{play, Players, RoundInput, Variant};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "Plays one round of Blackjack at a single table", long_about = None)]
struct Args {
    /// Player name; repeat for each seat
    #[arg(short = 'p', long = "player", conflicts_with = "players")]
    player: Vec<String>,

    /// Number of anonymous players
    #[arg(short = 'n', long = "players", default_value = "2")]
    players: u32,

    /// Random seed (defaults to OS entropy)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Play the pure-function rendition: two cards each, no draw phase
    #[arg(long = "functional")]
    functional: bool,

    /// Print the result as JSON instead of text
    #[arg(long = "json")]
    json: bool,

    /// Read the round input from a JSON file instead of the flags above
    #[arg(
        short = 'i',
        long = "input",
        conflicts_with_all = ["player", "players", "seed", "functional"]
    )]
    input: Option<PathBuf>,
}

impl Args {
    fn round_input(&self) -> Result<RoundInput, String> {
        if let Some(path) = &self.input {
            let json = fs::read_to_string(path)
                .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
            return RoundInput::from_json(&json).map_err(|err| err.to_string());
        }
        let players = if self.player.is_empty() {
            Players::Count(self.players)
        } else {
            Players::Named(self.player.clone())
        };
        Ok(RoundInput {
            players,
            seed: self.seed,
            variant: if self.functional {
                Variant::Functional
            } else {
                Variant::Table
            },
        })
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();
    let args = Args::parse();

    let config = match args
        .round_input()
        .and_then(|input| input.validate().map_err(|err| err.to_string()))
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Input error: {err}");
            process::exit(2);
        }
    };
    info!("seating {} player(s)", config.names().len());

    let outcome = match play(&config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Round failed: {err}");
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Serialization failed: {err}");
                process::exit(1);
            }
        }
    } else {
        print!("{outcome}");
    }
}
