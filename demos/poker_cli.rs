//! CLI poker example.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use fivecard::{Game, GameOptions, GameResult, HAND_SIZE};
use log::error;

/// Deals one hand per player and prints the winners.
#[derive(Debug, Parser)]
struct Cli {
    /// Comma separated list of players.
    #[clap(long, short, value_delimiter = ',', default_value = "Joe,Bob,Sally")]
    players: Vec<String>,
    /// Deck seed, defaults to the current time.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of cards dealt to each player.
    #[clap(long, default_value_t = HAND_SIZE as u8, value_parser = clap::value_parser!(u8).range(1..=10))]
    hand_size: u8,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default().with_hand_size(usize::from(cli.hand_size));
    let mut game = Game::new(options, seed);

    match game.play(&cli.players) {
        Ok(result) => {
            print_table(&result);
            println!("{result} Wins!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Seed {seed}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_table(result: &GameResult) {
    println!();
    for (index, hand) in result.hands.iter().enumerate() {
        let marker = if result.winners.contains(&index) { "*" } else { " " };
        println!("{marker} {hand}");
    }
    println!();
}
