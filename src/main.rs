//! Simple-Go: a Go rules engine.
//!
//! ## Usage
//!
//! - `simple-go` - Play a random demo game
//! - `simple-go gtp` - Start GTP server for GUI integration
//! - `simple-go --size 9 demo --moves 30 --seed 4` - Demo on a 9x9 board

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use simple_go::constants::{DEFAULT_BOARD_SIZE, DEMO_MOVES, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use simple_go::engine::BoardEngine;
use simple_go::gtp::GtpEngine;
use simple_go::playout::random_game;

/// Simple-Go: a Go rules engine
#[derive(Parser)]
#[command(name = "simple-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_SIZE,
          value_parser = parse_board_size)]
    size: usize,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Play random legal moves and show the result
    Demo {
        /// Number of legal moves to play
        #[arg(long, default_value_t = DEMO_MOVES)]
        moves: usize,
        /// Seed for the move picker
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
        ))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so GTP responses on stdout stay clean
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &cli.log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    match cli.command {
        Some(Commands::Gtp) => {
            info!("Starting GTP server on a {0}x{0} board", cli.size);
            GtpEngine::new(cli.size).run()
        }
        Some(Commands::Demo { moves, seed }) => {
            run_demo(cli.size, moves, seed);
            Ok(())
        }
        None => {
            run_demo(cli.size, DEMO_MOVES, None);
            Ok(())
        }
    }
}

fn run_demo(size: usize, moves: usize, seed: Option<u64>) {
    println!("Simple-Go: random game on a {size}x{size} board\n");

    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut engine = BoardEngine::new(size);
    let played = random_game(&mut engine, moves, &mut rng);

    let captured: usize = played.iter().map(|(_, o)| o.captured.len()).sum();
    for (pt, outcome) in &played {
        if !outcome.captured.is_empty() {
            let name = engine.board().vertex_name(*pt).unwrap_or_default();
            println!(
                "{} at {name} captured {} stone(s)",
                outcome.player,
                outcome.captured.len()
            );
        }
    }

    println!("\n{}", engine.board());
    println!(
        "{} moves played, {captured} stones captured, {} groups on the board",
        played.len(),
        engine.groups().len()
    );
    println!("{} to move", engine.current_turn());
}
