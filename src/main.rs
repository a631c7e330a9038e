//! Isolation-Rust: adversarial search engine for the game of Isolation.
//!
//! ## Usage
//!
//! - `isolation-rust` - Show a demo
//! - `isolation-rust demo` - Run the search demo
//! - `isolation-rust play` - Play a full game, alpha-beta vs. random

use std::time::Duration;

use anyhow::bail;
use clap::{Parser, Subcommand};

use isolation_rust::agent::{AlphaBetaAgent, MinimaxAgent, RandomAgent};
use isolation_rust::board::{Board, Player};
use isolation_rust::constants::{MOVE_BUDGET_MS, NO_MOVE, SEARCH_DEPTH};
use isolation_rust::search::GameClock;

/// Isolation-Rust: a minimax / alpha-beta Isolation engine
#[derive(Parser)]
#[command(name = "isolation-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short demo of both searchers
    Demo,
    /// Play a full game: iterative-deepening alpha-beta vs. a random mover
    Play {
        /// Wall-clock budget per move, in milliseconds
        #[arg(long, default_value_t = MOVE_BUDGET_MS)]
        budget_ms: u64,
        /// Fixed seed for the random opponent
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { budget_ms, seed }) => {
            if budget_ms == 0 {
                bail!("the per-move budget must be positive");
            }
            fastrand::seed(seed);
            play_game(Duration::from_millis(budget_ms));
        }
        Some(Commands::Demo) | None => {
            run_demo();
        }
    }
    Ok(())
}

fn run_demo() {
    println!("Isolation-Rust: minimax / alpha-beta Isolation engine\n");

    let mut board = Board::new();
    board.apply_move((2, 2)).unwrap();
    board.apply_move((4, 4)).unwrap();
    println!("{board}");

    let budget = Duration::from_millis(MOVE_BUDGET_MS);

    let fixed = MinimaxAgent::new(SEARCH_DEPTH);
    let mv = fixed.get_move(&board, GameClock::start(budget));
    println!("Minimax at depth {}: {mv:?}", SEARCH_DEPTH);

    let deepening = AlphaBetaAgent::new();
    let mv = deepening.get_move(&board, GameClock::start(budget));
    println!("Iterative alpha-beta within {MOVE_BUDGET_MS} ms: {mv:?}");
}

/// Run one full game and report the winner.
fn play_game(budget: Duration) {
    let engine = AlphaBetaAgent::new();
    let opponent = RandomAgent;

    let mut board = Board::new();
    loop {
        let mv = match board.active_player() {
            Player::One => engine.get_move(&board, GameClock::start(budget)),
            Player::Two => opponent.get_move(&board),
        };
        if mv == NO_MOVE {
            break;
        }
        let mover = board.active_player();
        if let Err(err) = board.apply_move(mv) {
            // Forfeits the game on an illegal engine move
            println!("{mover:?} played {mv:?}: {err}");
            break;
        }
        println!("{mover:?} -> {mv:?}");
    }

    let loser = board.active_player();
    println!("\n{board}");
    println!("{:?} is isolated; {:?} wins after {} moves", loser, loser.other(), board.move_count());
}
