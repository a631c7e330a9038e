//! Isolation-Rust: a depth-limited adversarial search engine for the
//! board game Isolation.
//!
//! Two players share a board and move like chess knights; every visited
//! cell is blocked forever, and the first player who cannot move loses.
//! The engine picks moves by depth-limited minimax or alpha-beta search
//! under a hard wall-clock budget.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and search parameters
//! - [`search`] - Minimax and alpha-beta searchers with the deadline guard
//! - [`board`] - Board state, move generation and validation
//! - [`heuristics`] - Static evaluation functions
//! - [`agent`] - Iterative deepening and baseline agents
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use isolation_rust::board::Board;
//! use isolation_rust::heuristics::improved_score;
//! use isolation_rust::search::{alphabeta, Deadline, GameClock};
//!
//! // Open a game and pick player one's reply to a depth-2 search.
//! let mut board = Board::new();
//! board.apply_move((2, 2)).unwrap();
//! board.apply_move((4, 4)).unwrap();
//!
//! let me = board.active_player();
//! let eval = move |b: &Board| improved_score(b, me);
//! let deadline = Deadline::new(
//!     GameClock::start(Duration::from_millis(150)),
//!     Duration::from_millis(10),
//! );
//!
//! let best = alphabeta(&board, 2, &eval, &deadline).expect("within budget");
//! assert!(board.is_legal(best));
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod heuristics;
pub mod search;
