//! Constants for board geometry and search parameters.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board7x7` (default): the standard 7x7 Isolation board
//! - `board9x9`: 9x9 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                           # 7x7 (default)
//! cargo build --no-default-features --features board9x9 # 9x9
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Tournament Isolation is played on 7x7.
#[cfg(feature = "board7x7")]
pub const N: usize = 7;

#[cfg(feature = "board9x9")]
pub const N: usize = 9;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board7x7", feature = "board9x9"))]
compile_error!("Cannot enable both 'board7x7' and 'board9x9' features at the same time");

#[cfg(not(any(feature = "board7x7", feature = "board9x9")))]
compile_error!("Must enable exactly one board size feature: 'board7x7' or 'board9x9'");

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Knight-style move offsets as (row, column) deltas.
///
/// The order is fixed: move generation iterates this table directly, and
/// the searchers' first-wins tie-break depends on a deterministic ordering.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

// =============================================================================
// Special Move Values
// =============================================================================

/// Sentinel returned when the active player has no legal move.
/// Never a valid input to `forecast`.
pub const NO_MOVE: (i32, i32) = (-1, -1);

// =============================================================================
// Search Parameters
// =============================================================================

/// Default fixed search depth for the minimax agent.
pub const SEARCH_DEPTH: u32 = 3;

/// Default wall-clock budget per move, in milliseconds.
pub const MOVE_BUDGET_MS: u64 = 150;

/// Safety margin, in milliseconds. The search aborts once remaining time
/// falls to this threshold, leaving room to unwind and report a move.
pub const TIMER_MARGIN_MS: u64 = 10;
