//! Move-selection agents built on top of the search core.
//!
//! The searchers themselves only answer "best move at depth D or
//! Timeout"; turning that into a move under a wall-clock budget is the
//! caller's job, implemented here:
//! - [`MinimaxAgent`] - one fixed-depth minimax search, forfeits on timeout
//! - [`AlphaBetaAgent`] - iterative deepening, keeps the deepest complete
//!   result and returns it when the clock runs out
//! - [`RandomAgent`] and [`GreedyAgent`] - baseline opponents

use std::time::Duration;

use crate::board::Board;
use crate::constants::{CELLS, NO_MOVE, SEARCH_DEPTH, TIMER_MARGIN_MS};
use crate::heuristics::{improved_score, open_move_score};
use crate::search::{alphabeta, minimax, Clock, Deadline, GameState, Move, SearchError};

/// Fixed-depth minimax agent.
///
/// Mirrors the simplest possible caller: a single search at `depth`. If
/// the clock expires before it completes there is no shallower result to
/// fall back to, so the agent forfeits with `NO_MOVE`.
pub struct MinimaxAgent {
    pub depth: u32,
    pub margin: Duration,
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(SEARCH_DEPTH)
    }
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent { depth, margin: Duration::from_millis(TIMER_MARGIN_MS) }
    }

    pub fn get_move<C: Clock>(&self, board: &Board, clock: C) -> Move {
        let me = board.active_player();
        let eval = move |b: &Board| improved_score(b, me);
        let deadline = Deadline::new(clock, self.margin);
        match minimax(board, self.depth, &eval, &deadline) {
            Ok(mv) => mv,
            Err(SearchError::Timeout) => NO_MOVE,
        }
    }
}

/// Iterative-deepening alpha-beta agent.
///
/// Searches depth 1, 2, 3, ... until the deadline guard aborts a search,
/// then plays the move from the deepest search that finished. Depth is
/// capped at the number of cells: no game lasts longer than that.
pub struct AlphaBetaAgent {
    pub margin: Duration,
}

impl Default for AlphaBetaAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBetaAgent {
    pub fn new() -> Self {
        AlphaBetaAgent { margin: Duration::from_millis(TIMER_MARGIN_MS) }
    }

    pub fn get_move<C: Clock>(&self, board: &Board, clock: C) -> Move {
        let me = board.active_player();
        let eval = move |b: &Board| improved_score(b, me);
        let deadline = Deadline::new(clock, self.margin);

        let mut best = NO_MOVE;
        for depth in 1..=CELLS as u32 {
            match alphabeta(board, depth, &eval, &deadline) {
                Ok(mv) => best = mv,
                Err(SearchError::Timeout) => break,
            }
            if best == NO_MOVE {
                // No legal move at the root; deeper searches agree.
                break;
            }
        }
        best
    }
}

/// Plays a uniformly random legal move.
pub struct RandomAgent;

impl RandomAgent {
    pub fn get_move(&self, board: &Board) -> Move {
        let moves = board.legal_moves();
        if moves.is_empty() {
            NO_MOVE
        } else {
            moves[fastrand::usize(..moves.len())]
        }
    }
}

/// Picks the move maximizing [`open_move_score`] one ply ahead, first
/// among equals.
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn get_move(&self, board: &Board) -> Move {
        let me = board.active_player();
        let mut best = NO_MOVE;
        let mut best_score = f64::NEG_INFINITY;
        for (i, mv) in board.legal_moves().into_iter().enumerate() {
            let score = open_move_score(&board.forecast(mv), me);
            if i == 0 || score > best_score {
                best_score = score;
                best = mv;
            }
        }
        best
    }
}
