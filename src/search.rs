//! Depth-limited adversarial search: minimax and alpha-beta pruning.
//!
//! This module is the core of the engine. It provides:
//! - [`minimax`] - exhaustive depth-limited minimax
//! - [`alphabeta`] - the same move choice, accelerated by alpha/beta pruning
//! - [`Deadline`] - the wall-clock guard both searchers poll at every node
//!
//! The searchers are generic over a [`GameState`] capability trait rather
//! than the concrete board type, so they can be exercised against synthetic
//! game trees in tests. Both return the same move for the same input: the
//! running best is replaced only by a *strictly* better child, so among
//! moves of equal value the first one generated wins, and pruning can never
//! change the chosen move, only the number of nodes visited.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::constants::NO_MOVE;

/// A destination cell as (row, column). `NO_MOVE` = (-1, -1) means the
/// active player has no legal move.
pub type Move = (i32, i32);

/// Evaluation value from the searching player's perspective.
/// `+inf` is a forced win, `-inf` a forced loss.
pub type Score = f64;

/// Recoverable conditions a search can surface instead of a move.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Remaining time crossed the safety margin; the caller should fall
    /// back to its last complete result.
    #[error("search aborted: time budget exhausted")]
    Timeout,
}

/// Capability interface the searchers require from a board position.
///
/// States are immutable from the searcher's perspective: every node visited
/// during search is a freshly forecast value that is dropped when the
/// recursive call returns.
pub trait GameState: Sized {
    /// Legal moves for the active player, in deterministic order.
    /// May be empty; the ordering decides ties.
    fn legal_moves(&self) -> Vec<Move>;

    /// The successor state after the active player plays `mv`, which must
    /// be a member of `legal_moves()`. Pure: `self` is left untouched.
    fn forecast(&self, mv: Move) -> Self;
}

// =============================================================================
// Deadline Guard
// =============================================================================

/// Remaining-time oracle polled at the start of every node visit.
pub trait Clock {
    fn remaining(&self) -> Duration;
}

/// A real wall clock counting down a fixed budget.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    started: Instant,
    budget: Duration,
}

impl GameClock {
    pub fn start(budget: Duration) -> Self {
        GameClock { started: Instant::now(), budget }
    }
}

impl Clock for GameClock {
    fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }
}

/// A clock paired with a safety margin. Once remaining time falls to the
/// margin, every subsequent check fails with [`SearchError::Timeout`].
pub struct Deadline<C: Clock> {
    clock: C,
    margin: Duration,
}

impl<C: Clock> Deadline<C> {
    pub fn new(clock: C, margin: Duration) -> Self {
        Deadline { clock, margin }
    }

    fn check(&self) -> Result<(), SearchError> {
        if self.clock.remaining() <= self.margin {
            Err(SearchError::Timeout)
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Minimax
// =============================================================================

/// Pick the best move for the active player with an exhaustive minimax
/// search `depth` plies deep.
///
/// Returns `NO_MOVE` if the active player has no legal move (the
/// evaluation function is not consulted in that case), and
/// `Err(SearchError::Timeout)` if the deadline expires mid-search.
pub fn minimax<S, E, C>(
    state: &S,
    depth: u32,
    eval: &E,
    deadline: &Deadline<C>,
) -> Result<Move, SearchError>
where
    S: GameState,
    E: Fn(&S) -> Score,
    C: Clock,
{
    deadline.check()?;
    debug_assert!(depth >= 1, "the root always attempts to choose a move");

    let mut best_move = NO_MOVE;
    let mut best_value = Score::NEG_INFINITY;
    for (i, mv) in state.legal_moves().into_iter().enumerate() {
        let value = minimax_value(&state.forecast(mv), depth - 1, false, eval, deadline)?;
        // First child seeds the running best; after that only a strictly
        // greater value displaces it.
        if i == 0 || value > best_value {
            best_value = value;
            best_move = mv;
        }
    }
    Ok(best_move)
}

/// Minimax value of `state` from the root player's perspective.
///
/// `maximizing` tags whether the current layer maximizes or minimizes,
/// alternating every ply.
fn minimax_value<S, E, C>(
    state: &S,
    depth: u32,
    maximizing: bool,
    eval: &E,
    deadline: &Deadline<C>,
) -> Result<Score, SearchError>
where
    S: GameState,
    E: Fn(&S) -> Score,
    C: Clock,
{
    deadline.check()?;

    let moves = state.legal_moves();
    if moves.is_empty() {
        // Whoever is to move and cannot has lost.
        return Ok(stuck_value(maximizing));
    }
    if depth == 0 {
        return Ok(evaluate(state, eval));
    }

    let mut best = if maximizing { Score::NEG_INFINITY } else { Score::INFINITY };
    for mv in moves {
        let value = minimax_value(&state.forecast(mv), depth - 1, !maximizing, eval, deadline)?;
        if maximizing {
            if value > best {
                best = value;
            }
        } else if value < best {
            best = value;
        }
    }
    Ok(best)
}

// =============================================================================
// Alpha-Beta
// =============================================================================

/// Pick the best move for the active player with alpha-beta pruned search
/// `depth` plies deep.
///
/// Chooses the same move as [`minimax`] for the same input, for any
/// evaluation function and depth; pruning only reduces the number of
/// nodes visited. Root no-move and timeout behavior are identical too.
pub fn alphabeta<S, E, C>(
    state: &S,
    depth: u32,
    eval: &E,
    deadline: &Deadline<C>,
) -> Result<Move, SearchError>
where
    S: GameState,
    E: Fn(&S) -> Score,
    C: Clock,
{
    deadline.check()?;
    debug_assert!(depth >= 1, "the root always attempts to choose a move");

    let mut best_move = NO_MOVE;
    let mut best_value = Score::NEG_INFINITY;
    let mut alpha = Score::NEG_INFINITY;
    let beta = Score::INFINITY;
    for (i, mv) in state.legal_moves().into_iter().enumerate() {
        let value =
            alphabeta_value(&state.forecast(mv), depth - 1, alpha, beta, false, eval, deadline)?;
        if i == 0 || value > best_value {
            best_value = value;
            best_move = mv;
        }
        // The root never cuts off (beta stays +inf); it only tightens alpha.
        if best_value > alpha {
            alpha = best_value;
        }
    }
    Ok(best_move)
}

/// Alpha-beta value of `state` from the root player's perspective.
///
/// `alpha` is the best value the maximizer can already force elsewhere,
/// `beta` the minimizer's counterpart. Both are threaded down by value and
/// never written back upward.
fn alphabeta_value<S, E, C>(
    state: &S,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    eval: &E,
    deadline: &Deadline<C>,
) -> Result<Score, SearchError>
where
    S: GameState,
    E: Fn(&S) -> Score,
    C: Clock,
{
    deadline.check()?;

    let moves = state.legal_moves();
    if moves.is_empty() {
        return Ok(stuck_value(maximizing));
    }
    if depth == 0 {
        return Ok(evaluate(state, eval));
    }

    if maximizing {
        let mut best = Score::NEG_INFINITY;
        for mv in moves {
            let value = alphabeta_value(
                &state.forecast(mv),
                depth - 1,
                alpha,
                beta,
                false,
                eval,
                deadline,
            )?;
            if value > best {
                best = value;
            }
            if best >= beta {
                // Beta cutoff: the minimizing ancestor already has a line
                // at least this good for itself.
                break;
            }
            if best > alpha {
                alpha = best;
            }
        }
        Ok(best)
    } else {
        let mut best = Score::INFINITY;
        for mv in moves {
            let value = alphabeta_value(
                &state.forecast(mv),
                depth - 1,
                alpha,
                beta,
                true,
                eval,
                deadline,
            )?;
            if value < best {
                best = value;
            }
            if best <= alpha {
                // Alpha cutoff.
                break;
            }
            if best < beta {
                beta = best;
            }
        }
        Ok(best)
    }
}

// =============================================================================
// Shared terminal handling
// =============================================================================

/// Value of a position where the active player cannot move: a loss for
/// whichever side is to move, expressed from the root player's perspective.
fn stuck_value(maximizing: bool) -> Score {
    if maximizing { Score::NEG_INFINITY } else { Score::INFINITY }
}

/// Run the external evaluation, rejecting unordered values fail-fast.
fn evaluate<S, E>(state: &S, eval: &E) -> Score
where
    E: Fn(&S) -> Score,
{
    let value = eval(state);
    assert!(!value.is_nan(), "evaluation function returned NaN");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A clock frozen at a fixed remaining time.
    struct FrozenClock(Duration);

    impl Clock for FrozenClock {
        fn remaining(&self) -> Duration {
            self.0
        }
    }

    #[test]
    fn test_deadline_expires_at_margin() {
        let deadline = Deadline::new(FrozenClock(Duration::from_millis(10)), Duration::from_millis(10));
        assert_eq!(deadline.check(), Err(SearchError::Timeout));
    }

    #[test]
    fn test_deadline_ok_above_margin() {
        let deadline = Deadline::new(FrozenClock(Duration::from_millis(11)), Duration::from_millis(10));
        assert_eq!(deadline.check(), Ok(()));
    }

    #[test]
    fn test_game_clock_counts_down() {
        let clock = GameClock::start(Duration::from_secs(60));
        let first = clock.remaining();
        assert!(first <= Duration::from_secs(60));
        assert!(clock.remaining() <= first);
    }

    #[test]
    fn test_stuck_value_is_a_loss_for_the_active_side() {
        assert_eq!(stuck_value(true), Score::NEG_INFINITY);
        assert_eq!(stuck_value(false), Score::INFINITY);
    }
}
