//! Static evaluation heuristics for Isolation positions.
//!
//! Each heuristic scores a position from `player`'s perspective as a
//! [`Score`]: decided positions are `+inf` (win) or `-inf` (loss), open
//! positions get a finite estimate. The searchers call these only at
//! depth-zero nodes where the active player still has moves, but the
//! win/loss checks make them safe to call on any position.

use crate::board::{Board, Player};
use crate::constants::N;
use crate::search::Score;

/// Number of moves open to `player`. More mobility is better.
pub fn open_move_score(board: &Board, player: Player) -> Score {
    if board.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if board.is_winner(player) {
        return Score::INFINITY;
    }
    board.legal_moves_for(player).len() as Score
}

/// Own mobility minus opponent mobility. The workhorse heuristic.
pub fn improved_score(board: &Board, player: Player) -> Score {
    if board.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if board.is_winner(player) {
        return Score::INFINITY;
    }
    let own = board.legal_moves_for(player).len() as Score;
    let opp = board.legal_moves_for(player.other()).len() as Score;
    own - opp
}

/// Negated squared distance from the board center. Staying central keeps
/// options open in the endgame; off the board counts as the center.
pub fn center_score(board: &Board, player: Player) -> Score {
    if board.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if board.is_winner(player) {
        return Score::INFINITY;
    }
    let Some((row, col)) = board.location(player) else {
        return 0.0;
    };
    let mid = (N as i32 - 1) as Score / 2.0;
    let dr = row as Score - mid;
    let dc = col as Score - mid;
    -(dr * dr + dc * dc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(p1: (i32, i32), p2: (i32, i32)) -> Board {
        let mut board = Board::new();
        board.apply_move(p1).unwrap();
        board.apply_move(p2).unwrap();
        board
    }

    #[test]
    fn test_open_move_score_counts_mobility() {
        let board = placed((3, 3), (0, 0));
        assert_eq!(open_move_score(&board, Player::One), 8.0);
        assert_eq!(open_move_score(&board, Player::Two), 2.0);
    }

    #[test]
    fn test_improved_score_is_antisymmetric() {
        let board = placed((3, 3), (0, 0));
        let one = improved_score(&board, Player::One);
        let two = improved_score(&board, Player::Two);
        assert_eq!(one, 6.0);
        assert_eq!(one, -two);
    }

    #[test]
    fn test_center_score_prefers_the_middle() {
        let mid = (N / 2) as i32;
        let board = placed((mid, mid), (0, 0));
        let central = center_score(&board, Player::One);
        let cornered = center_score(&board, Player::Two);
        assert_eq!(central, 0.0);
        assert!(central > cornered);
    }
}
