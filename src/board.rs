//! Isolation board representation and move generation.
//!
//! This module provides the game logic for Isolation:
//! - Board state (blocked cells, player locations, whose turn it is)
//! - Legal move generation with a fixed, deterministic ordering
//! - Move application with validation, and pure forecasting
//! - Win/loss detection
//!
//! Both players move like chess knights. A cell is blocked permanently
//! once a player has visited it; a player who cannot move loses. Before a
//! player's first move, every open cell is a legal destination.

use std::fmt;

use crate::constants::{CELLS, DIRECTIONS, N};
use crate::search::{GameState, Move};

/// The two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Result of attempting to apply a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Destination lies outside the board
    OutOfBounds,
    /// Destination cell has already been visited
    Blocked,
    /// Destination is not a knight's move away from the player's position
    Unreachable,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "Illegal move: outside the board"),
            MoveError::Blocked => write!(f, "Illegal move: cell already visited"),
            MoveError::Unreachable => write!(f, "Illegal move: not reachable from here"),
        }
    }
}

impl std::error::Error for MoveError {}

/// An Isolation position: visited cells, player locations, active player.
#[derive(Clone)]
pub struct Board {
    blocked: [bool; CELLS],
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with both players still off the board and
    /// player one to move.
    pub fn new() -> Self {
        Board {
            blocked: [false; CELLS],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    /// The player about to move.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Current location of `player`, or `None` before their opening move.
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    /// Number of moves played so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    fn in_bounds(mv: Move) -> bool {
        let (row, col) = mv;
        row >= 0 && col >= 0 && (row as usize) < N && (col as usize) < N
    }

    fn cell(mv: Move) -> usize {
        (mv.0 as usize) * N + mv.1 as usize
    }

    fn is_open(&self, mv: Move) -> bool {
        Self::in_bounds(mv) && !self.blocked[Self::cell(mv)]
    }

    /// Legal destinations for `player`, in deterministic order.
    ///
    /// Before the player's opening move this is every open cell in
    /// row-major order; afterwards it is the open knight moves in
    /// `DIRECTIONS` order.
    pub fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.locations[player.index()] {
            None => {
                let mut moves = Vec::with_capacity(CELLS);
                for row in 0..N as i32 {
                    for col in 0..N as i32 {
                        if self.is_open((row, col)) {
                            moves.push((row, col));
                        }
                    }
                }
                moves
            }
            Some((row, col)) => DIRECTIONS
                .iter()
                .map(|&(dr, dc)| (row + dr, col + dc))
                .filter(|&mv| self.is_open(mv))
                .collect(),
        }
    }

    /// Whether `mv` is legal for the active player right now.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }

    fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if !Self::in_bounds(mv) {
            return Err(MoveError::OutOfBounds);
        }
        if self.blocked[Self::cell(mv)] {
            return Err(MoveError::Blocked);
        }
        if let Some((row, col)) = self.locations[self.active.index()] {
            let reachable = DIRECTIONS
                .iter()
                .any(|&(dr, dc)| (row + dr, col + dc) == mv);
            if !reachable {
                return Err(MoveError::Unreachable);
            }
        }
        Ok(())
    }

    /// Move the active player to `mv`, blocking the destination cell and
    /// passing the turn to the opponent.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.validate(mv)?;
        self.blocked[Self::cell(mv)] = true;
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.other();
        self.move_count += 1;
        Ok(())
    }

    /// True if `player` is to move and has nowhere to go.
    pub fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.legal_moves_for(player).is_empty()
    }

    /// True if the opponent of `player` is to move and has nowhere to go.
    pub fn is_winner(&self, player: Player) -> bool {
        self.is_loser(player.other())
    }
}

impl GameState for Board {
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active)
    }

    fn forecast(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv)
            .expect("forecast requires a move from legal_moves");
        next
    }
}

impl fmt::Display for Board {
    /// Render the board: `1`/`2` player locations, `#` visited cells,
    /// `.` open cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..N {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..N as i32 {
            write!(f, " {row}")?;
            for col in 0..N as i32 {
                let symbol = if self.location(Player::One) == Some((row, col)) {
                    '1'
                } else if self.location(Player::Two) == Some((row, col)) {
                    '2'
                } else if self.blocked[Self::cell((row, col))] {
                    '#'
                } else {
                    '.'
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, " {:?} to move", self.active)
    }
}
