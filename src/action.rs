//! First-class move types and pure move application.
//!
//! Moves are domain events, not side effects. Applying one never mutates the
//! input board: the caller gets back a fresh board with one more mark, and
//! any reader still holding the old snapshot stays valid.

use super::position::Position;
use super::rules::evaluate;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Applies this move to a board, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the board is already terminal and
    /// [`MoveError::SquareOccupied`] if the target square holds a mark.
    /// The input board is unchanged on rejection.
    #[instrument(skip(board))]
    pub fn apply(self, board: &Board) -> Result<Board, MoveError> {
        if evaluate(board).is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(self.position) {
            return Err(MoveError::SquareOccupied(self.position));
        }

        let mut next = *board;
        next.set(self.position, Square::Occupied(self.player));
        Ok(next)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error raised when a move is rejected.
///
/// Every variant is recoverable: the caller keeps its unchanged board and
/// moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a board cell.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Applies a move given by raw board index.
///
/// Index-based front door matching the session boundary: `index` must be in
/// `[0, 9)` and name an empty cell on a non-terminal board. The caller is
/// responsible for alternating `player` correctly; this function does not
/// track whose turn it is.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
    Move::new(player, position).apply(board)
}
