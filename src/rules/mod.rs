//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] snapshots. Rules are separated from board
//! storage so the session layer and any UI can query status without holding
//! mutable state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the current status of a board.
///
/// Scans the 8 winning triples in fixed order (rows, columns, diagonals);
/// the first uniformly occupied triple decides the winner. A full board with
/// no such triple is a draw; anything else is in progress. Any combination
/// of marks is accepted, reachable from legal play or not.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
