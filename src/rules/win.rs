//! Win detection logic for tic-tac-toe.

use super::super::line::{Orientation, WinLine};
use super::super::position::Position;
use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning triples with their display geometry, in tie-break order:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
const LINES: [(WinLine, [Position; 3]); 8] = [
    (
        WinLine {
            start: Position::TopLeft,
            end: Position::TopRight,
            orientation: Orientation::Row,
        },
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
    ),
    (
        WinLine {
            start: Position::MiddleLeft,
            end: Position::MiddleRight,
            orientation: Orientation::Row,
        },
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
    ),
    (
        WinLine {
            start: Position::BottomLeft,
            end: Position::BottomRight,
            orientation: Orientation::Row,
        },
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    ),
    (
        WinLine {
            start: Position::TopLeft,
            end: Position::BottomLeft,
            orientation: Orientation::Column,
        },
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
    ),
    (
        WinLine {
            start: Position::TopCenter,
            end: Position::BottomCenter,
            orientation: Orientation::Column,
        },
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
    ),
    (
        WinLine {
            start: Position::TopRight,
            end: Position::BottomRight,
            orientation: Orientation::Column,
        },
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
    ),
    (
        WinLine {
            start: Position::TopLeft,
            end: Position::BottomRight,
            orientation: Orientation::Diagonal,
        },
        [Position::TopLeft, Position::Center, Position::BottomRight],
    ),
    (
        WinLine {
            start: Position::TopRight,
            end: Position::BottomLeft,
            orientation: Orientation::AntiDiagonal,
        },
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ),
];

/// Returns the geometry of the first completed triple, if any.
///
/// Triples are scanned in the fixed order of [`LINES`], so a board holding
/// two simultaneous three-in-a-rows resolves deterministically to the
/// earlier one.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for (line, [a, b, c]) in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return Some(line);
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Agrees with [`winning_line`] by construction:
/// the winner is read off the line's starting cell.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| board.get(line.start).player())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));

        let line = winning_line(&board).unwrap();
        assert_eq!(line.cells(), [0, 1, 2]);
        assert_eq!(line.orientation, Orientation::Row);
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board).unwrap().orientation,
            Orientation::Diagonal
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_double_win_resolves_to_first_line() {
        // Unreachable board: X holds the top row and the left column.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let line = winning_line(&board).unwrap();
        assert_eq!(line.cells(), [0, 1, 2]);
        assert_eq!(line.orientation, Orientation::Row);
    }
}
