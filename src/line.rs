//! Win-line geometry for rendering.
//!
//! A [`WinLine`] describes a completed triple in display terms: where it
//! starts and ends, which way it runs, and how long to draw it. The engine
//! produces it; drawing it is the caller's business.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Direction a winning line runs across the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Orientation {
    /// Horizontal, left to right.
    Row,
    /// Vertical, top to bottom.
    Column,
    /// Main diagonal, top-left to bottom-right.
    Diagonal,
    /// Anti-diagonal, top-right to bottom-left.
    AntiDiagonal,
}

impl Orientation {
    /// Rotation of the line in degrees, measured from horizontal.
    pub fn angle_degrees(self) -> f32 {
        match self {
            Orientation::Row => 0.0,
            Orientation::Column => 90.0,
            Orientation::Diagonal => 45.0,
            Orientation::AntiDiagonal => 135.0,
        }
    }

    /// Multiplier applied to the board size to span the line.
    ///
    /// Diagonals use 1.4 rather than sqrt(2) so a port renders identically
    /// to the reference layout.
    pub fn length_factor(self) -> f32 {
        match self {
            Orientation::Row | Orientation::Column => 1.0,
            Orientation::Diagonal | Orientation::AntiDiagonal => 1.4,
        }
    }
}

/// Geometric descriptor of a winning triple.
///
/// Produced by [`crate::winning_line`] only when a win exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// First cell of the triple in enumeration order.
    pub start: Position,
    /// Last cell of the triple.
    pub end: Position,
    /// Direction the line runs.
    pub orientation: Orientation,
}

impl WinLine {
    /// The three board indices covered by this line, in order.
    pub fn cells(&self) -> [usize; 3] {
        let a = self.start.to_index();
        let c = self.end.to_index();
        [a, (a + c) / 2, c]
    }

    /// Rotation of the line in degrees.
    pub fn angle_degrees(&self) -> f32 {
        self.orientation.angle_degrees()
    }

    /// Length of the rendered line for a board drawn at `board_size` units.
    pub fn length(&self, board_size: f32) -> f32 {
        board_size * self.orientation.length_factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_geometry() {
        let line = WinLine {
            start: Position::TopLeft,
            end: Position::TopRight,
            orientation: Orientation::Row,
        };
        assert_eq!(line.cells(), [0, 1, 2]);
        assert_eq!(line.angle_degrees(), 0.0);
        assert_eq!(line.length(300.0), 300.0);
    }

    #[test]
    fn test_column_geometry() {
        let line = WinLine {
            start: Position::TopCenter,
            end: Position::BottomCenter,
            orientation: Orientation::Column,
        };
        assert_eq!(line.cells(), [1, 4, 7]);
        assert_eq!(line.angle_degrees(), 90.0);
    }

    #[test]
    fn test_diagonal_geometry() {
        let main = WinLine {
            start: Position::TopLeft,
            end: Position::BottomRight,
            orientation: Orientation::Diagonal,
        };
        assert_eq!(main.cells(), [0, 4, 8]);
        assert_eq!(main.angle_degrees(), 45.0);
        assert_eq!(main.length(300.0), 300.0 * 1.4);

        let anti = WinLine {
            start: Position::TopRight,
            end: Position::BottomLeft,
            orientation: Orientation::AntiDiagonal,
        };
        assert_eq!(anti.cells(), [2, 4, 6]);
        assert_eq!(anti.angle_degrees(), 135.0);
    }
}
