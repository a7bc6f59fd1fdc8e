//! Win detection over the eight fixed lines.

use crate::board::{Board, Marker};
use crate::position::Position;
use tracing::instrument;

/// A triple of positions whose full occupation by one marker is a win.
pub type Line = [Position; 3];

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Defined once, shared by every game; never mutated.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Whether `marker` holds all three cells of some line.
///
/// Pure and stateless; evaluated fresh on every call since the board
/// mutates between calls.
#[instrument(skip(board))]
pub fn has_won(board: &Board, marker: Marker) -> bool {
    LINES
        .iter()
        .any(|line| board.count_marks(line, marker) == 3)
}

/// The marker with a completed line, if any.
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::X, Marker::O]
        .into_iter()
        .find(|marker| has_won(board, *marker))
}
