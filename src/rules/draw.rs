//! Tie and terminal-state detection.

use super::win::winner;
use crate::board::Board;
use tracing::instrument;

/// Whether the game can accept no further moves.
///
/// A game is terminal once the board is full or either marker has a
/// completed line.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    board.is_full() || winner(board).is_some()
}

/// Whether the board is full with no completed line: a tie.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Marker;
    use crate::position::Position;

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert!(!is_terminal(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_win_is_terminal_but_not_draw() {
        let mut board = Board::new();
        board.mark_at(Position::TopLeft, Marker::X);
        board.mark_at(Position::TopCenter, Marker::X);
        board.mark_at(Position::TopRight, Marker::X);
        assert!(is_terminal(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut board = Board::new();
        // X O X / O X X / O X O - no completed line
        board.mark_at(Position::TopLeft, Marker::X);
        board.mark_at(Position::TopCenter, Marker::O);
        board.mark_at(Position::TopRight, Marker::X);
        board.mark_at(Position::MiddleLeft, Marker::O);
        board.mark_at(Position::Center, Marker::X);
        board.mark_at(Position::MiddleRight, Marker::X);
        board.mark_at(Position::BottomLeft, Marker::O);
        board.mark_at(Position::BottomCenter, Marker::X);
        board.mark_at(Position::BottomRight, Marker::O);

        assert!(is_terminal(&board));
        assert!(is_draw(&board));
    }
}
