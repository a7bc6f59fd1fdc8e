//! Core board state: markers, cells, and the 3x3 grid.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Mark distinguishing one player's cells from the other's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The X mark (human's by convention).
    X,
    /// The O mark (computer's by convention).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// Cell bearing a player's marker.
    Taken(Marker),
}

/// 3x3 tic-tac-toe board.
///
/// Exactly nine cells are always present; each holds exactly one
/// [`Cell`] value. Boards are created fresh per game and discarded at
/// game end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// The cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Whether the cell at `pos` is unmarked.
    pub fn is_unused(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Places `marker` at `pos`.
    ///
    /// Callers apply real moves only to unused cells; the strategy also
    /// uses mark/unmark transiently to probe hypothetical moves.
    pub fn mark_at(&mut self, pos: Position, marker: Marker) {
        self.cells[pos.index()] = Cell::Taken(marker);
    }

    /// Resets the cell at `pos` to empty, reverting a probe.
    pub fn unmark_at(&mut self, pos: Position) {
        self.cells[pos.index()] = Cell::Empty;
    }

    /// Unmarked positions in enumeration order (cell 1 first).
    pub fn unused_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_unused(*pos))
            .collect()
    }

    /// Whether no unmarked cells remain.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Number of cells on `line` bearing `marker`.
    pub fn count_marks(&self, line: &[Position; 3], marker: Marker) -> usize {
        line.iter()
            .filter(|pos| self.get(**pos) == Cell::Taken(marker))
            .count()
    }

    /// Total cells bearing `marker` anywhere on the board.
    pub fn marks_of(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Taken(marker))
            .count()
    }

    /// Formats the board for the console, showing cell numbers on
    /// unmarked cells.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            out.push_str("     |     |\n");
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Cell::Empty => pos.number().to_string(),
                    Cell::Taken(marker) => marker.to_string(),
                };
                out.push_str(&format!("  {symbol}  "));
                if col < 2 {
                    out.push('|');
                }
            }
            out.push_str("\n     |     |");
            if row < 2 {
                out.push_str("\n-----+-----+-----\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_unused() {
        let board = Board::new();
        assert_eq!(board.unused_positions(), Position::ALL.to_vec());
        assert!(!board.is_full());
    }

    #[test]
    fn test_mark_then_unmark_restores_board() {
        for pos in Position::ALL {
            let mut board = Board::new();
            let before = board.clone();
            board.mark_at(pos, Marker::X);
            board.unmark_at(pos);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_unused_positions_stay_ordered() {
        let mut board = Board::new();
        board.mark_at(Position::Center, Marker::O);
        board.mark_at(Position::TopLeft, Marker::X);
        let unused: Vec<u8> = board.unused_positions().iter().map(|p| p.number()).collect();
        assert_eq!(unused, vec![2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_count_marks_on_line() {
        let mut board = Board::new();
        let line = [Position::TopLeft, Position::TopCenter, Position::TopRight];
        board.mark_at(Position::TopLeft, Marker::X);
        board.mark_at(Position::TopCenter, Marker::X);
        board.mark_at(Position::TopRight, Marker::O);
        assert_eq!(board.count_marks(&line, Marker::X), 2);
        assert_eq!(board.count_marks(&line, Marker::O), 1);
    }

    #[test]
    fn test_snapshot_survives_json() {
        let mut board = Board::new();
        board.mark_at(Position::TopLeft, Marker::X);
        board.mark_at(Position::Center, Marker::O);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.mark_at(pos, Marker::X);
        }
        assert!(board.is_full());
        assert!(board.unused_positions().is_empty());
    }
}
