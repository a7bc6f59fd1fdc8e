//! Board positions, addressed the way players see them: cells 1 through 9.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine addressable cells of the board.
///
/// Cells are numbered 1-9 in row-major order, matching the digits shown
/// on the rendered board. Because the enum is closed, an out-of-range
/// position is unrepresentable once input has been parsed; the numeric
/// boundary lives in [`Position::from_number`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

/// Error produced when a numeric cell choice falls outside 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("cell {_0} is not on the board (expected 1-9)")]
pub struct InvalidPosition(pub u8);

impl std::error::Error for InvalidPosition {}

impl Position {
    /// All 9 positions in enumeration order (cell 1 first).
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center cell, preferred by the computer when no line is threatened.
    pub const CENTER: Position = Position::Center;

    /// Parses a player-facing cell number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Result<Self, InvalidPosition> {
        match number {
            1..=9 => Ok(Self::ALL[(number - 1) as usize]),
            _ => Err(InvalidPosition(number)),
        }
    }

    /// The player-facing cell number (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Row-major array index (0-8).
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_number_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_number(pos.number()), Ok(pos));
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Position::from_number(0), Err(InvalidPosition(0)));
        assert_eq!(Position::from_number(10), Err(InvalidPosition(10)));
    }

    #[test]
    fn test_center_is_cell_five() {
        assert_eq!(Position::CENTER.number(), 5);
    }
}
