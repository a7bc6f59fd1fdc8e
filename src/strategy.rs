//! Computer decision policy: one-ply threat scan, then position value.
//!
//! The policy looks exactly one move ahead. It takes an immediate win
//! when one exists, otherwise blocks the opponent's immediate win,
//! otherwise takes the center, otherwise picks a random open cell.
//! Two-move forks are invisible to it; that blindness is part of the
//! policy, not a bug to fix here.

use crate::board::{Board, Marker};
use crate::position::Position;
use crate::rules;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Error raised when the policy is asked to move on a full board.
///
/// The engine checks for terminal states before requesting a move, so
/// this indicates a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("no open cells remain to choose from")]
pub struct NoOpenCells;

impl std::error::Error for NoOpenCells {}

/// One-ply move selection for the computer.
#[derive(Debug)]
pub struct MoveStrategy {
    rng: StdRng,
}

impl MoveStrategy {
    /// Creates a strategy seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a strategy with a fixed seed, for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selects one open position for `own` to mark.
    ///
    /// Priority: own winning cell, then blocking the opponent's winning
    /// cell, then the center, then a uniformly random open cell. The
    /// threat scans probe the board hypothetically and always revert;
    /// the permanent mark is the caller's to apply.
    #[instrument(skip(self, board))]
    pub fn select(&mut self, board: &mut Board, own: Marker) -> Result<Position, NoOpenCells> {
        if let Some(pos) = Self::winning_cell(board, own) {
            debug!(cell = %pos, "taking the win");
            return Ok(pos);
        }

        if let Some(pos) = Self::winning_cell(board, own.opponent()) {
            debug!(cell = %pos, "blocking the opponent");
            return Ok(pos);
        }

        if board.is_unused(Position::CENTER) {
            debug!("taking the center");
            return Ok(Position::CENTER);
        }

        let choice = board
            .unused_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(NoOpenCells)?;
        debug!(cell = %choice, "falling back to a random cell");
        Ok(choice)
    }

    /// First open position that completes a line for `marker`, scanning
    /// in enumeration order.
    ///
    /// Probe-and-revert: each candidate is marked, checked, and
    /// unmarked before the next observer can see it, including the
    /// winning candidate itself.
    fn winning_cell(board: &mut Board, marker: Marker) -> Option<Position> {
        for pos in board.unused_positions() {
            board.mark_at(pos, marker);
            let wins = rules::has_won(board, marker);
            board.unmark_at(pos);
            if wins {
                return Some(pos);
            }
        }
        None
    }
}

impl Default for MoveStrategy {
    fn default() -> Self {
        Self::new()
    }
}
