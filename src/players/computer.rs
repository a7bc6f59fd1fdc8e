//! The computer participant, backed by the one-ply strategy.

use super::MoveSource;
use crate::board::{Board, Marker};
use crate::position::Position;
use crate::strategy::MoveStrategy;
use anyhow::Result;
use tracing::debug;

/// Computer player delegating to [`MoveStrategy`].
///
/// Decisions are synchronous and never suspend; only the human side of
/// a match awaits anything.
pub struct ComputerPlayer {
    name: String,
    marker: Marker,
    strategy: MoveStrategy,
}

impl ComputerPlayer {
    /// Creates a computer player placing `marker`.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            strategy: MoveStrategy::new(),
        }
    }

    /// Creates a computer player with a seeded strategy, for
    /// reproducible games.
    pub fn seeded(name: impl Into<String>, marker: Marker, seed: u64) -> Self {
        Self {
            name: name.into(),
            marker,
            strategy: MoveStrategy::seeded(seed),
        }
    }
}

#[async_trait::async_trait]
impl MoveSource for ComputerPlayer {
    async fn choose_move(&mut self, board: &mut Board, _valid: &[Position]) -> Result<Position> {
        let choice = self.strategy.select(board, self.marker)?;
        debug!(player = %self.name, cell = %choice, "computer chose");
        Ok(choice)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
