//! Move-source capability: how each participant chooses a cell.

mod computer;

pub use computer::ComputerPlayer;

use crate::board::Board;
use crate::position::Position;
use anyhow::Result;

/// A participant capable of choosing moves.
///
/// The engine hands over the board for the duration of one decision
/// only. Implementations must return a member of `valid`; the engine
/// treats anything else as a contract violation and aborts the match.
/// A human implementation may suspend while awaiting input, and owns
/// any retry loop for bad input; the engine never retries.
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Chooses one of `valid` for the current board.
    async fn choose_move(&mut self, board: &mut Board, valid: &[Position]) -> Result<Position>;

    /// The participant's display name.
    fn name(&self) -> &str;
}
