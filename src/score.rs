//! Per-player point tallies across the games of a match.

use crate::player::PlayerKind;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised when a tally operation references an unregistered
/// player.
///
/// This can only arise through a collaborator bug; normal play never
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("player {_0} is not registered in this score")]
pub struct UnknownPlayer(pub PlayerKind);

impl std::error::Error for UnknownPlayer {}

/// Point tally for the registered players of a match.
///
/// Mutated only by the engine at game end; reset when a new match
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    tallies: Vec<(PlayerKind, u32)>,
}

impl Score {
    /// Creates a zeroed score for the given players.
    pub fn for_players(kinds: &[PlayerKind]) -> Self {
        Self {
            tallies: kinds.iter().map(|kind| (*kind, 0)).collect(),
        }
    }

    /// Awards one point to `kind`.
    #[instrument(skip(self))]
    pub fn add_point(&mut self, kind: PlayerKind) -> Result<(), UnknownPlayer> {
        let entry = self
            .tallies
            .iter_mut()
            .find(|(registered, _)| *registered == kind)
            .ok_or(UnknownPlayer(kind))?;
        entry.1 += 1;
        Ok(())
    }

    /// The current tally for `kind`, if registered.
    pub fn tally(&self, kind: PlayerKind) -> Option<u32> {
        self.tallies
            .iter()
            .find(|(registered, _)| *registered == kind)
            .map(|(_, points)| *points)
    }

    /// Zeroes every tally.
    pub fn reset(&mut self) {
        for (_, points) in &mut self.tallies {
            *points = 0;
        }
    }

    /// Whether `kind` sits exactly at `threshold` points.
    ///
    /// Strict equality rather than `>=`: games end the moment a win is
    /// detected, so a tally can never overshoot under normal play.
    pub fn has_reached(&self, kind: PlayerKind, threshold: u32) -> bool {
        self.tally(kind) == Some(threshold)
    }
}
