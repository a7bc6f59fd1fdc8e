//! Player identity and marker assignment.

use crate::board::Marker;
use serde::{Deserialize, Serialize};

/// Who is playing: the person at the keyboard or the engine's own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// The human participant (moves first by convention).
    Human,
    /// The computer participant.
    Computer,
}

impl PlayerKind {
    /// Returns the other participant.
    pub fn opponent(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Computer,
            PlayerKind::Computer => PlayerKind::Human,
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Computer => write!(f, "Computer"),
        }
    }
}

/// A participant: identity plus the marker they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    kind: PlayerKind,
    marker: Marker,
}

impl Player {
    /// Creates a player of the given kind placing `marker`.
    pub fn new(kind: PlayerKind, marker: Marker) -> Self {
        Self { kind, marker }
    }

    /// The participant's identity.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// The two participants of a match.
///
/// Construction guarantees the markers differ: the computer always
/// takes the marker opposing the human's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair {
    human: Player,
    computer: Player,
}

impl PlayerPair {
    /// Human plays X, computer plays O.
    pub fn new() -> Self {
        Self::with_human_marker(Marker::X)
    }

    /// Assigns `marker` to the human and the opposing marker to the
    /// computer.
    pub fn with_human_marker(marker: Marker) -> Self {
        Self {
            human: Player::new(PlayerKind::Human, marker),
            computer: Player::new(PlayerKind::Computer, marker.opponent()),
        }
    }

    /// The player of the given kind.
    pub fn player(&self, kind: PlayerKind) -> Player {
        match kind {
            PlayerKind::Human => self.human,
            PlayerKind::Computer => self.computer,
        }
    }

    /// The marker placed by the given kind.
    pub fn marker_of(&self, kind: PlayerKind) -> Marker {
        self.player(kind).marker()
    }

    /// The kind placing the given marker.
    pub fn kind_of(&self, marker: Marker) -> PlayerKind {
        if self.human.marker() == marker {
            PlayerKind::Human
        } else {
            PlayerKind::Computer
        }
    }
}

impl Default for PlayerPair {
    fn default() -> Self {
        Self::new()
    }
}
