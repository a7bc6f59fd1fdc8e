//! Tic-tac-toe match engine: human vs. computer, best of N.
//!
//! # Architecture
//!
//! - **Board / rules**: the 3x3 grid, the eight winning lines, and
//!   terminal-state detection.
//! - **Strategy**: the computer's one-ply decision policy (take the
//!   win, block the opponent, take the center, else random).
//! - **Round**: the state machine for a single game.
//! - **Engine**: the match loop, scoring games until a win threshold
//!   and emitting events for a presentation layer.
//!
//! The core consumes moves through the [`MoveSource`] capability trait
//! and renders nothing itself; the bundled binary wires a console
//! front end around it.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_arena::{ComputerPlayer, MatchEngine, PlayerKind, PlayerPair};
//! use tokio::sync::mpsc;
//!
//! # async fn example(human: Box<dyn tictactoe_arena::MoveSource>) -> anyhow::Result<()> {
//! let pair = PlayerPair::new();
//! let (event_tx, mut events) = mpsc::unbounded_channel();
//! let computer = Box::new(ComputerPlayer::new(
//!     "Computer",
//!     pair.marker_of(PlayerKind::Computer),
//! ));
//! let mut engine = MatchEngine::new(pair, human, computer, 3, event_tx);
//! let winner = engine.run().await?;
//! println!("{winner} takes the match");
//! while let Ok(event) = events.try_recv() {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod engine;
mod player;
mod players;
mod position;
mod round;
mod rules;
mod score;
mod strategy;

// Crate-level exports - board and rules
pub use board::{Board, Cell, Marker};
pub use position::{InvalidPosition, Position};
pub use rules::{has_won, is_draw, is_terminal, winner, Line, LINES};

// Crate-level exports - participants and scoring
pub use player::{Player, PlayerKind, PlayerPair};
pub use score::{Score, UnknownPlayer};

// Crate-level exports - decision policy
pub use strategy::{MoveStrategy, NoOpenCells};

// Crate-level exports - game and match state machines
pub use engine::{EngineError, GameEvent, MatchEngine};
pub use round::{CellTaken, GameOutcome, Move, Round, Turn};

// Crate-level exports - move sources
pub use players::{ComputerPlayer, MoveSource};
