//! Match orchestration: repeated games until a score threshold.

use crate::board::Board;
use crate::player::{PlayerKind, PlayerPair};
use crate::players::MoveSource;
use crate::position::Position;
use crate::round::{CellTaken, GameOutcome, Round, Turn};
use crate::score::{Score, UnknownPlayer};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Events emitted for a presentation layer to render.
///
/// The engine does not care whether anyone listens beyond the channel
/// staying open; snapshots are cloned so the receiver never observes a
/// board mid-mutation.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The board changed (one per placement, plus one per fresh board).
    BoardChanged(Board),
    /// A game ended.
    GameEnded(GameOutcome),
    /// The score changed.
    ScoreChanged(Score),
    /// The match ended with this winner.
    MatchEnded(PlayerKind),
}

/// Errors surfaced by the match engine.
///
/// Every variant is a collaborator contract violation; the engine
/// propagates them rather than retrying.
#[derive(Debug, derive_more::Display)]
pub enum EngineError {
    /// A move source returned a cell outside the valid set.
    #[display("move source returned unavailable cell {_0}")]
    InvalidMove(Position),
    /// A placement targeted a marked cell.
    #[display("{_0}")]
    Place(CellTaken),
    /// A score operation referenced an unregistered player.
    #[display("{_0}")]
    Score(UnknownPlayer),
    /// A move source failed outright.
    #[display("move source failed: {_0}")]
    Source(anyhow::Error),
    /// The presentation channel closed.
    #[display("presentation channel closed")]
    ChannelClosed,
}

impl std::error::Error for EngineError {}

impl From<CellTaken> for EngineError {
    fn from(err: CellTaken) -> Self {
        EngineError::Place(err)
    }
}

impl From<UnknownPlayer> for EngineError {
    fn from(err: UnknownPlayer) -> Self {
        EngineError::Score(err)
    }
}

/// Runs a best-of-N match between a human and a computer.
///
/// All match state is held here and threaded explicitly; nothing is
/// global. The engine is turn-strict: exactly one move is being decided
/// at any time, and it suspends only while the human source awaits
/// input.
pub struct MatchEngine {
    players: PlayerPair,
    human: Box<dyn MoveSource>,
    computer: Box<dyn MoveSource>,
    score: Score,
    threshold: u32,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl MatchEngine {
    /// Creates an engine playing to `threshold` game wins.
    pub fn new(
        players: PlayerPair,
        human: Box<dyn MoveSource>,
        computer: Box<dyn MoveSource>,
        threshold: u32,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            players,
            human,
            computer,
            score: Score::for_players(&[PlayerKind::Human, PlayerKind::Computer]),
            threshold,
            event_tx,
        }
    }

    /// The current score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Plays one full match and returns its winner.
    ///
    /// Resets the score (announcing the zeroed snapshot), then loops
    /// fresh games until one participant's tally reaches the threshold.
    /// May be called again to start a new match over the same channel.
    #[instrument(skip(self), fields(threshold = self.threshold))]
    pub async fn run(&mut self) -> Result<PlayerKind, EngineError> {
        self.score.reset();
        self.emit(GameEvent::ScoreChanged(self.score.clone()))?;
        info!("starting match");

        loop {
            let outcome = self.play_game().await?;
            info!(%outcome, "game over");

            // Result first, score after, matching how a scoreboard is
            // read out.
            self.emit(GameEvent::GameEnded(outcome))?;
            if let GameOutcome::Won(kind) = outcome {
                self.score.add_point(kind)?;
                self.emit(GameEvent::ScoreChanged(self.score.clone()))?;
            }

            for kind in [PlayerKind::Human, PlayerKind::Computer] {
                if self.score.has_reached(kind, self.threshold) {
                    info!(winner = %kind, "match over");
                    self.emit(GameEvent::MatchEnded(kind))?;
                    return Ok(kind);
                }
            }
        }
    }

    /// Plays a single game to its outcome on a fresh board.
    async fn play_game(&mut self) -> Result<GameOutcome, EngineError> {
        let mut round = Round::new(self.players);
        self.emit(GameEvent::BoardChanged(round.board().clone()))?;

        loop {
            let mover = round.to_move();
            let valid = round.board().unused_positions();

            let source = match mover {
                PlayerKind::Human => &mut self.human,
                PlayerKind::Computer => &mut self.computer,
            };
            debug!(mover = %mover, "awaiting move");
            let position = source
                .choose_move(round.board_mut(), &valid)
                .await
                .map_err(EngineError::Source)?;

            // Membership is the engine's only re-validation; anything
            // outside the set is a broken collaborator.
            if !valid.contains(&position) {
                return Err(EngineError::InvalidMove(position));
            }

            let turn = round.place(position)?;
            self.emit(GameEvent::BoardChanged(round.board().clone()))?;

            if let Turn::Over(outcome) = turn {
                return Ok(outcome);
            }
        }
    }

    fn emit(&self, event: GameEvent) -> Result<(), EngineError> {
        self.event_tx
            .send(event)
            .map_err(|_| EngineError::ChannelClosed)
    }
}
