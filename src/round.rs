//! Single-game state machine: alternating placements until a line is
//! completed or the board fills.

use crate::board::{Board, Marker};
use crate::player::{PlayerKind, PlayerPair};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One placement in a round's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Who placed the mark.
    pub kind: PlayerKind,
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.kind, self.position.label())
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A player completed a line.
    Won(PlayerKind),
    /// The board filled with no completed line.
    Tie,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Won(kind) => write!(f, "{kind} wins"),
            GameOutcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Result of a placement: the game continues or is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Play passes to the other participant.
    Continue,
    /// The game ended with this outcome.
    Over(GameOutcome),
}

/// Error raised when a placement targets a marked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("cell {_0} is already marked")]
pub struct CellTaken(pub Position);

impl std::error::Error for CellTaken {}

/// One game of a match.
///
/// Owns its board exclusively; a fresh round is created per game and
/// discarded when the game ends. The human moves first.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    players: PlayerPair,
    to_move: PlayerKind,
    history: Vec<Move>,
}

impl Round {
    /// Starts a new game with an empty board, human to move.
    #[instrument]
    pub fn new(players: PlayerPair) -> Self {
        Self {
            board: Board::new(),
            players,
            to_move: PlayerKind::Human,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for the duration of one move decision.
    ///
    /// Handed to a move source so the strategy can probe and revert;
    /// no ownership is shared beyond that call.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Whose turn it is.
    pub fn to_move(&self) -> PlayerKind {
        self.to_move
    }

    /// Placements so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current participant's marker at `position`.
    ///
    /// On success the turn either passes to the opponent or the game is
    /// over with an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`CellTaken`] if the cell is already marked.
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn place(&mut self, position: Position) -> Result<Turn, CellTaken> {
        if !self.board.is_unused(position) {
            return Err(CellTaken(position));
        }

        let marker = self.players.marker_of(self.to_move);
        self.board.mark_at(position, marker);
        self.history.push(Move {
            kind: self.to_move,
            marker,
            position,
        });
        self.assert_invariants();

        if rules::has_won(&self.board, marker) {
            return Ok(Turn::Over(GameOutcome::Won(self.to_move)));
        }
        if self.board.is_full() {
            return Ok(Turn::Over(GameOutcome::Tie));
        }

        self.to_move = self.to_move.opponent();
        Ok(Turn::Continue)
    }

    /// Debug-build sanity checks after each placement.
    fn assert_invariants(&self) {
        let x = self.board.marks_of(Marker::X);
        let o = self.board.marks_of(Marker::O);
        debug_assert!(x.abs_diff(o) <= 1, "mark counts diverged: {x} X vs {o} O");
        debug_assert_eq!(
            self.history.len(),
            x + o,
            "history out of step with the board"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(number: u8) -> Position {
        Position::from_number(number).unwrap()
    }

    #[test]
    fn test_human_moves_first() {
        let round = Round::new(PlayerPair::new());
        assert_eq!(round.to_move(), PlayerKind::Human);
    }

    #[test]
    fn test_turns_alternate() {
        let mut round = Round::new(PlayerPair::new());
        assert_eq!(round.place(pos(1)).unwrap(), Turn::Continue);
        assert_eq!(round.to_move(), PlayerKind::Computer);
        assert_eq!(round.place(pos(5)).unwrap(), Turn::Continue);
        assert_eq!(round.to_move(), PlayerKind::Human);
        assert_eq!(round.history().len(), 2);
    }

    #[test]
    fn test_marked_cell_rejected() {
        let mut round = Round::new(PlayerPair::new());
        round.place(pos(5)).unwrap();
        assert_eq!(round.place(pos(5)), Err(CellTaken(pos(5))));
    }

    #[test]
    fn test_completed_line_ends_the_game() {
        let mut round = Round::new(PlayerPair::new());
        for number in [1, 4, 2, 5] {
            round.place(pos(number)).unwrap();
        }
        // Human completes the top row.
        assert_eq!(
            round.place(pos(3)).unwrap(),
            Turn::Over(GameOutcome::Won(PlayerKind::Human))
        );
    }

    #[test]
    fn test_full_board_without_line_is_a_tie() {
        let mut round = Round::new(PlayerPair::new());
        // Human: 1 3 4 8 9, Computer: 5 2 6 7 - no line for either.
        let mut outcome = Turn::Continue;
        for number in [1, 5, 3, 2, 4, 6, 8, 7, 9] {
            outcome = round.place(pos(number)).unwrap();
        }
        assert_eq!(outcome, Turn::Over(GameOutcome::Tie));
        assert!(round.board().is_full());
    }
}
