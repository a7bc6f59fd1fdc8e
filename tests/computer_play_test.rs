//! Full matches against the real computer player.
//!
//! These scripts only exercise the deterministic rungs of the policy
//! (win, block, center), so no seeding is needed for the assertions.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use tictactoe_arena::{
    Board, Cell, ComputerPlayer, GameEvent, MatchEngine, Marker, MoveSource, PlayerKind,
    PlayerPair, Position,
};
use tokio::sync::mpsc;

struct Scripted {
    moves: VecDeque<Position>,
}

impl Scripted {
    fn new(cells: &[u8]) -> Box<Self> {
        Box::new(Self {
            moves: cells
                .iter()
                .map(|n| Position::from_number(*n).unwrap())
                .collect(),
        })
    }
}

#[async_trait::async_trait]
impl MoveSource for Scripted {
    async fn choose_move(&mut self, _board: &mut Board, _valid: &[Position]) -> Result<Position> {
        self.moves.pop_front().context("script exhausted")
    }

    fn name(&self) -> &str {
        "scripted human"
    }
}

#[tokio::test]
async fn test_computer_takes_center_blocks_then_wins() {
    // Human: corners 1, 3, 7. The computer takes the center, blocks the
    // top row at 2, then completes its own 2-5-8 column instead of
    // blocking the human's 1-4-7 threat.
    let pair = PlayerPair::new();
    let computer = Box::new(ComputerPlayer::new(
        "Computer",
        pair.marker_of(PlayerKind::Computer),
    ));
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut engine = MatchEngine::new(pair, Scripted::new(&[1, 3, 7]), computer, 1, event_tx);

    let winner = engine.run().await.expect("match should finish");
    assert_eq!(winner, PlayerKind::Computer);

    let mut final_board = None;
    while let Ok(event) = event_rx.try_recv() {
        if let GameEvent::BoardChanged(board) = event {
            final_board = Some(board);
        }
    }
    let board = final_board.expect("at least one board snapshot");
    for number in [2, 5, 8] {
        let pos = Position::from_number(number).unwrap();
        assert_eq!(board.get(pos), Cell::Taken(Marker::O));
    }
}

#[tokio::test]
async fn test_computer_never_leaves_the_valid_set() {
    // Drive several full games with a human that fills cells in order;
    // the engine itself rejects any out-of-set computer move, so a
    // clean finish is the assertion.
    let pair = PlayerPair::new();
    let computer = Box::new(ComputerPlayer::seeded(
        "Computer",
        pair.marker_of(PlayerKind::Computer),
        7,
    ));
    // Enough human moves for up to three games of naive play.
    let script: Vec<u8> = (0..3).flat_map(|_| 1..=9u8).collect();
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let mut engine = MatchEngine::new(pair, Naive::new(&script), computer, 1, event_tx);

    engine.run().await.expect("match should finish cleanly");
}

/// Human that plays the lowest open cell from a preference list.
struct Naive {
    preferences: Vec<Position>,
}

impl Naive {
    fn new(cells: &[u8]) -> Box<Self> {
        Box::new(Self {
            preferences: cells
                .iter()
                .map(|n| Position::from_number(*n).unwrap())
                .collect(),
        })
    }
}

#[async_trait::async_trait]
impl MoveSource for Naive {
    async fn choose_move(&mut self, _board: &mut Board, valid: &[Position]) -> Result<Position> {
        self.preferences
            .iter()
            .copied()
            .find(|pos| valid.contains(pos))
            .context("no preferred cell is open")
    }

    fn name(&self) -> &str {
        "naive human"
    }
}
