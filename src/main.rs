//! Console front end: renders engine events and collects human moves
//! from stdin.

use anyhow::Result;
use clap::Parser;
use std::io::Write as _;
use std::sync::{Arc, Mutex};
use tictactoe_arena::{
    Board, ComputerPlayer, GameEvent, GameOutcome, MatchEngine, MoveSource, PlayerKind,
    PlayerPair, Position,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Best-of-N tic-tac-toe against the computer.
#[derive(Debug, Parser)]
#[command(name = "tictactoe_arena", version, about)]
struct Cli {
    /// Games a player must win to take the match.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    wins: u32,
}

/// Reads one trimmed line from stdin without blocking the runtime.
async fn read_line() -> Result<String> {
    let line = tokio::task::spawn_blocking(|| {
        let mut buf = String::new();
        std::io::stdin().read_line(&mut buf)?;
        Ok::<_, std::io::Error>(buf)
    })
    .await??;
    Ok(line.trim().to_string())
}

/// Joins cell numbers as "1, 2, 5 or 9".
fn join_or(positions: &[Position]) -> String {
    let numbers: Vec<String> = positions.iter().map(|pos| pos.to_string()).collect();
    match numbers.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

/// Consumes engine events and writes them to the console.
///
/// Drained synchronously before each prompt so board, result, and
/// prompt lines come out in play order.
struct Presenter {
    rx: mpsc::UnboundedReceiver<GameEvent>,
}

impl Presenter {
    fn drain(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            render(&event);
        }
    }
}

fn render(event: &GameEvent) {
    match event {
        GameEvent::BoardChanged(board) => {
            println!();
            println!("{}", board.display());
            println!();
        }
        GameEvent::GameEnded(outcome) => match outcome {
            GameOutcome::Won(PlayerKind::Human) => println!("You won! Congratulations!"),
            GameOutcome::Won(PlayerKind::Computer) => println!("I won! I won! Take that, human!"),
            GameOutcome::Tie => println!("A tie game. How boring."),
        },
        GameEvent::ScoreChanged(score) => println!(
            "Score - you: {}, me: {}",
            score.tally(PlayerKind::Human).unwrap_or(0),
            score.tally(PlayerKind::Computer).unwrap_or(0),
        ),
        GameEvent::MatchEnded(PlayerKind::Human) => println!("You've taken the match!"),
        GameEvent::MatchEnded(PlayerKind::Computer) => println!("The match is mine, human!"),
    }
}

/// Human player prompting on the console.
///
/// Owns the invalid-input retry loop; the engine only ever sees a
/// member of the valid set.
struct ConsoleHuman {
    name: String,
    presenter: Arc<Mutex<Presenter>>,
}

#[async_trait::async_trait]
impl MoveSource for ConsoleHuman {
    async fn choose_move(&mut self, _board: &mut Board, valid: &[Position]) -> Result<Position> {
        self.presenter.lock().expect("presenter lock").drain();
        loop {
            print!("Choose a cell ({}): ", join_or(valid));
            std::io::stdout().flush()?;

            let line = read_line().await?;
            let parsed = line
                .parse::<u8>()
                .ok()
                .and_then(|n| Position::from_number(n).ok());
            match parsed {
                Some(pos) if valid.contains(&pos) => return Ok(pos),
                _ => {
                    println!("Sorry, that's not a valid choice.");
                    println!();
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Asks whether to start another match. A loop, not recursion, so bad
/// input can never grow the stack.
async fn play_again() -> Result<bool> {
    loop {
        println!("Do you want to play again? Yes (y) or no (n)?");
        match read_line().await?.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Invalid choice. Please choose again."),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    println!("Welcome to Tic Tac Toe!");
    println!("First to {} game wins takes the match.", cli.wins);
    println!();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let presenter = Arc::new(Mutex::new(Presenter { rx: event_rx }));

    let pair = PlayerPair::new();
    let human = Box::new(ConsoleHuman {
        name: "You".into(),
        presenter: Arc::clone(&presenter),
    });
    let computer = Box::new(ComputerPlayer::new(
        "Computer",
        pair.marker_of(PlayerKind::Computer),
    ));
    let mut engine = MatchEngine::new(pair, human, computer, cli.wins, event_tx);

    loop {
        engine.run().await?;
        presenter.lock().expect("presenter lock").drain();
        if !play_again().await? {
            break;
        }
    }

    println!("Thanks for playing Tic Tac Toe! Goodbye!");
    Ok(())
}
