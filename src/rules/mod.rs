//! Win, tie, and terminal-state detection.

mod draw;
mod win;

pub use draw::{is_draw, is_terminal};
pub use win::{has_won, winner, Line, LINES};
