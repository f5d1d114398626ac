//! Core game logic: variable-size board with run-length win detection,
//! player marks, turn/outcome tracking, and a session score tally.

mod board;
mod player;
mod score;
mod state;

pub use board::{
    win_condition_for_size, Board, Cell, Move, WinInfo, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};
pub use player::Player;
pub use score::{GameStats, ScoreTracker};
pub use state::{GameOutcome, GameState, MoveError};
