use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::game::{Board, Move, Player};

use super::agent::Agent;
use super::heuristic::heuristic_move;
use super::minimax::minimax_move;
use super::random::random_move;

/// AI strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell
    Easy,
    /// Win, block, center, corners, random
    #[default]
    Medium,
    /// Depth-limited minimax
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected 'easy', 'medium', or 'hard')"
            )),
        }
    }
}

/// Picks moves for the computer player at a configurable difficulty.
///
/// Holds nothing but the difficulty; it never mutates the board it is
/// given, and keeps no memory between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionEngine {
    difficulty: Difficulty,
}

impl DecisionEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        DecisionEngine { difficulty }
    }

    pub fn set_level(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn level(&self) -> Difficulty {
        self.difficulty
    }

    /// Choose a move for `player`, or `None` if the board has no empty cell.
    ///
    /// Easy and the Medium fallback draw from the thread-local RNG.
    pub fn get_move(&self, board: &Board, player: Player) -> Option<Move> {
        self.get_move_with_rng(board, player, &mut rand::rng())
    }

    /// As [`get_move`](Self::get_move), with the caller's RNG
    pub fn get_move_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Option<Move> {
        let mv = match self.difficulty {
            Difficulty::Easy => random_move(board, rng),
            Difficulty::Medium => heuristic_move(board, player, rng),
            Difficulty::Hard => minimax_move(board, player),
        };
        debug!(difficulty = %self.difficulty, player = player.name(), ?mv, "engine move");
        mv
    }
}

impl Agent for DecisionEngine {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.get_move(board, player)
    }

    fn name(&self) -> &str {
        self.difficulty.name()
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(*self)
    }
}
