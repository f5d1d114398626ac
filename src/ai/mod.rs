//! Move selection: the [`Agent`] trait, one agent per strength tier, and the
//! [`DecisionEngine`] that dispatches between them by [`Difficulty`].

mod agent;
mod engine;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use engine::{DecisionEngine, Difficulty};
pub use heuristic::{find_winning_move, heuristic_move, HeuristicAgent};
pub use minimax::{depth_ceiling, minimax_move, MinimaxAgent};
pub use random::{random_move, RandomAgent};
