use tracing::info;

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{GameState, Player, ScoreTracker};

use super::play::play_match;

/// Totals from a series of games between two agents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesResult {
    pub first_agent_wins: u32,
    pub second_agent_wins: u32,
    pub draws: u32,
}

impl SeriesResult {
    pub fn games(&self) -> u32 {
        self.first_agent_wins + self.second_agent_wins + self.draws
    }

    /// Share of games the first agent did not lose
    pub fn first_agent_unbeaten_rate(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (self.first_agent_wins + self.draws) as f32 / games as f32
    }
}

/// Play `games` games on fresh `size` boards, alternating who moves first.
///
/// Even-numbered games give the first agent X. Every outcome is also recorded
/// by mark in `score`.
pub fn run_series(
    size: usize,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    games: u32,
    score: &mut ScoreTracker,
) -> Result<SeriesResult, MatchError> {
    let mut result = SeriesResult::default();

    for game_idx in 0..games {
        let first_is_x = game_idx % 2 == 0;
        let mut state = GameState::new(size);
        let outcome = if first_is_x {
            play_match(&mut state, first, second)?
        } else {
            play_match(&mut state, second, first)?
        };
        score.record_outcome(outcome.outcome);

        match outcome.winner() {
            Some(winner) if (winner == Player::X) == first_is_x => result.first_agent_wins += 1,
            Some(_) => result.second_agent_wins += 1,
            None => result.draws += 1,
        }
    }

    info!(
        first = first.name(),
        second = second.name(),
        first_wins = result.first_agent_wins,
        second_wins = result.second_agent_wins,
        draws = result.draws,
        "series finished"
    );
    Ok(result)
}
