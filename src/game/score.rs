use super::{GameOutcome, Player};

/// Running totals across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub total_games: u32,
}

/// Win/draw tally for a play session. Lives in memory only.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    stats: GameStats,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_outcome(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(player) => self.record_win(player),
            GameOutcome::Draw => self.record_draw(),
        }
    }

    pub fn record_win(&mut self, winner: Player) {
        match winner {
            Player::X => self.stats.x_wins += 1,
            Player::O => self.stats.o_wins += 1,
        }
        self.stats.total_games += 1;
    }

    pub fn record_draw(&mut self) {
        self.stats.draws += 1;
        self.stats.total_games += 1;
    }

    pub fn reset(&mut self) {
        self.stats = GameStats::default();
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.stats.x_wins,
            Player::O => self.stats.o_wins,
        }
    }

    pub fn score_line(&self) -> String {
        format!(
            "X: {} | O: {} | Draws: {}",
            self.stats.x_wins, self.stats.o_wins, self.stats.draws
        )
    }

    pub fn stats_line(&self) -> String {
        format!("Games Played: {} | {}", self.stats.total_games, self.score_line())
    }
}
