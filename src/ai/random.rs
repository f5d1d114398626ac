use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Move, Player};

use super::agent::Agent;

/// Pick uniformly among the empty cells.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..empty.len());
    Some(empty[idx])
}

/// An agent that selects uniformly at random from empty cells.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and simulations
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> Option<Move> {
        random_move(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(RandomAgent::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_empty_cell() {
        let mut agent = RandomAgent::seeded(7);
        let mut board = Board::for_size(4);
        board.make_move(0, 0, Player::X);
        board.make_move(2, 3, Player::O);
        let empty = board.empty_cells();

        for _ in 0..100 {
            let mv = agent.select_move(&board, Player::X).unwrap();
            assert!(empty.contains(&mv), "{mv:?} is not empty");
        }
    }

    #[test]
    fn test_random_covers_all_cells() {
        let board = Board::for_size(3);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_move(&board, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_random_full_board_is_none() {
        let mut board = Board::for_size(3);
        for mv in board.empty_cells() {
            board.make_move(mv.row, mv.col, Player::O);
        }
        let mut agent = RandomAgent::new();
        assert_eq!(agent.select_move(&board, Player::X), None);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
        assert_eq!(agent.clone_agent().name(), "Random");
    }
}
