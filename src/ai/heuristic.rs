use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Cell, Move, Player};

use super::agent::Agent;
use super::random::random_move;

/// First empty cell (row-major) that would complete a run for `player`.
pub fn find_winning_move(board: &Board, player: Player) -> Option<Move> {
    board.empty_cells().into_iter().find(|mv| {
        let mut probe = board.clone();
        probe.make_move(mv.row, mv.col, player);
        probe.check_win().winning_player() == Some(player)
    })
}

/// Fixed decision list: win, block, center, corners, then random.
pub fn heuristic_move<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<Move> {
    if let Some(mv) = find_winning_move(board, player) {
        return Some(mv);
    }
    if let Some(mv) = find_winning_move(board, player.other()) {
        return Some(mv);
    }

    let size = board.size();
    if size == 0 {
        return None;
    }
    let center = Move::new(size / 2, size / 2);
    if board.get(center.row, center.col) == Cell::Empty {
        return Some(center);
    }

    let last = size - 1;
    let corners = [
        Move::new(0, 0),
        Move::new(0, last),
        Move::new(last, 0),
        Move::new(last, last),
    ];
    if let Some(&corner) = corners
        .iter()
        .find(|c| board.get(c.row, c.col) == Cell::Empty)
    {
        return Some(corner);
    }

    random_move(board, rng)
}

/// Medium-strength agent: one-ply tactics plus positional preferences.
pub struct HeuristicAgent {
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        HeuristicAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        heuristic_move(board, player, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(HeuristicAgent::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, x: &[(usize, usize)], o: &[(usize, usize)]) -> Board {
        let mut board = Board::for_size(size);
        for &(r, c) in x {
            assert!(board.make_move(r, c, Player::X));
        }
        for &(r, c) in o {
            assert!(board.make_move(r, c, Player::O));
        }
        board
    }

    fn pick(board: &Board, player: Player) -> Option<Move> {
        let mut rng = StdRng::seed_from_u64(1);
        heuristic_move(board, player, &mut rng)
    }

    #[test]
    fn takes_winning_move() {
        // O completes the main diagonal
        let board = board_with(3, &[(2, 0), (0, 2)], &[(0, 0), (1, 1)]);
        assert_eq!(pick(&board, Player::O), Some(Move::new(2, 2)));
    }

    #[test]
    fn blocks_opponent_win() {
        // X threatens (0, 2); O has nothing of its own
        let board = board_with(3, &[(0, 0), (0, 1)], &[(1, 1)]);
        assert_eq!(pick(&board, Player::O), Some(Move::new(0, 2)));
    }

    #[test]
    fn prefers_win_over_block() {
        // Both sides threaten; O to move completes column 2
        let board = board_with(3, &[(0, 0), (0, 1), (2, 0)], &[(1, 2), (2, 2)]);
        assert_eq!(pick(&board, Player::O), Some(Move::new(0, 2)));
    }

    #[test]
    fn first_winning_cell_in_row_major_order() {
        // X can win at (0, 2) or (2, 0); (0, 2) comes first
        let board = board_with(3, &[(0, 0), (0, 1), (1, 0)], &[(1, 1), (2, 2)]);
        assert_eq!(find_winning_move(&board, Player::X), Some(Move::new(0, 2)));
    }

    #[test]
    fn takes_center_when_quiet() {
        let board = board_with(3, &[(0, 0)], &[]);
        assert_eq!(pick(&board, Player::O), Some(Move::new(1, 1)));

        let board = board_with(6, &[(0, 0)], &[]);
        assert_eq!(pick(&board, Player::O), Some(Move::new(3, 3)));
    }

    #[test]
    fn takes_first_free_corner() {
        let board = board_with(3, &[(1, 1)], &[(0, 0)]);
        assert_eq!(pick(&board, Player::X), Some(Move::new(0, 2)));

        let board = board_with(5, &[(2, 2), (0, 4)], &[(0, 0)]);
        assert_eq!(pick(&board, Player::O), Some(Move::new(4, 0)));
    }

    #[test]
    fn falls_back_to_random_empty_cell() {
        // Center and corners taken, nobody one move from four in a row
        let board = board_with(4, &[(2, 2), (0, 3), (3, 3)], &[(0, 0), (3, 0)]);
        let empty = board.empty_cells();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = heuristic_move(&board, Player::O, &mut rng);
            assert!(mv.is_some_and(|m| empty.contains(&m)));
        }
    }

    #[test]
    fn full_board_is_none() {
        let board = board_with(
            3,
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (1, 2), (2, 0)],
        );
        assert_eq!(pick(&board, Player::X), None);
    }
}
