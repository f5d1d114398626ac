use tracing::debug;

use crate::game::{Board, Move, Player};

use super::agent::Agent;

/// Score for a win found at search depth 0. Wins found deeper score less.
const WIN_SCORE: i32 = 10;

/// Search horizon in plies for a board size.
///
/// 3x3 is searched to the end. Larger boards are cut off early to keep
/// latency down; past the horizon a position counts as a draw.
pub fn depth_ceiling(size: usize) -> usize {
    match size {
        0..=3 => 9,
        4 => 6,
        5 => 4,
        _ => 3,
    }
}

/// Plain minimax: no pruning, no transposition table. Every branch works on
/// its own copy of the board.
struct Search {
    player: Player,
    ceiling: usize,
    nodes: u64,
}

impl Search {
    fn value(&mut self, board: &Board, depth: usize, maximizing: bool) -> i32 {
        self.nodes += 1;

        let win = board.check_win();
        if let Some(winner) = win.winning_player() {
            let depth = depth as i32;
            return if winner == self.player {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }

        if board.is_full() || depth >= self.ceiling {
            return 0;
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.other()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in board.empty_cells() {
            let mut next = board.clone();
            next.make_move(mv.row, mv.col, mover);
            let score = self.value(&next, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// Best move for `player` by depth-limited minimax.
///
/// Ties keep the first cell in row-major order.
pub fn minimax_move(board: &Board, player: Player) -> Option<Move> {
    let mut search = Search {
        player,
        ceiling: depth_ceiling(board.size()),
        nodes: 0,
    };

    let mut best: Option<(Move, i32)> = None;
    for mv in board.empty_cells() {
        let mut next = board.clone();
        next.make_move(mv.row, mv.col, player);
        let score = search.value(&next, 0, false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        debug!(
            row = mv.row,
            col = mv.col,
            score,
            nodes = search.nodes,
            ceiling = search.ceiling,
            "minimax selected move"
        );
    }
    best.map(|(mv, _)| mv)
}

/// Hard agent: full-width minimax with a size-dependent horizon.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxAgent;

impl MinimaxAgent {
    pub fn new() -> Self {
        MinimaxAgent
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        minimax_move(board, player)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(*self)
    }
}
