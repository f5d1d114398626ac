use crate::game::{Board, Move, Player};

/// Universal interface for anything that picks moves.
pub trait Agent {
    /// Choose a position for `player` on `board`, or `None` when no empty
    /// cell is left. Must not assume it may mutate the caller's board.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
