use super::{win_condition_for_size, Board, Move, Player, WinInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    #[error("position ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
}

/// One game in progress: the board, whose turn it is, and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    win: WinInfo,
    move_count: usize,
}

impl GameState {
    /// Start a game on an empty board of the given size. X moves first.
    pub fn new(size: usize) -> Self {
        Self::with_board(Board::for_size(size))
    }

    /// Start a game on a board with explicit dimensions
    pub fn with_board(board: Board) -> Self {
        let mut state = GameState {
            board,
            current_player: Player::X,
            outcome: None,
            win: WinInfo::none(),
            move_count: 0,
        };
        state.board.reset();
        state
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The winning run once the game has been won
    pub fn win_info(&self) -> &WinInfo {
        &self.win
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Empty cells, or nothing once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Place the current player's mark, then settle the outcome or pass the turn
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let size = self.board.size();
        if row >= size || col >= size {
            return Err(MoveError::OutOfRange { row, col });
        }
        if !self.board.make_move(row, col, self.current_player) {
            return Err(MoveError::Occupied { row, col });
        }
        self.move_count += 1;

        let win = self.board.check_win();
        if let Some(winner) = win.winning_player() {
            self.outcome = Some(GameOutcome::Winner(winner));
            self.win = win;
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(())
    }

    /// Clear the board and start over with X to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::X;
        self.outcome = None;
        self.win = WinInfo::none();
        self.move_count = 0;
    }

    /// Switch to a new board size (standard win condition) and start over
    pub fn resize(&mut self, size: usize) {
        self.board.resize(size, win_condition_for_size(size));
        self.reset();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn play(state: &mut GameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            state.apply_move(row, col).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(4);
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves().len(), 16);
        assert_eq!(state.board().win_condition(), 4);
    }

    #[test]
    fn test_apply_move_switches_player() {
        let mut state = GameState::new(3);
        state.apply_move(1, 1).unwrap();
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().get(1, 1), Cell::X);
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut state = GameState::new(3);
        state.apply_move(0, 0).unwrap();
        let before = state.clone();

        assert_eq!(state.apply_move(0, 0), Err(MoveError::Occupied { row: 0, col: 0 }));
        assert_eq!(state.apply_move(3, 1), Err(MoveError::OutOfRange { row: 3, col: 1 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new(3);
        // X takes the top row while O plays the middle row
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::X)));
        assert_eq!(state.win_info().winning_cells(), &[0, 1, 2]);
        assert_eq!(state.current_player(), Player::X);
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.apply_move(2, 2), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::new(3);
        // X O X
        // X O O
        // O X X
        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(!state.win_info().has_winner());
    }

    #[test]
    fn test_reset_and_resize() {
        let mut state = GameState::new(3);
        play(&mut state, &[(0, 0), (1, 1)]);
        state.reset();
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.legal_moves().len(), 9);

        state.resize(6);
        assert_eq!(state.board().size(), 6);
        assert_eq!(state.board().win_condition(), 5);
        assert_eq!(state.legal_moves().len(), 36);
    }
}
