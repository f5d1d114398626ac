use super::Player;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 6;
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Run length needed to win on a board of the given size.
///
/// 5x5 plays to four rather than five to keep it winnable.
pub fn win_condition_for_size(size: usize) -> usize {
    match size {
        3 => 3,
        4 => 4,
        5 => 4,
        6 => 5,
        _ => 3,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A (row, col) board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

/// Result of a win scan. Not stored on the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinInfo {
    has_winner: bool,
    winner: Cell,
    winning_cells: Vec<usize>,
}

impl WinInfo {
    pub fn none() -> Self {
        WinInfo::default()
    }

    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// Winning mark; `Cell::Empty` when there is no winner
    pub fn winner(&self) -> Cell {
        self.winner
    }

    pub fn winning_player(&self) -> Option<Player> {
        if self.has_winner {
            self.winner.player()
        } else {
            None
        }
    }

    /// Flattened indices (`row * size + col`) of the winning run, in scan order
    pub fn winning_cells(&self) -> &[usize] {
        &self.winning_cells
    }
}

/// Scan directions in priority order: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_condition: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. `win_condition` is expected to be `<= size`;
    /// a larger value is accepted but can never produce a winner.
    pub fn new(size: usize, win_condition: usize) -> Self {
        Board {
            size,
            win_condition,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Create an empty board using the standard win condition for `size`
    pub fn for_size(size: usize) -> Self {
        Self::new(size, win_condition_for_size(size))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_condition(&self) -> usize {
        self.win_condition
    }

    /// Change dimensions and clear every cell
    pub fn resize(&mut self, size: usize, win_condition: usize) {
        self.size = size;
        self.win_condition = win_condition;
        self.cells.clear();
        self.cells.resize(size * size, Cell::Empty);
    }

    /// Clear every cell, keeping dimensions
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn in_range(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get the cell at a position. Out-of-range positions read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if !self.in_range(row, col) {
            return Cell::Empty;
        }
        self.cells[row * self.size + col]
    }

    /// Place a mark. Returns false (and changes nothing) if the position is
    /// out of range or already taken.
    pub fn make_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.in_range(row, col) {
            return false;
        }
        let idx = row * self.size + col;
        if self.cells[idx] != Cell::Empty {
            return false;
        }
        self.cells[idx] = player.to_cell();
        true
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Every empty position in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Move::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Find a run of `win_condition` identical marks.
    ///
    /// Cells are visited in row-major order as run starts, and each start
    /// tries the four directions in `DIRECTIONS` order. The first run found is
    /// reported, so when several runs exist only one comes back.
    pub fn check_win(&self) -> WinInfo {
        if self.win_condition == 0 || self.win_condition > self.size {
            return WinInfo::none();
        }
        let span = self.size - self.win_condition;

        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.get(row, col);
                if cell == Cell::Empty {
                    continue;
                }

                for (dr, dc) in DIRECTIONS {
                    let fits = (dr == 0 || row <= span)
                        && match dc {
                            1 => col <= span,
                            -1 => col + 1 >= self.win_condition,
                            _ => true,
                        };
                    if !fits {
                        continue;
                    }
                    if let Some(run) = self.run_from(row, col, dr, dc, cell) {
                        return WinInfo {
                            has_winner: true,
                            winner: cell,
                            winning_cells: run,
                        };
                    }
                }
            }
        }

        WinInfo::none()
    }

    /// Walk from a start cell collecting up to `win_condition` matching marks
    fn run_from(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> Option<Vec<usize>> {
        let mut run = Vec::with_capacity(self.win_condition);
        let mut r = row as isize;
        let mut c = col as isize;

        while run.len() < self.win_condition
            && r >= 0
            && c >= 0
            && (r as usize) < self.size
            && (c as usize) < self.size
            && self.cells[r as usize * self.size + c as usize] == cell
        {
            run.push(r as usize * self.size + c as usize);
            r += dr;
            c += dc;
        }

        (run.len() == self.win_condition).then_some(run)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::for_size(DEFAULT_BOARD_SIZE)
    }
}
