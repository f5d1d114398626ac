//! Plain-text board rendering and move parsing for the terminal front-end.

use std::fmt::Write;

use crate::game::{Board, Cell, Move};

/// Why a line typed at the move prompt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("please enter two numbers: row col")]
    Malformed,

    #[error("use 0-{max} for both row and column")]
    OutOfRange { max: usize },
}

/// Parse a `row col` line against a board of `size`.
pub fn parse_move(line: &str, size: usize) -> Result<Move, InputError> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed);
    };
    let row: usize = row.parse().map_err(|_| InputError::Malformed)?;
    let col: usize = col.parse().map_err(|_| InputError::Malformed)?;
    if row >= size || col >= size {
        return Err(InputError::OutOfRange {
            max: size.saturating_sub(1),
        });
    }
    Ok(Move::new(row, col))
}

/// Draw the board with row/column labels. Cells listed in `highlight`
/// (flattened indices) are bracketed.
pub fn render_board(board: &Board, highlight: &[usize]) -> String {
    let size = board.size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..size {
        let _ = write!(out, " {col}  ");
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{row} ");
        for col in 0..size {
            let symbol = match board.get(row, col) {
                Cell::Empty => ' ',
                Cell::X => 'X',
                Cell::O => 'O',
            };
            if highlight.contains(&(row * size + col)) {
                let _ = write!(out, "[{symbol}]");
            } else {
                let _ = write!(out, " {symbol} ");
            }
            if col + 1 < size {
                out.push('|');
            }
        }
        out.push('\n');

        if row + 1 < size {
            out.push_str("  ");
            out.push_str(&vec!["---"; size].join("|"));
            out.push('\n');
        }
    }

    out
}
