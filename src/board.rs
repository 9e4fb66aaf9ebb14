use std::fmt;

use crate::types::{Cell, Position};

pub const BOARD_SIZE: usize = 10;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

const COLUMN_LABELS: &str = "ABCDEFGHIJ";

/// Othello board as a fixed grid of cells, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board. The centre 2x2 block holds black on the
    /// main diagonal and white on the anti-diagonal.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let center = BOARD_SIZE / 2;
        cells[center - 1][center - 1] = Cell::Black;
        cells[center - 1][center] = Cell::White;
        cells[center][center - 1] = Cell::White;
        cells[center][center] = Cell::Black;
        Self { cells }
    }

    /// A board with every square empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Bounds-checked read. Returns `None` off the grid.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if !in_bounds(row, col) {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Converts board to row-major bytes where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (out, cell) in board.iter_mut().zip(self.cells.iter().flatten()) {
            *out = cell.owner().map_or(0, |side| side.code());
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("   {}", "-".repeat(BOARD_SIZE * 2 + 1));

        write!(f, "   ")?;
        for label in COLUMN_LABELS.chars().take(BOARD_SIZE) {
            write!(f, " {label}")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{:>2} |", row + 1)?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f, " |")?;
        }

        writeln!(f, "{rule}")
    }
}

pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Row-major square index of `pos`.
pub fn index_of(pos: Position) -> u8 {
    pos.row * BOARD_SIZE as u8 + pos.col
}
