//! Board module - manages the 4x4 tile grid
//!
//! The board stores tile values row-major in a fixed `[[u32; 4]; 4]`.
//! A value of 0 is an empty cell; every other value is a power of two >= 2.
//! Coordinates are `(row, col)`, both 0..4, row 0 at the top.
//!
//! All four slide directions are built from one primitive,
//! [`compact_and_merge_left`], composed with two self-inverse transforms:
//! [`Board::mirror`] (reverse every row) and [`Board::transpose`].

use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Direction, Line, Rows, BOARD_SIZE, CELL_COUNT};

/// Rejected input when building a board from raw rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid tile {value} at ({row}, {col}): expected 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Result of sliding the whole board once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any row (or column) ended up different
    pub moved: bool,
    /// Sum of every tile produced by a merge during the slide
    pub gained: u32,
}

/// Slide one line towards index 0 and merge equal neighbours.
///
/// Zeros are dropped first, then the surviving tiles are scanned left to
/// right. Each equal pair becomes one tile of double value; a tile produced
/// by a merge is never merged again in the same pass. The result is padded
/// with zeros on the right.
///
/// Returns the new line and the sum of merged values.
///
/// ```
/// use tui_2048_core::board::compact_and_merge_left;
///
/// assert_eq!(compact_and_merge_left(&[2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// assert_eq!(compact_and_merge_left(&[4, 4, 8, 0]), ([8, 8, 0, 0], 8));
/// assert_eq!(compact_and_merge_left(&[0, 2, 0, 4]), ([2, 4, 0, 0], 0));
/// ```
pub fn compact_and_merge_left(line: &Line) -> (Line, u32) {
    let tiles: ArrayVec<u32, BOARD_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0u32; BOARD_SIZE];
    let mut gained = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < tiles.len() {
        if read + 1 < tiles.len() && tiles[read] == tiles[read + 1] {
            let merged = tiles[read] * 2;
            out[write] = merged;
            gained += merged;
            read += 2;
        } else {
            out[write] = tiles[read];
            read += 1;
        }
        write += 1;
    }

    (out, gained)
}

/// Whether `value` may appear on a board (0 or a power of two >= 2)
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// The 4x4 game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    rows: Rows,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from raw rows, validating every cell
    pub fn from_rows(rows: Rows) -> Result<Self, BoardError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Read-only view of the grid
    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Get the tile at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|line| line.get(col)).copied()
    }

    /// Set the tile at `(row, col)`. Coordinates come from [`Board::empty_cells`].
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(is_valid_tile(value));
        self.rows[row][col] = value;
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.rows = [[0; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut cells = ArrayVec::new();
        for (row, line) in self.rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    pub fn count_empty(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v != 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn highest_tile(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Whether any cell holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.rows.iter().flatten().any(|&v| v == value)
    }

    /// Whether two horizontally or vertically adjacent cells hold equal values.
    ///
    /// Each cell is compared with its right and lower neighbour. Empty cells
    /// count too, so callers interested in merges should also check emptiness.
    pub fn has_adjacent_equal(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.rows[row][col];
                if col + 1 < BOARD_SIZE && value == self.rows[row][col + 1] {
                    return true;
                }
                if row + 1 < BOARD_SIZE && value == self.rows[row + 1][col] {
                    return true;
                }
            }
        }
        false
    }

    /// Swap rows and columns in place. Applying it twice restores the board.
    pub fn transpose(&mut self) {
        for row in 0..BOARD_SIZE {
            for col in (row + 1)..BOARD_SIZE {
                let tmp = self.rows[row][col];
                self.rows[row][col] = self.rows[col][row];
                self.rows[col][row] = tmp;
            }
        }
    }

    /// Reverse every row in place. Applying it twice restores the board.
    pub fn mirror(&mut self) {
        for line in &mut self.rows {
            line.reverse();
        }
    }

    /// Slide every row towards column 0
    pub fn move_left(&mut self) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        for line in &mut self.rows {
            let (next, gained) = compact_and_merge_left(line);
            outcome.gained += gained;
            if next != *line {
                *line = next;
                outcome.moved = true;
            }
        }
        outcome
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.mirror();
        let outcome = self.move_left();
        self.mirror();
        outcome
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        self.transpose();
        let outcome = self.move_left();
        self.transpose();
        outcome
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.transpose();
        let outcome = self.move_right();
        self.transpose();
        outcome
    }

    /// Slide the board in `dir`
    pub fn shift(&mut self, dir: Direction) -> MoveOutcome {
        match dir {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in line.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}
