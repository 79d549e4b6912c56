use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::GridIndex;
use crate::GridOffset;
use crate::cell::Cell;

/// Offsets of the eight cells of a Moore neighbourhood, as `(dr, dc)`
pub const MOORE_NEIGHBORHOOD: [(GridOffset, GridOffset); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Pattern is empty")]
    Empty,

    #[error("Pattern has {rows} rows but row {row} has {cols} columns, expected a square")]
    NotSquare { rows: usize, row: usize, cols: usize },

    #[error("Unexpected character '{0}' in pattern")]
    InvalidChar(char),

    #[error("Expected {expected} cell states, got {got}")]
    WrongLength { expected: usize, got: usize },
}

/// A square grid of cells, stored row-major.
///
/// Grids are values: advancing a generation builds a new grid from an untouched one, so
/// nothing reading the old grid can see a half-updated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `size * size` dead cells
    pub fn dead(size: usize) -> Self {
        Self::travel(size, |cell| cell)
    }

    /// Build a grid by visiting every `(row, col)` in row-major order.
    ///
    /// The visitor receives a dead cell at each coordinate and returns the cell to store
    /// there. The returned coordinates are ignored; cells always land where they were
    /// visited.
    pub fn travel<F>(size: usize, mut visitor: F) -> Self
    where
        F: FnMut(Cell) -> Cell,
    {
        let mut cells = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let cell = visitor(Cell::dead(row, col));
                cells.push(Cell::new(row, col, cell.live));
            }
        }

        Self { size, cells }
    }

    /// Build a grid from row-major states. `states` must hold exactly `size * size` entries.
    pub fn from_states(size: usize, states: &[bool]) -> Result<Self, GridError> {
        if states.len() != size * size {
            return Err(GridError::WrongLength {
                expected: size * size,
                got: states.len(),
            });
        }

        Ok(Self::travel(size, |cell| {
            cell.with_live(states[cell.row * size + cell.col])
        }))
    }

    /// Build a grid with exactly the given cells alive. Out of range coordinates are
    /// ignored.
    pub fn with_live_cells(size: usize, live: &[(GridIndex, GridIndex)]) -> Self {
        Self::travel(size, |cell| cell.with_live(live.contains(&(cell.row, cell.col))))
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: GridIndex, col: GridIndex) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Whether `(row, col)` is alive. Anything off the grid is dead.
    pub fn is_alive(&self, row: GridOffset, col: GridOffset) -> bool {
        if row < 0 || col < 0 {
            return false;
        }

        self.cell(row as GridIndex, col as GridIndex)
            .is_some_and(|cell| cell.live)
    }

    /// Number of live cells around `(row, col)`, not counting the cell itself
    pub fn count_neighbors(&self, row: GridIndex, col: GridIndex) -> u8 {
        let (row, col) = (row as GridOffset, col as GridOffset);

        MOORE_NEIGHBORHOOD
            .iter()
            .filter(|&&(dr, dc)| self.is_alive(row + dr, col + dc))
            .count() as u8
    }

    /// Every cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The grid one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.live).count()
    }
}

/// Plain text, one line per row: `O` for a live cell, `.` for a dead one.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.live { "O" } else { "." })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form. `O`, `o`, `*` and `#` are live; `.` and `_`
/// are dead. Blank lines and surrounding whitespace are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let size = lines.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut states = Vec::with_capacity(size * size);

        for (row, line) in lines.iter().enumerate() {
            let cols = line.chars().count();
            if cols != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row,
                    cols,
                });
            }

            for c in line.chars() {
                match c {
                    'O' | 'o' | '*' | '#' => states.push(true),
                    '.' | '_' => states.push(false),
                    c => return Err(GridError::InvalidChar(c)),
                }
            }
        }

        Self::from_states(size, &states)
    }
}
