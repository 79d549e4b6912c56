use crate::GridIndex;

/// A single square of the grid, as handed to a [`Surface`](crate::Surface).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Cell {
    pub row: GridIndex,
    pub col: GridIndex,

    /// Whether the cell is alive in the generation it was read from
    pub live: bool,
}

impl Cell {
    pub const fn new(row: GridIndex, col: GridIndex, live: bool) -> Self {
        Self { row, col, live }
    }

    /// Return a dead cell at `(row, col)`
    pub const fn dead(row: GridIndex, col: GridIndex) -> Self {
        Self::new(row, col, false)
    }

    /// Same coordinates, different state
    pub const fn with_live(self, live: bool) -> Self {
        Self { live, ..self }
    }
}
