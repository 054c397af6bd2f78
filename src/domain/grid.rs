use super::{Cell, rules::Rule};
use rayon::prelude::*;

/// Relative (row, col) offsets of the Moore neighbourhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is the square board the automaton lives on.
/// Cells are stored row-major; edges wrap around like a torus.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Build a grid by asking `f` for the state of every (row, col), row by row
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self { size, cells }
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position, ignoring writes past the edge
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbours using toroidal wrapping
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let n = self.size as isize;
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let r = (row as isize + dr).rem_euclid(n) as usize;
                let c = (col as isize + dc).rem_euclid(n) as usize;
                self.cells[self.index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, idx: usize, rule: &dyn Rule) -> Cell {
        let (row, col) = (idx / self.size, idx % self.size);
        rule.evolve(self.cells[idx], self.live_neighbors(row, col))
    }

    /// Next generation, computed entirely from `self` (serial)
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.cells.len())
            .map(|idx| self.next_cell(idx, rule))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Next generation with cells evaluated on the rayon pool.
    /// Produces exactly the same grid as [`Grid::evolve`].
    pub fn evolve_parallel(&self, rule: &dyn Rule) -> Self {
        let cells: Vec<Cell> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx, rule))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Rows of the board as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Board as nested rows of 0/255 values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }
}
