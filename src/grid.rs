//! Flood fill over a land/water grid.
//!
//! Both traversals clear land as they claim it, so every cell is visited at
//! most once and a second pass over the same grid finds nothing. Neighbours are
//! the four orthogonal cells.

use std::collections::VecDeque;

use crate::error::{Error, Result};

const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular grid of land (`true`) and water (`false`) cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid from text rows where `'1'` is land and `'0'` is water.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        Self::build(rows.iter().map(|row| row.as_bytes()), b'1', b'0')
    }

    /// Builds a grid from numeric rows where `1` is land and `0` is water.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Self::build(rows.iter().map(|row| row.as_ref()), 1, 0)
    }

    fn build<'a, I>(rows: I, land: u8, water: u8) -> Result<Self>
    where
        I: Iterator<Item = &'a [u8]>,
    {
        let mut cols = None;
        let mut cells = Vec::new();
        let mut row_count = 0;

        for (row, raw) in rows.enumerate() {
            let expected = *cols.get_or_insert(raw.len());
            if raw.len() != expected {
                return Err(Error::RaggedGrid {
                    row,
                    expected,
                    found: raw.len(),
                });
            }
            for (col, &value) in raw.iter().enumerate() {
                match value {
                    v if v == land => cells.push(true),
                    v if v == water => cells.push(false),
                    _ => return Err(Error::InvalidCell { row, col, value }),
                }
            }
            row_count += 1;
        }

        Ok(Self {
            rows: row_count,
            cols: cols.unwrap_or(0),
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` is land. Out-of-range cells are water.
    pub fn is_land(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Number of land cells still present.
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|&&land| land).count()
    }

    /// Clears `(row, col)` if it is land, reporting whether it was.
    fn take_land(&mut self, row: usize, col: usize) -> bool {
        if !self.is_land(row, col) {
            return false;
        }
        self.cells[row * self.cols + col] = false;
        true
    }
}

/// In-bounds orthogonal neighbours of `(row, col)` in a `rows` x `cols` grid.
fn neighbours(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOURS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

/// Number of 4-connected islands, found by breadth-first search.
///
/// Consumes the land: afterwards `grid` is all water.
pub fn num_islands(grid: &mut Grid) -> usize {
    let mut count = 0;
    let mut queue = VecDeque::new();

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if !grid.take_land(row, col) {
                continue;
            }
            count += 1;
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                for (nr, nc) in neighbours(grid.rows, grid.cols, r, c) {
                    // Cleared on enqueue so no cell is queued twice.
                    if grid.take_land(nr, nc) {
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
    }
    count
}

/// Size of the largest 4-connected island, found by depth-first search.
///
/// Uses an explicit stack rather than recursion. Consumes the land like
/// [`num_islands`].
pub fn max_area_of_island(grid: &mut Grid) -> usize {
    let mut best = 0;
    let mut stack = Vec::new();

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if !grid.take_land(row, col) {
                continue;
            }
            let mut area = 0;
            stack.push((row, col));

            while let Some((r, c)) = stack.pop() {
                area += 1;
                for (nr, nc) in neighbours(grid.rows, grid.cols, r, c) {
                    if grid.take_land(nr, nc) {
                        stack.push((nr, nc));
                    }
                }
            }
            best = best.max(area);
        }
    }
    best
}
