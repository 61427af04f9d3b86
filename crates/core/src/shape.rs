//! Shape module - square piece matrices
//!
//! A shape is an N×N matrix (N in 2..=4) stored row-major in a flat buffer.
//! Nonzero cells carry the piece-kind id. Rotation never mutates a shape; it
//! produces a new one.

use crate::error::{Fault, Result};
use crate::types::{Cell, EMPTY};

/// Smallest and largest supported shape side
const MIN_SIZE: usize = 2;
const MAX_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    cells: Vec<Cell>,
}

impl Shape {
    /// Build a shape from rows, checking that the matrix is square and of a
    /// supported size.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Fault::UnsupportedShapeSize(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(Fault::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Build from a fixed-size table; only the top-left `size`×`size` block is used.
    pub(crate) fn from_table(table: &[[Cell; MAX_SIZE]; MAX_SIZE], size: usize) -> Self {
        debug_assert!((MIN_SIZE..=MAX_SIZE).contains(&size));
        let cells = table[..size]
            .iter()
            .flat_map(|row| row[..size].iter().copied())
            .collect();
        Self { size, cells }
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col); empty when out of range
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.size || col >= self.size {
            return EMPTY;
        }
        self.cells[row * self.size + col]
    }

    /// Occupied cells as `(row, col, value)`
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != EMPTY)
            .map(move |(i, &v)| (i / size, i % size, v))
    }

    /// First nonzero value, i.e. the piece-kind id this shape carries
    pub fn kind_id(&self) -> Option<Cell> {
        self.cells.iter().copied().find(|&v| v != EMPTY)
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    pub fn rotate_clockwise(&self) -> Shape {
        let n = self.size;
        let mut cells = vec![EMPTY; n * n];
        for r in 0..n {
            for c in 0..n {
                cells[r * n + c] = self.cells[(n - 1 - c) * n + r];
            }
        }
        Shape { size: n, cells }
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }
}
