//! Field module - the grid of locked cells
//!
//! The field is a `rows × columns` grid stored as a flat row-major buffer.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Dimensions are fixed at creation.

use crate::error::{Fault, Result};
use crate::player::Player;
use crate::types::{Cell, EMPTY, MAX_FIELD_SIDE, MIN_FIELD_SIDE};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Field {
    /// Create an all-empty field
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = Self::check_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![EMPTY; len],
        })
    }

    /// Validate `rows × columns` without allocating; returns the cell count
    pub fn check_dimensions(rows: usize, columns: usize) -> Result<usize> {
        if rows < MIN_FIELD_SIDE || columns < MIN_FIELD_SIDE {
            return Err(Fault::FieldTooSmall {
                rows,
                columns,
                min: MIN_FIELD_SIDE,
            });
        }
        let too_large = Fault::FieldTooLarge {
            rows,
            columns,
            max: MAX_FIELD_SIDE,
        };
        if rows > MAX_FIELD_SIDE || columns > MAX_FIELD_SIDE {
            return Err(too_large);
        }
        rows.checked_mul(columns).ok_or(too_large)
    }

    /// Create from explicit rows; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut field = Self::new(rows.len(), columns)?;
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != columns {
                return Err(Fault::RaggedField {
                    row: y,
                    len: row.len(),
                    columns,
                });
            }
            field.cells[y * columns..(y + 1) * columns].copy_from_slice(&row);
        }
        Ok(field)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.columns || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.columns + x as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows {
            return None;
        }
        Some(&self.cells[y * self.columns..(y + 1) * self.columns])
    }

    /// A row is full when it has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top.
    pub fn remove_row(&mut self, y: usize) {
        if y >= self.rows {
            return;
        }
        let width = self.columns;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY);
    }

    /// Return a new field with every occupied cell of `player` written at its
    /// position. The caller only merges non-colliding placements; a cell that
    /// would land outside the grid is a fault and leaves `self` untouched.
    pub fn merge(&self, player: &Player) -> Result<Field> {
        let mut merged = self.clone();
        for (x, y, value) in player.cells() {
            if !merged.set(x, y, value) {
                return Err(Fault::MergeOutOfBounds { x, y });
            }
        }
        Ok(merged)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(<[Cell]>::to_vec).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;
    use crate::shape::Shape;

    #[test]
    fn index_calculation() {
        let field = Field::new(20, 10).unwrap();
        assert_eq!(field.index(0, 0), Some(0));
        assert_eq!(field.index(9, 0), Some(9));
        assert_eq!(field.index(0, 1), Some(10));
        assert_eq!(field.index(9, 19), Some(199));
        assert_eq!(field.index(-1, 0), None);
        assert_eq!(field.index(10, 0), None);
        assert_eq!(field.index(0, 20), None);
    }

    #[test]
    fn too_small_is_a_fault() {
        assert_eq!(
            Field::new(3, 10).unwrap_err(),
            Fault::FieldTooSmall {
                rows: 3,
                columns: 10,
                min: 4
            }
        );
    }

    #[test]
    fn too_large_is_a_fault() {
        assert_eq!(
            Field::new(MAX_FIELD_SIDE + 1, 10).unwrap_err(),
            Fault::FieldTooLarge {
                rows: MAX_FIELD_SIDE + 1,
                columns: 10,
                max: MAX_FIELD_SIDE
            }
        );
        assert!(Field::check_dimensions(usize::MAX, usize::MAX).is_err());
        assert_eq!(Field::check_dimensions(MAX_FIELD_SIDE, MAX_FIELD_SIDE), Ok(1 << 20));
    }

    #[test]
    fn ragged_rows_are_a_fault() {
        let rows = vec![vec![0; 4], vec![0; 4], vec![0; 3], vec![0; 4]];
        assert_eq!(
            Field::from_rows(rows).unwrap_err(),
            Fault::RaggedField {
                row: 2,
                len: 3,
                columns: 4
            }
        );
    }

    #[test]
    fn remove_row_compacts_downward() {
        let mut field = Field::new(4, 4).unwrap();
        field.set(0, 0, 1);
        field.set(1, 1, 2);
        for x in 0..4 {
            field.set(x, 2, 3);
        }
        field.set(3, 3, 4);

        field.remove_row(2);

        assert_eq!(
            field.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![1, 0, 0, 0],
                vec![0, 2, 0, 0],
                vec![0, 0, 0, 4],
            ]
        );
    }

    #[test]
    fn merge_out_of_bounds_is_a_fault() {
        let field = Field::new(4, 4).unwrap();
        let shape = Shape::new(vec![vec![2, 2], vec![2, 2]]).unwrap();
        let player = Player::new(shape, Position::new(3, 0));
        assert_eq!(
            field.merge(&player).unwrap_err(),
            Fault::MergeOutOfBounds { x: 4, y: 0 }
        );
    }
}
