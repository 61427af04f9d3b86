//! Player state - the falling piece, where it is, and the running score

use serde::Serialize;

use crate::shape::Shape;
use crate::types::Cell;

/// Top-left anchor of a shape in field coordinates (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The active piece plus the score of the current game.
///
/// `shape` is `None` when no piece is in play (before the first start, after
/// a stop, after a top-out).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Player {
    pub shape: Option<Shape>,
    pub position: Position,
    pub score: u32,
}

impl Player {
    pub fn new(shape: Shape, position: Position) -> Self {
        Self {
            shape: Some(shape),
            position,
            score: 0,
        }
    }

    /// Copy of this player moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..self.clone()
        }
    }

    /// Side of the active shape, 0 when there is none
    pub fn width(&self) -> usize {
        self.shape.as_ref().map_or(0, Shape::size)
    }

    /// Occupied cells mapped onto the field as `(x, y, value)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let origin = self.position;
        self.shape.iter().flat_map(move |shape| {
            shape
                .occupied()
                .map(move |(row, col, v)| (origin.x + col as i32, origin.y + row as i32, v))
        })
    }
}
