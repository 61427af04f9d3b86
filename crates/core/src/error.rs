//! Structural faults.
//!
//! These are raised only on programmer error (a malformed shape, a ragged
//! field, a merge outside the grid). Rejected game intents are not faults;
//! they are silently ignored by the session.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Fault>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("field {rows}x{columns} is smaller than the minimum {min}x{min}")]
    FieldTooSmall {
        rows: usize,
        columns: usize,
        min: usize,
    },

    #[error("field {rows}x{columns} exceeds the maximum side {max}")]
    FieldTooLarge {
        rows: usize,
        columns: usize,
        max: usize,
    },

    #[error("field row {row} has {len} cells, expected {columns}")]
    RaggedField {
        row: usize,
        len: usize,
        columns: usize,
    },

    #[error("shape is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("shape size {0} is outside 2..=4")]
    UnsupportedShapeSize(usize),

    #[error("merge writes cell ({x}, {y}) outside the field")]
    MergeOutOfBounds { x: i32, y: i32 },

    #[error("scripted piece generator needs at least one kind")]
    EmptyScript,

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}
