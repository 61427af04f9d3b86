//! Shared data types and constants.
//!
//! Everything here is plain data with no dependencies so the core engine, the
//! input adapters and any presentation layer can agree on the same vocabulary.
//!
//! # Field Dimensions
//!
//! - **Rows**: 20 by default (indexed 0-19, top to bottom)
//! - **Columns**: 10 by default (indexed 0-9, left to right)
//!
//! # Cells
//!
//! A field cell is a [`Cell`] (`u8`): `0` is empty, any other value is the id
//! of the [`PieceKind`] that locked there and is what the presentation uses to
//! pick a color.
//!
//! # Examples
//!
//! ```
//! use vr_tetris_types::{Intent, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::from_id(2), Some(PieceKind::O));
//! assert_eq!(PieceKind::O.id(), 2);
//! assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLUMNS), (20, 10));
//! ```

/// Default field height in rows
pub const DEFAULT_ROWS: usize = 20;

/// Default field width in columns
pub const DEFAULT_COLUMNS: usize = 10;

/// Smallest accepted field side (the I piece is 4x4)
pub const MIN_FIELD_SIDE: usize = 4;

/// Largest accepted field side
pub const MAX_FIELD_SIDE: usize = 1024;

/// Gravity interval in milliseconds (one row per second, no acceleration)
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Points for the first row cleared by a lock
pub const ROW_CLEAR_BASE_POINTS: u32 = 10;

/// A field or shape cell: `0` = empty, `>0` = piece-kind id
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven tetromino kinds.
///
/// Ids follow the order T, O, L, J, I, S, Z starting at 1; they are written
/// into the field when a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Cell value written for this kind (1..=7)
    pub fn id(self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]
    ///
    /// ```
    /// use vr_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(5), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Discrete player intents accepted by the engine.
///
/// Gravity ticks are not intents; the game loop generates them from its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Reset the field and begin a new game
    Start,
    /// End the running game without a top-out
    Stop,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise with wall-kick search
    Rotate,
}

impl Intent {
    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use vr_tetris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("softDrop"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Intent::Start),
            "stop" => Some(Intent::Stop),
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::Stop => "stop",
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#ff0d72`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_ids_are_distinct_and_nonzero() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, i + 1);
            assert_eq!(PieceKind::from_id(kind.id()), Some(*kind));
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn intent_names_round_trip() {
        for intent in [
            Intent::Start,
            Intent::Stop,
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::Rotate,
        ] {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
    }

    #[test]
    fn rgb_hex() {
        assert_eq!(Rgb::new(0xff, 0x0d, 0x72).to_hex(), "#ff0d72");
        assert_eq!(Rgb::default().to_hex(), "#000000");
    }
}
