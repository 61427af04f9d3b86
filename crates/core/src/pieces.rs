//! Pieces module - canonical tetromino shapes and their colors
//!
//! Each kind has one spawn matrix. The O piece is 2x2, the I piece 4x4 and the
//! rest 3x3; every occupied cell holds the kind's id so a locked cell can be
//! mapped back to a color.

use crate::shape::Shape;
use crate::types::{Cell, PieceKind, Rgb};

type Table = [[Cell; 4]; 4];

const T: Table = [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]];
const O: Table = [[2, 2, 0, 0], [2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const L: Table = [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 0, 0]];
const J: Table = [[0, 4, 0, 0], [0, 4, 0, 0], [4, 4, 0, 0], [0, 0, 0, 0]];
const I: Table = [[0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0]];
const S: Table = [[0, 6, 6, 0], [6, 6, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const Z: Table = [[7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]];

/// Spawn shape for a piece kind
pub fn figure(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_table(&T, 3),
        PieceKind::O => Shape::from_table(&O, 2),
        PieceKind::L => Shape::from_table(&L, 3),
        PieceKind::J => Shape::from_table(&J, 3),
        PieceKind::I => Shape::from_table(&I, 4),
        PieceKind::S => Shape::from_table(&S, 3),
        PieceKind::Z => Shape::from_table(&Z, 3),
    }
}

/// Display color for a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::T => Rgb::new(0xff, 0x0d, 0x72),
        PieceKind::O => Rgb::new(0x0d, 0xc2, 0xff),
        PieceKind::L => Rgb::new(0x0d, 0xff, 0x72),
        PieceKind::J => Rgb::new(0xf5, 0x38, 0xff),
        PieceKind::I => Rgb::new(0xff, 0x8e, 0x0d),
        PieceKind::S => Rgb::new(0xff, 0xe1, 0x38),
        PieceKind::Z => Rgb::new(0x38, 0x77, 0xff),
    }
}

/// Color for a cell value; `None` for empty or unknown ids
pub fn figure_color(id: Cell) -> Option<Rgb> {
    PieceKind::from_id(id).map(piece_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_figure_has_four_cells_of_its_own_id() {
        for kind in PieceKind::ALL {
            let shape = figure(kind);
            let cells: Vec<_> = shape.occupied().collect();
            assert_eq!(cells.len(), 4, "{kind:?}");
            assert!(cells.iter().all(|&(_, _, v)| v == kind.id()), "{kind:?}");
        }
    }

    #[test]
    fn figure_sizes() {
        assert_eq!(figure(PieceKind::O).size(), 2);
        assert_eq!(figure(PieceKind::I).size(), 4);
        for kind in [PieceKind::T, PieceKind::L, PieceKind::J, PieceKind::S, PieceKind::Z] {
            assert_eq!(figure(kind).size(), 3);
        }
    }

    #[test]
    fn colors_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for kind in PieceKind::ALL {
            assert!(seen.insert(piece_color(kind)));
        }
        assert_eq!(figure_color(0), None);
        assert_eq!(figure_color(2), Some(piece_color(PieceKind::O)));
    }
}
