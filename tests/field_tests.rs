//! Field grid, merge and row removal

use vr_tetris::core::{figure, Fault, Field, Player, Position, Shape};
use vr_tetris::types::{PieceKind, EMPTY};

#[test]
fn merge_writes_piece_and_keeps_locked_cells() {
    let mut field = Field::new(6, 4).unwrap();
    field.set(0, 5, 9);
    field.set(3, 5, 9);

    let player = Player::new(figure(PieceKind::O), Position::new(1, 4));
    let merged = field.merge(&player).unwrap();

    assert_eq!(merged.row(4).unwrap(), &[0, 2, 2, 0]);
    assert_eq!(merged.row(5).unwrap(), &[9, 2, 2, 9]);
    // the source field is not touched
    assert_eq!(field.row(4).unwrap(), &[EMPTY; 4]);
    assert_eq!(field.occupied_count(), 2);
}

#[test]
fn merge_without_shape_is_identity() {
    let mut field = Field::new(4, 4).unwrap();
    field.set(2, 2, 1);
    assert_eq!(field.merge(&Player::default()).unwrap(), field);
}

#[test]
fn merge_out_of_bounds_is_reported() {
    let field = Field::new(4, 4).unwrap();
    let player = Player::new(figure(PieceKind::O), Position::new(3, 0));
    assert_eq!(
        field.merge(&player),
        Err(Fault::MergeOutOfBounds { x: 4, y: 0 })
    );
}

#[test]
fn remove_row_shifts_everything_above_down() {
    let mut field = Field::from_rows(vec![
        vec![1, 0, 0, 0],
        vec![0, 2, 0, 0],
        vec![3, 3, 3, 3],
        vec![0, 0, 0, 4],
    ])
    .unwrap();

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
fn from_rows_rejects_bad_grids() {
    assert!(matches!(
        Field::from_rows(vec![vec![0; 4], vec![0; 4], vec![0; 3], vec![0; 4]]),
        Err(Fault::RaggedField { row: 2, .. })
    ));
    assert!(matches!(
        Field::new(3, 10),
        Err(Fault::FieldTooSmall { .. })
    ));
}

#[test]
fn shape_rejects_non_square_matrix() {
    assert!(Shape::new(vec![vec![1, 1, 1], vec![1, 1]]).is_err());
}
