//! Wall-kick search against the right wall

use vr_tetris::core::{figure, kick_offsets, resolve_rotation, Field, Player, Position};
use vr_tetris::types::PieceKind;

fn vertical_i_at_right_wall() -> Player {
    // the I occupies column 1 of its matrix, so x = 8 puts it in column 9
    Player::new(figure(PieceKind::I), Position::new(8, 0))
}

#[test]
fn kicks_left_when_right_side_is_out_of_bounds() {
    let field = Field::new(20, 10).unwrap();
    let rotated = resolve_rotation(&field, &vertical_i_at_right_wall());
    // 0 → x 8, +1 → x 9, -1 → x 7 all stick out; -2 → x 6 fits
    assert_eq!(rotated.position, Position::new(6, 0));
    let cells: Vec<_> = rotated.cells().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(cells, vec![(6, 1), (7, 1), (8, 1), (9, 1)]);
}

#[test]
fn unchanged_when_every_tried_offset_collides() {
    let mut field = Field::new(20, 10).unwrap();
    field.set(8, 1, 3);
    let player = vertical_i_at_right_wall();

    // x 4 would fit, but -4 is never tried for a width-4 shape
    assert_eq!(kick_offsets(4).collect::<Vec<_>>(), vec![0, 1, -1, 2, -2, 3, -3, 4]);
    assert_eq!(resolve_rotation(&field, &player), player);
}
