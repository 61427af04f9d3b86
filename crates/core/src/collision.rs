//! Collision checking for a proposed piece placement.

use crate::field::Field;
use crate::player::Player;
use crate::types::EMPTY;

/// True when some occupied cell of `player` lands outside the field (any
/// side, including the left/right walls) or on a locked cell.
pub fn collides(field: &Field, player: &Player) -> bool {
    player
        .cells()
        .any(|(x, y, _)| !matches!(field.get(x, y), Some(EMPTY)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;
    use crate::shape::Shape;

    fn square_at(x: i32, y: i32) -> Player {
        let shape = Shape::new(vec![vec![2, 2], vec![2, 2]]).unwrap();
        Player::new(shape, Position::new(x, y))
    }

    #[test]
    fn empty_field_in_bounds() {
        let field = Field::new(20, 10).unwrap();
        assert!(!collides(&field, &square_at(0, 0)));
        assert!(!collides(&field, &square_at(8, 18)));
    }

    #[test]
    fn floor_and_walls_collide() {
        let field = Field::new(20, 10).unwrap();
        assert!(collides(&field, &square_at(4, 19)));
        assert!(collides(&field, &square_at(-1, 5)));
        assert!(collides(&field, &square_at(9, 5)));
        assert!(collides(&field, &square_at(4, -1)));
    }

    #[test]
    fn locked_cell_collides() {
        let mut field = Field::new(20, 10).unwrap();
        field.set(5, 11, 3);
        assert!(collides(&field, &square_at(4, 10)));
        assert!(!collides(&field, &square_at(6, 10)));
    }

    #[test]
    fn empty_cells_of_shape_may_overhang() {
        // Column 0 of the I shape is empty, so x = -1 is fine.
        let field = Field::new(20, 10).unwrap();
        let shape = Shape::new(vec![
            vec![0, 5, 0, 0],
            vec![0, 5, 0, 0],
            vec![0, 5, 0, 0],
            vec![0, 5, 0, 0],
        ])
        .unwrap();
        let player = Player::new(shape, Position::new(-1, 0));
        assert!(!collides(&field, &player));
    }

    #[test]
    fn no_shape_never_collides() {
        let field = Field::new(20, 10).unwrap();
        assert!(!collides(&field, &Player::default()));
    }
}
