//! Rotation with a horizontal wall-kick search.
//!
//! After a clockwise rotation the piece is tried in place, then nudged
//! sideways `+1, -1, +2, -2, ...`. The search stops as soon as the next offset
//! magnitude would exceed the shape width `w`, so the offsets tried are
//! `0, +1, -1, ..., +(w-1), -(w-1), +w`. `-w` is never tried.

use crate::collision::collides;
use crate::field::Field;
use crate::player::Player;

/// Horizontal offsets tried for a shape of width `width`, in order
pub fn kick_offsets(width: usize) -> impl Iterator<Item = i32> {
    let w = width as i32;
    std::iter::once(0).chain((1..=w).flat_map(move |k| {
        std::iter::once(k).chain((k < w).then_some(-k))
    }))
}

/// Rotate the player's shape clockwise and kick it sideways if needed.
///
/// Returns the rotated player, or an unchanged clone when every offset
/// collides (or there is no shape).
pub fn resolve_rotation(field: &Field, player: &Player) -> Player {
    let Some(shape) = player.shape.as_ref() else {
        return player.clone();
    };

    let rotated = shape.rotate_clockwise();
    let mut candidate = Player {
        shape: Some(rotated),
        ..player.clone()
    };
    let origin_x = player.position.x;

    for offset in kick_offsets(candidate.width()) {
        candidate.position.x = origin_x + offset;
        if !collides(field, &candidate) {
            return candidate;
        }
    }

    player.clone()
}
