//! Line clearing and scoring
//!
//! Rows are scanned from the bottom up to row 1; row 0 is never cleared, even
//! when full. A cleared row is removed, everything above drops by one and the
//! same index is examined again.
//!
//! # Scoring
//!
//! Within one lock the n-th cleared row is worth `10 · n · 2^(n-1)`:
//!
//! | Row | Points | Total |
//! |-----|--------|-------|
//! | 1st | 10     | 10    |
//! | 2nd | 40     | 50    |
//! | 3rd | 120    | 170   |
//! | 4th | 320    | 490   |

use tracing::debug;

use crate::field::Field;
use crate::player::Player;
use crate::types::ROW_CLEAR_BASE_POINTS;

/// Result of a lock that cleared at least one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedRows {
    pub field: Field,
    pub player: Player,
    /// Number of rows removed
    pub rows: u32,
    /// Points added to the player's score
    pub points: u32,
}

/// Points for the `nth` row (1-based) cleared within one lock
pub fn row_award(nth: u32) -> u32 {
    if nth == 0 {
        return 0;
    }
    let multiplier = 1u32.checked_shl(nth - 1).unwrap_or(u32::MAX);
    ROW_CLEAR_BASE_POINTS
        .saturating_mul(nth)
        .saturating_mul(multiplier)
}

/// Total points for clearing `rows` rows in one lock
pub fn clear_score(rows: u32) -> u32 {
    (1..=rows).fold(0u32, |acc, nth| acc.saturating_add(row_award(nth)))
}

/// Clear every full row below row 0.
///
/// Returns `None` when no row was full; the caller keeps its field and player.
pub fn clear_full_rows(field: &Field, player: &Player) -> Option<ClearedRows> {
    let mut field = field.clone();
    let mut player = player.clone();
    let mut rows = 0u32;
    let mut points = 0u32;

    let mut y = field.rows() - 1;
    while y > 0 {
        if !field.is_row_full(y) {
            y -= 1;
            continue;
        }
        field.remove_row(y);
        rows += 1;
        let award = row_award(rows);
        points = points.saturating_add(award);
        player.score = player.score.saturating_add(award);
    }

    if rows == 0 {
        return None;
    }

    debug!(rows, points, score = player.score, "cleared rows");
    Some(ClearedRows {
        field,
        player,
        rows,
        points,
    })
}
