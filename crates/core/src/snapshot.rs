//! Read-only view of a session for presentation layers.
//!
//! Serializes to camelCase JSON so a browser front end can redraw from it
//! directly.

use serde::Serialize;

use crate::field::Field;
use crate::pieces::figure_color;
use crate::player::{Player, Position};
use crate::session::Phase;
use crate::types::{Cell, Rgb, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub shape: Option<Vec<Vec<Cell>>>,
    pub position: Position,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub field: Vec<Vec<Cell>>,
    pub player: PlayerSnapshot,
    pub is_running: bool,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn capture(field: &Field, player: &Player, phase: Phase) -> Self {
        Self {
            field: field.to_rows(),
            player: PlayerSnapshot {
                shape: player.shape.as_ref().map(|s| s.to_rows()),
                position: player.position,
                score: player.score,
            },
            is_running: phase == Phase::Running,
            phase,
        }
    }

    pub fn rows(&self) -> usize {
        self.field.len()
    }

    pub fn columns(&self) -> usize {
        self.field.first().map_or(0, Vec::len)
    }

    /// Field with the active piece drawn on top; cells of the piece that fall
    /// outside the grid are skipped.
    pub fn composed(&self) -> Vec<Vec<Cell>> {
        let mut grid = self.field.clone();
        let Some(shape) = &self.player.shape else {
            return grid;
        };
        let origin = self.player.position;
        for (r, row) in shape.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == EMPTY {
                    continue;
                }
                let (x, y) = (origin.x + c as i32, origin.y + r as i32);
                if x < 0 || y < 0 {
                    continue;
                }
                if let Some(cell) = grid
                    .get_mut(y as usize)
                    .and_then(|line| line.get_mut(x as usize))
                {
                    *cell = value;
                }
            }
        }
        grid
    }

    /// Color of a cell value
    pub fn cell_color(value: Cell) -> Option<Rgb> {
        figure_color(value)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
