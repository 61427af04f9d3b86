//! Game session - the complete mutable game state and its transitions
//!
//! A [`GameSession`] ties the field, the active player and the piece generator
//! together and exposes the state machine:
//!
//! ```text
//! Idle ──start──▶ Running ──stop──▶ Idle
//!                    │
//!                    └──top-out──▶ GameOver ──start──▶ Running
//! ```
//!
//! Every transition either commits a complete new state or leaves the session
//! untouched. Invalid intents (a move into a wall, a blocked rotation, a tick
//! while idle) are rejected silently and report `false` /
//! [`TickOutcome::Ignored`]. Timers live outside; see the engine crate.

use serde::Serialize;
use tracing::{debug, error, info};

use crate::collision::collides;
use crate::error::Result;
use crate::field::Field;
use crate::generator::PieceGenerator;
use crate::lines::clear_full_rows;
use crate::player::{Player, Position};
use crate::rotation::resolve_rotation;
use crate::snapshot::GameSnapshot;
use crate::types::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Not started, or stopped
    #[default]
    Idle,
    /// Gravity active, input accepted
    Running,
    /// Topped out; field and score stay visible until the next start
    GameOver,
}

/// What happens to the score when a running game is stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOnStop {
    Keep,
    Discard,
}

/// Emitted when a piece locks into the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub points: u32,
    pub score: u32,
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (or a stale timer); nothing changed
    Ignored,
    /// The piece moved down one row
    Fell,
    /// The piece locked and the next one spawned
    Locked(LockEvent),
    /// The piece locked and the next one could not spawn
    ToppedOut(LockEvent),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    field: Field,
    player: Player,
    phase: Phase,
    generator: PieceGenerator,
    last_lock: Option<LockEvent>,
    /// Incremented on every start
    game_id: u32,
    /// Pieces spawned in the current game
    pieces: u32,
}

impl GameSession {
    /// Idle session with an empty `rows × columns` field
    pub fn new(rows: usize, columns: usize, generator: PieceGenerator) -> Result<Self> {
        Ok(Self::with_field(Field::new(rows, columns)?, generator))
    }

    /// Idle session over an existing field. `start` still clears it; this is
    /// for inspecting or replaying prepared positions.
    pub fn with_field(field: Field, generator: PieceGenerator) -> Self {
        Self {
            field,
            player: Player::default(),
            phase: Phase::Idle,
            generator,
            last_lock: None,
            game_id: 0,
            pieces: 0,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Start a new game: empty field, score 0, first piece at the top.
    ///
    /// Ignored while a game is running. If the first piece cannot be placed
    /// the session goes straight to [`Phase::GameOver`].
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        self.field.clear();
        self.player = Player::default();
        self.last_lock = None;
        self.pieces = 0;
        self.game_id = self.game_id.wrapping_add(1);
        self.phase = Phase::Running;
        info!(game = self.game_id, "game started");

        self.spawn_next();
        true
    }

    /// Stop a running game. The active piece is dropped; the field stays.
    pub fn stop(&mut self, on_stop: ScoreOnStop) -> bool {
        if !self.is_running() {
            return false;
        }
        self.player.shape = None;
        if on_stop == ScoreOnStop::Discard {
            self.player.score = 0;
        }
        self.phase = Phase::Idle;
        info!(game = self.game_id, score = self.player.score, "game stopped");
        true
    }

    /// Gravity: move down one row, or lock and spawn the next piece.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        let dropped = self.player.shifted(0, 1);
        if !collides(&self.field, &dropped) {
            self.player = dropped;
            return TickOutcome::Fell;
        }

        let event = self.lock_piece();
        if self.spawn_next() {
            TickOutcome::Locked(event)
        } else {
            TickOutcome::ToppedOut(event)
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// One row down. Never locks; a blocked soft drop waits for the tick.
    pub fn soft_drop(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let rotated = resolve_rotation(&self.field, &self.player);
        if rotated == self.player {
            return false;
        }
        self.player = rotated;
        true
    }

    /// Dispatch an intent. `Stop` keeps the score on screen.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Start => self.start(),
            Intent::Stop => self.stop(ScoreOnStop::Keep),
            Intent::MoveLeft => self.move_left(),
            Intent::MoveRight => self.move_right(),
            Intent::SoftDrop => self.soft_drop(),
            Intent::Rotate => self.rotate(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.field, &self.player, self.phase)
    }

    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        if !self.is_running() {
            return false;
        }
        let candidate = self.player.shifted(dx, dy);
        if collides(&self.field, &candidate) {
            return false;
        }
        self.player = candidate;
        true
    }

    /// Merge the active piece, clear rows and record the lock event
    fn lock_piece(&mut self) -> LockEvent {
        match self.field.merge(&self.player) {
            Ok(field) => self.field = field,
            Err(fault) => error!(%fault, "active piece outside the field at lock"),
        }

        let mut event = LockEvent {
            rows_cleared: 0,
            points: 0,
            score: self.player.score,
        };
        if let Some(cleared) = clear_full_rows(&self.field, &self.player) {
            self.field = cleared.field;
            self.player = cleared.player;
            event.rows_cleared = cleared.rows;
            event.points = cleared.points;
            event.score = self.player.score;
        }

        debug!(
            rows = event.rows_cleared,
            points = event.points,
            score = event.score,
            "piece locked"
        );
        self.last_lock = Some(event);
        event
    }

    /// Put the next piece at row 0, horizontally centered. Returns false and
    /// ends the game when it collides.
    fn spawn_next(&mut self) -> bool {
        let shape = self.generator.get_figure();
        let x = (self.field.columns() / 2) as i32 - (shape.size() / 2) as i32;
        self.player.shape = Some(shape);
        self.player.position = Position::new(x, 0);

        if collides(&self.field, &self.player) {
            self.player.shape = None;
            self.phase = Phase::GameOver;
            info!(
                game = self.game_id,
                score = self.player.score,
                pieces = self.pieces,
                "game over"
            );
            return false;
        }

        self.pieces += 1;
        true
    }
}
