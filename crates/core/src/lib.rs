//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole game-state engine and nothing else: no timers,
//! no rendering, no input devices. A host drives it with intents and ticks and
//! reads a [`GameSnapshot`] back after every transition.
//!
//! # Module Structure
//!
//! - [`field`]: the locked-cell grid and merging
//! - [`shape`]: square piece matrices and clockwise rotation
//! - [`pieces`]: the seven canonical figures and their colors
//! - [`generator`]: seeded or scripted piece generation
//! - [`player`]: active piece position and score
//! - [`collision`]: placement checks against walls, floor and locked cells
//! - [`rotation`]: rotation with a horizontal wall-kick search
//! - [`lines`]: full-row clearing and scoring
//! - [`session`]: the game state machine
//! - [`snapshot`]: serializable read-only view
//!
//! # Example
//!
//! ```
//! use vr_tetris_core::{GameSession, PieceGenerator, Phase, TickOutcome};
//! use vr_tetris_core::types::{Intent, PieceKind};
//!
//! let generator = PieceGenerator::scripted([PieceKind::O]).unwrap();
//! let mut session = GameSession::new(20, 10, generator).unwrap();
//! session.start();
//! assert_eq!(session.phase(), Phase::Running);
//!
//! session.apply(Intent::MoveLeft);
//! assert_eq!(session.tick(), TickOutcome::Fell);
//! assert_eq!(session.player().position.y, 1);
//! ```

pub mod collision;
pub mod error;
pub mod field;
pub mod generator;
pub mod lines;
pub mod pieces;
pub mod player;
pub mod rotation;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use vr_tetris_types as types;

pub use collision::collides;
pub use error::{Fault, Result};
pub use field::Field;
pub use generator::{PieceGenerator, SimpleRng};
pub use lines::{clear_full_rows, clear_score, row_award, ClearedRows};
pub use pieces::{figure, figure_color, piece_color};
pub use player::{Player, Position};
pub use rotation::{kick_offsets, resolve_rotation};
pub use session::{GameSession, LockEvent, Phase, ScoreOnStop, TickOutcome};
pub use shape::Shape;
pub use snapshot::{GameSnapshot, PlayerSnapshot};
