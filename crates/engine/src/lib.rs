//! Game loop controller and timer plumbing.
//!
//! [`GameLoop`] wraps a [`GameSession`](vr_tetris_core::GameSession) with its
//! gravity timer. Timers come from a [`Scheduler`]: [`TokioScheduler`] for a
//! real host, [`ManualScheduler`] for deterministic tests.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use vr_tetris_core::{GameSession, PieceGenerator};
//! use vr_tetris_engine::{GameLoop, ManualScheduler};
//! use vr_tetris_engine::types::{Intent, PieceKind};
//!
//! let scheduler = ManualScheduler::new();
//! let generator = PieceGenerator::scripted([PieceKind::T]).unwrap();
//! let session = GameSession::new(20, 10, generator).unwrap();
//! let mut game = GameLoop::new(session, scheduler.clone(), Duration::from_millis(1000)).unwrap();
//!
//! game.dispatch(Intent::Start);
//! for event in scheduler.advance(Duration::from_millis(2000)) {
//!     game.handle(event);
//! }
//! assert_eq!(game.snapshot().player.position.y, 2);
//! ```

pub mod config;
pub mod game_loop;
pub mod scheduler;

pub use vr_tetris_core as core;
pub use vr_tetris_types as types;

pub use config::EngineConfig;
pub use game_loop::GameLoop;
pub use scheduler::{
    Event, ManualScheduler, ManualTimer, Scheduler, TimerHandle, TimerId, TokioScheduler,
    TokioTimer,
};
