//! Terminal host for the game.
//!
//! Snapshots are painted into a [`FrameBuffer`] by [`GameView`] (pure, no
//! I/O) and flushed to the terminal by [`TerminalRenderer`]. The view reads
//! nothing but a [`GameSnapshot`](vr_tetris_core::GameSnapshot), the same
//! value a browser front end would receive as JSON.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use vr_tetris_core as core;
pub use vr_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
