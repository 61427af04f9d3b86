//! VR Tetris (workspace facade crate).
//!
//! Re-exports the member crates under short names:
//! `vr_tetris::{core, engine, input, term, types}`.

pub use vr_tetris_core as core;
pub use vr_tetris_engine as engine;
pub use vr_tetris_input as input;
pub use vr_tetris_term as term;
pub use vr_tetris_types as types;
