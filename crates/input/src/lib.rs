//! Input adapters.
//!
//! Device events never reach the engine directly. This crate translates them
//! into [`crate::types::Intent`]s:
//!
//! - browser `KeyboardEvent.code` strings and pointer clicks (the VR scene)
//! - `crossterm` key events (the terminal host)

pub mod map;

pub use vr_tetris_types as types;

pub use map::{handle_key_event, intent_for_click, intent_for_key_code, should_quit, PointerTarget};
