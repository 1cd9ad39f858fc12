//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into engine [`crate::types::InputEvent`]s and
//! lifecycle commands, and turns repeated soft-drop presses into the
//! press/release pair the engine expects.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::SoftDropLatch;
pub use map::{is_soft_drop_key, map_key, KeyAction};
