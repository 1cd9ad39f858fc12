//! Terminal front end.
//!
//! Renders [`GameSnapshot`](crate::core::GameSnapshot)s into a framebuffer and
//! flushes that to the terminal. It reads the public snapshot only and holds
//! no game rules.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
