//! Core engine - pure, deterministic, and testable
//!
//! This crate contains every game rule: the board, piece shapes and rotation,
//! the active-piece controller, the piece supply, scoring and the game-state
//! machine. It performs no I/O and knows nothing about terminals.
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 grid with locking and line clearing
//! - [`pieces`]: shape definitions and rotation about a fixed pivot
//! - [`active`]: the falling piece, its wall push and gravity accumulator
//! - [`supply`]: upcoming queue, randomizer and hold slot
//! - [`scoring`]: points table, level progression and the gravity curve
//! - [`game_state`]: Menu / Play / Pause / GameOver orchestration
//! - [`messages`], [`lights`]: timed HUD text and the lights-out cycle
//! - [`events`], [`snapshot`]: what presentation layers consume
//!
//! # Rules
//!
//! - **Randomizer**: independent uniform draws by default; a 7-bag is optional
//! - **Rotation**: a quarter turn about the shape's pivot, then each cell in
//!   turn pushes the piece back inside the walls; a blocked result rolls back
//! - **No lock delay**: a blocked gravity step or a hard drop locks at once
//! - **Ghost piece** and a once-per-spawn **hold**
//! - **Game over**: locking any cell into the two ceiling rows
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState, Phase};
//! use blockfall_core::types::InputEvent;
//!
//! let mut game = GameState::new(GameConfig {
//!     seed: Some(12345),
//!     ..GameConfig::default()
//! });
//! game.start_game(1, true);
//! assert_eq!(game.phase(), Phase::Play);
//!
//! game.step([InputEvent::MoveLeft, InputEvent::RotateRight], 16);
//! game.handle_input(InputEvent::HardDrop);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! Call [`GameState::tick`] every frame with the elapsed milliseconds.

pub mod active;
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod game_state;
pub mod lights;
pub mod messages;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod supply;

pub use blockfall_types as types;

pub use active::{ActivePiece, Fall};
pub use board::{Board, LineClear};
pub use config::{GameConfig, GravityConfig};
pub use error::{ConfigError, LockError};
pub use events::GameEvent;
pub use game_state::{GameState, Phase, MAX_PENDING_EVENTS};
pub use messages::Message;
pub use pieces::cell_offsets;
pub use scoring::{fall_interval_ms, line_clear_points, ScoreState};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use supply::{Randomizer, Supply};
