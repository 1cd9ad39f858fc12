//! Shared types module - plain data and constants for the falling-block engine
//!
//! Everything here is pure data. The core engine, the input mapping and the
//! terminal view all agree on these definitions.
//!
//! # Board Geometry
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, bottom to top)
//! - **Visible rows**: 0-19
//! - **Ceiling rows**: 20 and 21, a spawn buffer that can never hold a locked cell
//! - **Spawn origin**: column 4, row 20
//!
//! Gravity moves pieces toward row 0.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep used by the terminal runner |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 75 | Interval decrement per level |
//! | `MIN_FALL_MS` | 100 | Gravity interval floor |
//! | `SOFT_DROP_DIVISOR` | 10 | Soft drop runs at 10% of the interval |
//! | `MESSAGE_MS` | 2000 | HUD message display time |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.turn(Direction::Right), Rotation::East);
//! assert_eq!(Rotation::North.turn(Direction::Left), Rotation::West);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells, including the two ceiling rows
pub const BOARD_HEIGHT: u8 = 22;

/// Rows 0..VISIBLE_HEIGHT are the playfield shown to the player
pub const VISIBLE_HEIGHT: u8 = BOARD_HEIGHT - 2;

/// First ceiling row. Locking any cell at or above it ends the game.
pub const CEILING_ROW: u8 = BOARD_HEIGHT - 2;

/// Spawn origin column
pub const SPAWN_COL: i8 = 4;

/// Spawn origin row (inside the ceiling buffer)
pub const SPAWN_ROW: i8 = CEILING_ROW as i8;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval decrement per level above 1
pub const FALL_STEP_MS: u32 = 75;

/// Gravity interval floor
pub const MIN_FALL_MS: u32 = 100;

/// Soft drop divides the gravity interval by this value
pub const SOFT_DROP_DIVISOR: u32 = 10;

/// Soft drop stays engaged this long after the last key press/repeat
/// (terminals rarely report key releases)
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// How long a HUD message stays on screen
pub const MESSAGE_MS: u32 = 2000;

/// Duration of each numeric countdown step
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// Duration of the "START!" banner that closes the countdown
pub const COUNTDOWN_START_MS: u32 = 250;

/// Default number of upcoming pieces shown in the preview
pub const DEFAULT_PREVIEW_LEN: usize = 5;

/// Largest preview the supply will keep
pub const MAX_PREVIEW_LEN: usize = 7;

/// Highest accepted start level
pub const MAX_START_LEVEL: u32 = 20;

/// Points per line-clear size (index = lines), multiplied by level
pub const LINE_SCORES: [u32; 5] = [0, 100, 200, 500, 800];

/// Points per line-clear size when the clear empties the board, multiplied by level
pub const PERFECT_CLEAR_SCORES: [u32; 5] = [0, 800, 1200, 1800, 2000];

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in a fixed order (used by the randomizers)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single-letter uppercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Horizontal direction used for both shifting and rotating.
///
/// For rotation, `Left` is a counter-clockwise quarter turn and `Right` a
/// clockwise one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for a one-cell shift
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Rotation states (North = spawn orientation)
///
/// The clockwise cycle is North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Quarter turn in the given direction
    pub fn turn(&self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.rotate_ccw(),
            Direction::Right => self.rotate_cw(),
        }
    }

    /// Number of clockwise quarter turns from North (0-3)
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Discrete input events consumed by the core.
///
/// Produced by whatever input-binding layer sits in front of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    HardDrop,
    /// Soft drop key pressed (`true`) or released (`false`)
    ToggleSoftDrop(bool),
    HoldSwap,
    TogglePause,
}

impl InputEvent {
    /// Convert to camelCase string (for logs and debugging)
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::RotateLeft => "rotateLeft",
            InputEvent::RotateRight => "rotateRight",
            InputEvent::HardDrop => "hardDrop",
            InputEvent::ToggleSoftDrop(true) => "softDropOn",
            InputEvent::ToggleSoftDrop(false) => "softDropOff",
            InputEvent::HoldSwap => "holdSwap",
            InputEvent::TogglePause => "togglePause",
        }
    }
}

/// Handle of a locked block unit.
///
/// `piece_id` identifies the spawned piece the unit came from, so a renderer
/// can tie grid cells back to the visuals it created for that piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub kind: PieceKind,
    pub piece_id: u32,
}

/// A cell on the game board (`None` = empty)
pub type Cell = Option<Block>;
