//! Error types for the core engine.
//!
//! Rejected moves are not errors (they return `false`). Only the lock ceiling
//! and invalid configuration surface as `Err`.

use thiserror::Error;

/// A lock attempt that would leave a cell in the ceiling rows.
///
/// This is the game-over condition; the board is never modified when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LockError {
    #[error("cell ({col}, {row}) would lock inside the ceiling")]
    Ceiling { col: i8, row: i8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("start level {0} is outside 1..={max}", max = blockfall_types::MAX_START_LEVEL)]
    StartLevel(u32),
    #[error("preview length {0} is outside 1..={max}", max = blockfall_types::MAX_PREVIEW_LEN)]
    PreviewLen(usize),
    #[error("soft drop divisor must be at least 1")]
    SoftDropDivisor,
    #[error("minimum fall interval {min_ms}ms exceeds base interval {base_ms}ms")]
    FallRange { base_ms: u32, min_ms: u32 },
    #[error("unknown randomizer {0:?} (expected \"uniform\" or \"bag7\")")]
    Randomizer(String),
    #[error("environment variable {var} has invalid value {value:?}")]
    Env { var: &'static str, value: String },
}
