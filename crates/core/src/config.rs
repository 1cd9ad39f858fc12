//! Game configuration
//!
//! Defaults come from the shared constants. A JSON document can override any
//! subset of fields, and individual `BLOCKFALL_*` environment variables take
//! precedence over both.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::supply::Randomizer;
use crate::types::{
    BASE_FALL_MS, DEFAULT_PREVIEW_LEN, FALL_STEP_MS, MAX_PREVIEW_LEN, MAX_START_LEVEL,
    MIN_FALL_MS, SOFT_DROP_DIVISOR,
};

/// Gravity curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Interval at level 1
    pub base_fall_ms: u32,
    /// Decrement per level above 1
    pub fall_step_ms: u32,
    /// Floor for the level-derived interval
    pub min_fall_ms: u32,
    /// Soft drop divides the interval by this
    pub soft_drop_divisor: u32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            base_fall_ms: BASE_FALL_MS,
            fall_step_ms: FALL_STEP_MS,
            min_fall_ms: MIN_FALL_MS,
            soft_drop_divisor: SOFT_DROP_DIVISOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub start_level: u32,
    pub ghost_enabled: bool,
    pub preview_len: usize,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub randomizer: Randomizer,
    #[serde(flatten)]
    pub gravity: GravityConfig,
    /// Show the 3-2-1 countdown before the first piece
    pub countdown: bool,
    /// Periodically black out the locked grid
    pub lights_out: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_level: 1,
            ghost_enabled: true,
            preview_len: DEFAULT_PREVIEW_LEN,
            seed: None,
            randomizer: Randomizer::Uniform,
            gravity: GravityConfig::default(),
            countdown: false,
            lights_out: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_START_LEVEL).contains(&self.start_level) {
            return Err(ConfigError::StartLevel(self.start_level));
        }
        if !(1..=MAX_PREVIEW_LEN).contains(&self.preview_len) {
            return Err(ConfigError::PreviewLen(self.preview_len));
        }
        if self.gravity.soft_drop_divisor == 0 {
            return Err(ConfigError::SoftDropDivisor);
        }
        if self.gravity.min_fall_ms > self.gravity.base_fall_ms {
            return Err(ConfigError::FallRange {
                base_ms: self.gravity.base_fall_ms,
                min_ms: self.gravity.min_fall_ms,
            });
        }
        Ok(())
    }

    /// Apply `BLOCKFALL_*` overrides from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup (the environment in production)
    pub fn apply_vars(
        mut self,
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = lookup("BLOCKFALL_START_LEVEL") {
            self.start_level = parse_var("BLOCKFALL_START_LEVEL", &v)?;
        }
        if let Some(v) = lookup("BLOCKFALL_GHOST") {
            self.ghost_enabled = parse_flag("BLOCKFALL_GHOST", &v)?;
        }
        if let Some(v) = lookup("BLOCKFALL_SEED") {
            self.seed = Some(parse_var("BLOCKFALL_SEED", &v)?);
        }
        if let Some(v) = lookup("BLOCKFALL_RANDOMIZER") {
            self.randomizer = Randomizer::parse(&v)?;
        }
        if let Some(v) = lookup("BLOCKFALL_COUNTDOWN") {
            self.countdown = parse_flag("BLOCKFALL_COUNTDOWN", &v)?;
        }
        if let Some(v) = lookup("BLOCKFALL_LIGHTS_OUT") {
            self.lights_out = parse_flag("BLOCKFALL_LIGHTS_OUT", &v)?;
        }
        Ok(self)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        var,
        value: value.to_string(),
    })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Env {
            var,
            value: value.to_string(),
        }),
    }
}
