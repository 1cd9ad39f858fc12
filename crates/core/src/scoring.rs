//! Scoring module - line-clear points, level progression and gravity curve
//!
//! Points are a fixed table keyed by lines cleared, with a separate, larger
//! table for perfect clears. Both are scaled by the current level.

use crate::config::GravityConfig;
use crate::types::{LINE_SCORES, PERFECT_CLEAR_SCORES};

/// Points for one lock. `lines` outside 1..=4 scores nothing.
pub fn line_clear_points(lines: usize, perfect_clear: bool, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    let base = if perfect_clear {
        PERFECT_CLEAR_SCORES[lines]
    } else {
        LINE_SCORES[lines]
    };
    base.saturating_mul(level)
}

/// Gravity interval for a level.
///
/// `base - (level - 1) * step`, clamped to the configured minimum. Soft drop
/// divides the result and never goes below 1ms.
pub fn fall_interval_ms(gravity: &GravityConfig, level: u32, soft_drop: bool) -> u32 {
    let decrement = level.saturating_sub(1).saturating_mul(gravity.fall_step_ms);
    let interval = gravity
        .base_fall_ms
        .saturating_sub(decrement)
        .max(gravity.min_fall_ms);
    if soft_drop {
        (interval / gravity.soft_drop_divisor.max(1)).max(1)
    } else {
        interval
    }
}

/// Result of feeding one lock into [`ScoreState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearAward {
    pub points: u32,
    pub level_up: bool,
    /// Level after the update
    pub level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub start_level: u32,
    /// Counter toward the next level-up; carries over on level-up
    pub lines_per_level: u32,
}

impl ScoreState {
    pub fn new(start_level: u32) -> Self {
        let start_level = start_level.max(1);
        Self {
            score: 0,
            lines_cleared: 0,
            level: start_level,
            start_level,
            lines_per_level: 0,
        }
    }

    pub fn reset(&mut self, start_level: u32) {
        *self = Self::new(start_level);
    }

    /// Record one lock. Points use the level in effect before any level-up.
    pub fn on_lines_cleared(&mut self, count: usize, perfect_clear: bool) -> ClearAward {
        let count = count.min(4);
        let points = line_clear_points(count, perfect_clear, self.level);

        self.lines_cleared = self.lines_cleared.saturating_add(count as u32);
        self.lines_per_level = self.lines_per_level.saturating_add(count as u32);
        self.score = self.score.saturating_add(points);

        let level_up = self.level_up_due();
        if level_up {
            self.level += 1;
            self.lines_per_level = self.lines_per_level.saturating_sub(10);
        }

        ClearAward {
            points,
            level_up,
            level: self.level,
        }
    }

    fn level_up_due(&self) -> bool {
        let lpl = self.lines_per_level;
        if self.level == self.start_level {
            let first = self.start_level * 10 + 10;
            let alternate = (self.start_level * 10).saturating_sub(50).max(100);
            lpl >= first || lpl >= alternate
        } else {
            lpl >= 10
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0, false, 5), 0);
        assert_eq!(line_clear_points(1, false, 1), 100);
        assert_eq!(line_clear_points(2, false, 3), 600);
        assert_eq!(line_clear_points(3, false, 1), 500);
        assert_eq!(line_clear_points(4, false, 2), 1600);
        assert_eq!(line_clear_points(4, true, 1), 2000);
        assert_eq!(line_clear_points(1, true, 2), 1600);
        assert_eq!(line_clear_points(5, false, 1), 0);
    }

    #[test]
    fn test_fall_interval_curve() {
        let gravity = GravityConfig::default();
        assert_eq!(fall_interval_ms(&gravity, 1, false), 1000);
        assert_eq!(fall_interval_ms(&gravity, 2, false), 925);
        assert_eq!(fall_interval_ms(&gravity, 13, false), 100);
        assert_eq!(fall_interval_ms(&gravity, 20, false), 100);
        assert_eq!(fall_interval_ms(&gravity, 1, true), 100);
        assert_eq!(fall_interval_ms(&gravity, 20, true), 10);
    }

    #[test]
    fn test_soft_drop_never_reaches_zero() {
        let gravity = GravityConfig {
            base_fall_ms: 5,
            min_fall_ms: 5,
            soft_drop_divisor: 10,
            ..GravityConfig::default()
        };
        assert_eq!(fall_interval_ms(&gravity, 1, true), 1);
    }

    #[test]
    fn test_single_at_level_one() {
        let mut score = ScoreState::new(1);
        let award = score.on_lines_cleared(1, false);
        assert_eq!(award.points, 100);
        assert_eq!(score.score, 100);
        assert_eq!(score.lines_cleared, 1);
        assert!(!award.level_up);
    }

    #[test]
    fn test_first_level_up_at_twenty_lines() {
        let mut score = ScoreState::new(1);
        for _ in 0..4 {
            assert!(!score.on_lines_cleared(4, false).level_up);
        }
        assert_eq!(score.lines_per_level, 16);
        score.on_lines_cleared(3, false);
        assert_eq!(score.level, 1);
        let award = score.on_lines_cleared(1, false);
        assert!(award.level_up);
        assert_eq!(score.level, 2);
        assert_eq!(score.lines_per_level, 10);
    }

    #[test]
    fn test_levels_after_start_every_ten() {
        let mut score = ScoreState::new(1);
        score.lines_per_level = 20;
        assert!(score.on_lines_cleared(0, false).level_up);
        assert_eq!(score.lines_per_level, 10);
        // Carry-over of 10 triggers on the next update, even with no lines
        assert!(score.on_lines_cleared(0, false).level_up);
        assert_eq!(score.level, 3);
        assert_eq!(score.lines_per_level, 0);
        assert!(!score.on_lines_cleared(0, false).level_up);
    }

    #[test]
    fn test_high_start_level_uses_alternate_threshold() {
        // start 10: first threshold 110, alternate max(100, 50) = 100
        let mut score = ScoreState::new(10);
        score.lines_per_level = 96;
        assert!(!score.on_lines_cleared(3, false).level_up);
        assert!(score.on_lines_cleared(1, false).level_up);
        assert_eq!(score.level, 11);
        assert_eq!(score.lines_per_level, 90);
    }

    #[test]
    fn test_points_use_level_before_level_up() {
        let mut score = ScoreState::new(1);
        score.lines_per_level = 19;
        let award = score.on_lines_cleared(1, false);
        assert_eq!(award.points, 100);
        assert_eq!(award.level, 2);
    }

    #[test]
    fn test_reset() {
        let mut score = ScoreState::new(1);
        score.on_lines_cleared(4, true);
        score.reset(3);
        assert_eq!(score, ScoreState::new(3));
        assert_eq!(score.level, 3);
    }
}
