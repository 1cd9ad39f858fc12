//! Soft drop latch for terminal environments.
//!
//! Most terminals never send key-release events, only an initial press and
//! auto-repeats. The latch keeps soft drop engaged while presses keep coming
//! and releases it once none has arrived for the grace period.

use crate::types::{InputEvent, SOFT_DROP_GRACE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftDropLatch {
    held: bool,
    since_last_press_ms: u32,
    grace_ms: u32,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            since_last_press_ms: 0,
            grace_ms,
        }
    }

    /// A press or auto-repeat. Emits the engage event on the first one.
    pub fn press(&mut self) -> Option<InputEvent> {
        self.since_last_press_ms = 0;
        if self.held {
            return None;
        }
        self.held = true;
        Some(InputEvent::ToggleSoftDrop(true))
    }

    /// An explicit release, for terminals that report one
    pub fn release(&mut self) -> Option<InputEvent> {
        if !self.held {
            return None;
        }
        self.held = false;
        Some(InputEvent::ToggleSoftDrop(false))
    }

    /// Advance the grace timer; releases once it runs out
    pub fn update(&mut self, elapsed_ms: u32) -> Option<InputEvent> {
        if !self.held {
            return None;
        }
        self.since_last_press_ms = self.since_last_press_ms.saturating_add(elapsed_ms);
        if self.since_last_press_ms > self.grace_ms {
            return self.release();
        }
        None
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_engages() {
        let mut latch = SoftDropLatch::new();
        assert_eq!(latch.press(), Some(InputEvent::ToggleSoftDrop(true)));
        assert_eq!(latch.press(), None);
        assert!(latch.is_held());
    }

    #[test]
    fn test_repeats_keep_it_held() {
        let mut latch = SoftDropLatch::with_grace_ms(100);
        latch.press();
        for _ in 0..10 {
            assert_eq!(latch.update(60), None);
            latch.press();
        }
        assert!(latch.is_held());
    }

    #[test]
    fn test_auto_release_after_grace() {
        let mut latch = SoftDropLatch::with_grace_ms(100);
        latch.press();
        assert_eq!(latch.update(100), None);
        assert_eq!(latch.update(1), Some(InputEvent::ToggleSoftDrop(false)));
        assert_eq!(latch.update(1000), None);
        assert!(!latch.is_held());
    }

    #[test]
    fn test_explicit_release() {
        let mut latch = SoftDropLatch::new();
        assert_eq!(latch.release(), None);
        latch.press();
        assert_eq!(latch.release(), Some(InputEvent::ToggleSoftDrop(false)));
    }
}
