//! Timed HUD messages and the start countdown
//!
//! Both are plain timers advanced by the game's tick, so pausing the game
//! freezes them where they are.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{COUNTDOWN_START_MS, COUNTDOWN_STEP_MS, MESSAGE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    Single,
    Double,
    Triple,
    Quadruple,
    PerfectClear,
    LevelUp,
    /// Countdown digit (3, 2, 1)
    Countdown(u8),
    Start,
}

impl Message {
    pub fn as_str(&self) -> &'static str {
        match self {
            Message::Single => "SINGLE",
            Message::Double => "DOUBLE",
            Message::Triple => "TRIPLE",
            Message::Quadruple => "QUADRUPLE",
            Message::PerfectClear => "PERFECT CLEAR",
            Message::LevelUp => "LEVEL UP",
            Message::Countdown(3) => "3",
            Message::Countdown(2) => "2",
            Message::Countdown(1) => "1",
            Message::Countdown(_) => "",
            Message::Start => "START!",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message announcing a line clear, if any lines went
pub fn clear_message(lines: usize, perfect_clear: bool) -> Option<Message> {
    if perfect_clear && lines > 0 {
        return Some(Message::PerfectClear);
    }
    match lines {
        1 => Some(Message::Single),
        2 => Some(Message::Double),
        3 => Some(Message::Triple),
        4 => Some(Message::Quadruple),
        _ => None,
    }
}

/// One message slot with a remaining display time.
///
/// Showing a new message replaces whatever is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageBoard {
    current: Option<(Message, u32)>,
}

impl MessageBoard {
    pub fn show(&mut self, message: Message) {
        self.show_for(message, MESSAGE_MS);
    }

    pub fn show_for(&mut self, message: Message, duration_ms: u32) {
        self.current = Some((message, duration_ms));
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some((_, remaining)) = self.current.as_mut() {
            *remaining = remaining.saturating_sub(elapsed_ms);
            if *remaining == 0 {
                self.current = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<Message> {
        self.current.map(|(message, _)| message)
    }

    pub fn remaining_ms(&self) -> u32 {
        self.current.map_or(0, |(_, remaining)| remaining)
    }
}

/// Countdown progress after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    Running,
    /// Moved on to a new stage that should be displayed
    Show(Message, u32),
    Finished,
}

/// "3", "2", "1", "START!" before the first piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    stage: u8,
    remaining_ms: u32,
}

const STAGES: [(Message, u32); 4] = [
    (Message::Countdown(3), COUNTDOWN_STEP_MS),
    (Message::Countdown(2), COUNTDOWN_STEP_MS),
    (Message::Countdown(1), COUNTDOWN_STEP_MS),
    (Message::Start, COUNTDOWN_START_MS),
];

impl Countdown {
    pub fn new() -> Self {
        Self {
            stage: 0,
            remaining_ms: STAGES[0].1,
        }
    }

    /// The stage currently on display with its full duration
    pub fn current(&self) -> Option<(Message, u32)> {
        STAGES.get(self.stage as usize).copied()
    }

    /// Advance by `elapsed_ms`. Leftover time carries into the next stage, but
    /// at most one new stage is reported per call.
    pub fn tick(&mut self, elapsed_ms: u32) -> CountdownStep {
        if self.stage as usize >= STAGES.len() {
            return CountdownStep::Finished;
        }
        if elapsed_ms < self.remaining_ms {
            self.remaining_ms -= elapsed_ms;
            return CountdownStep::Running;
        }
        let overshoot = elapsed_ms - self.remaining_ms;
        self.stage += 1;
        match STAGES.get(self.stage as usize) {
            Some(&(message, duration)) => {
                self.remaining_ms = duration.saturating_sub(overshoot).max(1);
                CountdownStep::Show(message, duration)
            }
            None => {
                self.remaining_ms = 0;
                CountdownStep::Finished
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stage as usize >= STAGES.len()
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
