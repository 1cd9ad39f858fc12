//! Game state module - the Menu / Play / Pause / GameOver machine
//!
//! This module ties together the board, the active piece, the supply and
//! scoring. Every operation runs to completion before returning: a lock
//! performs the board write, the line clear, the score update and the next
//! spawn in one call.

use serde::{Deserialize, Serialize};

use crate::active::{ActivePiece, Fall};
use crate::board::Board;
use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::lights::GridLights;
use crate::messages::{clear_message, Countdown, CountdownStep, Message, MessageBoard};
use crate::scoring::{fall_interval_ms, ScoreState};
use crate::snapshot::GameSnapshot;
use crate::supply::Supply;
use crate::types::{Block, Direction, InputEvent, MAX_START_LEVEL, MESSAGE_MS};

/// Undrained events kept before the oldest half is discarded
pub const MAX_PENDING_EVENTS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Menu,
    Play,
    Pause,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    ghost: Option<ActivePiece>,
    ghost_enabled: bool,
    supply: Supply,
    score: ScoreState,
    phase: Phase,
    soft_drop: bool,
    /// Monotonic id handed to each piece entering play; stored in its blocks
    piece_id: u32,
    messages: MessageBoard,
    countdown: Option<Countdown>,
    lights: GridLights,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game sitting in the menu
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            active: None,
            ghost: None,
            ghost_enabled: config.ghost_enabled,
            supply: Supply::new(config.preview_len, config.randomizer, config.seed),
            score: ScoreState::new(config.start_level),
            phase: Phase::Menu,
            soft_drop: false,
            piece_id: 0,
            messages: MessageBoard::default(),
            countdown: None,
            lights: GridLights::new(config.lights_out, config.seed),
            events: Vec::new(),
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Landing preview, present only while the ghost is enabled
    pub fn ghost(&self) -> Option<ActivePiece> {
        self.ghost
    }

    pub fn ghost_enabled(&self) -> bool {
        self.ghost_enabled
    }

    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn message(&self) -> Option<Message> {
        self.messages.current()
    }

    pub fn messages(&self) -> &MessageBoard {
        &self.messages
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn counting_down(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn lights(&self) -> &GridLights {
        &self.lights
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Gravity interval for the current level and soft-drop input
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(&self.config.gravity, self.score.level, self.soft_drop)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Take every event recorded since the last drain, oldest first.
    ///
    /// Drain once per frame. At most [`MAX_PENDING_EVENTS`] are buffered;
    /// past that the oldest half is dropped.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.drain(..MAX_PENDING_EVENTS / 2);
        }
        self.events.push(event);
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from != to {
            self.phase = to;
            self.emit(GameEvent::PhaseChanged { from, to });
        }
    }

    fn show(&mut self, message: Message, duration_ms: u32) {
        self.messages.show_for(message, duration_ms);
        self.emit(GameEvent::Message {
            message,
            duration_ms,
        });
    }

    /// Begin a fresh run from the menu or after game over.
    ///
    /// Clears the board, score and supply. With the countdown enabled the
    /// first piece arrives when it finishes; otherwise it spawns now.
    pub fn start_game(&mut self, start_level: u32, ghost_enabled: bool) -> bool {
        if !matches!(self.phase, Phase::Menu | Phase::GameOver) {
            return false;
        }

        self.board.reset();
        self.score.reset(start_level.clamp(1, MAX_START_LEVEL));
        self.supply.reset();
        self.active = None;
        self.ghost = None;
        self.ghost_enabled = ghost_enabled;
        self.soft_drop = false;
        self.piece_id = 0;
        self.messages.clear();
        self.lights.reset();
        self.set_phase(Phase::Play);

        if self.config.countdown {
            let countdown = Countdown::new();
            if let Some((message, duration)) = countdown.current() {
                self.show(message, duration);
            }
            self.countdown = Some(countdown);
        } else {
            self.countdown = None;
            self.spawn_next();
        }
        true
    }

    /// Toggle between Play and Pause. Ignored in any other phase.
    pub fn pause_game(&mut self) -> bool {
        match self.phase {
            Phase::Play => self.set_phase(Phase::Pause),
            Phase::Pause => self.set_phase(Phase::Play),
            Phase::Menu | Phase::GameOver => return false,
        }
        true
    }

    /// Abandon the run from Pause or GameOver and return to the menu
    pub fn quit_game(&mut self) -> bool {
        if !matches!(self.phase, Phase::Pause | Phase::GameOver) {
            return false;
        }

        self.board.reset();
        self.supply.reset();
        self.score.reset(self.config.start_level);
        self.active = None;
        self.ghost = None;
        self.soft_drop = false;
        self.countdown = None;
        self.messages.clear();
        self.lights.reset();
        self.set_phase(Phase::Menu);
        true
    }

    pub fn toggle_ghost(&mut self) {
        self.ghost_enabled = !self.ghost_enabled;
        self.refresh_ghost();
    }

    fn refresh_ghost(&mut self) {
        self.ghost = match self.active {
            Some(piece) if self.ghost_enabled => Some(piece.ghost(&self.board)),
            _ => None,
        };
    }

    /// Apply one input event. Returns whether it changed anything.
    pub fn handle_input(&mut self, input: InputEvent) -> bool {
        match input {
            InputEvent::TogglePause => return self.pause_game(),
            // A release seen while paused must still land
            InputEvent::ToggleSoftDrop(pressed) if self.phase == Phase::Pause => {
                return self.set_soft_drop(pressed);
            }
            _ if self.phase != Phase::Play => return false,
            _ => {}
        }

        match input {
            InputEvent::MoveLeft => self.shift(Direction::Left),
            InputEvent::MoveRight => self.shift(Direction::Right),
            InputEvent::RotateLeft => self.rotate(Direction::Left),
            InputEvent::RotateRight => self.rotate(Direction::Right),
            InputEvent::HardDrop => self.hard_drop(),
            InputEvent::ToggleSoftDrop(pressed) => self.set_soft_drop(pressed),
            InputEvent::HoldSwap => self.hold(),
            InputEvent::TogglePause => false,
        }
    }

    fn shift(&mut self, direction: Direction) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.shift(&self.board, direction) {
            return false;
        }
        let (col, row) = (piece.col, piece.row);
        self.emit(GameEvent::Moved { col, row });
        self.refresh_ghost();
        true
    }

    fn rotate(&mut self, direction: Direction) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.rotate(&self.board, direction) {
            return false;
        }
        let (rotation, col, row) = (piece.rotation, piece.col, piece.row);
        self.emit(GameEvent::Rotated { rotation, col, row });
        self.refresh_ghost();
        true
    }

    fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if piece.hard_drop(&self.board) > 0 {
            let (col, row) = (piece.col, piece.row);
            self.emit(GameEvent::Moved { col, row });
        }
        self.lock_active();
        true
    }

    fn set_soft_drop(&mut self, pressed: bool) -> bool {
        if self.soft_drop == pressed {
            return false;
        }
        self.soft_drop = pressed;
        let interval = self.fall_interval_ms();
        if let Some(piece) = self.active.as_mut() {
            piece.fall_interval_ms = interval;
        }
        true
    }

    fn hold(&mut self) -> bool {
        let interval = self.fall_interval_ms();
        if !self.supply.hold(&mut self.active, interval) {
            return false;
        }
        if let Some(kind) = self.supply.held() {
            self.emit(GameEvent::Held { kind });
        }
        self.enter_play();
        true
    }

    /// Take the next kind from the supply and make it the active piece
    fn spawn_next(&mut self) {
        let piece = self.supply.spawn(self.fall_interval_ms());
        self.active = Some(piece);
        self.enter_play();
    }

    fn enter_play(&mut self) {
        let Some(piece) = self.active else {
            return;
        };
        // Locked cells never reach the ceiling, so a fresh piece always fits
        debug_assert!(piece.validate(&self.board, 0, 0));
        self.piece_id = self.piece_id.wrapping_add(1);
        self.emit(GameEvent::Spawned {
            kind: piece.kind,
            piece_id: self.piece_id,
        });
        self.refresh_ghost();
    }

    /// Lock the active piece, then clear, score and respawn.
    ///
    /// A lock into the ceiling leaves the board untouched and ends the run.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.ghost = None;

        let cells = piece.cells();
        let block = Block {
            kind: piece.kind,
            piece_id: self.piece_id,
        };
        if self.board.lock(&cells, block).is_err() {
            self.set_phase(Phase::GameOver);
            self.emit(GameEvent::GameOver {
                score: self.score.score,
            });
            return;
        }
        self.emit(GameEvent::Locked {
            kind: piece.kind,
            piece_id: self.piece_id,
            cells,
        });

        let clear = self.board.clear_completed_lines();
        let lines = clear.count();
        let perfect_clear = lines > 0 && clear.perfect_clear;
        if lines > 0 {
            self.emit(GameEvent::RowsCleared {
                rows: clear.rows,
                perfect_clear,
            });
        }

        let award = self.score.on_lines_cleared(lines, perfect_clear);
        if award.points > 0 {
            self.emit(GameEvent::Scored {
                points: award.points,
                total: self.score.score,
            });
        }
        if let Some(message) = clear_message(lines, perfect_clear) {
            self.show(message, MESSAGE_MS);
        }
        if award.level_up {
            self.emit(GameEvent::LevelUp { level: award.level });
            self.show(Message::LevelUp, MESSAGE_MS);
        }

        self.spawn_next();
    }

    /// Advance timers by `elapsed_ms`. Nothing moves outside Play.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Play {
            return;
        }

        self.messages.tick(elapsed_ms);
        if let Some(visible) = self.lights.tick(elapsed_ms) {
            self.emit(GameEvent::GridLights { visible });
        }

        if let Some(countdown) = self.countdown.as_mut() {
            match countdown.tick(elapsed_ms) {
                CountdownStep::Running => {}
                CountdownStep::Show(message, duration) => self.show(message, duration),
                CountdownStep::Finished => {
                    self.countdown = None;
                    self.spawn_next();
                }
            }
            return;
        }

        let Some(piece) = self.active.as_mut() else {
            return;
        };
        match piece.tick(&self.board, elapsed_ms) {
            Fall::Idle => {}
            Fall::Stepped => {
                let (col, row) = (piece.col, piece.row);
                self.emit(GameEvent::Moved { col, row });
            }
            Fall::Blocked => self.lock_active(),
        }
    }

    /// One simulation step: all inputs first, then the timers
    pub fn step<I>(&mut self, inputs: I, elapsed_ms: u32)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for input in inputs {
            self.handle_input(input);
        }
        self.tick(elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation, BOARD_WIDTH, SPAWN_COL, SPAWN_ROW};

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(12345),
            ..GameConfig::default()
        }
    }

    fn playing() -> GameState {
        let mut game = GameState::new(config());
        assert!(game.start_game(1, true));
        game.drain_events().for_each(drop);
        game
    }

    fn junk() -> Option<Block> {
        Some(Block {
            kind: PieceKind::O,
            piece_id: 0,
        })
    }

    /// Fill a row except the columns an I piece at spawn covers (3..=6)
    fn fill_row_for_i(game: &mut GameState, row: i8) {
        for col in (0..BOARD_WIDTH as i8).filter(|c| !(3..=6).contains(c)) {
            game.board_mut().set(col, row, junk());
        }
    }

    fn force_active(game: &mut GameState, kind: PieceKind) {
        game.active = Some(ActivePiece::spawn(kind, game.fall_interval_ms()));
        game.refresh_ghost();
    }

    #[test]
    fn test_new_game_waits_in_menu() {
        let game = GameState::new(config());
        assert_eq!(game.phase(), Phase::Menu);
        assert!(game.active().is_none());
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_start_spawns_first_piece() {
        let mut game = GameState::new(config());
        assert!(game.start_game(1, true));
        assert_eq!(game.phase(), Phase::Play);

        let active = game.active().unwrap();
        assert_eq!((active.col, active.row), (SPAWN_COL, SPAWN_ROW));
        assert_eq!(active.rotation, Rotation::North);
        assert!(game.ghost().is_some());

        let events: Vec<_> = game.drain_events().collect();
        assert_eq!(
            events[0],
            GameEvent::PhaseChanged {
                from: Phase::Menu,
                to: Phase::Play
            }
        );
        assert!(matches!(events[1], GameEvent::Spawned { piece_id: 1, .. }));
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut game = playing();
        assert!(!game.start_game(3, true));
        game.pause_game();
        assert!(!game.start_game(3, true));
        assert_eq!(game.score().level, 1);
    }

    #[test]
    fn test_start_level_is_clamped() {
        let mut game = GameState::new(config());
        game.start_game(99, true);
        assert_eq!(game.score().level, MAX_START_LEVEL);
    }

    #[test]
    fn test_inputs_ignored_outside_play() {
        let mut game = GameState::new(config());
        assert!(!game.handle_input(InputEvent::MoveLeft));
        assert!(!game.handle_input(InputEvent::HardDrop));
        assert!(!game.handle_input(InputEvent::TogglePause));
        assert_eq!(game.phase(), Phase::Menu);
    }

    #[test]
    fn test_pause_freezes_gravity() {
        let mut game = playing();
        assert!(game.handle_input(InputEvent::TogglePause));
        assert_eq!(game.phase(), Phase::Pause);

        let before = game.active().unwrap();
        game.tick(5000);
        assert_eq!(game.active().unwrap(), before);
        assert!(!game.handle_input(InputEvent::MoveLeft));

        game.pause_game();
        assert_eq!(game.phase(), Phase::Play);
        game.tick(1001);
        assert_eq!(game.active().unwrap().row, before.row - 1);
    }

    #[test]
    fn test_gravity_steps_after_interval() {
        let mut game = playing();
        let row = game.active().unwrap().row;
        game.tick(1000);
        assert_eq!(game.active().unwrap().row, row);
        game.tick(1);
        assert_eq!(game.active().unwrap().row, row - 1);
        let events: Vec<_> = game.drain_events().collect();
        assert!(matches!(events.last(), Some(GameEvent::Moved { .. })));
    }

    #[test]
    fn test_move_updates_ghost() {
        let mut game = playing();
        force_active(&mut game, PieceKind::T);
        assert!(game.handle_input(InputEvent::MoveLeft));
        let active = game.active().unwrap();
        let ghost = game.ghost().unwrap();
        assert_eq!(active.col, SPAWN_COL - 1);
        assert_eq!(ghost.col, active.col);
        assert_eq!(ghost.row, 0);
    }

    #[test]
    fn test_toggle_ghost() {
        let mut game = playing();
        game.toggle_ghost();
        assert!(!game.ghost_enabled());
        assert!(game.ghost().is_none());
        game.toggle_ghost();
        assert!(game.ghost().is_some());
    }

    #[test]
    fn test_hard_drop_locks_and_respawns() {
        let mut game = playing();
        force_active(&mut game, PieceKind::O);
        assert!(game.handle_input(InputEvent::HardDrop));

        assert_eq!(game.board().occupied_count(), 4);
        assert!(game.board().is_occupied(4, 0));
        assert_eq!(
            game.board().get(4, 0).flatten().map(|b| b.piece_id),
            Some(1)
        );
        assert_eq!(game.piece_id(), 2);
        assert!(game.active().is_some());

        let events: Vec<_> = game.drain_events().collect();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::Locked { kind: PieceKind::O, .. })));
        assert!(matches!(events.last(), Some(GameEvent::Spawned { piece_id: 2, .. })));
    }

    #[test]
    fn test_single_line_clear_scores() {
        let mut game = playing();
        fill_row_for_i(&mut game, 0);
        game.board_mut().set(0, 1, junk());
        force_active(&mut game, PieceKind::I);

        game.handle_input(InputEvent::HardDrop);
        assert_eq!(game.score().score, 100);
        assert_eq!(game.score().lines_cleared, 1);
        assert_eq!(game.message(), Some(Message::Single));
        // The junk cell shifted down into row 0
        assert!(game.board().is_occupied(0, 0));
        assert_eq!(game.board().occupied_count(), 1);

        let events: Vec<_> = game.drain_events().collect();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::RowsCleared {
                perfect_clear: false,
                ..
            }
        )));
        assert!(events.contains(&GameEvent::Scored {
            points: 100,
            total: 100
        }));
    }

    #[test]
    fn test_perfect_clear_scores_bonus() {
        let mut game = playing();
        fill_row_for_i(&mut game, 0);
        force_active(&mut game, PieceKind::I);

        game.handle_input(InputEvent::HardDrop);
        assert!(game.board().is_empty());
        assert_eq!(game.score().score, 800);
        assert_eq!(game.message(), Some(Message::PerfectClear));
    }

    #[test]
    fn test_level_up_replaces_clear_message() {
        let mut game = playing();
        game.score.lines_per_level = 19;
        fill_row_for_i(&mut game, 0);
        game.board_mut().set(0, 1, junk());
        force_active(&mut game, PieceKind::I);

        game.handle_input(InputEvent::HardDrop);
        assert_eq!(game.score().level, 2);
        assert_eq!(game.message(), Some(Message::LevelUp));
        assert_eq!(game.active().unwrap().fall_interval_ms, 925);
        let events: Vec<_> = game.drain_events().collect();
        assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
    }

    #[test]
    fn test_soft_drop_speeds_up_active_piece() {
        let mut game = playing();
        assert!(game.handle_input(InputEvent::ToggleSoftDrop(true)));
        assert_eq!(game.active().unwrap().fall_interval_ms, 100);
        assert!(!game.handle_input(InputEvent::ToggleSoftDrop(true)));

        let row = game.active().unwrap().row;
        game.tick(101);
        assert_eq!(game.active().unwrap().row, row - 1);

        game.handle_input(InputEvent::ToggleSoftDrop(false));
        assert_eq!(game.active().unwrap().fall_interval_ms, 1000);
    }

    #[test]
    fn test_soft_drop_release_while_paused() {
        let mut game = playing();
        game.handle_input(InputEvent::ToggleSoftDrop(true));
        assert!(game.handle_input(InputEvent::TogglePause));
        assert_eq!(game.phase(), Phase::Pause);

        game.step([InputEvent::ToggleSoftDrop(false)], 200);
        assert!(!game.soft_drop());
        assert_eq!(game.active().unwrap().fall_interval_ms, 1000);

        let row = game.active().unwrap().row;
        assert!(game.handle_input(InputEvent::TogglePause));
        assert_eq!(game.phase(), Phase::Play);
        game.tick(101);
        assert_eq!(game.active().unwrap().row, row);
    }

    #[test]
    fn test_paused_game_ignores_moves() {
        let mut game = playing();
        game.handle_input(InputEvent::TogglePause);
        let before = game.active();
        assert!(!game.handle_input(InputEvent::MoveLeft));
        assert!(!game.handle_input(InputEvent::HardDrop));
        assert_eq!(game.active(), before);
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut game = playing();
        for _ in 0..(MAX_PENDING_EVENTS * 3) {
            game.handle_input(InputEvent::MoveLeft);
            game.handle_input(InputEvent::MoveRight);
        }
        let events: Vec<_> = game.drain_events().collect();
        assert!(events.len() <= MAX_PENDING_EVENTS);
        assert!(matches!(events.last(), Some(GameEvent::Moved { .. })));
        assert_eq!(game.drain_events().count(), 0);
    }

    #[test]
    fn test_hold_once_per_spawn() {
        let mut game = playing();
        let first = game.active().unwrap().kind;
        let next = game.supply().peek().unwrap();

        assert!(game.handle_input(InputEvent::HoldSwap));
        assert_eq!(game.supply().held(), Some(first));
        assert_eq!(game.active().unwrap().kind, next);
        assert!(!game.supply().can_hold());

        let active = game.active();
        assert!(!game.handle_input(InputEvent::HoldSwap));
        assert_eq!(game.active(), active);
        assert_eq!(game.supply().held(), Some(first));

        game.handle_input(InputEvent::HardDrop);
        assert!(game.supply().can_hold());
    }

    #[test]
    fn test_lock_in_ceiling_ends_game() {
        let mut game = playing();
        for row in 0..20 {
            for col in 3..=6 {
                game.board_mut().set(col, row, junk());
            }
        }
        let occupied = game.board().occupied_count();

        game.tick(1001);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.board().occupied_count(), occupied);
        assert!(game.active().is_none());

        let events: Vec<_> = game.drain_events().collect();
        assert!(matches!(events.last(), Some(GameEvent::GameOver { score: 0 })));

        // Game over is terminal until a new start or quit
        game.tick(5000);
        assert!(!game.handle_input(InputEvent::MoveLeft));
        assert!(game.start_game(1, false));
        assert!(game.board().is_empty());
        assert!(game.ghost().is_none());
    }

    #[test]
    fn test_quit_returns_to_menu() {
        let mut game = playing();
        assert!(!game.quit_game());
        game.handle_input(InputEvent::HoldSwap);
        game.pause_game();
        assert!(game.quit_game());
        assert_eq!(game.phase(), Phase::Menu);
        assert!(game.active().is_none());
        assert!(game.supply().held().is_none());
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_countdown_delays_first_spawn() {
        let mut game = GameState::new(GameConfig {
            countdown: true,
            ..config()
        });
        game.start_game(1, true);
        assert!(game.active().is_none());
        assert_eq!(game.message(), Some(Message::Countdown(3)));

        game.tick(1000);
        assert_eq!(game.message(), Some(Message::Countdown(2)));
        game.pause_game();
        game.tick(10_000);
        assert_eq!(game.message(), Some(Message::Countdown(2)));
        game.pause_game();

        game.tick(1000);
        game.tick(1000);
        assert_eq!(game.message(), Some(Message::Start));
        assert!(game.active().is_none());
        game.tick(250);
        assert!(game.active().is_some());
        assert!(!game.counting_down());
    }

    #[test]
    fn test_step_applies_inputs_before_gravity() {
        let mut game = playing();
        force_active(&mut game, PieceKind::T);
        game.step([InputEvent::MoveRight, InputEvent::MoveRight], 1001);
        let active = game.active().unwrap();
        assert_eq!(active.col, SPAWN_COL + 2);
        assert_eq!(active.row, SPAWN_ROW - 1);
    }

    #[test]
    fn test_lights_out_cycle_emits_events() {
        let mut game = GameState::new(GameConfig {
            lights_out: true,
            ..config()
        });
        game.start_game(1, true);
        let lit_for = game.lights().remaining_ms();
        game.pause_game();
        game.tick(lit_for);
        assert!(game.lights().visible());
        game.pause_game();

        game.tick(lit_for);
        assert!(!game.lights().visible());
        let events: Vec<_> = game.drain_events().collect();
        assert!(events.contains(&GameEvent::GridLights { visible: false }));
    }
}
