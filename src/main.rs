//! Terminal runner (default binary).
//!
//! Fixed-timestep loop: render, poll input until the next tick, then step the
//! engine with the inputs gathered since the last tick.
//!
//! Configuration comes from the JSON file named by `BLOCKFALL_CONFIG` (if
//! set), overridden by individual `BLOCKFALL_*` variables.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::{GameConfig, GameEvent, GameState, Phase};
use tui_blockfall::input::{is_soft_drop_key, map_key, KeyAction, SoftDropLatch};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{InputEvent, TICK_MS};

/// What happened during one session, reported on exit
#[derive(Debug, Default)]
struct Session {
    games: u32,
    best_score: u32,
}

fn main() -> Result<()> {
    let config = load_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let session = result?;
    eprintln!(
        "[blockfall] {} game(s) finished, best score {}",
        session.games, session.best_score
    );
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    let config = match std::env::var_os("BLOCKFALL_CONFIG").map(PathBuf::from) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            let config: GameConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?;
            eprintln!("[blockfall] Loaded config from {}", path.display());
            config
        }
        None => GameConfig::default(),
    };

    let config = config
        .apply_env()
        .context("applying BLOCKFALL_* overrides")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<Session> {
    let start_level = config.start_level;
    let mut game = GameState::new(config);
    let mut session = Session::default();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut soft_drop = SoftDropLatch::new();
    let mut pending: Vec<InputEvent> = Vec::with_capacity(16);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_soft_drop_key(key.code) => {
                    let input = match key.kind {
                        KeyEventKind::Release => soft_drop.release(),
                        _ => soft_drop.press(),
                    };
                    pending.extend(input);
                }
                Event::Key(key) => match map_key(key) {
                    Some(KeyAction::Game(input)) => pending.push(input),
                    Some(KeyAction::Start) => {
                        let ghost = game.ghost_enabled();
                        game.start_game(start_level, ghost);
                    }
                    Some(KeyAction::ToggleGhost) => game.toggle_ghost(),
                    Some(KeyAction::Quit) => match game.phase() {
                        Phase::Menu => return Ok(session),
                        Phase::Play => {
                            game.pause_game();
                        }
                        Phase::Pause | Phase::GameOver => {
                            game.quit_game();
                        }
                    },
                    Some(KeyAction::Exit) => return Ok(session),
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            pending.extend(soft_drop.update(TICK_MS));
            game.step(pending.drain(..), TICK_MS);

            for event in game.drain_events() {
                if let GameEvent::GameOver { score } = event {
                    session.games += 1;
                    session.best_score = session.best_score.max(score);
                }
            }
        }
    }
}
