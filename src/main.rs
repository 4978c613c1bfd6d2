//! Terminal Blockfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_blockfall::term`. Gravity is driven by feeding elapsed wall time to
//! the engine once per frame.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info, trace};
use tracing_subscriber::filter::EnvFilter;

use tui_blockfall::config::AppConfig;
use tui_blockfall::core::{Game, GameSnapshot};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(seed = config.seed, autostart = config.autostart, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state; the game error wins if both fail.
    let restored = term.exit();
    info!("exiting");
    result.and(restored)
}

/// stdout is the game screen, so logs only go to a file when one is set.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = Game::new(config.seed);
    if config.autostart {
        game.start();
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let frame = config.frame_duration();

    let mut last = Instant::now();
    // Sub-millisecond remainder carried between frames.
    let mut carry = Duration::ZERO;

    loop {
        let frame_start = Instant::now();
        carry += frame_start.duration_since(last);
        last = frame_start;
        let elapsed_ms = carry.as_millis().min(u32::MAX as u128) as u32;
        carry -= Duration::from_millis(elapsed_ms as u64);

        let ticks = game.advance(elapsed_ms);
        if ticks > 0 {
            trace!(ticks, "gravity");
        }
        for event in game.take_events() {
            debug!(?event, "game event");
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(frame_start.elapsed());
        if event::poll(timeout).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let applied = game.apply(command);
                        debug!(command = command.as_str(), applied, "command");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}
