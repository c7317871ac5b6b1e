//! Terminal 2048 runner (default binary).
//!
//! Fixed-step loop: render (throttled while nothing moves), poll input until
//! the next tick, tick the session. Configuration comes from `TUI_2048_*`
//! environment variables; logs go to `TUI_2048_LOG_PATH` when set, since the
//! terminal itself is busy drawing the game.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use env_logger::{Env, Target};

use tui_2048::core::{GameConfig, GameSnapshot, Session, SimpleRng};
use tui_2048::input::handle_event;
use tui_2048::store::FileScoreStore;
use tui_2048::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_2048::types::HitRegions;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting on error: {:#}", e);
    }
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::new().filter_or("TUI_2048_LOG", "info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let rng = config.seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_time);
    log::info!(
        "starting: {}x{} board, theme {}, scores in {}",
        config.grid.size,
        config.grid.size,
        config.theme.as_str(),
        config.score_path.display()
    );
    let mut session = Session::new(config, FileScoreStore::new(&config.score_path), rng);

    let view = GameView::default();
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut hits = HitRegions::default();

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(config.animation.tick_ms as u64);
    let mut last_tick = Instant::now();

    while session.is_running() {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fingerprint = snap.fingerprint() ^ ((w as u64) << 48 | (h as u64) << 32);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, snap.is_animating()) {
            hits = view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
                throttle.reset();
            }
            if let Some(action) = handle_event(&ev, &hits) {
                log::debug!("action {}", action.as_str());
                session.apply_action(action);
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }

    Ok(())
}
