//! Terminal runner (default binary).
//!
//! Owns the frame loop: render, poll input until the next frame, advance
//! gravity. Pause and restart are session concerns handled here; the engine
//! only sees gameplay actions.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use falling_blocks::cli::{init_logging, Args};
use falling_blocks::core::{BoardEngine, GameSnapshot};
use falling_blocks::input::handle_key_event;
use falling_blocks::term::{FrameBuffer, GameView, SessionStatus, TerminalRenderer, Viewport};
use falling_blocks::types::{GameAction, LockEvent};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.resolve_seed();
    info!(seed, frame_ms = args.frame_ms, "starting falling-blocks");
    info!("controls: arrows move/rotate/soft drop, space hard drop, p pause, r restart, q quit");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, seed);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(e) = &result {
        tracing::error!(error = %e, "runner stopped with an error");
    }
    result
}

/// What the loop should do after a key press.
enum Flow {
    Continue,
    Quit,
}

struct Session {
    engine: BoardEngine,
    paused: bool,
}

impl Session {
    fn new(seed: u64) -> Self {
        Self {
            engine: BoardEngine::new(seed),
            paused: false,
        }
    }

    fn status(&self) -> SessionStatus {
        SessionStatus {
            paused: self.paused,
        }
    }

    fn handle_action(&mut self, action: GameAction) -> Flow {
        debug!(action = action.as_str(), paused = self.paused, "input");
        if action == GameAction::Quit {
            return Flow::Quit;
        }

        if self.engine.game_over() {
            if action == GameAction::Reset {
                self.restart();
            }
            return Flow::Continue;
        }

        if self.paused {
            if action == GameAction::TogglePause {
                self.paused = false;
                debug!("resumed");
            }
            return Flow::Continue;
        }

        match action {
            GameAction::TogglePause => {
                self.paused = true;
                debug!("paused");
            }
            GameAction::Reset => self.restart(),
            _ => {
                self.engine.apply_action(action);
            }
        }
        Flow::Continue
    }

    fn restart(&mut self) {
        info!(final_score = self.engine.score(), "restarting");
        self.engine.reset();
        self.paused = false;
    }

    fn frame(&mut self, elapsed_ms: u32) {
        if !self.paused {
            self.engine.tick(elapsed_ms);
        }
        if let Some(event) = self.engine.take_last_event() {
            log_lock(&event, &self.engine);
        }
    }
}

fn log_lock(event: &LockEvent, engine: &BoardEngine) {
    if event.lines_cleared > 0 {
        info!(
            lines = event.lines_cleared,
            points = event.line_clear_score,
            score = engine.score(),
            level = engine.level(),
            "lines cleared"
        );
    }
    if event.game_over {
        info!(
            score = engine.score(),
            lines = engine.lines(),
            level = engine.level(),
            "game over"
        );
    }
}

/// Whole milliseconds in `elapsed`, saturating at `u32::MAX`.
fn whole_millis(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}

fn run(term: &mut TerminalRenderer, args: &Args, seed: u64) -> Result<()> {
    let mut session = Session::new(seed);
    let view = GameView::new(args.cell_width);

    let frame = Duration::from_millis(u64::from(args.frame_ms));
    let mut last_frame = Instant::now();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.engine.snapshot_into(&mut snap);
        view.render_into(&snap, session.status(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = handle_key_event(key) {
                        if let Flow::Quit = session.handle_action(action) {
                            info!(score = session.engine.score(), "quit");
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Advance gravity by the measured time since the last frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            let ms = whole_millis(elapsed);
            // Sub-millisecond remainder carries into the next frame.
            last_frame += Duration::from_millis(u64::from(ms));
            session.frame(ms);
        }
    }
}
