//! Terminal block puzzle runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from the term crate. The board only changes on input, so frames
//! are throttled unless a piece is being dragged.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use block_puzzle::config::{clock_seed, Cli, Config};
use block_puzzle::core::GameSession;
use block_puzzle::input::{handle_key_event, handle_mouse_event, should_quit};
use block_puzzle::term::{frame_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use block_puzzle::types::TICK_MS;
use block_puzzle::App;

/// Redraw interval while nothing changes, so the banner still expires on screen.
const STATIC_FRAME_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Cli::parse().into_config(clock_seed());

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let session = GameSession::with_store(config.seed, config.open_store());
    let mut app = App::new(session);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_FRAME_MS);
    let started = Instant::now();
    let poll = Duration::from_millis(TICK_MS as u64);

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        app.tick(now_ms);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        let hud = app.hud();
        let fingerprint = frame_fingerprint(app.snapshot(), &hud);
        if throttle.should_render(now_ms, fingerprint, !app.dragging()) {
            view.render_into(app.snapshot(), &hud, viewport, &mut fb);
            term.draw_swap(&mut fb).context("failed to draw frame")?;
        }

        if !event::poll(poll)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.handle_action(action, now_ms);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = handle_mouse_event(mouse) {
                    app.handle_pointer(&view.layout(viewport), pointer, now_ms);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                throttle.invalidate();
            }
            _ => {}
        }
    }
}
