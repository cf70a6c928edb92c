//! Terminal brick grid (default binary).
//!
//! Single-threaded loop: input, ticks, and rendering are serialized here, and
//! the engine is only ever touched from this loop. Uses crossterm for input and
//! the framebuffer renderer from `rainbow-term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use rainbow_bricks::core::GridSnapshot;
use rainbow_bricks::engine::{SimulationEngine, Ticker};
use rainbow_bricks::input::{handle_key_event, pointer_press, should_quit};
use rainbow_bricks::runtime::{logging, RuntimeConfig};
use rainbow_bricks::term::{FrameBuffer, GridView, TerminalRenderer, Viewport};
use rainbow_bricks::types::InputAction;

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    logging::init(&config, false)?;
    log::info!("starting with seed {} and {}ms ticks", config.seed, config.tick_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RuntimeConfig) -> Result<()> {
    let mut engine = SimulationEngine::with_seed(config.seed);
    let mut ticker = Ticker::new(config.tick_ms);

    let view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GridSnapshot::default();
    let mut dirty = true;
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            engine.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(ticker.until_next_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        ticker.stop();
                        log::info!("quit after {} ticks", ticker.total_ticks());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == InputAction::Restart {
                            ticker.reset();
                        }
                        dirty |= engine.apply(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, _)) = pointer_press(mouse) {
                        let col = view.column_at(viewport, x);
                        dirty |= engine.select_column(col);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick. Only whole milliseconds are consumed so nothing drifts.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        for _ in 0..ticker.advance(elapsed_ms) {
            engine.tick();
            dirty = true;
        }
    }
}
