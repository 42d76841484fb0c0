//! Main TUI runner - entry point and event loop
//!
//! - `run`: builds the Engine, owns the terminal, tears both down
//! - `run_loop`: drain messages, draw, poll input

use tailview_app::config::Settings;
use tailview_app::Engine;
use tailview_core::prelude::*;

use super::{event, render, terminal};

/// Messages handled before each draw.
///
/// Bounds the time between frames when the stream floods the channel.
pub const MAX_MESSAGES_PER_FRAME: usize = 1000;

/// Run the viewer until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Settings errors surface before the terminal is taken over
    let mut engine = Engine::new(settings)?;

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    engine.start();
    let result = run_loop(&mut term, &mut engine);
    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }

    engine.shutdown().await;
    terminal::restore();

    info!(
        "Viewer exited with {} lines ({} bytes)",
        engine.state.buffer().len(),
        engine.state.ingester.bytes()
    );
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        let processed = engine.drain_pending_messages(MAX_MESSAGES_PER_FRAME);
        if processed == MAX_MESSAGES_PER_FRAME {
            trace!("Message cap reached, drawing before draining more");
        }

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
