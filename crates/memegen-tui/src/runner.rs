//! Main TUI runner - entry point and event loop

use memegen_app::config::Settings;
use memegen_app::Engine;
use memegen_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
///
/// The Engine is created before the terminal switches to the alternate
/// screen, so construction errors print normally.
pub async fn run(settings: Settings) -> Result<()> {
    let mut engine = Engine::new(settings)?;
    info!(
        "Starting TUI (api base {:?}, analytics {})",
        engine.state.settings.api.base_url,
        if engine.analytics_active() { "on" } else { "off" }
    );

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Results from background tasks and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
