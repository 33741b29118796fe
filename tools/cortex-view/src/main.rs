//! Cortex-View: zones of the developing cortex in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Open the scrollable viewer
//! cortex-view
//!
//! # Print the catalog and exit
//! cortex-view --print text
//! cortex-view --print json
//!
//! # Log the viewer session to a file
//! cortex-view --log-file cortex-view.log --log-level debug
//! ```

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use cortex_catalog::ZoneCatalog;
use cortex_view::{logging, output, ui, App, Args, OutputMode, ViewConfig};

/// Event poll timeout.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = ViewConfig::from(Args::parse());
    logging::init_logging(&config).context("failed to initialize logging")?;

    let catalog = ZoneCatalog::developing_cortex();
    info!(zones = catalog.len(), mode = ?config.mode, "zone catalog built");

    match config.mode {
        OutputMode::Print(format) => {
            let mut stdout = io::stdout().lock();
            output::write_catalog(format, &catalog, &mut stdout)
                .context("failed to write catalog")?;
        }
        OutputMode::Interactive => run_interactive(App::new(catalog))?,
    }

    Ok(())
}

/// Take over the terminal, run the viewer, and always hand the terminal back.
fn run_interactive(mut app: App) -> Result<()> {
    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Attempt terminal cleanup on panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("terminal ready");

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("terminal restored");

    result.context("viewer loop failed")
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char(c) => app.handle_key(c),
                        KeyCode::Up => app.scroll_up(),
                        KeyCode::Down => app.scroll_down(),
                        KeyCode::PageUp => app.page_up(),
                        KeyCode::PageDown => app.page_down(),
                        KeyCode::Home => app.scroll_to_top(),
                        KeyCode::End => app.scroll_to_bottom(),
                        KeyCode::Esc => app.handle_escape(),
                        _ => {}
                    }
                    debug!(state = ?app.state, offset = app.scroll.offset(), "key handled");
                }
            }
        }

        if app.should_quit() {
            info!("quit requested");
            return Ok(());
        }
    }
}
