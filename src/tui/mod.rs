// TUI module - Terminal User Interface
//
// Owns the terminal session: raw mode and the alternate screen are
// acquired here and released on every exit path (the event-loop result is
// captured before teardown runs, so an error inside the loop still
// restores the terminal). The loop itself is a tokio select over polled
// input and a periodic redraw tick.

pub mod app;
pub mod input;
pub mod present;

use crate::deck::Deck;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

/// Run the presenter over a constructed deck.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including when the loop returns an error.
pub async fn run_tui(deck: Deck) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(deck);
    if let Ok(size) = terminal.size() {
        app.set_viewport_width(size.width);
    }
    info!(slides = app.deck.len(), "presentation started");

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each iteration draws the current slide, then waits for either an input
/// event or the redraw tick. Input events are read and applied one at a
/// time, in arrival order - a navigation step fully applies before the
/// next event is considered.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| present::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(raw_event) = event::read() {
                        app.handle_event(&raw_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            info!("presentation closed");
            break;
        }
    }

    Ok(())
}
