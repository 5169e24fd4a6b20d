// slidedeck - terminal slide-deck presenter
//
// Presents a fixed, embedded sequence of slides in the terminal, stepping
// forward and backward with the arrow keys (or edge clicks).
//
// Architecture:
// - Catalog: embedded TOML validated into typed slides at startup
// - Deck: the position cursor with wraparound navigation
// - Renderer: pure slide -> layout-tree mapping, one policy per variant
// - TUI (ratatui): event loop, input maps, and the presentation layer
//   that draws the layout trees

mod catalog;
mod cli;
mod deck;
mod layout;
mod placeholder;
mod render;
mod theme;
mod tui;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use deck::Deck;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let headless = matches!(cli.command, Some(Commands::Check));

    // Initialize tracing. Under the TUI, stdout logging would garble the
    // alternate screen, so logs go to a file when requested and are
    // dropped otherwise. Headless commands log to stdout as usual.
    //
    // The guard must be kept alive for the duration of the program to
    // ensure file logs flush.
    let _file_guard = init_logging(cli.log_file.as_deref(), headless)?;

    match cli.command {
        Some(Commands::Check) => check_deck(),
        None => {
            let catalog = Catalog::builtin().context("embedded deck failed validation")?;
            let deck = Deck::new(catalog).context("embedded deck cannot be presented")?;
            tui::run_tui(deck).await
        }
    }
}

/// `slidedeck check`: validate the embedded catalog and report its shape.
fn check_deck() -> Result<()> {
    let catalog = Catalog::builtin().context("embedded deck failed validation")?;
    // Exercise deck construction too, so `check` fails on an empty deck.
    let deck = Deck::new(catalog.clone()).context("embedded deck cannot be presented")?;

    println!("deck OK: {} slides", deck.len());
    for (index, slide) in catalog.slides().iter().enumerate() {
        println!("  {index:>2}  {}", slide.variant_name());
    }
    Ok(())
}

fn init_logging(
    log_file: Option<&Path>,
    headless: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    // Precedence: RUST_LOG env var > default "info" for this crate
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "slidedeck=info".into());

    match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let file_name = path
                .file_name()
                .context("log file path has no file name")?;
            let file_appender =
                tracing_appender::rolling::never(dir.unwrap_or(Path::new(".")), file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            Ok(Some(guard))
        }
        None if headless => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
            Ok(None)
        }
        None => Ok(None),
    }
}
