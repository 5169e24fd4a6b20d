// CLI module - command-line argument parsing
//
// The presenter itself takes no arguments (the deck is embedded); the CLI
// surface is the shell around it: a `check` subcommand that validates the
// embedded catalog without opening a terminal session, and an optional
// log file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal presenter for the built-in slide deck
#[derive(Parser)]
#[command(name = "slidedeck")]
#[command(version)]
#[command(about = "Present the built-in slide deck in the terminal", long_about = None)]
pub struct Cli {
    /// Write logs to this file (logging is disabled under the TUI otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the embedded deck and exit
    Check,
}
