//! CLI definitions for taskdeck.
//!
//! The CLI is flags-only: the binary does one thing, serve the app.

use clap::Parser;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8642;

/// Minimal task-tracking web application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to database file (overrides config)
    #[arg(short, long)]
    pub database: Option<String>,

    /// Port for the HTTP server (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
