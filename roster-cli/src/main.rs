//! Roster CLI - interactive student roster manager
//!
//! Thin front-end over roster-engine: argument/config handling, log
//! setup, and the numbered menu loop.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use roster_engine::Roster;

mod config;
mod menu;

use config::Config;

/// Default backing file, next to the working directory
const DEFAULT_FILE: &str = "students.txt";

/// Student roster manager backed by a flat text file
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backing file holding the roster
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Command-line flags win over the config file
    let file = args
        .file
        .or(config.file)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));
    let log_level = args
        .log_level
        .or(config.log_level)
        .unwrap_or_else(|| "info".to_string());

    // Set up logging
    let log_level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting roster v{}", env!("CARGO_PKG_VERSION"));
    info!("Backing file: {}", file.display());

    let mut roster = Roster::open(&file)?;
    info!("Loaded {} record(s)", roster.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    menu::run(&mut roster, &mut input, &mut output)?;

    info!("Goodbye");
    Ok(())
}
