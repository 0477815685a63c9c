//! Hangman - CLI
//!
//! Single-player hangman with TUI and plain-CLI modes. Words and win/loss
//! statistics persist in a TOML store file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    engine::GameEngine,
    interactive::{App, run_tui},
    store::FileStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman with a persistent word list and win/loss statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the store file (words + stats)
    #[arg(short = 'd', long, global = true, default_value = "hangman.toml")]
    data: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The store handle lives for the whole process: opened once here,
    // dropped when main returns.
    let store = FileStore::open(&cli.data)
        .with_context(|| format!("failed to open store at {}", cli.data.display()))?;
    let engine = GameEngine::new(store).context("failed to start the first round")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(engine)),
        Commands::Simple => {
            let mut engine = engine;
            run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
