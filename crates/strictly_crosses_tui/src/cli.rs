//! Command-line interface for strictly_crosses.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Crosses - crosses and toes in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_crosses")]
#[command(about = "Crosses and toes with undo, redo and a saved board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved game
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// Key the game is saved under
    #[arg(long)]
    pub storage_key: Option<String>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Keep the game in memory only (nothing is saved on exit)
    #[arg(long)]
    pub memory: bool,
}
