use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use othello::config::AppConfig;

/// Play Othello in the console.
#[derive(Parser)]
#[command(name = "console", about = "Play Othello in the console")]
struct Cli {
    /// Colorize the board with ANSI escapes
    #[arg(long)]
    color: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if cli.color {
        config.display.color = true;
    }

    othello::console::run(&config.display)?;
    Ok(())
}
