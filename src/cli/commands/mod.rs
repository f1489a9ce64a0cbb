//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod assets;
mod forge;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use charforge::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Character forge: static assets and character generation")]
#[command(version)]
pub struct Cli {
    /// Asset root directory (overrides config file)
    #[arg(long, short = 't', global = true, env = "FORGE_ROOT")]
    root: Option<PathBuf>,

    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resolve relative paths from current working directory instead of config file location
    #[arg(long, global = true)]
    cwd: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Write the bundled static assets (script and placeholder portrait) under the root
    Assets,

    /// Answer the quiz interactively and forge a character
    Play {
        /// Seed for synthesis (random if not given)
        #[arg(long)]
        seed: Option<u64>,
        /// Output the character as JSON instead of a text sheet
        #[arg(long)]
        json: bool,
    },

    /// Forge a character from random answers
    Demo {
        /// Seed for both the answers and synthesis (random if not given)
        #[arg(long)]
        seed: Option<u64>,
        /// Output the character as JSON instead of a text sheet
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
        root: cli.root,
    };
    let settings = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Assets => assets::cmd_assets(&settings),
        Commands::Play { seed, json } => forge::cmd_play(&settings, seed, json),
        Commands::Demo { seed, json } => forge::cmd_demo(&settings, seed, json),
    }
}
