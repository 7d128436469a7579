//! Terminal front-end for the TextQuest scene-graph engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tq",
    about = "TextQuest — a scene-graph text adventure engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scene document interactively
    Play {
        /// Scene document to load (the built-in catalog is used if it
        /// cannot be read)
        #[arg(short, long, default_value = "scenes.json")]
        scenes: PathBuf,

        /// Save file used by the in-game `save` and `load` commands
        #[arg(long, default_value = "save.json")]
        save: PathBuf,

        /// Directory image assets are resolved against
        #[arg(long, default_value = ".")]
        assets: PathBuf,
    },

    /// Validate a scene document and report anomalies
    Check {
        /// Scene document to validate
        #[arg(short, long, default_value = "scenes.json")]
        scenes: PathBuf,

        /// Directory image assets are resolved against
        #[arg(long, default_value = ".")]
        assets: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            scenes,
            save,
            assets,
        } => commands::play::run(&scenes, &save, &assets),
        Commands::Check { scenes, assets } => commands::check::run(&scenes, &assets),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
