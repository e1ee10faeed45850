use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Use the library modules
use benchfetch::commands;

#[derive(Parser)]
#[clap(name = "benchfetch")]
#[clap(about = "Downloads and extracts benchmark assets")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download all asset parts and extract them into place
    Fetch {
        /// Fetch a single part only (1-based index)
        #[clap(long)]
        part: Option<usize>,
        /// Load assets from an alternate manifest file
        #[clap(long)]
        manifest: Option<PathBuf>,
    },
    /// Show configured assets and their extraction status
    List {
        /// Load assets from an alternate manifest file
        #[clap(long)]
        manifest: Option<PathBuf>,
    },
    /// Remove the extracted asset directories
    Clean {
        /// Load assets from an alternate manifest file
        #[clap(long)]
        manifest: Option<PathBuf>,
    },
    /// Check that the environment can run a fetch
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch { part, manifest } => {
            commands::fetch::fetch_assets(manifest.as_deref(), part)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::List { manifest } => {
            commands::list::list_assets(manifest.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Clean { manifest } => {
            commands::clean::clean_assets(manifest.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Doctor => commands::doctor::check_environment().map_err(|e| anyhow::anyhow!(e)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
