//! webdm-pages CLI — render and inspect snap page fragments.
//!
//! Three commands: `render` turns a context JSON document into the snap
//! details HTML fragment, `check` validates a context without rendering,
//! and `sample` scaffolds a starter context file.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "webdm-pages",
    about = "Page-fragment renderer for the webdm snap device manager UI",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the snap details fragment from a context document
    Render {
        /// Path to the context JSON file
        #[arg(long, short)]
        context: PathBuf,

        /// Write the fragment here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Validate a context document and report what would render
    Check {
        /// Path to the context JSON file
        #[arg(long, short)]
        context: PathBuf,
    },

    /// Write a starter context document
    Sample {
        /// Destination path
        #[arg(long, short, default_value = "snap-details.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Render { context, output } => {
            commands::render::run(&context, output.as_deref())?;
        }
        Commands::Check { context } => {
            commands::check::run(&context)?;
        }
        Commands::Sample { output, force } => {
            commands::sample::run(&output, force)?;
        }
    }

    Ok(())
}
