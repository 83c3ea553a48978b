//! prep CLI - Study content browser.
//!
//! Provides commands for:
//! - `spaces`: List available spaces
//! - `tree`: Print the space/topic/question navigation tree
//! - `show`: Display a question with its answer at a chosen level

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ShowArgs, TreeArgs};
use output::Output;

/// prep - Study content browser.
#[derive(Parser)]
#[command(name = "prep", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available spaces.
    Spaces,
    /// Print the space/topic/question navigation tree.
    Tree(TreeArgs),
    /// Show a question with its answer at a given level.
    Show(ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Spaces => commands::spaces::execute(config_path, &output),
        Commands::Tree(args) => args.execute(config_path, &output),
        Commands::Show(args) => args.execute(config_path, &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
