//! Sana Control - CLI shell for the Sana symptom assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sanactl::{commands, repl};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sanactl")]
#[command(about = "Sana - rule-based symptom advice assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config.toml overriding the default search locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session
    Chat,

    /// Classify one message and print the reply
    Ask {
        /// The symptom text, e.g. "sore throat for two days"
        text: Vec<String>,

        /// Print the structured reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in conditions and their keywords
    Conditions,
}

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG controls verbosity)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let engine = commands::build_engine(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Ask { text, json }) => commands::ask(&engine, &text.join(" "), json),
        Some(Commands::Conditions) => commands::conditions(&engine),
        Some(Commands::Chat) | None => repl::run_chat(&engine),
    }
}
