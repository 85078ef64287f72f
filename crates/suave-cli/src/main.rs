//! Suave CLI - one-pole lowpass filtering for WAV files.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "suave")]
#[command(author, version, about = "One-pole lowpass filter for WAV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a one-pole lowpass filter to a WAV file
    Filter(commands::filter::FilterArgs),

    /// Display WAV file metadata
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
