mod commands;

use clap::{Parser, Subcommand};
use commands::{convert, init, inspect, ConvertArgs, InitArgs, InspectArgs};

/// Viewforge CLI - build, convert and inspect view documents
#[derive(Parser, Debug)]
#[command(name = "viewforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter view document
    Init(InitArgs),

    /// Convert a view between formats (json, html, php)
    Convert(ConvertArgs),

    /// Print the component tree of a view
    Inspect(InspectArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init(args) => init::run(args),
        Command::Convert(args) => convert::run(args),
        Command::Inspect(args) => inspect::run(args),
    }
}
