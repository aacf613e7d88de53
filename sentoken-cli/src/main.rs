//! sentoken command-line entry point

use clap::Parser;
use sentoken_cli::commands::Commands;

/// Rule-based tokenization and sentence segmentation
#[derive(Debug, Parser)]
#[command(name = "sentoken", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
