//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use sentoken_core::CharClasses;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize and segment text files into sentences
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a character-class configuration file
    Validate(validate::ValidateArgs),

    /// Generate a character-class configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// Show the built-in character classes
    Classes,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10} - {}", format.name(), format.description());
                }
            }
            ListCommands::Classes => {
                println!("Built-in character classes:");
                print_classes(&CharClasses::default());
            }
        }
    }
}

/// Print one line per character class
pub(crate) fn print_classes(classes: &CharClasses) {
    let show = |chars: &[char]| chars.iter().collect::<String>();
    println!("  Opening brackets:   {}", show(classes.opening()));
    println!("  Closing brackets:   {}", show(classes.closing()));
    println!("  Strong punctuation: {}", show(classes.strong()));
    println!("  Weak punctuation:   {}", show(classes.weak()));
    println!("  Apostrophe splitting: {}", classes.splits_apostrophes());
}
