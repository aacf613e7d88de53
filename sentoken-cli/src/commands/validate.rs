//! Validate command implementation

use anyhow::Result;
use clap::Args;
use sentoken_core::CharClasses;
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the character-class configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CharClasses::from_file(&self.config) {
            Ok(classes) => {
                println!("✓ Configuration is valid!");
                super::print_classes(&classes);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}
