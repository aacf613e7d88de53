//! Character-class configuration source for the CLI

use crate::error::CliError;
use anyhow::Result;
use sentoken_core::CharClasses;
use std::path::PathBuf;

/// Where the character classes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Embedded defaults
    BuiltIn,
    /// External TOML file
    External(PathBuf),
}

impl ConfigSource {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ConfigSource::External(path),
            None => ConfigSource::BuiltIn,
        }
    }

    /// Get the display name for the configuration source
    pub fn display_name(&self) -> String {
        match self {
            ConfigSource::BuiltIn => "Built-in character classes".to_string(),
            ConfigSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the classes, optionally forcing apostrophe splitting off
    pub fn load(&self, no_apostrophes: bool) -> Result<CharClasses> {
        let classes = match self {
            ConfigSource::BuiltIn => CharClasses::default(),
            ConfigSource::External(path) => CharClasses::from_file(path)
                .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?,
        };

        if !no_apostrophes {
            return Ok(classes);
        }

        let mut file = classes.to_file_config();
        file.cutting.apostrophes = false;
        CharClasses::from_file_config(&file)
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
