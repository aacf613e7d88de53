//! Error types for segmentation

use thiserror::Error;

/// Errors raised while loading or validating a character-class configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The TOML document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A character class is empty where at least one character is required
    #[error("Character class '{0}' must not be empty")]
    EmptyClass(&'static str),

    /// A character is not allowed in any character class
    #[error("Character {ch:?} is not allowed in class '{class}'")]
    ForbiddenChar { class: &'static str, ch: char },

    /// The same character appears in two classes that must be disjoint
    #[error("Character {ch:?} appears in both '{first}' and '{second}'")]
    Overlap {
        ch: char,
        first: &'static str,
        second: &'static str,
    },
}

/// Errors raised while segmenting a corpus
#[derive(Debug, Error)]
pub enum SegmentError {
    /// A line produced no token after cutting.
    ///
    /// Corpus readers never hand blank lines to the scanner, so this is a
    /// broken caller contract rather than bad input.
    #[error("Line {line} produced no token after cutting")]
    EmptyLine { line: usize },

    /// Reading the corpus or writing a sentence failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid character-class configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;
