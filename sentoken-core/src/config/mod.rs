//! Character-class configuration
//!
//! The segmenter is driven by four character sets (opening brackets, closing
//! brackets, strong punctuation and weak punctuation) and one switch for
//! apostrophe splitting. They are fixed when a cutter or scanner is built.
//!
//! Configurations are TOML documents:
//!
//! ```toml
//! [brackets]
//! opening = "([{«"
//! closing = ")]}»"
//!
//! [punctuation]
//! strong = "?!…"
//! weak = ",:;"
//!
//! [cutting]
//! apostrophes = true
//! ```

mod types;

pub use types::{BracketConfig, ClassesFile, CuttingConfig, PunctuationConfig};

use crate::error::ConfigError;
use std::path::Path;
use std::sync::OnceLock;

static DEFAULT_CLASSES: OnceLock<CharClasses> = OnceLock::new();

const DEFAULT_CONFIG: &str = include_str!("../../configs/default.toml");

/// Immutable character classes consulted by the cutter and the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClasses {
    opening: Vec<char>,
    closing: Vec<char>,
    strong: Vec<char>,
    weak: Vec<char>,
    apostrophes: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        DEFAULT_CLASSES
            .get_or_init(|| {
                Self::from_toml_str(DEFAULT_CONFIG).expect("embedded default config is valid")
            })
            .clone()
    }
}

impl CharClasses {
    /// Create a builder starting from the default classes
    pub fn builder() -> CharClassesBuilder {
        CharClassesBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ClassesFile = toml::from_str(content)?;
        Self::from_file_config(&file)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let classes = Self::from_toml_str(&content)?;
        log::debug!("Loaded character classes from {}", path.display());
        Ok(classes)
    }

    /// Build classes from an already parsed configuration document
    pub fn from_file_config(file: &ClassesFile) -> Result<Self, ConfigError> {
        let classes = Self {
            opening: file.brackets.opening.chars().collect(),
            closing: file.brackets.closing.chars().collect(),
            strong: file.punctuation.strong.chars().collect(),
            weak: file.punctuation.weak.chars().collect(),
            apostrophes: file.cutting.apostrophes,
        };
        classes.validate()?;
        Ok(classes)
    }

    /// Convert back into the on-disk layout
    pub fn to_file_config(&self) -> ClassesFile {
        ClassesFile {
            brackets: BracketConfig {
                opening: self.opening.iter().collect(),
                closing: self.closing.iter().collect(),
            },
            punctuation: PunctuationConfig {
                strong: self.strong.iter().collect(),
                weak: self.weak.iter().collect(),
            },
            cutting: CuttingConfig {
                apostrophes: self.apostrophes,
            },
        }
    }

    /// Check the invariants every configuration must hold.
    ///
    /// Strong punctuation must not be empty. No class may contain whitespace
    /// or `.`, which the scanner handles on its own, and the four classes
    /// must be pairwise disjoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strong.is_empty() {
            return Err(ConfigError::EmptyClass("strong"));
        }

        let named = self.named_classes();

        for &(class, chars) in &named {
            if let Some(ch) = chars.iter().copied().find(|ch| ch.is_whitespace() || *ch == '.') {
                return Err(ConfigError::ForbiddenChar { class, ch });
            }
        }

        for (i, &(first, first_chars)) in named.iter().enumerate() {
            for &(second, second_chars) in &named[i + 1..] {
                if let Some(ch) = first_chars.iter().copied().find(|ch| second_chars.contains(ch)) {
                    return Err(ConfigError::Overlap { ch, first, second });
                }
            }
        }

        Ok(())
    }

    fn named_classes(&self) -> [(&'static str, &[char]); 4] {
        [
            ("opening", self.opening.as_slice()),
            ("closing", self.closing.as_slice()),
            ("strong", self.strong.as_slice()),
            ("weak", self.weak.as_slice()),
        ]
    }

    pub fn opening(&self) -> &[char] {
        &self.opening
    }

    pub fn closing(&self) -> &[char] {
        &self.closing
    }

    pub fn strong(&self) -> &[char] {
        &self.strong
    }

    pub fn weak(&self) -> &[char] {
        &self.weak
    }

    /// Whether apostrophes and double quotes are split off by the cutter
    pub fn splits_apostrophes(&self) -> bool {
        self.apostrophes
    }
}

/// Fluent builder for [`CharClasses`]
#[derive(Debug, Clone, Default)]
pub struct CharClassesBuilder {
    opening: Option<String>,
    closing: Option<String>,
    strong: Option<String>,
    weak: Option<String>,
    apostrophes: Option<bool>,
}

impl CharClassesBuilder {
    /// Set the opening bracket characters
    pub fn opening(mut self, chars: impl Into<String>) -> Self {
        self.opening = Some(chars.into());
        self
    }

    /// Set the closing bracket characters
    pub fn closing(mut self, chars: impl Into<String>) -> Self {
        self.closing = Some(chars.into());
        self
    }

    /// Set the strong (sentence-ending) punctuation characters
    pub fn strong(mut self, chars: impl Into<String>) -> Self {
        self.strong = Some(chars.into());
        self
    }

    /// Set the weak (clause) punctuation characters
    pub fn weak(mut self, chars: impl Into<String>) -> Self {
        self.weak = Some(chars.into());
        self
    }

    /// Enable or disable apostrophe and double quote splitting
    pub fn apostrophes(mut self, enabled: bool) -> Self {
        self.apostrophes = Some(enabled);
        self
    }

    /// Build and validate the classes
    pub fn build(self) -> Result<CharClasses, ConfigError> {
        let mut file = CharClasses::default().to_file_config();

        if let Some(opening) = self.opening {
            file.brackets.opening = opening;
        }
        if let Some(closing) = self.closing {
            file.brackets.closing = closing;
        }
        if let Some(strong) = self.strong {
            file.punctuation.strong = strong;
        }
        if let Some(weak) = self.weak {
            file.punctuation.weak = weak;
        }
        if let Some(apostrophes) = self.apostrophes {
            file.cutting.apostrophes = apostrophes;
        }

        CharClasses::from_file_config(&file)
    }
}
