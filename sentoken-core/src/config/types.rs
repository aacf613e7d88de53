use serde::{Deserialize, Serialize};

/// On-disk layout of a character-class configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassesFile {
    #[serde(default)]
    pub brackets: BracketConfig,
    #[serde(default)]
    pub punctuation: PunctuationConfig,
    #[serde(default)]
    pub cutting: CuttingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketConfig {
    #[serde(default)]
    pub opening: String,
    #[serde(default)]
    pub closing: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationConfig {
    #[serde(default)]
    pub strong: String,
    #[serde(default)]
    pub weak: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuttingConfig {
    #[serde(default = "default_true")]
    pub apostrophes: bool,
}

impl Default for CuttingConfig {
    fn default() -> Self {
        Self { apostrophes: true }
    }
}

fn default_true() -> bool {
    true
}
