//! sentoken CLI library
//!
//! This library provides the command-line interface for the sentoken
//! tokenizer and sentence segmenter.

pub mod commands;
pub mod config_source;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
