//! Output formatting module
//!
//! Every output format is a [`SentenceSink`]. Plain text and vertical
//! output reuse the core corpus writer; JSON and Markdown live here.

use sentoken_core::{CorpusWriter, Layout, Sentence, SentenceSink};
use std::io::{self, Write};

pub mod json;
pub mod markdown;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One sentence per line, tokens separated by spaces, blank line between sentences
    Text,
    /// One token per line, blank line between sentences
    Vertical,
    /// JSON array of sentences with their tokens
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Vertical,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Vertical => "vertical",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "One sentence per line, blank line between sentences",
            OutputFormat::Vertical => "One token per line, blank line between sentences",
            OutputFormat::Json => "JSON array of sentences with tokens",
            OutputFormat::Markdown => "Markdown numbered list",
        }
    }
}

/// Build the sink for `format` writing to `writer`
pub fn create_sink<'w>(format: OutputFormat, writer: Box<dyn Write + 'w>) -> Box<dyn SentenceSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(CorpusWriter::new(writer, Layout::Inline)),
        OutputFormat::Vertical => Box::new(CorpusWriter::new(writer, Layout::Vertical)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Forwards sentences to a borrowed sink but leaves `finish` to its owner.
///
/// Several input files feed one output; each file run ends with `finish`,
/// which must only reach the real sink once.
pub struct SharedSink<'a, S: SentenceSink + ?Sized>(pub &'a mut S);

impl<S: SentenceSink + ?Sized> SentenceSink for SharedSink<'_, S> {
    fn put(&mut self, sentence: Sentence) -> io::Result<()> {
        self.0.put(sentence)
    }
}
