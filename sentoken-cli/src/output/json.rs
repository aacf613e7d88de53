//! JSON output formatter

use serde::{Deserialize, Serialize};
use sentoken_core::{Sentence, SentenceSink};
use std::io::{self, Write};

/// JSON formatter - outputs sentences as a JSON array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Tokens joined by single spaces
    pub text: String,
    /// The sentence tokens in order
    pub tokens: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write> SentenceSink for JsonFormatter<W> {
    fn put(&mut self, sentence: Sentence) -> io::Result<()> {
        self.sentences.push(SentenceData {
            text: sentence.text(),
            tokens: sentence.tokens,
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
