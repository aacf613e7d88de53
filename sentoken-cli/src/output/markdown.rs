//! Markdown output formatter

use sentoken_core::{Sentence, SentenceSink};
use std::io::{self, Write};

/// Markdown formatter - outputs sentences as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write> SentenceSink for MarkdownFormatter<W> {
    fn put(&mut self, sentence: Sentence) -> io::Result<()> {
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence.text())
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_output() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.put(Sentence::from(vec!["Bonjour", "."])).unwrap();
        formatter.put(Sentence::from(vec!["Ça", "va", "?"])).unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "1. Bonjour .\n2. Ça va ?\n\n---\n*Total sentences: 2*\n"
        );
    }
}
