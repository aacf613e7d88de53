//! Paragraph-delimited corpus reading and sentence writing
//!
//! A corpus is plain text where blank lines separate paragraphs. Segmented
//! output uses the same convention: one blank line between sentences.

use crate::sink::{Sentence, SentenceSink};
use std::io::{self, BufRead, Lines, Write};

/// Lines of one paragraph, trimmed and never blank
pub type Paragraph = Vec<String>;

/// Iterator over the paragraphs of a corpus
pub struct CorpusReader<R: BufRead> {
    lines: Lines<R>,
}

impl<R: BufRead> CorpusReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Count the remaining paragraphs, consuming the reader
    pub fn count_paragraphs(self) -> io::Result<usize> {
        self.into_iter().try_fold(0, |n, paragraph| paragraph.map(|_| n + 1))
    }
}

impl<R: BufRead> Iterator for CorpusReader<R> {
    type Item = io::Result<Paragraph>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut paragraph = Paragraph::new();

        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            let line = line.trim();

            if line.is_empty() {
                if !paragraph.is_empty() {
                    return Some(Ok(paragraph));
                }
            } else {
                paragraph.push(line.to_string());
            }
        }

        if paragraph.is_empty() {
            None
        } else {
            Some(Ok(paragraph))
        }
    }
}

/// How a sentence is laid out by [`CorpusWriter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Tokens joined by single spaces on one line
    #[default]
    Inline,
    /// One token per line, for column-oriented downstream tools
    Vertical,
}

/// Sentence sink writing a blank-line separated corpus
pub struct CorpusWriter<W: Write> {
    writer: W,
    layout: Layout,
    first: bool,
}

impl<W: Write> CorpusWriter<W> {
    pub fn new(writer: W, layout: Layout) -> Self {
        Self {
            writer,
            layout,
            first: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SentenceSink for CorpusWriter<W> {
    fn put(&mut self, sentence: Sentence) -> io::Result<()> {
        if self.first {
            self.first = false;
        } else {
            writeln!(self.writer)?;
        }

        match self.layout {
            Layout::Inline => writeln!(self.writer, "{}", sentence.text())?,
            Layout::Vertical => {
                for token in &sentence.tokens {
                    writeln!(self.writer, "{token}")?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
