//! Rule-based tokenization and sentence segmentation
//!
//! This crate turns raw running text into tokens and sentences with a
//! deterministic set of lexical rules. It knows about brackets, strong and
//! weak punctuation, French clitics, apostrophes, abbreviations, acronyms,
//! decimal numbers and numbers glued to units. It performs no morphological
//! analysis and no statistical inference.
//!
//! # Architecture
//!
//! - [`cutter`]: splits whitespace-delimited chunks into tokens through an
//!   ordered list of rewrite passes
//! - [`classify`]: pure predicates over tokens
//! - [`scanner`]: the sentence state machine (buffer and bracket nesting)
//! - [`corpus`] and [`sink`]: paragraph-delimited input and sentence output
//!
//! # Example
//!
//! ```rust
//! use sentoken_core::{segment_text, CharClasses};
//!
//! let sentences = segment_text("Mr. Smith arrived. Il pleut!", &CharClasses::default()).unwrap();
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].tokens, vec!["Mr.", "Smith", "arrived", "."]);
//! assert_eq!(sentences[1].text(), "Il pleut !");
//! ```

pub mod classify;
pub mod config;
pub mod corpus;
pub mod cutter;
pub mod error;
pub mod scanner;
pub mod sink;

pub use config::{CharClasses, CharClassesBuilder};
pub use corpus::{CorpusReader, CorpusWriter, Layout, Paragraph};
pub use cutter::TokenCutter;
pub use error::{ConfigError, Result, SegmentError};
pub use scanner::{ScanStats, SentenceScanner, TokenClass};
pub use sink::{Sentence, SentenceSink};

use std::io::BufRead;

/// Counters for one segmentation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    pub paragraphs: usize,
    pub lines: usize,
    pub tokens: usize,
    pub sentences: usize,
}

impl std::ops::AddAssign for SegmentStats {
    fn add_assign(&mut self, other: Self) {
        self.paragraphs += other.paragraphs;
        self.lines += other.lines;
        self.tokens += other.tokens;
        self.sentences += other.sentences;
    }
}

/// Segment a whole corpus from `reader` into `sink`.
///
/// Every line of every paragraph goes through one scanner, in document
/// order. Paragraph boundaries do not reset the scanner.
pub fn segment_corpus<R, S>(reader: R, sink: S, classes: CharClasses) -> Result<SegmentStats>
where
    R: BufRead,
    S: SentenceSink,
{
    let mut scanner = SentenceScanner::new(classes, sink);
    let mut paragraphs = 0;

    for paragraph in CorpusReader::new(reader) {
        for line in &paragraph? {
            scanner.scan_line(line)?;
        }
        paragraphs += 1;
    }

    let (_, scan) = scanner.finish()?;
    let stats = SegmentStats {
        paragraphs,
        lines: scan.lines,
        tokens: scan.tokens,
        sentences: scan.sentences,
    };
    log::debug!(
        "Segmented {} paragraphs, {} lines into {} sentences ({} tokens)",
        stats.paragraphs,
        stats.lines,
        stats.sentences,
        stats.tokens
    );
    Ok(stats)
}

/// Segment an in-memory text and collect its sentences
pub fn segment_text(text: &str, classes: &CharClasses) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    segment_corpus(text.as_bytes(), &mut sentences, classes.clone())?;
    Ok(sentences)
}
