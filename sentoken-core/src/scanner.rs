//! Sentence scanner
//!
//! The scanner cuts each input line into tokens and walks them left to right.
//! Every token is first classified into a [`TokenClass`] (the first matching
//! case wins), which yields a [`Step`]: the pieces to append to the sentence
//! buffer, a nesting adjustment and an emission decision. Applying the step
//! is the only place where scanner state changes.
//!
//! Two pieces of state matter:
//!
//! - the sentence buffer, emptied on every emission and always flushed at
//!   the end of a line, so a sentence never spans two input lines;
//! - the bracket nesting counter, which is *not* reset between lines. An
//!   unmatched opening bracket keeps suppressing punctuation-driven
//!   emissions on the following lines; only line ends, ellipses and inner
//!   dots still close sentences.

use crate::classify::{
    is_abbreviation_before_noun, is_acronym, is_all_digits, is_alphabetic, is_char,
    starts_uppercase, unit_split, ELLIPSIS,
};
use crate::config::CharClasses;
use crate::cutter::TokenCutter;
use crate::error::{Result, SegmentError};
use crate::sink::{Sentence, SentenceSink};
use smallvec::{smallvec, SmallVec};

/// How a token is handled, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Strong punctuation followed by more strong punctuation (`?` in `? !`)
    DeferredStrong,
    /// Any other one-character token
    Char,
    /// Quantity and unit glued together (`5kg`, `€10`)
    Unit { split: usize },
    /// The three-dot ellipsis
    Ellipsis,
    /// Quantity and unit followed by a dot (`10€.`)
    UnitWithDot { split: usize },
    /// Any other token ending with a dot
    TerminatingDot,
    /// Decimal number (`3.14`)
    Decimal,
    /// Abbreviation glued to the next word (`Mr.Smith`)
    GluedAbbreviation { dot: usize },
    /// Dot inside a token, read as a sentence boundary (`fin.Début`)
    InnerDot { dot: usize },
    /// Everything else
    Word,
}

/// When a step closes the current sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    Never,
    /// Only outside brackets, judged after the step's nesting change
    WhenBalanced,
    Always,
}

/// Effect of one token on the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    pub class: TokenClass,
    /// Pieces appended to the buffer, in order
    pub pieces: SmallVec<[&'a str; 3]>,
    pub nesting_delta: i64,
    pub emission: Emission,
    /// Pieces that start the next sentence after emission
    pub seed: Option<&'a str>,
}

impl<'a> Step<'a> {
    fn new(class: TokenClass, pieces: SmallVec<[&'a str; 3]>) -> Self {
        Self {
            class,
            pieces,
            nesting_delta: 0,
            emission: Emission::Never,
            seed: None,
        }
    }

    fn emitting(mut self, emission: Emission) -> Self {
        self.emission = emission;
        self
    }
}

impl TokenClass {
    /// Classify `tokens[position]`, looking at its successor when needed
    pub fn of(tokens: &[String], position: usize, classes: &CharClasses) -> Self {
        let token = tokens[position].as_str();
        let next = tokens.get(position + 1).map(String::as_str);

        if is_char(token) {
            let deferred = classes.is_strong_punct(token)
                && next.is_some_and(|next| classes.is_strong_punct(next));
            return if deferred {
                TokenClass::DeferredStrong
            } else {
                TokenClass::Char
            };
        }

        if let Some(split) = unit_split(token) {
            return TokenClass::Unit { split };
        }

        if let Some(stem) = token.strip_suffix('.') {
            if token == ELLIPSIS {
                return TokenClass::Ellipsis;
            }
            if let Some(split) = unit_split(stem) {
                return TokenClass::UnitWithDot { split };
            }
            return TokenClass::TerminatingDot;
        }

        if let Some(dot) = token.find('.') {
            if is_all_digits(&token[..dot]) && is_all_digits(&token[dot + 1..]) {
                return TokenClass::Decimal;
            }
            if is_abbreviation_before_noun(&token[..=dot]) {
                return TokenClass::GluedAbbreviation { dot };
            }
            return TokenClass::InnerDot { dot };
        }

        TokenClass::Word
    }
}

/// Plan the effect of `tokens[position]` without touching any state
pub fn plan<'a>(tokens: &'a [String], position: usize, classes: &CharClasses) -> Step<'a> {
    let token = tokens[position].as_str();
    let class = TokenClass::of(tokens, position, classes);

    match class {
        TokenClass::DeferredStrong | TokenClass::Word | TokenClass::Decimal => {
            Step::new(class, smallvec![token])
        }
        TokenClass::Char => {
            let mut step = Step::new(class, smallvec![token]);
            if classes.is_opening_char(token) {
                step.nesting_delta = 1;
            } else if classes.is_closing_char(token) {
                step.nesting_delta = -1;
            }
            if classes.is_strong_punct(token) {
                step.emission = Emission::WhenBalanced;
            }
            step
        }
        TokenClass::Unit { split } => {
            let (quantity, unit) = token.split_at(split);
            Step::new(class, smallvec![quantity, unit])
        }
        TokenClass::Ellipsis => Step::new(class, smallvec![token]).emitting(Emission::Always),
        TokenClass::UnitWithDot { split } => {
            let (stem, dot) = token.split_at(token.len() - 1);
            let (first, second) = stem.split_at(split);
            Step::new(class, smallvec![first, second, dot])
        }
        TokenClass::TerminatingDot => {
            if is_acronym(token) || is_abbreviation_before_noun(token) {
                return Step::new(class, smallvec![token]);
            }
            let (stem, dot) = token.split_at(token.len() - 1);
            let emission = if is_sentence_dot(tokens, position, classes) {
                Emission::WhenBalanced
            } else {
                Emission::Never
            };
            Step::new(class, smallvec![stem, dot]).emitting(emission)
        }
        TokenClass::GluedAbbreviation { dot } => {
            let (abbreviation, rest) = token.split_at(dot + 1);
            Step::new(class, smallvec![abbreviation, rest])
        }
        TokenClass::InnerDot { dot } => {
            let mut step = Step::new(class, smallvec![&token[..dot], &token[dot..=dot]])
                .emitting(Emission::Always);
            step.seed = Some(&token[dot + 1..]);
            step
        }
    }
}

/// Whether the dot ending `tokens[position]` ends the sentence.
///
/// Ordinals and plain numbers (`12.`) always do. A token near the end of the
/// line only does when exactly one token follows it and that token does not
/// open with a closing bracket or a double quote. Elsewhere the next token
/// decides: uppercase start or non-alphabetic content means a new sentence.
pub fn is_sentence_dot(tokens: &[String], position: usize, classes: &CharClasses) -> bool {
    let token = tokens[position].as_str();
    let stem = token.strip_suffix('.').unwrap_or(token);

    if is_all_digits(stem) {
        return true;
    }

    let len = tokens.len();
    if position + 2 >= len {
        return position + 2 == len && !classes.starts_with_closer(&tokens[position + 1]);
    }

    let next = tokens[position + 1].as_str();
    starts_uppercase(next) || !is_alphabetic(next)
}

/// Counters for one scanner run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub tokens: usize,
    pub sentences: usize,
}

/// Line-by-line sentence scanner writing into a [`SentenceSink`]
#[derive(Debug)]
pub struct SentenceScanner<S: SentenceSink> {
    cutter: TokenCutter,
    sink: S,
    buffer: Vec<String>,
    nesting: i64,
    stats: ScanStats,
}

impl<S: SentenceSink> SentenceScanner<S> {
    pub fn new(classes: CharClasses, sink: S) -> Self {
        Self {
            cutter: TokenCutter::new(classes),
            sink,
            buffer: Vec::new(),
            nesting: 0,
            stats: ScanStats::default(),
        }
    }

    pub fn classes(&self) -> &CharClasses {
        self.cutter.classes()
    }

    /// Current bracket nesting depth; negative after stray closing brackets
    pub fn nesting_depth(&self) -> i64 {
        self.nesting
    }

    /// Tokens accumulated for the sentence in progress
    pub fn pending(&self) -> &[String] {
        &self.buffer
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Cut and scan one raw line, then flush whatever the line left pending.
    ///
    /// A line that yields no token at all is a caller error: corpus readers
    /// drop blank lines before they reach the scanner.
    pub fn scan_line(&mut self, line: &str) -> Result<()> {
        self.stats.lines += 1;

        let tokens = self.cutter.cut_line(line);
        if tokens.is_empty() {
            log::error!("Line {} is blank after cutting", self.stats.lines);
            return Err(SegmentError::EmptyLine {
                line: self.stats.lines,
            });
        }
        self.stats.tokens += tokens.len();

        for position in 0..tokens.len() {
            let step = plan(&tokens, position, self.classes());
            self.apply(step)?;
        }

        self.emit()
    }

    fn apply(&mut self, step: Step<'_>) -> Result<()> {
        for piece in &step.pieces {
            self.push(piece);
        }
        self.nesting += step.nesting_delta;

        let emit = match step.emission {
            Emission::Never => false,
            Emission::WhenBalanced => self.nesting == 0,
            Emission::Always => true,
        };
        if emit {
            self.emit()?;
        }

        if let Some(seed) = step.seed {
            self.push(seed);
        }
        Ok(())
    }

    fn push(&mut self, piece: &str) {
        if !piece.is_empty() {
            self.buffer.push(piece.to_string());
        }
    }

    /// Hand the buffer to the sink and clear it; no-op when empty
    fn emit(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let sentence = Sentence::new(std::mem::take(&mut self.buffer));
        log::trace!(
            "Sentence {} ({} tokens, nesting {})",
            self.stats.sentences + 1,
            sentence.len(),
            self.nesting
        );
        self.sink.put(sentence)?;
        self.stats.sentences += 1;
        Ok(())
    }

    /// Flush any pending tokens, finish the sink and return it
    pub fn finish(mut self) -> Result<(S, ScanStats)> {
        self.emit()?;
        self.sink.finish()?;
        Ok((self.sink, self.stats))
    }
}
