//! Sentences and the sinks that receive them

use serde::{Deserialize, Serialize};
use std::io;

/// One segmented sentence: an ordered list of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<String>,
}

impl Sentence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Tokens joined by single spaces
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<String>> for Sentence {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> From<Vec<&'a str>> for Sentence {
    fn from(tokens: Vec<&'a str>) -> Self {
        Self::new(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Receiver of completed sentences, in emission order
pub trait SentenceSink {
    /// Accept one completed sentence
    fn put(&mut self, sentence: Sentence) -> io::Result<()>;

    /// Called once after the last sentence of a run
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SentenceSink for Vec<Sentence> {
    fn put(&mut self, sentence: Sentence) -> io::Result<()> {
        self.push(sentence);
        Ok(())
    }
}

impl<S: SentenceSink + ?Sized> SentenceSink for &mut S {
    fn put(&mut self, sentence: Sentence) -> io::Result<()> {
        (**self).put(sentence)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

impl<S: SentenceSink + ?Sized> SentenceSink for Box<S> {
    fn put(&mut self, sentence: Sentence) -> io::Result<()> {
        (**self).put(sentence)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
