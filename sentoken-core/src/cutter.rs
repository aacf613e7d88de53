//! Token cutting
//!
//! A raw whitespace-delimited chunk is cut into sub-tokens by a fixed list of
//! rewrite passes. Each pass only inserts spaces next to the characters it
//! matches and never removes anything, so splitting the final string on
//! whitespace yields the token sequence.

use crate::classify::{is_char, ELLIPSIS};
use crate::config::CharClasses;

/// A single rewrite pass
pub type Pass = fn(&str, &CharClasses) -> String;

/// Passes in application order; each one sees the output of the previous one
pub const PIPELINE: [(&str, Pass); 6] = [
    ("opening_brackets", passes::opening_brackets),
    ("closing_brackets", passes::closing_brackets),
    ("strong_punctuation", passes::strong_punctuation),
    ("weak_punctuation", passes::weak_punctuation),
    ("clitics", passes::clitics),
    ("apostrophes", passes::apostrophes),
];

/// Long clitic, checked before the short ones
pub const LONG_CLITIC: &str = "-t-";

/// Pronominal clitics split off a verb (`dit-il`, `donne-moi`)
pub const SHORT_CLITICS: [&str; 16] = [
    "-je", "-tu", "-il", "-elle", "-nous", "-vous", "-ils", "-elles", "-moi", "-toi", "-lui",
    "-on", "-ce", "-le", "-la", "-les",
];

/// The rewrite passes, exposed one by one
pub mod passes {
    use super::*;

    /// Space after every opening bracket
    pub fn opening_brackets(token: &str, classes: &CharClasses) -> String {
        separate(token, classes.opening(), false, true)
    }

    /// Space after every closing bracket.
    ///
    /// Only the trailing side is split, so `word)` stays one token.
    pub fn closing_brackets(token: &str, classes: &CharClasses) -> String {
        separate(token, classes.closing(), false, true)
    }

    /// Spaces around strong punctuation, then around every `...`
    pub fn strong_punctuation(token: &str, classes: &CharClasses) -> String {
        separate(token, classes.strong(), true, true).replace(ELLIPSIS, " ... ")
    }

    /// Spaces around weak punctuation
    pub fn weak_punctuation(token: &str, classes: &CharClasses) -> String {
        separate(token, classes.weak(), true, true)
    }

    /// Space before clitics.
    ///
    /// When the token holds `-t-` only that clitic is split; the short
    /// clitics are tried only otherwise.
    pub fn clitics(token: &str, _classes: &CharClasses) -> String {
        if token.contains(LONG_CLITIC) {
            insert_before(token, &[LONG_CLITIC])
        } else {
            insert_before(token, &SHORT_CLITICS)
        }
    }

    /// Space after apostrophes, spaces around double quotes
    pub fn apostrophes(token: &str, classes: &CharClasses) -> String {
        if !classes.splits_apostrophes() {
            return token.to_string();
        }
        let split = separate(token, &['\'', '’'], false, true);
        separate(&split, &['"'], true, true)
    }
}

/// Insert a space before and/or after each character of `set`
fn separate(token: &str, set: &[char], before: bool, after: bool) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    for ch in token.chars() {
        let hit = set.contains(&ch);
        if hit && before {
            out.push(' ');
        }
        out.push(ch);
        if hit && after {
            out.push(' ');
        }
    }
    out
}

/// Insert one space before every position where a pattern starts
fn insert_before(token: &str, patterns: &[&str]) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    for (idx, ch) in token.char_indices() {
        if idx > 0 && patterns.iter().any(|p| token[idx..].starts_with(p)) {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Cuts raw chunks into tokens according to a set of character classes
#[derive(Debug, Clone, Default)]
pub struct TokenCutter {
    classes: CharClasses,
}

impl TokenCutter {
    pub fn new(classes: CharClasses) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// Run every pass over `token`; one-character tokens come back untouched
    pub fn cut(&self, token: &str) -> String {
        if is_char(token) {
            return token.to_string();
        }

        PIPELINE
            .iter()
            .fold(token.to_string(), |acc, (_, pass)| pass(&acc, &self.classes))
    }

    /// Cut every whitespace chunk of `line` and return the flat token list
    pub fn cut_line(&self, line: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in line.split_whitespace() {
            let cut = self.cut(chunk);
            tokens.extend(cut.split_whitespace().map(str::to_string));
        }
        tokens
    }
}
