//! Token classification predicates
//!
//! Everything here is a pure function of a token (and, for the bracket and
//! punctuation checks, of the configured [`CharClasses`]). The scanner
//! composes these predicates in priority order.

use crate::config::CharClasses;
use regex::Regex;
use std::sync::OnceLock;

/// Three-dot ellipsis, treated as one strong punctuation unit
pub const ELLIPSIS: &str = "...";

/// Abbreviations that precede a noun and never end a sentence
pub const ABBREVIATIONS_BEFORE_NOUN: [&str; 12] = [
    "dr.", "mme.", "mmes.", "melle.", "melles.", "mlle.", "mlles.", "m.", "mr.", "me.", "mrs.",
    "st.",
];

static QUANTITY_FIRST: OnceLock<Regex> = OnceLock::new();
static UNIT_FIRST: OnceLock<Regex> = OnceLock::new();

fn quantity_first() -> &'static Regex {
    QUANTITY_FIRST.get_or_init(|| {
        Regex::new(r"^([0-9]+(?:[.,][0-9])?[0-9]*)[^.,0-9]+$").expect("valid quantity regex")
    })
}

fn unit_first() -> &'static Regex {
    UNIT_FIRST.get_or_init(|| {
        Regex::new(r"^([^.,0-9]+)[0-9]+(?:[.,][0-9])?[0-9]*$").expect("valid unit regex")
    })
}

/// Return the character if `s` is exactly one character long
#[inline]
pub fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Whether `s` is exactly one character long
#[inline]
pub fn is_char(s: &str) -> bool {
    single_char(s).is_some()
}

impl CharClasses {
    fn is_char_in(s: &str, set: &[char]) -> bool {
        single_char(s).is_some_and(|ch| set.contains(&ch))
    }

    /// `s` is a single opening bracket
    pub fn is_opening_char(&self, s: &str) -> bool {
        Self::is_char_in(s, self.opening())
    }

    /// `s` is a single closing bracket
    pub fn is_closing_char(&self, s: &str) -> bool {
        Self::is_char_in(s, self.closing())
    }

    /// `s` is a single strong punctuation character or the ellipsis.
    ///
    /// A lone `.` is deliberately not strong: dots are handled by the
    /// terminating-dot rule.
    pub fn is_strong_punct(&self, s: &str) -> bool {
        Self::is_char_in(s, self.strong()) || s == ELLIPSIS
    }

    /// `s` is a single weak punctuation character
    pub fn is_weak_punct(&self, s: &str) -> bool {
        Self::is_char_in(s, self.weak())
    }

    /// `s` begins with a closing bracket or a double quote
    pub fn starts_with_closer(&self, s: &str) -> bool {
        s.chars()
            .next()
            .is_some_and(|ch| ch == '"' || self.closing().contains(&ch))
    }
}

/// Acronyms contain several dots or are uppercase once dots are removed
/// (`U.S.A.`, `ONU.`).
pub fn is_acronym(token: &str) -> bool {
    token.matches('.').count() > 1 || is_uppercase(&token.replace('.', ""))
}

/// Case-insensitive lookup in [`ABBREVIATIONS_BEFORE_NOUN`], trailing dot included
pub fn is_abbreviation_before_noun(token: &str) -> bool {
    let lowered = token.to_lowercase();
    ABBREVIATIONS_BEFORE_NOUN.contains(&lowered.as_str())
}

/// Split offset of a token made of a quantity and a unit, in either order.
///
/// A quantity is a run of digits with at most one decimal separator
/// followed by a digit (`5`, `3,5`, `12.75`); a unit is any run without
/// digits or separators (`kg`, `€`, `km/h`). The whole token must match.
/// Quantity-first is only tried when the token starts with a digit and
/// unit-first only when it ends with one.
///
/// The returned offset is a byte index suitable for [`str::split_at`]:
/// the end of the quantity for `5kg` (1), the end of the unit for `kg5` (2).
pub fn unit_split(token: &str) -> Option<usize> {
    let first = token.chars().next()?;
    let last = token.chars().next_back()?;

    let pattern = if first.is_ascii_digit() {
        quantity_first()
    } else if last.is_ascii_digit() {
        unit_first()
    } else {
        return None;
    };

    pattern
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|head| head.end())
}

/// Non-empty and made only of ASCII digits
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty and made only of alphabetic characters
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// At least one cased character and no lowercase one
pub fn is_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// First character is an uppercase letter
pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}
