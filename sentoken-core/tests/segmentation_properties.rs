//! End-to-end segmentation behaviour on representative inputs

use sentoken_core::classify::{is_acronym, unit_split};
use sentoken_core::{segment_text, CharClasses, Sentence, SentenceScanner};

fn segment(text: &str) -> Vec<Vec<String>> {
    segment_text(text, &CharClasses::default())
        .unwrap()
        .into_iter()
        .map(|sentence| sentence.tokens)
        .collect()
}

fn toks(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_unit_split_offsets() {
    assert_eq!(unit_split("5kg"), Some(1));
    assert_eq!(unit_split("kg5"), Some(2));
    assert_eq!(unit_split("kg"), None);
    assert_eq!(unit_split("5"), None);
}

#[test]
fn test_acronym_detection() {
    assert!(is_acronym("U.S.A."));
    assert!(!is_acronym("Dr."));
}

#[test]
fn test_title_abbreviation_does_not_end_sentence() {
    assert_eq!(
        segment("Mr. Smith arrived."),
        vec![toks(&["Mr.", "Smith", "arrived", "."])]
    );
}

#[test]
fn test_quantity_with_unit() {
    let sentences = segment("Price: 5kg of rice costs 10€.");
    assert_eq!(sentences.len(), 1);
    let sentence = &sentences[0];
    assert!(sentence.windows(2).any(|w| w == ["5", "kg"]));
    assert_eq!(sentence.last().map(String::as_str), Some("."));
}

/// An unmatched opening bracket suppresses punctuation-driven boundaries
/// on later lines, while every line end still closes the pending sentence.
#[test]
fn test_unbalanced_bracket_across_lines() {
    let mut scanner = SentenceScanner::new(CharClasses::default(), Vec::new());

    scanner.scan_line("(Hello world.").unwrap();
    assert_eq!(scanner.nesting_depth(), 1);
    assert!(scanner.pending().is_empty());
    assert_eq!(scanner.sink().len(), 1);

    scanner.scan_line("Goodbye) Bye.").unwrap();
    // `Goodbye)` is one token, so the counter is never decremented
    assert_eq!(scanner.nesting_depth(), 1);

    scanner.scan_line("Vraiment? Oui!").unwrap();
    let (sentences, stats) = scanner.finish().unwrap();

    assert_eq!(
        sentences,
        vec![
            Sentence::from(vec!["(", "Hello", "world", "."]),
            Sentence::from(vec!["Goodbye)", "Bye", "."]),
            Sentence::from(vec!["Vraiment", "?", "Oui", "!"]),
        ]
    );
    assert_eq!(stats.lines, 3);
}

#[test]
fn test_balanced_brackets_restore_boundaries() {
    assert_eq!(
        segment("Il rit ( fort ) ! Puis il part ."),
        vec![
            toks(&["Il", "rit", "(", "fort", ")", "!"]),
            toks(&["Puis", "il", "part", "."]),
        ]
    );
}

#[test]
fn test_ellipsis_ends_sentence_even_inside_brackets() {
    assert_eq!(
        segment("(Et puis... rien du tout)"),
        vec![toks(&["(", "Et", "puis", "..."]), toks(&["rien", "du", "tout)"])]
    );
}

#[test]
fn test_question_inside_brackets_does_not_end_sentence() {
    assert_eq!(
        segment("Il demande (pourquoi?) et part"),
        vec![toks(&["Il", "demande", "(", "pourquoi", "?", ")", "et", "part"])]
    );
}

#[test]
fn test_french_clitics_and_apostrophes() {
    assert_eq!(
        segment("Qu'en pense-t-il? L'homme dit-elle non."),
        vec![
            toks(&["Qu'", "en", "pense", "-t-il", "?"]),
            toks(&["L'", "homme", "dit", "-elle", "non", "."]),
        ]
    );
}

/// Closing brackets are only split on their trailing side, so `non»` keeps
/// its guillemet and the nesting opened by `«` is never closed.
#[test]
fn test_glued_closing_guillemet_keeps_nesting_open() {
    let mut scanner = SentenceScanner::new(CharClasses::default(), Vec::new());
    scanner.scan_line("Il a dit «non». Elle a ri.").unwrap();
    assert_eq!(scanner.nesting_depth(), 1);

    let (sentences, _) = scanner.finish().unwrap();
    assert_eq!(
        sentences,
        vec![Sentence::from(vec![
            "Il", "a", "dit", "«", "non»", ".", "Elle", "a", "ri", "."
        ])]
    );
}

#[test]
fn test_spaced_guillemets_balance() {
    assert_eq!(
        segment("Il a dit « non » ! Elle a ri."),
        vec![
            toks(&["Il", "a", "dit", "«", "non", "»", "!"]),
            toks(&["Elle", "a", "ri", "."]),
        ]
    );
}

#[test]
fn test_dot_before_closing_quote_at_line_end() {
    assert_eq!(
        segment("Il a dit \"Partez.\""),
        vec![toks(&["Il", "a", "dit", "\"", "Partez", ".", "\""])]
    );
}

#[test]
fn test_lowercase_after_dot_continues_sentence() {
    assert_eq!(
        segment("Voir chap. trois pour plus de détails."),
        vec![toks(&[
            "Voir", "chap", ".", "trois", "pour", "plus", "de", "détails", "."
        ])]
    );
}

#[test]
fn test_decimal_comma_is_weak_punctuation() {
    assert_eq!(
        segment("Il mesure 1,80m environ"),
        vec![toks(&["Il", "mesure", "1", ",", "80", "m", "environ"])]
    );
}
