//! Quality scoring heuristic
//!
//! Post-hoc diagnostic for a finished segmentation. The score never feeds
//! back into the boundary decision; it only flags segmentations that
//! exhibit known failure signatures (too-short sentences, lowercase
//! sentence starts, abbreviation-only sentences).

use regex::Regex;

use crate::error::{CoreError, Result};
use crate::lexicon::Lexicon;

/// Penalty for a sentence shorter than three characters
const SHORT_SENTENCE_PENALTY: f64 = 0.1;

/// Penalty for a sentence starting with a lowercase letter
const LOWERCASE_START_PENALTY: f64 = 0.15;

/// Penalty for a short sentence that ends in a known abbreviation
const ABBREVIATION_ONLY_PENALTY: f64 = 0.2;

/// A materialized sentence with its trimmed span in character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Trimmed sentence text
    pub text: String,
    /// Character offset of the first kept character
    pub start: usize,
    /// Character offset one past the last kept character
    pub end: usize,
}

/// Scores a segmentation against known failure signatures
#[derive(Debug)]
pub(crate) struct QualityScorer {
    /// "known abbreviation + period", word-boundary anchored
    abbreviation: Option<Regex>,
}

impl QualityScorer {
    pub(crate) fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut entries: Vec<&str> = lexicon.abbreviations().collect();
        if entries.is_empty() {
            return Ok(Self { abbreviation: None });
        }
        // Deterministic pattern regardless of set iteration order.
        entries.sort_unstable();

        let alternation = entries
            .iter()
            .map(|entry| regex::escape(entry))
            .collect::<Vec<_>>()
            .join("|");
        let abbreviation =
            Regex::new(&format!(r"\b(?:{alternation})\.")).map_err(|source| CoreError::Pattern {
                name: "abbreviation_sentence".to_string(),
                source,
            })?;

        Ok(Self {
            abbreviation: Some(abbreviation),
        })
    }

    /// Score a finalized boundary list for `text`
    ///
    /// Returns 1.0 minus accumulated penalties, floored at 0.0. An empty
    /// boundary list scores 0.0 unconditionally, even though zero boundaries
    /// is correct for a single-sentence text; callers treat the score as a
    /// rough confidence signal, not a verdict.
    pub(crate) fn score(&self, text: &str, boundaries: &[usize]) -> f64 {
        if boundaries.is_empty() {
            return 0.0;
        }

        let mut penalties = 0.0;
        for sentence in split_sentences(text, boundaries) {
            let char_count = sentence.end - sentence.start;
            if char_count < 3 {
                penalties += SHORT_SENTENCE_PENALTY;
            }
            if sentence
                .text
                .chars()
                .next()
                .is_some_and(char::is_lowercase)
            {
                penalties += LOWERCASE_START_PENALTY;
            }
            if char_count < 10 && self.ends_in_abbreviation(&sentence.text) {
                penalties += ABBREVIATION_ONLY_PENALTY;
            }
        }

        (1.0 - penalties).max(0.0)
    }

    fn ends_in_abbreviation(&self, sentence: &str) -> bool {
        self.abbreviation
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(sentence))
    }
}

/// Split `text` at the given character offsets into trimmed sentences
///
/// Empty pieces are dropped. Offsets outside the text are clamped rather
/// than rejected; callers are expected to pass offsets produced by the
/// boundary scan on the same text.
pub(crate) fn split_sentences(text: &str, boundaries: &[usize]) -> Vec<Sentence> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;

    for &boundary in boundaries.iter().chain(std::iter::once(&chars.len())) {
        let end = boundary.min(chars.len());
        if let Some(sentence) = trimmed_piece(&chars, start, end) {
            sentences.push(sentence);
        }
        start = end;
    }

    sentences
}

fn trimmed_piece(chars: &[char], start: usize, end: usize) -> Option<Sentence> {
    let mut lo = start;
    let mut hi = end;
    while lo < hi && chars[lo].is_whitespace() {
        lo += 1;
    }
    while hi > lo && chars[hi - 1].is_whitespace() {
        hi -= 1;
    }
    if lo == hi {
        return None;
    }

    Some(Sentence {
        text: chars[lo..hi].iter().collect(),
        start: lo,
        end: hi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::embedded_config;

    fn scorer() -> QualityScorer {
        let config = embedded_config().expect("embedded config parses");
        QualityScorer::new(&Lexicon::from_config(&config)).unwrap()
    }

    #[test]
    fn test_split_keeps_trimmed_spans() {
        let sentences = split_sentences("Первое. Второе. Третье.", &[8, 16]);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "Первое.");
        assert_eq!((sentences[0].start, sentences[0].end), (0, 7));
        assert_eq!(sentences[1].text, "Второе.");
        assert_eq!((sentences[1].start, sentences[1].end), (8, 15));
        assert_eq!(sentences[2].text, "Третье.");
    }

    #[test]
    fn test_split_drops_whitespace_only_pieces() {
        let sentences = split_sentences("Раз.   ", &[5]);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "Раз.");
    }

    #[test]
    fn test_split_clamps_out_of_range_offsets() {
        let sentences = split_sentences("Раз.", &[100]);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "Раз.");
    }

    #[test]
    fn test_clean_segmentation_scores_full() {
        let scorer = scorer();
        let text = "Мама мыла раму. Папа читал газету.";
        assert_eq!(scorer.score(text, &[16]), 1.0);
    }

    #[test]
    fn test_empty_boundary_list_scores_zero() {
        // Zero boundaries always scores 0.0, even for a well-formed
        // single-sentence text. Documented conservative behavior.
        let scorer = scorer();
        assert_eq!(scorer.score("Привет, мир.", &[]), 0.0);
    }

    #[test]
    fn test_lowercase_start_is_penalized() {
        let scorer = scorer();
        let text = "Ура! победа общая.";
        let score = scorer.score(text, &[5]);
        assert!((score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_short_sentence_is_penalized() {
        let scorer = scorer();
        let text = "Э! Ну и ну.";
        let score = scorer.score(text, &[3]);
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_abbreviation_only_sentence_is_penalized() {
        let scorer = scorer();
        let text = "Смотри! В 1799 г.";
        let score = scorer.score(text, &[8]);
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_floored_at_zero() {
        let scorer = scorer();
        // Every piece is short and lowercase; penalties exceed 1.0.
        let text = "а. б. в. г. д. е. ж. з.";
        let boundaries: Vec<usize> = (1..8).map(|i| i * 3).collect();
        assert_eq!(scorer.score(text, &boundaries), 0.0);
    }
}
