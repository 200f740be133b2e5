//! Blocking evaluator
//!
//! Decides, for a raw boundary candidate, whether it is a false positive
//! that must be suppressed. Three checks run in fixed order and any hit
//! blocks the candidate: abbreviation lookup, initials context, decimal
//! adjacency. The checks are heuristics over bounded local windows; an
//! ambiguous context falls through to "not blocked".

use regex::Regex;

use crate::error::{CoreError, Result};
use crate::lexicon::Lexicon;
use crate::scanner::TextIndex;

/// Longest abbreviation the backward scan has to consider, in characters
const ABBREVIATION_LOOKBACK: usize = 10;

/// Half-width of the initials search window, in characters
const INITIALS_WINDOW: usize = 20;

/// "Х. Х. Фамилия" — single uppercase Cyrillic letter with a period, an
/// optional second such pair, then a capitalized word.
const INITIALS_PATTERN: &str = r"\b[А-ЯЁ]\.\s*(?:[А-ЯЁ]\.\s*)?[А-ЯЁ][а-яё]+\b";

/// Suppresses boundary candidates that fall inside known exceptions
#[derive(Debug)]
pub(crate) struct BlockingEvaluator {
    initials: Regex,
}

impl BlockingEvaluator {
    pub(crate) fn new() -> Result<Self> {
        let initials = Regex::new(INITIALS_PATTERN).map_err(|source| CoreError::Pattern {
            name: "initials_context".to_string(),
            source,
        })?;

        Ok(Self { initials })
    }

    /// Whether the candidate at character offset `pos` must be suppressed
    pub(crate) fn is_blocked(&self, index: &TextIndex, lexicon: &Lexicon, pos: usize) -> bool {
        self.ends_with_abbreviation(index, lexicon, pos)
            || self.in_initials_context(index, pos)
            || self.splits_decimal(index, pos)
    }

    /// Abbreviation check
    ///
    /// Walks back from the candidate over the whitespace and the terminator
    /// run the rule consumed, then tries every contiguous substring of up to
    /// ten characters ending immediately before the terminator against the
    /// abbreviation set. Substring lengths cover everything from "г" to
    /// multi-word forms like "и т.д" without word-boundary tokenization,
    /// which is unreliable on punctuation-heavy runs.
    fn ends_with_abbreviation(&self, index: &TextIndex, lexicon: &Lexicon, pos: usize) -> bool {
        let mut i = pos.min(index.char_len());
        while i > 0 && index.char_at(i - 1).is_whitespace() {
            i -= 1;
        }
        let terminator_end = i;
        while i > 0 && matches!(index.char_at(i - 1), '.' | '!' | '?') {
            i -= 1;
        }
        if i == terminator_end || i == 0 {
            return false;
        }

        for len in 1..=ABBREVIATION_LOOKBACK.min(i) {
            let preceding = index.slice(i - len, i);
            if lexicon.is_abbreviation(&preceding) {
                return true;
            }
        }

        false
    }

    /// Initials check
    ///
    /// Searches a symmetric ±20-character window around the candidate for
    /// the Russian initials-plus-surname shape, e.g. "А. С. Пушкин". The
    /// search is unanchored: the pattern may sit anywhere in the window.
    fn in_initials_context(&self, index: &TextIndex, pos: usize) -> bool {
        let start = pos.saturating_sub(INITIALS_WINDOW);
        let end = (pos + INITIALS_WINDOW).min(index.char_len());
        let window = index.slice(start, end);

        self.initials.is_match(&window)
    }

    /// Decimal adjacency check, prevents splitting inside "3.14"
    fn splits_decimal(&self, index: &TextIndex, pos: usize) -> bool {
        pos > 0
            && pos < index.char_len()
            && index.char_at(pos - 1).is_ascii_digit()
            && index.char_at(pos).is_ascii_digit()
    }
}
