//! Boundary candidate scan
//!
//! Applies the rule table to the input text in descending priority order
//! and collects the candidates that survive the blocking evaluator.
//!
//! All positions handed to the blocking evaluator and returned to callers
//! are character (code point) offsets. The `regex` crate reports byte
//! offsets, so the scan keeps a byte-to-character index for the text.

use std::collections::BTreeSet;

use tracing::trace;

use crate::blocking::BlockingEvaluator;
use crate::lexicon::Lexicon;
use crate::rules::RuleTable;

/// Character-level view of the input with byte offset translation
pub(crate) struct TextIndex {
    chars: Vec<char>,
    /// Byte offset where each character starts, plus a trailing sentinel
    byte_starts: Vec<usize>,
}

impl TextIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut byte_starts = Vec::with_capacity(text.len() + 1);
        for (byte, ch) in text.char_indices() {
            chars.push(ch);
            byte_starts.push(byte);
        }
        byte_starts.push(text.len());

        Self { chars, byte_starts }
    }

    /// Number of characters in the text
    pub(crate) fn char_len(&self) -> usize {
        self.chars.len()
    }

    /// Character at a character offset
    pub(crate) fn char_at(&self, pos: usize) -> char {
        self.chars[pos]
    }

    /// Translate a byte offset on a character boundary to a character offset
    ///
    /// Match ends reported by `regex` always lie on character boundaries.
    pub(crate) fn char_of_byte(&self, byte: usize) -> usize {
        self.byte_starts
            .binary_search(&byte)
            .unwrap_or_else(|insert| insert)
    }

    /// Materialize a character range as a string
    pub(crate) fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

/// Run the full candidate scan over `text`
///
/// Candidates are deduplicated across rules and returned ascending.
pub(crate) fn scan(
    table: &RuleTable,
    blocking: &BlockingEvaluator,
    lexicon: &Lexicon,
    text: &str,
) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let index = TextIndex::new(text);
    let mut accepted = BTreeSet::new();

    for rule in table.iter() {
        if !rule.is_boundary() {
            // Suppressive rules carry no candidates of their own.
            continue;
        }
        for byte_end in rule.candidate_offsets(text) {
            let pos = index.char_of_byte(byte_end);
            if blocking.is_blocked(&index, lexicon, pos) {
                trace!(rule = rule.name(), pos, "boundary candidate suppressed");
                continue;
            }
            accepted.insert(pos);
        }
    }

    accepted.into_iter().collect()
}
