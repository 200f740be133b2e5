//! Lexical exception sets
//!
//! Fixed sets of abbreviations, honorific titles, and speech-reporting
//! verbs. Entries are normalized (lower-cased, trimmed) once at
//! construction; membership tests are exact string equality after the same
//! normalization. The sets are immutable after construction.

use std::collections::HashSet;

use crate::config::LanguageConfig;

/// Immutable exception sets consulted by the blocking evaluator
#[derive(Debug, Clone)]
pub struct Lexicon {
    abbreviations: HashSet<String>,
    titles: HashSet<String>,
    speech_verbs: HashSet<String>,
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

impl Lexicon {
    /// Build the exception sets from configuration
    pub fn from_config(config: &LanguageConfig) -> Self {
        let abbreviations = config
            .abbreviations
            .categories
            .values()
            .flatten()
            .map(|w| normalize(w))
            .collect();
        let titles = config.titles.words.iter().map(|w| normalize(w)).collect();
        let speech_verbs = config
            .speech_verbs
            .words
            .iter()
            .map(|w| normalize(w))
            .collect();

        Self {
            abbreviations,
            titles,
            speech_verbs,
        }
    }

    /// Exact membership test against the abbreviation set
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(normalize(word).as_str())
    }

    /// Exact membership test against the honorific title set
    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(normalize(word).as_str())
    }

    /// Exact membership test against the speech verb set
    pub fn is_speech_verb(&self, word: &str) -> bool {
        self.speech_verbs.contains(normalize(word).as_str())
    }

    /// Number of known abbreviations
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    pub(crate) fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.abbreviations.iter().map(String::as_str)
    }
}
