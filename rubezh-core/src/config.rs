//! Configuration structures and validation
//!
//! This module defines the TOML schema for the Russian segmentation
//! configuration (rules and lexical exception sets).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language metadata
    pub metadata: Metadata,
    /// Boundary-detection rules, in declaration order
    pub rules: Vec<RuleConfig>,
    /// Abbreviation categories
    pub abbreviations: Abbreviations,
    /// Honorific titles and positions (often precede a full name)
    #[serde(default)]
    pub titles: WordList,
    /// Speech-reporting verbs (often precede direct speech)
    #[serde(default)]
    pub speech_verbs: WordList,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code, e.g. "ru"
    pub code: String,
    /// Human-readable language name
    pub name: String,
}

/// A single segmentation rule as declared in configuration
///
/// `pattern` uses `regex` crate syntax. When the pattern contains a capture
/// group, the boundary candidate falls at the end of group 1; otherwise at
/// the end of the whole match. This keeps candidate positions independent of
/// any context the pattern has to consume to decide the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Unique rule identifier, for diagnostics
    pub name: String,
    /// Pattern source text
    pub pattern: String,
    /// Higher priority rules are evaluated first; ties keep declaration order
    pub priority: i32,
    /// Whether a match denotes a boundary candidate
    pub boundary: bool,
    /// Human-readable rationale, not used at runtime
    pub description: String,
}

/// Abbreviation configuration, categorized for maintainability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviations {
    /// Category name -> abbreviations (stored without the trailing period)
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// A flat word list section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    /// The words in this list
    #[serde(default)]
    pub words: Vec<String>,
}

impl LanguageConfig {
    /// Validate configuration before the engine is built from it
    pub(crate) fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(CoreError::Config("no segmentation rules defined".into()));
        }

        let mut seen = std::collections::HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(CoreError::Config(format!(
                    "duplicate rule name '{}'",
                    rule.name
                )));
            }
        }

        if self.abbreviations.categories.values().all(|v| v.is_empty()) {
            return Err(CoreError::Config("no abbreviations defined".into()));
        }

        Ok(())
    }
}
