//! Rule-based sentence boundary detection for Russian text
//!
//! This crate implements a linguistic heuristics engine: boundary
//! candidates are proposed by a prioritized table of regular-expression
//! rules, then filtered by context-sensitive blocking logic that knows
//! about Russian abbreviations, initials, and decimal numbers. There is no
//! statistical model; correctness depends on the completeness and
//! precedence of the hand-curated rule sets.
//!
//! # Example
//!
//! ```rust
//! use rubezh_core::SegmentationEngine;
//!
//! let engine = SegmentationEngine::shared();
//! let text = "Первое. Второе. Третье.";
//!
//! let boundaries = engine.find_sentence_boundaries(text);
//! assert_eq!(boundaries, [8, 16]);
//!
//! let sentences = engine.sentenize(text);
//! assert_eq!(sentences.len(), 3);
//!
//! let score = engine.quality_score(text, &boundaries);
//! assert!(score > 0.9);
//! ```
//!
//! All offsets are character (code point) positions, never bytes; the ±10
//! and ±20 character context windows of the blocking logic are defined in
//! the same units, so results are stable across encodings.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod quality;
pub mod rules;

mod blocking;
mod engine;
mod scanner;

pub use config::LanguageConfig;
pub use engine::SegmentationEngine;
pub use error::{CoreError, Result};
pub use lexicon::Lexicon;
pub use loader::embedded_config;
pub use quality::Sentence;
pub use rules::{RuleTable, SegmentationRule};

/// Find sentence boundaries using the shared engine
///
/// See [`SegmentationEngine::find_sentence_boundaries`].
pub fn find_sentence_boundaries(text: &str) -> Vec<usize> {
    SegmentationEngine::shared().find_sentence_boundaries(text)
}

/// Score a finished segmentation using the shared engine
///
/// See [`SegmentationEngine::quality_score`].
pub fn get_quality_score(text: &str, boundaries: &[usize]) -> f64 {
    SegmentationEngine::shared().quality_score(text, boundaries)
}
