//! Public API for rubezh Russian sentence segmentation
//!
//! This crate provides a clean, stable interface over the rule engine in
//! `rubezh-core`: input acquisition, sentence materialization, and a small
//! configuration surface. The engine itself stays hidden behind DTOs.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::sync::Arc;

use rubezh_core::SegmentationEngine;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Boundary, BoundaryDTO, Input, Metadata, Output, Sentence, SentenceDTO};
pub use error::{ApiError, Result};

/// Main entry point for Russian sentence segmentation
///
/// Holds an immutable engine instance; cheap to clone the inner handle and
/// safe to share across threads.
pub struct Segmenter {
    inner: Arc<SegmentationEngine>,
    config: Config,
}

impl Segmenter {
    /// Create a segmenter with the built-in configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a segmenter with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let engine = if config.extra_abbreviations.is_empty() {
            SegmentationEngine::new()?
        } else {
            let mut language = rubezh_core::embedded_config()?;
            language
                .abbreviations
                .categories
                .entry("custom".to_string())
                .or_default()
                .extend(config.extra_abbreviations.iter().cloned());
            SegmentationEngine::from_config(&language)?
        };

        Ok(Self {
            inner: Arc::new(engine),
            config,
        })
    }

    /// Segment input and return sentences, boundaries, and metadata
    pub fn segment(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();
        let text = input.read_text()?;

        let boundaries = self.inner.find_sentence_boundaries(&text);
        let quality_score = self.inner.quality_score(&text, &boundaries);
        let sentences = self
            .inner
            .split_sentences(&text, &boundaries)
            .into_iter()
            .map(SentenceDTO::from)
            .collect();

        // Boundary offsets come out of the engine in character units; the
        // byte view is derived here for callers that slice the original.
        let byte_of_char: Vec<usize> = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(text.len()))
            .collect();
        let boundaries = boundaries
            .into_iter()
            .map(|char_offset| BoundaryDTO {
                char_offset,
                byte_offset: byte_of_char[char_offset],
            })
            .collect();

        let metadata = Metadata {
            total_bytes: text.len(),
            total_chars: byte_of_char.len() - 1,
            processing_time_ms: start.elapsed().as_millis() as u64,
            quality_score,
        };

        Ok(Output {
            sentences,
            boundaries,
            metadata,
        })
    }

    /// Segment a text string directly (convenience method)
    pub fn segment_text(&self, text: &str) -> Result<Output> {
        self.segment(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new().expect("default segmenter creation should not fail")
    }
}

// Convenience functions over the shared engine

/// Split text into sentences with the shared engine
pub fn sentenize(text: &str) -> Vec<SentenceDTO> {
    SegmentationEngine::shared()
        .sentenize(text)
        .into_iter()
        .map(SentenceDTO::from)
        .collect()
}

/// Find sentence boundaries (character offsets) with the shared engine
pub fn find_sentence_boundaries(text: &str) -> Vec<usize> {
    rubezh_core::find_sentence_boundaries(text)
}

/// Score a finished segmentation with the shared engine
pub fn get_quality_score(text: &str, boundaries: &[usize]) -> f64 {
    rubezh_core::get_quality_score(text, boundaries)
}

/// Segment text with default configuration
pub fn segment_text(text: &str) -> Result<Output> {
    let segmenter = Segmenter::new()?;
    segmenter.segment(Input::from_text(text))
}

/// Segment a file with default configuration
pub fn segment_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let segmenter = Segmenter::new()?;
    segmenter.segment(Input::from_file(path.as_ref().to_path_buf()))
}
