//! The segmentation engine
//!
//! Owns the compiled rule table, the lexical exception sets, and the
//! blocking evaluator. Construction compiles everything once; after that
//! the engine holds only immutable state and is safe to share across
//! threads without locks.

use tracing::debug;

use crate::blocking::BlockingEvaluator;
use crate::config::LanguageConfig;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::loader::embedded_config;
use crate::quality::{split_sentences, QualityScorer, Sentence};
use crate::rules::RuleTable;
use crate::scanner;

/// Rule-based sentence boundary detector for Russian text
#[derive(Debug)]
pub struct SegmentationEngine {
    rules: RuleTable,
    lexicon: Lexicon,
    blocking: BlockingEvaluator,
    scorer: QualityScorer,
}

impl SegmentationEngine {
    /// Build an engine from the embedded Russian configuration
    pub fn new() -> Result<Self> {
        Self::from_config(&embedded_config()?)
    }

    /// Build an engine from an explicit configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let rules = RuleTable::from_config(&config.rules)?;
        let lexicon = Lexicon::from_config(config);
        let blocking = BlockingEvaluator::new()?;
        let scorer = QualityScorer::new(&lexicon)?;

        debug!(
            language = %config.metadata.code,
            rules = rules.len(),
            abbreviations = lexicon.abbreviation_count(),
            "compiled segmentation engine"
        );

        Ok(Self {
            rules,
            lexicon,
            blocking,
            scorer,
        })
    }

    /// Process-wide shared engine built from the embedded configuration
    ///
    /// Initialization is idempotent under concurrent first access.
    pub fn shared() -> &'static SegmentationEngine {
        static SHARED: std::sync::OnceLock<SegmentationEngine> = std::sync::OnceLock::new();
        SHARED.get_or_init(|| {
            SegmentationEngine::new().expect("embedded Russian configuration must compile")
        })
    }

    /// Find sentence boundaries in `text`
    ///
    /// Returns deduplicated character offsets in ascending order; each
    /// offset is the position where a new sentence begins. Total over any
    /// input: empty text and text without boundary punctuation return an
    /// empty vector.
    pub fn find_sentence_boundaries(&self, text: &str) -> Vec<usize> {
        scanner::scan(&self.rules, &self.blocking, &self.lexicon, text)
    }

    /// Heuristic confidence estimate for a finished segmentation, in [0.0, 1.0]
    ///
    /// `boundaries` must come from [`find_sentence_boundaries`] on the same
    /// text. An empty boundary list scores 0.0 unconditionally.
    ///
    /// [`find_sentence_boundaries`]: SegmentationEngine::find_sentence_boundaries
    pub fn quality_score(&self, text: &str, boundaries: &[usize]) -> f64 {
        self.scorer.score(text, boundaries)
    }

    /// Materialize trimmed sentences from a boundary list
    pub fn split_sentences(&self, text: &str, boundaries: &[usize]) -> Vec<Sentence> {
        split_sentences(text, boundaries)
    }

    /// Convenience wrapper: scan and materialize in one call
    pub fn sentenize(&self, text: &str) -> Vec<Sentence> {
        let boundaries = self.find_sentence_boundaries(text);
        split_sentences(text, &boundaries)
    }

    /// The compiled rule table
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The lexical exception sets
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
