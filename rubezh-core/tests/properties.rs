//! Property-based tests for the segmentation engine

use proptest::prelude::*;

use rubezh_core::SegmentationEngine;

proptest! {
    #[test]
    fn prop_scan_is_deterministic(text in "[а-яА-ЯёЁ0-9 .!?\\n]{0,80}") {
        let engine = SegmentationEngine::shared();
        let first = engine.find_sentence_boundaries(&text);
        let second = engine.find_sentence_boundaries(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_boundaries_sorted_unique_in_range(text in "[а-яА-ЯёЁ0-9 .!?\\n]{0,80}") {
        let engine = SegmentationEngine::shared();
        let boundaries = engine.find_sentence_boundaries(&text);
        let char_len = text.chars().count();

        for pair in boundaries.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for &boundary in &boundaries {
            prop_assert!(boundary <= char_len);
        }
    }

    #[test]
    fn prop_scan_is_total(text in any::<String>()) {
        // Never panics, whatever the input.
        let engine = SegmentationEngine::shared();
        let boundaries = engine.find_sentence_boundaries(&text);
        let _ = engine.quality_score(&text, &boundaries);
        let _ = engine.split_sentences(&text, &boundaries);
    }

    #[test]
    fn prop_quality_score_in_bounds(text in "[а-яА-ЯёЁ0-9 .!?\\n]{0,80}") {
        let engine = SegmentationEngine::shared();
        let boundaries = engine.find_sentence_boundaries(&text);
        let score = engine.quality_score(&text, &boundaries);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn prop_quality_score_safe_for_foreign_boundaries(
        text in "[а-яА-ЯёЁ .!?]{0,40}",
        mut boundaries in proptest::collection::vec(0usize..200, 0..5),
    ) {
        // Callers are supposed to pass boundaries from the scan on the same
        // text, but stray offsets must still degrade gracefully.
        boundaries.sort_unstable();
        let engine = SegmentationEngine::shared();
        let score = engine.quality_score(&text, &boundaries);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn prop_raw_pieces_reconstruct_text(text in "[а-яА-ЯёЁ0-9 .!?\\n]{0,80}") {
        let engine = SegmentationEngine::shared();
        let boundaries = engine.find_sentence_boundaries(&text);
        let chars: Vec<char> = text.chars().collect();

        let mut rebuilt = String::new();
        let mut start = 0;
        for &boundary in boundaries.iter().chain(std::iter::once(&chars.len())) {
            rebuilt.extend(&chars[start..boundary]);
            start = boundary;
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_sentences_are_trimmed_and_ordered(text in "[а-яА-ЯёЁ0-9 .!?\\n]{0,80}") {
        let engine = SegmentationEngine::shared();
        let boundaries = engine.find_sentence_boundaries(&text);
        let sentences = engine.split_sentences(&text, &boundaries);

        for sentence in &sentences {
            prop_assert!(!sentence.text.is_empty());
            prop_assert!(sentence.start < sentence.end);
            prop_assert!(!sentence.text.starts_with(char::is_whitespace));
            prop_assert!(!sentence.text.ends_with(char::is_whitespace));
        }
        for pair in sentences.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }
}
