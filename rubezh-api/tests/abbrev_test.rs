//! Test abbreviation handling in the API layer

use rubezh_api::{segment_text, sentenize, Config, Segmenter};

#[test]
fn test_api_abbreviations() {
    // "г." after a year must not end the sentence
    let output = segment_text("Он родился в 1799 г. в Москве.").unwrap();
    eprintln!("-> {} boundaries", output.boundaries.len());
    for (i, b) in output.boundaries.iter().enumerate() {
        eprintln!("  [{}] char_offset={}", i, b.char_offset);
    }

    assert_eq!(output.boundaries.len(), 0, "г. is an abbreviation");
    assert_eq!(output.sentences.len(), 1);
}

#[test]
fn test_api_address_abbreviations() {
    let output = segment_text("Москва, ул. Тверская, д. 1.").unwrap();
    assert_eq!(
        output.sentences.len(),
        1,
        "ул. and д. must not split the address"
    );
}

#[test]
fn test_api_initials() {
    let output = segment_text("А. С. Пушкин - великий русский поэт.").unwrap();
    eprintln!("-> {} boundaries", output.boundaries.len());

    assert_eq!(output.boundaries.len(), 0, "initials must not split");
    assert_eq!(output.sentences.len(), 1);
}

#[test]
fn test_api_professor_sentence_still_splits() {
    let output = segment_text("Лекцию читал проф. Иванов из МГУ. Было интересно.").unwrap();

    assert_eq!(output.sentences.len(), 2);
    assert_eq!(output.sentences[0].text, "Лекцию читал проф. Иванов из МГУ.");
    assert_eq!(output.sentences[1].text, "Было интересно.");
}

#[test]
fn test_custom_abbreviation_changes_segmentation() {
    let text = "Я учился в МГУ. Потом работал.";

    // Built-in lexicon does not know "мгу", so the text splits.
    let default_output = segment_text(text).unwrap();
    assert_eq!(default_output.sentences.len(), 2);

    // With "мгу" injected, the candidate after "МГУ." is suppressed.
    let config = Config::builder().abbreviation("мгу").build().unwrap();
    let segmenter = Segmenter::with_config(config).unwrap();
    let output = segmenter.segment_text(text).unwrap();
    assert_eq!(output.sentences.len(), 1);
}

#[test]
fn test_sentenize_multi_sentence() {
    let sentences = sentenize("Первое. Второе. Третье.");
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["Первое.", "Второе.", "Третье."]);
}
