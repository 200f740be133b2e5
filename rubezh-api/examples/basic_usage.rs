//! Basic usage example for the segmentation API

use rubezh_api::{segment_text, sentenize, Config, Segmenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = segment_text("Первое предложение готово. Второе тоже готово. Хватит!")?;

    println!("Found {} sentences:", output.sentences.len());
    for (i, sentence) in output.sentences.iter().enumerate() {
        println!("  Sentence {}: {:?}", i + 1, sentence.text);
    }
    println!(
        "Quality score: {:.2}, took {}ms\n",
        output.metadata.quality_score, output.metadata.processing_time_ms
    );

    // Method 2: Shared-engine sentenize
    println!("=== Method 2: Shared Engine ===");
    let sentences = sentenize("Он родился в 1799 г. в Москве. Потом уехал.");
    println!("Shared engine found {} sentences", sentences.len());

    // Method 3: Custom abbreviations
    println!("\n=== Method 3: Custom Abbreviations ===");
    let config = Config::builder().abbreviation("мгу").build()?;
    let segmenter = Segmenter::with_config(config)?;

    let output = segmenter.segment_text("Я учился в МГУ. Потом работал.")?;
    println!("Custom config found {} sentences", output.sentences.len());

    Ok(())
}
