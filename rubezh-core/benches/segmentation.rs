//! Scanner throughput benchmarks
//!
//! Run with: cargo bench --bench segmentation

use criterion::{criterion_group, criterion_main, Criterion};
use rubezh_core::SegmentationEngine;
use std::hint::black_box;

fn sample_text() -> String {
    let paragraph = "Москва, ул. Тверская, д. 1. XXI век наступил давно. \
                     А. С. Пушкин родился в 1799 г. в Москве. Число равно 3.14 и больше нуля. \
                     Лекцию читал проф. Иванов из МГУ. Было интересно. Потом все разошлись.\n\n";
    paragraph.repeat(64)
}

fn bench_find_boundaries(c: &mut Criterion) {
    let engine = SegmentationEngine::shared();
    let text = sample_text();

    c.bench_function("find_sentence_boundaries", |b| {
        b.iter(|| engine.find_sentence_boundaries(black_box(&text)))
    });
}

fn bench_quality_score(c: &mut Criterion) {
    let engine = SegmentationEngine::shared();
    let text = sample_text();
    let boundaries = engine.find_sentence_boundaries(&text);

    c.bench_function("quality_score", |b| {
        b.iter(|| engine.quality_score(black_box(&text), black_box(&boundaries)))
    });
}

criterion_group!(benches, bench_find_boundaries, bench_quality_score);
criterion_main!(benches);
