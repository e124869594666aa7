//! Pipeline benchmarks: sequential vs. parallel extraction.
//!
//! Run with: cargo bench -p syntagm-analysis --bench pipeline_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use syntagm_analysis::AnalysisPipeline;
use syntagm_core::config::AnalysisConfig;
use syntagm_core::types::{Corpus, Text, TextId, TokenAnnotation};

/// A text with every category present, `sentences` sentences long.
fn synthetic_text(sentences: usize) -> Text {
    let mut tokens = Vec::with_capacity(sentences * 8);
    for sentence_id in 0..sentences {
        tokens.extend([
            TokenAnnotation::new(sentence_id, "B-SIMPX|VF|B-NX", "ART"),
            TokenAnnotation::new(sentence_id, "I-SIMPX|VF|E-NX", "NN"),
            TokenAnnotation::new(sentence_id, "I-SIMPX|LK|VXFIN", "VVFIN"),
            TokenAnnotation::new(sentence_id, "I-SIMPX|MF|B-PX", "APPR"),
            TokenAnnotation::new(sentence_id, "I-SIMPX|MF|E-PX|NX", "NN"),
            TokenAnnotation::new(sentence_id, "I-SIMPX|MF|B-R-SIMPX|C|NX", "PRELS"),
            TokenAnnotation::new(sentence_id, "I-SIMPX|NF|E-R-SIMPX|VC|VXINF", "VVINF"),
            TokenAnnotation::new(sentence_id, "E-SIMPX|P-SIMPX|NX", "NN"),
        ]);
    }
    Text::new(tokens)
}

fn synthetic_corpus(years: usize, texts_per_year: usize) -> Corpus {
    let mut corpus = Corpus::new();
    for year in 0..years {
        for no in 0..texts_per_year {
            corpus.insert(
                TextId::new(1800 + year as i32, no as u32 + 1),
                synthetic_text(20 + no % 10),
            );
        }
    }
    corpus
}

fn pipeline_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_run");
    group.sample_size(20);

    for texts_per_year in [10, 50] {
        let corpus = synthetic_corpus(5, texts_per_year);

        group.bench_with_input(
            BenchmarkId::new("sequential", texts_per_year),
            &corpus,
            |b, corpus| {
                let pipeline = AnalysisPipeline::new(AnalysisConfig {
                    parallel: Some(false),
                    ..Default::default()
                });
                b.iter(|| pipeline.run(corpus).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", texts_per_year),
            &corpus,
            |b, corpus| {
                let pipeline = AnalysisPipeline::new(AnalysisConfig {
                    parallel: Some(true),
                    ..Default::default()
                });
                b.iter(|| pipeline.run(corpus).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, pipeline_run);
criterion_main!(benches);
