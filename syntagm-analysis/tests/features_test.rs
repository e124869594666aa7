//! Feature-vector tests over handcrafted texts.

use syntagm_analysis::features::extract;
use syntagm_analysis::measures::mean_span_length;
use syntagm_analysis::patterns::TextProfile;
use syntagm_analysis::tagpath::{decode_text, Category};
use syntagm_core::errors::{ExtractError, MeasureError};
use syntagm_core::types::{FeatureName, Text, TokenAnnotation};

fn index(feature: FeatureName) -> usize {
    FeatureName::ALL.iter().position(|f| *f == feature).unwrap()
}

/// Three tokens over two sentences, with every category present so the
/// whole vector is defined.
fn two_sentence_text() -> Text {
    Text::new(vec![
        TokenAnnotation::new(0, "B-SIMPX|VF|NX|B-R-SIMPX|C", "NN"),
        TokenAnnotation::new(0, "E-SIMPX|MF|E-R-SIMPX|PX|VC|VXFIN", "VVFIN"),
        TokenAnnotation::new(1, "P-SIMPX|NF|NX", "NN"),
    ])
}

#[test]
fn test_sentence_length_is_tokens_over_sentences() {
    let values = extract(&two_sentence_text()).unwrap();
    assert_eq!(values[index(FeatureName::SentenceLength)], 1.5); // 3 / 2
}

#[test]
fn test_per_sentence_ratios_use_span_initiating_counts() {
    let values = extract(&two_sentence_text()).unwrap();
    // One simplex, one relative, one paratactic clause over two sentences.
    assert_eq!(values[index(FeatureName::SimplexClausesPerSentence)], 0.5);
    assert_eq!(values[index(FeatureName::RelativeClausesPerSentence)], 0.5);
    assert_eq!(values[index(FeatureName::ParatacticClausesPerSentence)], 0.5);
    assert_eq!(values[index(FeatureName::ClausesPerSentence)], 1.5);
    assert_eq!(values[index(FeatureName::NounPhrasesPerSentence)], 1.0);
}

#[test]
fn test_per_clause_ratios_normalize_by_all_clauses() {
    let values = extract(&two_sentence_text()).unwrap();
    let third = 1.0 / 3.0;
    assert!((values[index(FeatureName::SimplexClauseRatio)] - third).abs() < 1e-12);
    assert!((values[index(FeatureName::RelativeClauseRatio)] - third).abs() < 1e-12);
    assert!((values[index(FeatureName::ParatacticClauseRatio)] - third).abs() < 1e-12);
    assert!((values[index(FeatureName::DependentClauseRatio)] - third).abs() < 1e-12);
}

#[test]
fn test_embedding_depth_discounts_topological_fields() {
    let values = extract(&two_sentence_text()).unwrap();
    // Depths: token 1 = 3 (SIMPX, NX, R-SIMPX; VF and C are fields),
    // token 2 = 4 (SIMPX, R-SIMPX, PX, VXFIN; MF and VC are fields),
    // token 3 = 2 (P-SIMPX, NX; NF is a field).
    assert!((values[index(FeatureName::TokenEmbeddingDepth)] - 3.0).abs() < 1e-12);
    assert_eq!(values[index(FeatureName::MaxSentenceEmbeddingDepth)], 3.0); // (4+2)/2
}

#[test]
fn test_verb_noun_ratio_uses_pos_column() {
    let values = extract(&two_sentence_text()).unwrap();
    assert_eq!(values[index(FeatureName::VerbNounRatio)], 0.5); // 1 VV / 2 NN
}

#[test]
fn test_noun_phrase_length_counts_nested_tags_per_span() {
    // NX opens 3 spans and occurs 5 times in total.
    let text = Text::new(vec![
        TokenAnnotation::new(0, "B-NX|I-NX", "NN"),
        TokenAnnotation::new(0, "NX|E-NX", "NN"),
        TokenAnnotation::new(0, "NX", "NN"),
    ]);
    let decoded = decode_text(&text).unwrap();
    let profile = TextProfile::build(&decoded);
    let counts = profile.counts(Category::NounPhrase);
    assert_eq!((counts.total, counts.spans), (5, 3));

    let length =
        mean_span_length(counts, Category::NounPhrase, FeatureName::NounPhraseLength)
            .unwrap();
    assert!((length - 5.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_missing_relative_clause_fails_the_length_feature() {
    // Everything present except R-SIMPX.
    let text = Text::new(vec![
        TokenAnnotation::new(0, "B-SIMPX|VF|NX|C", "NN"),
        TokenAnnotation::new(0, "E-SIMPX|MF|PX|VC|VXFIN", "VVFIN"),
        TokenAnnotation::new(1, "P-SIMPX|NF|NX", "NN"),
    ]);
    let err = extract(&text).unwrap_err();
    assert_eq!(
        err,
        ExtractError::Measure(MeasureError::EmptyCategory {
            category: "relative clause",
            feature: FeatureName::RelativeClauseLength,
        })
    );
}

#[test]
fn test_malformed_tag_path_fails_extraction() {
    let text = Text::new(vec![TokenAnnotation::new(0, "SIMPX||NX", "NN")]);
    assert!(matches!(
        extract(&text).unwrap_err(),
        ExtractError::Annotation(_)
    ));
}
