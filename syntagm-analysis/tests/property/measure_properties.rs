//! Property tests for the decoding and counting layers.

use proptest::prelude::*;

use syntagm_analysis::patterns::TextProfile;
use syntagm_analysis::tagpath::{decode_path, decode_text, Category};
use syntagm_core::types::{Text, TokenAnnotation};

fn marker() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("B-"), Just("I-"), Just("E-")]
}

fn label() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("SIMPX"),
        Just("R-SIMPX"),
        Just("P-SIMPX"),
        Just("C"),
        Just("NX"),
        Just("PX"),
        Just("VXFIN"),
        Just("VC"),
        Just("VF"),
        Just("MF"),
        Just("NF"),
        Just("ADVX"),
    ]
}

fn segment() -> impl Strategy<Value = String> {
    (marker(), label()).prop_map(|(m, l)| format!("{m}{l}"))
}

fn tag_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..6).prop_map(|segments| segments.join("|"))
}

fn pos_tag() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("NN"), Just("NE"), Just("VVFIN"), Just("ART"), Just("APPR")]
}

/// Sentences built non-empty, so contiguity holds by construction.
fn text() -> impl Strategy<Value = Text> {
    prop::collection::vec(
        prop::collection::vec((tag_path(), pos_tag()), 1..8),
        1..6,
    )
    .prop_map(|sentences| {
        let tokens = sentences
            .into_iter()
            .enumerate()
            .flat_map(|(sentence_id, rows)| {
                rows.into_iter()
                    .map(move |(path, pos)| TokenAnnotation::new(sentence_id, path, pos))
            })
            .collect();
        Text::new(tokens)
    })
}

proptest! {
    #[test]
    fn decoded_segment_count_matches_delimiters(path in tag_path()) {
        let segments = decode_path(&path).unwrap();
        prop_assert_eq!(segments.len(), path.split('|').count());
    }

    #[test]
    fn generated_texts_satisfy_the_contiguity_law(text in text()) {
        prop_assert!(text.validate().is_ok());
    }

    #[test]
    fn span_counts_never_exceed_totals(text in text()) {
        let decoded = decode_text(&text).unwrap();
        let profile = TextProfile::build(&decoded);
        for category in Category::ALL {
            let counts = profile.counts(category);
            prop_assert!(counts.spans <= counts.total, "{:?}", category);
        }
    }

    #[test]
    fn mean_length_times_spans_recovers_the_total(text in text()) {
        let decoded = decode_text(&text).unwrap();
        let profile = TextProfile::build(&decoded);
        for category in Category::ALL {
            let counts = profile.counts(category);
            if counts.spans > 0 {
                let mean_length = counts.total as f64 / counts.spans as f64;
                let recovered = mean_length * counts.spans as f64;
                prop_assert!((recovered - counts.total as f64).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn any_clause_total_is_the_sum_of_its_variants(text in text()) {
        let decoded = decode_text(&text).unwrap();
        let profile = TextProfile::build(&decoded);
        let sum = profile.counts(Category::SimplexClause).total
            + profile.counts(Category::RelativeClause).total
            + profile.counts(Category::ParatacticClause).total;
        prop_assert_eq!(profile.counts(Category::AnyClause).total, sum);
    }
}
