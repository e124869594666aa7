//! Node-tag and part-of-speech inventories.
//!
//! The label sets follow the TüBa-D/Z constituent annotation scheme as it
//! appears in the corpus: clause nodes (`SIMPX` and its relative/paratactic
//! variants), phrase nodes (`NX`, `PX`, verb groups), and topological
//! fields. Hyphenated and unhyphenated spellings of the clause variants
//! both occur in the data, so both are listed.

/// Simplex (unembedded) clause nodes.
pub const SIMPLEX_CLAUSE_TAGS: &[&str] = &["SIMPX"];

/// Dependent (subordinate) clause nodes.
pub const DEPENDENT_CLAUSE_TAGS: &[&str] = &["C"];

/// Relative clause nodes.
pub const RELATIVE_CLAUSE_TAGS: &[&str] = &["R-SIMPX", "RSIMPX"];

/// Paratactic clause-construction nodes.
pub const PARATACTIC_CLAUSE_TAGS: &[&str] = &["P-SIMPX", "PSIMPX"];

/// Finite and non-finite verb phrase nodes.
pub const VERB_PHRASE_TAGS: &[&str] = &["VXFIN", "VXINF"];

/// Verb complex nodes.
pub const VERB_COMPLEX_TAGS: &[&str] = &["VC", "VCE"];

/// Noun phrase nodes.
pub const NOUN_PHRASE_TAGS: &[&str] = &["NX"];

/// Prepositional phrase nodes.
pub const PREP_PHRASE_TAGS: &[&str] = &["PX"];

/// Initial field (Vorfeld) nodes.
pub const INITIAL_FIELD_TAGS: &[&str] = &["VF"];

/// Middle field (Mittelfeld) nodes.
pub const MIDDLE_FIELD_TAGS: &[&str] = &["MF"];

/// Final field (Nachfeld) nodes.
pub const FINAL_FIELD_TAGS: &[&str] = &["NF"];

/// Every topological-field node tag. These mark linear position inside a
/// clause, not syntactic nesting, and are discounted when computing
/// embedding depth.
pub const TOPOLOGICAL_FIELD_TAGS: &[&str] = &[
    "VF", "MF", "NF", "VFE", "MFE", "NFE", "LK", "LV", "KOORD", "FKOORD",
    "PARORD", "C", "CE", "VC", "VCE", "FKONJ",
];

/// Part-of-speech prefix shared by all full-verb forms
/// (VVFIN, VVINF, VVIZU, VVIMP, VVPP).
pub const FULL_VERB_POS_PREFIX: &str = "VV";

/// Part-of-speech tag for common nouns.
pub const COMMON_NOUN_POS_TAG: &str = "NN";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tags_cover_individual_fields() {
        for tag in INITIAL_FIELD_TAGS
            .iter()
            .chain(MIDDLE_FIELD_TAGS)
            .chain(FINAL_FIELD_TAGS)
        {
            assert!(TOPOLOGICAL_FIELD_TAGS.contains(tag));
        }
    }

    #[test]
    fn test_clause_tags_are_not_fields() {
        for tag in SIMPLEX_CLAUSE_TAGS
            .iter()
            .chain(RELATIVE_CLAUSE_TAGS)
            .chain(PARATACTIC_CLAUSE_TAGS)
        {
            assert!(!TOPOLOGICAL_FIELD_TAGS.contains(tag));
        }
    }
}
