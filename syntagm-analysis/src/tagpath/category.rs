//! Node-label categories and their matching predicates.

use syntagm_core::constants::{
    COMMON_NOUN_POS_TAG, DEPENDENT_CLAUSE_TAGS, FINAL_FIELD_TAGS,
    FULL_VERB_POS_PREFIX, INITIAL_FIELD_TAGS, MIDDLE_FIELD_TAGS, NOUN_PHRASE_TAGS,
    PARATACTIC_CLAUSE_TAGS, PREP_PHRASE_TAGS, RELATIVE_CLAUSE_TAGS,
    SIMPLEX_CLAUSE_TAGS, TOPOLOGICAL_FIELD_TAGS, VERB_COMPLEX_TAGS,
    VERB_PHRASE_TAGS,
};

/// Which annotation column a category is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationColumn {
    /// The structural tag-path column.
    TagPath,
    /// The part-of-speech column.
    Pos,
}

/// A family of node labels (or part-of-speech tags) whose occurrences are
/// counted for the ratio and length features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SimplexClause,
    DependentClause,
    RelativeClause,
    ParatacticClause,
    /// Union of the simplex, relative, and paratactic clause labels.
    AnyClause,
    VerbPhrase,
    VerbComplex,
    NounPhrase,
    PrepPhrase,
    InitialField,
    MiddleField,
    FinalField,
    /// Every topological-field tag; discounted from embedding depth.
    TopologicalField,
    FullVerb,
    CommonNoun,
}

impl Category {
    /// All categories, in discriminant order.
    pub const ALL: [Category; 15] = [
        Self::SimplexClause,
        Self::DependentClause,
        Self::RelativeClause,
        Self::ParatacticClause,
        Self::AnyClause,
        Self::VerbPhrase,
        Self::VerbComplex,
        Self::NounPhrase,
        Self::PrepPhrase,
        Self::InitialField,
        Self::MiddleField,
        Self::FinalField,
        Self::TopologicalField,
        Self::FullVerb,
        Self::CommonNoun,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn column(self) -> AnnotationColumn {
        match self {
            Self::FullVerb | Self::CommonNoun => AnnotationColumn::Pos,
            _ => AnnotationColumn::TagPath,
        }
    }

    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::SimplexClause => "simplex clause",
            Self::DependentClause => "dependent clause",
            Self::RelativeClause => "relative clause",
            Self::ParatacticClause => "paratactic clause construction",
            Self::AnyClause => "clause",
            Self::VerbPhrase => "verb phrase",
            Self::VerbComplex => "verb complex",
            Self::NounPhrase => "noun phrase",
            Self::PrepPhrase => "prepositional phrase",
            Self::InitialField => "initial field",
            Self::MiddleField => "middle field",
            Self::FinalField => "final field",
            Self::TopologicalField => "topological field",
            Self::FullVerb => "full verb",
            Self::CommonNoun => "common noun",
        }
    }

    /// Structural predicate: does `label` belong to this category?
    ///
    /// For tag-path categories `label` is a decoded segment label; for
    /// part-of-speech categories it is the token's `pos_tag`.
    pub fn matches(self, label: &str) -> bool {
        match self {
            Self::SimplexClause => SIMPLEX_CLAUSE_TAGS.contains(&label),
            Self::DependentClause => DEPENDENT_CLAUSE_TAGS.contains(&label),
            Self::RelativeClause => RELATIVE_CLAUSE_TAGS.contains(&label),
            Self::ParatacticClause => PARATACTIC_CLAUSE_TAGS.contains(&label),
            Self::AnyClause => {
                Self::SimplexClause.matches(label)
                    || Self::RelativeClause.matches(label)
                    || Self::ParatacticClause.matches(label)
            }
            Self::VerbPhrase => VERB_PHRASE_TAGS.contains(&label),
            Self::VerbComplex => VERB_COMPLEX_TAGS.contains(&label),
            Self::NounPhrase => NOUN_PHRASE_TAGS.contains(&label),
            Self::PrepPhrase => PREP_PHRASE_TAGS.contains(&label),
            Self::InitialField => INITIAL_FIELD_TAGS.contains(&label),
            Self::MiddleField => MIDDLE_FIELD_TAGS.contains(&label),
            Self::FinalField => FINAL_FIELD_TAGS.contains(&label),
            Self::TopologicalField => TOPOLOGICAL_FIELD_TAGS.contains(&label),
            Self::FullVerb => label.starts_with(FULL_VERB_POS_PREFIX),
            Self::CommonNoun => label == COMMON_NOUN_POS_TAG,
        }
    }
}
