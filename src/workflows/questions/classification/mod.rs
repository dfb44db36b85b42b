//! Keyword-driven classification of question text into rule citations,
//! topic tags and grading criteria.

mod criteria;
mod explanation;
mod matcher;
mod patterns;
mod rules;
mod tags;

pub use criteria::{derive_partial, CriteriaExtractor};
pub use explanation::{annotate_with_reference, split_sentences, synthesize_explanation};
pub use matcher::{CaseMode, PatternSpec, TextPattern};
pub use rules::{RuleClassifier, RuleReference, RuleScore, RuleSelection};
pub use tags::TagClassifier;

/// Raised when a keyword table fails to compile into regexes.
#[derive(Debug, thiserror::Error)]
#[error("classification patterns failed to compile: {0}")]
pub struct ClassificationError(#[from] regex::Error);
