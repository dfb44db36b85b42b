pub mod classification;
pub mod domain;
pub mod source_date;
pub mod store;
pub mod summary;

pub use domain::{Criterion, CriterionLabel, QuestionRecord, Rule, SourceType, Tag};
pub use source_date::{SourceDateError, SourceDateStrategy};
pub use store::{append_questions, load_questions, next_index, save_questions, StoreError};
pub use summary::CollectionSummary;
