use super::domain::QuestionRecord;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not a JSON array of questions: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode questions: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("question index {index} already exists in the collection")]
    DuplicateIndex { index: u32 },
    #[error("no question index left after {highest}")]
    IndicesExhausted { highest: u32 },
}

pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the collection as indented UTF-8 JSON with a trailing newline.
pub fn save_questions(
    path: impl AsRef<Path>,
    questions: &[QuestionRecord],
) -> Result<(), StoreError> {
    let path = path.as_ref();
    let mut encoded = serde_json::to_string_pretty(questions)?;
    encoded.push('\n');

    fs::write(path, encoded).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// First index free for new records: one past the highest existing index.
pub fn next_index(questions: &[QuestionRecord]) -> Result<u32, StoreError> {
    match questions.iter().map(|question| question.index).max() {
        None => Ok(1),
        Some(highest) => highest
            .checked_add(1)
            .ok_or(StoreError::IndicesExhausted { highest }),
    }
}

/// Adds `additions` behind `existing`, refusing any index collision.
pub fn append_questions(
    existing: &mut Vec<QuestionRecord>,
    additions: Vec<QuestionRecord>,
) -> Result<(), StoreError> {
    let mut taken: BTreeSet<u32> = existing.iter().map(|question| question.index).collect();
    for question in &additions {
        if !taken.insert(question.index) {
            return Err(StoreError::DuplicateIndex {
                index: question.index,
            });
        }
    }

    existing.extend(additions);
    Ok(())
}
