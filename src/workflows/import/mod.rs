//! Spreadsheet import: turns the "Regelfragen" sheet (CSV export) into
//! question records.

mod layout;
mod validation;

pub use validation::{RowError, RowViolation};

use crate::workflows::questions::classification::{
    annotate_with_reference, ClassificationError, CriteriaExtractor, RuleClassifier,
    TagClassifier,
};
use crate::workflows::questions::{CriterionLabel, QuestionRecord, SourceType};
use layout::{SheetLayout, SheetRow};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};
use validation::{validate_row, SourceFormats};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumns(Vec<&'static str>),
    IndicesExhausted,
    Classification(ClassificationError),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read question sheet: {}", err),
            ImportError::Csv(err) => write!(f, "invalid question sheet data: {}", err),
            ImportError::MissingColumns(columns) => {
                write!(f, "question sheet is missing columns: {}", columns.join(", "))
            }
            ImportError::IndicesExhausted => {
                write!(f, "question sheet has more rows than free indices")
            }
            ImportError::Classification(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::MissingColumns(_) | ImportError::IndicesExhausted => None,
            ImportError::Classification(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ClassificationError> for ImportError {
    fn from(err: ClassificationError) -> Self {
        Self::Classification(err)
    }
}

/// Records built from valid rows plus the errors of every skipped row.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub questions: Vec<QuestionRecord>,
    pub errors: Vec<RowError>,
}

impl ImportOutcome {
    /// Nothing usable came out of a sheet that had problems.
    pub fn is_failure(&self) -> bool {
        self.questions.is_empty() && !self.errors.is_empty()
    }
}

pub struct QuestionImporter {
    rules: RuleClassifier,
    tags: TagClassifier,
    criteria: CriteriaExtractor,
    formats: SourceFormats,
}

impl QuestionImporter {
    pub fn new() -> Result<Self, ClassificationError> {
        Ok(Self {
            rules: RuleClassifier::standard()?,
            tags: TagClassifier::import()?,
            criteria: CriteriaExtractor::new()?,
            formats: SourceFormats::new()?,
        })
    }

    pub fn import_path<P: AsRef<Path>>(
        &self,
        path: P,
        start_index: u32,
    ) -> Result<ImportOutcome, ImportError> {
        let file = std::fs::File::open(path)?;
        self.import_reader(file, start_index)
    }

    /// Row problems are collected in the outcome; only an unreadable sheet or
    /// missing columns abort the import.
    pub fn import_reader<R: Read>(
        &self,
        reader: R,
        start_index: u32,
    ) -> Result<ImportOutcome, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let layout = SheetLayout::detect(csv_reader.headers()?)
            .map_err(ImportError::MissingColumns)?;
        if layout.is_combined() {
            info!("combined source column detected, reading older sheet layout");
        }

        let mut outcome = ImportOutcome::default();
        let mut next = Some(start_index);

        for (offset, record) in csv_reader.records().enumerate() {
            // header is row 1
            let row = offset + 2;
            let record = match record {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    let error = RowError::new(row, unreadable_row(&err));
                    warn!(%error, "sheet row skipped");
                    outcome.errors.push(error);
                    continue;
                }
            };

            let sheet_row = match layout.read_row(&record, row, &self.formats) {
                None => continue,
                Some(Ok(sheet_row)) => sheet_row,
                Some(Err(error)) => {
                    warn!(%error, "sheet row skipped");
                    outcome.errors.push(error);
                    continue;
                }
            };

            match validate_row(&sheet_row, &self.formats) {
                Ok(valid) => {
                    let index = next.ok_or(ImportError::IndicesExhausted)?;
                    let question = self.build_question(index, sheet_row, valid);
                    debug!(index, source = %question.source, "sheet row converted");
                    outcome.questions.push(question);
                    next = index.checked_add(1);
                }
                Err(errors) => {
                    for error in &errors {
                        warn!(%error, "sheet row skipped");
                    }
                    outcome.errors.extend(errors);
                }
            }
        }

        info!(
            converted = outcome.questions.len(),
            errors = outcome.errors.len(),
            "question sheet imported"
        );
        Ok(outcome)
    }

    fn build_question(
        &self,
        index: u32,
        row: SheetRow,
        valid: validation::ValidRow,
    ) -> QuestionRecord {
        let SheetRow {
            issue,
            situation,
            answer,
            rule_reference,
            ..
        } = row;

        let rule_reference = rule_reference
            .unwrap_or_else(|| self.rules.classify(&situation, &answer).to_string());
        let (criteria_full, criteria_partial) = self.criteria.extract(&answer);
        let tags = self.tags.classify(&situation, &answer);
        let explanation = annotate_with_reference(&answer, &rule_reference);

        let mut question = QuestionRecord::new(
            index,
            situation,
            answer,
            source_label(valid.source_type, &issue),
        );
        question.criteria_full = criteria_full.into_iter().map(CriterionLabel::from).collect();
        question.criteria_partial = criteria_partial
            .into_iter()
            .map(CriterionLabel::from)
            .collect();
        question.source_date = Some(valid.source_date);
        question.rule_reference = Some(rule_reference);
        question.tags = tags;
        question.explanation = Some(explanation);
        question
    }
}

fn unreadable_row(err: &csv::Error) -> RowViolation {
    let reason = match err.kind() {
        csv::ErrorKind::Utf8 { err, .. } => {
            format!("column {} is not valid UTF-8", err.field() + 1)
        }
        _ => err.to_string(),
    };
    RowViolation::Unreadable { reason }
}

fn source_label(source_type: SourceType, issue: &str) -> String {
    format!("{} {}", source_type.label(), issue)
}
