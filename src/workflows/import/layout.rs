use super::validation::{RowError, RowViolation, SourceFormats};
use csv::StringRecord;

const SOURCE_TYPE: &str = "Quellentyp";
const SOURCE: &str = "Quelle";
const ISSUE: &str = "Ausgabe";
const SITUATION: &str = "Situation";
const ANSWER: &str = "Antwort";
const RULE_REFERENCE: &str = "Regelreferenz";

/// Combined sheets without headers for these columns use fixed positions.
const COMBINED_SITUATION_COLUMN: usize = 2;
const COMBINED_ANSWER_COLUMN: usize = 3;
const COMBINED_RULE_REFERENCE_COLUMN: usize = 4;

/// Column positions of a sheet, decided once from its header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SheetLayout {
    /// Source type and issue in separate columns.
    Split {
        source_type: usize,
        issue: usize,
        situation: usize,
        answer: usize,
        rule_reference: Option<usize>,
    },
    /// Older sheets with one `Quelle` cell such as `SR-Zeitung 03/2025`.
    Combined {
        source: usize,
        situation: usize,
        answer: usize,
        rule_reference: usize,
    },
}

/// A sheet row reduced to the cells the importer needs, cells trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SheetRow {
    pub(crate) row: usize,
    pub(crate) source_type: String,
    pub(crate) issue: String,
    pub(crate) situation: String,
    pub(crate) answer: String,
    pub(crate) rule_reference: Option<String>,
}

impl SheetLayout {
    /// Returns the missing logical columns when neither layout fits.
    pub(crate) fn detect(headers: &StringRecord) -> Result<Self, Vec<&'static str>> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let column = |name: &str| names.iter().position(|header| header == name);

        let situation = column(SITUATION);
        let answer = column(ANSWER);
        let rule_reference = column(RULE_REFERENCE);
        let issue = column(ISSUE);

        if column(SOURCE_TYPE).is_none() && issue.is_none() {
            if let Some(source) = column(SOURCE) {
                return Ok(Self::Combined {
                    source,
                    situation: situation.unwrap_or(COMBINED_SITUATION_COLUMN),
                    answer: answer.unwrap_or(COMBINED_ANSWER_COLUMN),
                    rule_reference: rule_reference.unwrap_or(COMBINED_RULE_REFERENCE_COLUMN),
                });
            }
        }

        let source_type = column(SOURCE_TYPE).or_else(|| column(SOURCE));
        match (source_type, issue, situation, answer) {
            (Some(source_type), Some(issue), Some(situation), Some(answer)) => Ok(Self::Split {
                source_type,
                issue,
                situation,
                answer,
                rule_reference,
            }),
            _ => Err([
                (SOURCE_TYPE, source_type),
                (ISSUE, issue),
                (SITUATION, situation),
                (ANSWER, answer),
            ]
            .into_iter()
            .filter(|(_, position)| position.is_none())
            .map(|(name, _)| name)
            .collect()),
        }
    }

    pub(crate) fn is_combined(&self) -> bool {
        matches!(self, Self::Combined { .. })
    }

    /// `None` for rows without a situation; those are skipped silently.
    pub(crate) fn read_row(
        &self,
        record: &StringRecord,
        row: usize,
        formats: &SourceFormats,
    ) -> Option<Result<SheetRow, RowError>> {
        let (situation, answer, rule_reference) = match self {
            Self::Split {
                situation,
                answer,
                rule_reference,
                ..
            } => (*situation, *answer, *rule_reference),
            Self::Combined {
                situation,
                answer,
                rule_reference,
                ..
            } => (*situation, *answer, Some(*rule_reference)),
        };

        let situation = cell(record, Some(situation));
        if situation.is_empty() {
            return None;
        }

        let (source_type, issue) = match self {
            Self::Split {
                source_type, issue, ..
            } => (
                cell(record, Some(*source_type)).to_string(),
                cell(record, Some(*issue)).to_string(),
            ),
            Self::Combined { source, .. } => {
                match split_combined(cell(record, Some(*source)), formats) {
                    Ok(parts) => parts,
                    Err(violation) => return Some(Err(RowError::new(row, violation))),
                }
            }
        };

        let rule_reference = cell(record, rule_reference);
        Some(Ok(SheetRow {
            row,
            source_type,
            issue,
            situation: situation.to_string(),
            answer: cell(record, Some(answer)).to_string(),
            rule_reference: (!rule_reference.is_empty()).then(|| rule_reference.to_string()),
        }))
    }
}

fn cell(record: &StringRecord, position: Option<usize>) -> &str {
    position
        .and_then(|position| record.get(position))
        .map(str::trim)
        .unwrap_or_default()
}

fn split_combined(
    value: &str,
    formats: &SourceFormats,
) -> Result<(String, String), RowViolation> {
    if value.is_empty() {
        return Err(RowViolation::MissingSource);
    }

    formats
        .split_combined(value)
        .map(|(type_label, issue)| (type_label.to_string(), issue.to_string()))
        .ok_or_else(|| RowViolation::MalformedSource {
            value: value.to_string(),
        })
}

fn normalize_header(value: &str) -> String {
    value.replace('\u{feff}', "").trim().to_string()
}
