use super::layout::SheetRow;
use crate::workflows::questions::source_date::{computed_source_date, SourceDateError};
use crate::workflows::questions::SourceType;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;

pub(crate) const MIN_SITUATION_CHARS: usize = 10;
pub(crate) const MIN_ANSWER_CHARS: usize = 5;

/// Why a sheet row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowViolation {
    #[error("source cell is empty")]
    MissingSource,
    #[error("invalid source '{value}' (expected 'SR-Zeitung MM/YYYY')")]
    MalformedSource { value: String },
    #[error("invalid source type '{value}' (allowed: SR-Zeitung, SR-Newsletter)")]
    UnknownSourceType { value: String },
    #[error("invalid issue '{value}' (expected MM/YYYY)")]
    MalformedIssue { value: String },
    #[error("situation missing or shorter than 10 characters")]
    SituationTooShort,
    #[error("answer missing or shorter than 5 characters")]
    AnswerTooShort,
    #[error("row could not be read: {reason}")]
    Unreadable { reason: String },
    #[error(transparent)]
    SourceDate(#[from] SourceDateError),
}

/// A violation tied to its 1-based sheet row (the header is row 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub violation: RowViolation,
}

impl RowError {
    pub fn new(row: usize, violation: RowViolation) -> Self {
        Self { row, violation }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.violation)
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

/// A row that passed every check, with its computed publication date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidRow {
    pub(crate) source_type: SourceType,
    pub(crate) source_date: NaiveDate,
}

/// Formats of the issue and combined source cells. Digits are ASCII only.
#[derive(Debug, Clone)]
pub(crate) struct SourceFormats {
    issue: Regex,
    combined_source: Regex,
}

impl SourceFormats {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            issue: Regex::new(r"^[0-9]{2}/[0-9]{4}$")?,
            combined_source: Regex::new(r"^(SR-Zeitung|SR-Newsletter)\s+([0-9]{2}/[0-9]{4})$")?,
        })
    }

    /// `MM/YYYY`.
    pub(crate) fn is_issue(&self, value: &str) -> bool {
        self.issue.is_match(value)
    }

    /// Splits `SR-Zeitung 03/2025` into type label and issue.
    pub(crate) fn split_combined<'a>(&self, value: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self.combined_source.captures(value)?;
        Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
    }
}

/// Collects every violation of the row before giving up on it. The source
/// date is only computed once the cells themselves are well formed.
pub(crate) fn validate_row(
    row: &SheetRow,
    formats: &SourceFormats,
) -> Result<ValidRow, Vec<RowError>> {
    let mut violations = Vec::new();

    let source_type = SourceType::from_label(&row.source_type);
    if source_type.is_none() {
        violations.push(RowViolation::UnknownSourceType {
            value: row.source_type.clone(),
        });
    }
    if !formats.is_issue(&row.issue) {
        violations.push(RowViolation::MalformedIssue {
            value: row.issue.clone(),
        });
    }
    if row.situation.chars().count() < MIN_SITUATION_CHARS {
        violations.push(RowViolation::SituationTooShort);
    }
    if row.answer.chars().count() < MIN_ANSWER_CHARS {
        violations.push(RowViolation::AnswerTooShort);
    }

    let source_type = match source_type {
        Some(source_type) if violations.is_empty() => source_type,
        _ => {
            return Err(violations
                .into_iter()
                .map(|violation| RowError::new(row.row, violation))
                .collect())
        }
    };

    let source_date = computed_source_date(source_type, &row.issue)
        .map_err(|err| vec![RowError::new(row.row, err.into())])?;

    Ok(ValidRow {
        source_type,
        source_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_row(source_type: &str, issue: &str, situation: &str, answer: &str) -> SheetRow {
        SheetRow {
            row: 5,
            source_type: source_type.to_string(),
            issue: issue.to_string(),
            situation: situation.to_string(),
            answer: answer.to_string(),
            rule_reference: None,
        }
    }

    fn formats() -> SourceFormats {
        SourceFormats::new().expect("source formats compile")
    }

    fn check(
        source_type: &str,
        issue: &str,
        situation: &str,
        answer: &str,
    ) -> Result<ValidRow, Vec<RowError>> {
        validate_row(&sheet_row(source_type, issue, situation, answer), &formats())
    }

    #[test]
    fn issue_format_requires_two_and_four_digits() {
        let formats = formats();
        assert!(formats.is_issue("03/2025"));
        assert!(!formats.is_issue("3/2025"));
        assert!(!formats.is_issue("03-2025"));
        assert!(!formats.is_issue("03/25"));
        assert!(!formats.is_issue("ab/2025"));
        assert!(!formats.is_issue("03/2025 "));
        // Arabic-Indic digits
        assert!(!formats.is_issue("٠٣/٢٠٢٥"));
    }

    #[test]
    fn combined_source_splits_on_known_labels() {
        let formats = formats();
        assert_eq!(
            formats.split_combined("SR-Newsletter  04/2025"),
            Some(("SR-Newsletter", "04/2025"))
        );
        assert_eq!(formats.split_combined("SR-Kurier 04/2025"), None);
        assert_eq!(formats.split_combined("SR-Zeitung 4/2025"), None);
        assert_eq!(formats.split_combined("SR-Zeitung"), None);
    }

    #[test]
    fn valid_row_gets_first_of_month() {
        let valid = check(
            "SR-Zeitung",
            "03/2025",
            "Ein Spieler steht im Abseits.",
            "Ja, Abseits.",
        )
        .expect("row is valid");

        assert_eq!(valid.source_type, SourceType::Zeitung);
        assert_eq!(valid.source_date, NaiveDate::from_ymd_opt(2025, 3, 1).expect("date"));
    }

    #[test]
    fn collects_every_cell_violation() {
        let errors = check("Kicker", "2025", "Zu kurz", "Ja")
            .expect_err("row is invalid");

        assert_eq!(
            errors,
            vec![
                RowError::new(
                    5,
                    RowViolation::UnknownSourceType {
                        value: "Kicker".to_string()
                    }
                ),
                RowError::new(
                    5,
                    RowViolation::MalformedIssue {
                        value: "2025".to_string()
                    }
                ),
                RowError::new(5, RowViolation::SituationTooShort),
                RowError::new(5, RowViolation::AnswerTooShort),
            ]
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // nine characters, eighteen bytes
        let errors = check("SR-Zeitung", "03/2025", "äääääääää", "Ja ok")
            .expect_err("situation too short");
        assert_eq!(errors, vec![RowError::new(5, RowViolation::SituationTooShort)]);
    }

    #[test]
    fn month_and_year_ranges_are_checked_after_format() {
        let errors = check(
            "SR-Newsletter",
            "13/2025",
            "Ein Spieler steht im Abseits.",
            "Ja, Abseits.",
        )
        .expect_err("month out of range");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "row 5: invalid month 13 in '13/2025'");

        let errors = check(
            "SR-Newsletter",
            "01/2012",
            "Ein Spieler steht im Abseits.",
            "Ja, Abseits.",
        )
        .expect_err("year out of range");
        assert_eq!(errors[0].to_string(), "row 5: invalid year 2012 in '01/2012'");
    }
}
