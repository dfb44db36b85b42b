use super::domain::SourceType;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const MIN_ISSUE_YEAR: i32 = 2013;
pub const MAX_ISSUE_YEAR: i32 = 2030;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceDateError {
    #[error("invalid issue format '{issue}' (expected MM/YYYY)")]
    MalformedIssue { issue: String },
    #[error("invalid issue format '{issue}' (month/year not numeric)")]
    NonNumericIssue { issue: String },
    #[error("invalid month {month} in '{issue}'")]
    MonthOutOfRange { month: u32, issue: String },
    #[error("invalid year {year} in '{issue}'")]
    YearOutOfRange { year: i32, issue: String },
    #[error("invalid source '{raw}' (expected '<source type> MM/YYYY')")]
    MalformedSource { raw: String },
    #[error("unknown source type '{value}' (allowed: SR-Zeitung, SR-Newsletter)")]
    UnknownSourceType { value: String },
    #[error("no publication date known for '{raw}'")]
    UnknownSource { raw: String },
}

/// How a `source` string is turned into a publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceDateStrategy {
    /// Exact lookup in the table of known issues.
    Table,
    /// First day of the month named by the issue.
    Computed,
}

impl SourceDateStrategy {
    pub fn resolve(self, source: &str) -> Result<NaiveDate, SourceDateError> {
        match self {
            Self::Table => {
                lookup_source_date(source).ok_or_else(|| SourceDateError::UnknownSource {
                    raw: source.to_string(),
                })
            }
            Self::Computed => {
                let (source_type, issue) = split_source(source)?;
                computed_source_date(source_type, issue)
            }
        }
    }
}

/// Splits `"SR-Zeitung 03/2025"` into its source type and issue.
pub fn split_source(source: &str) -> Result<(SourceType, &str), SourceDateError> {
    let trimmed = source.trim();
    let (type_label, issue) = trimmed.rsplit_once(char::is_whitespace).ok_or_else(|| {
        SourceDateError::MalformedSource {
            raw: source.to_string(),
        }
    })?;

    let source_type = SourceType::from_label(type_label.trim_end()).ok_or_else(|| {
        SourceDateError::UnknownSourceType {
            value: type_label.trim_end().to_string(),
        }
    })?;

    Ok((source_type, issue))
}

/// Resolves an issue string (`MM/YYYY`) to the first day of that month.
///
/// The date does not depend on the source type; both publications number
/// their issues by calendar month.
pub fn computed_source_date(
    _source_type: SourceType,
    issue: &str,
) -> Result<NaiveDate, SourceDateError> {
    let issue = issue.trim();
    let parts: Vec<&str> = issue.split('/').collect();
    let [month_part, year_part] = parts.as_slice() else {
        return Err(SourceDateError::MalformedIssue {
            issue: issue.to_string(),
        });
    };

    let (Ok(month), Ok(year)) = (
        month_part.trim().parse::<u32>(),
        year_part.trim().parse::<i32>(),
    ) else {
        return Err(SourceDateError::NonNumericIssue {
            issue: issue.to_string(),
        });
    };

    if !(1..=12).contains(&month) {
        return Err(SourceDateError::MonthOutOfRange {
            month,
            issue: issue.to_string(),
        });
    }

    if !(MIN_ISSUE_YEAR..=MAX_ISSUE_YEAR).contains(&year) {
        return Err(SourceDateError::YearOutOfRange {
            year,
            issue: issue.to_string(),
        });
    }

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| SourceDateError::MalformedIssue {
        issue: issue.to_string(),
    })
}

/// Looks up the publication date of a known issue.
pub fn lookup_source_date(source: &str) -> Option<NaiveDate> {
    source_date_table().get(source).copied()
}

static SOURCE_DATE_TABLE: OnceLock<HashMap<&'static str, NaiveDate>> = OnceLock::new();

fn source_date_table() -> &'static HashMap<&'static str, NaiveDate> {
    SOURCE_DATE_TABLE.get_or_init(|| {
        // SR-Zeitung appears bimonthly, the newsletter mid-month.
        const SOURCE_DATES: &[(&str, (i32, u32, u32))] = &[
            ("SR-Zeitung 01/2025", (2025, 1, 1)),
            ("SR-Zeitung 02/2025", (2025, 3, 1)),
            ("SR-Zeitung 03/2025", (2025, 5, 1)),
            ("SR-Zeitung 04/2025", (2025, 7, 1)),
            ("SR-Zeitung 05/2025", (2025, 9, 1)),
            ("SR-Zeitung 06/2025", (2025, 11, 1)),
            ("SR-Zeitung 01/2026", (2026, 1, 1)),
            ("SR-Zeitung 02/2026", (2026, 3, 1)),
            ("SR-Newsletter 01/2025", (2025, 1, 15)),
            ("SR-Newsletter 02/2025", (2025, 2, 15)),
            ("SR-Newsletter 03/2025", (2025, 3, 15)),
            ("SR-Newsletter 04/2025", (2025, 4, 15)),
            ("SR-Newsletter 05/2025", (2025, 5, 15)),
            ("SR-Newsletter 06/2025", (2025, 6, 15)),
        ];

        SOURCE_DATES
            .iter()
            .filter_map(|(source, (year, month, day))| {
                NaiveDate::from_ymd_opt(*year, *month, *day).map(|date| (*source, date))
            })
            .collect()
    })
}
