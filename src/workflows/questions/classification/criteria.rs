use super::matcher::{CaseMode, TextPattern};
use super::patterns::{KeywordCheck, CRITERIA_KEYWORDS, PARTIAL_PRIORITY};
use crate::workflows::questions::domain::Criterion;

enum CompiledCheck {
    Contains,
    LeadingWord,
    Pattern(TextPattern),
}

struct CriteriaKeyword {
    keyword: &'static str,
    lowered: String,
    criterion: Criterion,
    check: CompiledCheck,
}

/// Pulls grading keywords out of an answer.
pub struct CriteriaExtractor {
    keywords: Vec<CriteriaKeyword>,
}

impl CriteriaExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let keywords = CRITERIA_KEYWORDS
            .iter()
            .map(|(keyword, criterion, check)| {
                let check = match check {
                    KeywordCheck::Contains => CompiledCheck::Contains,
                    KeywordCheck::LeadingWord => CompiledCheck::LeadingWord,
                    KeywordCheck::Pattern(spec) => {
                        CompiledCheck::Pattern(TextPattern::compile(*spec, CaseMode::Sensitive)?)
                    }
                };
                Ok(CriteriaKeyword {
                    keyword: *keyword,
                    lowered: keyword.to_lowercase(),
                    criterion: *criterion,
                    check,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { keywords })
    }

    /// Every criterion mentioned in the answer, in keyword table order.
    pub fn extract_full(&self, answer: &str) -> Vec<Criterion> {
        let answer_lower = answer.to_lowercase();
        let first_sentence_lower = first_sentence(answer).to_lowercase();
        let leading_word = leading_word(answer);
        let mut found: Vec<Criterion> = Vec::new();

        for entry in &self.keywords {
            let mentioned = first_sentence_lower.contains(&entry.lowered)
                || answer_lower.contains(&entry.lowered);
            if !mentioned || found.contains(&entry.criterion) {
                continue;
            }

            let confirmed = match &entry.check {
                CompiledCheck::Contains => true,
                CompiledCheck::LeadingWord => leading_word == Some(entry.keyword),
                CompiledCheck::Pattern(pattern) => pattern.is_match(answer),
            };

            if confirmed {
                found.push(entry.criterion);
            }
        }

        found
    }

    pub fn extract(&self, answer: &str) -> (Vec<Criterion>, Vec<Criterion>) {
        let full = self.extract_full(answer);
        let partial = derive_partial(&full);
        (full, partial)
    }
}

/// Reduces the full list to its single most important criterion.
///
/// Falls back to the first entry that is not a bare yes/no verdict.
pub fn derive_partial(full: &[Criterion]) -> Vec<Criterion> {
    PARTIAL_PRIORITY
        .iter()
        .find(|criterion| full.contains(criterion))
        .or_else(|| full.iter().find(|criterion| !criterion.is_verdict()))
        .copied()
        .into_iter()
        .collect()
}

fn first_sentence(answer: &str) -> &str {
    match answer.find('.') {
        Some(position) => &answer[..=position],
        None => answer,
    }
}

fn leading_word(answer: &str) -> Option<&str> {
    answer
        .split_whitespace()
        .next()
        .map(|word| word.trim_end_matches(['.', ',', '!']))
}
