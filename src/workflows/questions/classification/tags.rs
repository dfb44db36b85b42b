use super::matcher::{CaseMode, PatternSpec, TextPattern};
use super::patterns::{ENRICHMENT_TAG_PATTERNS, IMPORT_TAG_PATTERNS};
use crate::workflows::questions::domain::Tag;
use std::collections::BTreeSet;

/// Assigns every tag whose patterns fire anywhere in the question text.
pub struct TagClassifier {
    entries: Vec<(Tag, Vec<TextPattern>)>,
    fallback: Tag,
}

impl TagClassifier {
    /// Broad keyword set used when enriching JSON collections.
    pub fn enrichment() -> Result<Self, regex::Error> {
        Self::compile(ENRICHMENT_TAG_PATTERNS, CaseMode::Insensitive)
    }

    /// Narrower, case-sensitive set used by the spreadsheet import.
    pub fn import() -> Result<Self, regex::Error> {
        Self::compile(IMPORT_TAG_PATTERNS, CaseMode::Sensitive)
    }

    fn compile(table: &[(Tag, &[PatternSpec])], case: CaseMode) -> Result<Self, regex::Error> {
        let entries = table
            .iter()
            .map(|(tag, specs)| {
                let patterns = specs
                    .iter()
                    .map(|spec| TextPattern::compile(*spec, case))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((*tag, patterns))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            entries,
            fallback: Tag::Allgemein,
        })
    }

    /// Sorted by label and never empty.
    pub fn classify(&self, situation: &str, answer: &str) -> Vec<Tag> {
        let combined = format!("{situation} {answer}");
        let mut tags: BTreeSet<Tag> = self
            .entries
            .iter()
            .filter(|(_, patterns)| patterns.iter().any(|pattern| pattern.is_match(&combined)))
            .map(|(tag, _)| *tag)
            .collect();

        if tags.is_empty() {
            tags.insert(self.fallback);
        }

        tags.into_iter().collect()
    }
}
