use super::domain::{QuestionRecord, Tag};
use super::source_date::split_source;
use std::collections::BTreeMap;

/// Distribution counts over a question collection for the operator report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub total: usize,
    /// Keyed by the full source, e.g. `SR-Zeitung 03/2025`.
    pub by_source: BTreeMap<String, usize>,
    /// Keyed by source type label; unparseable sources count under their raw text.
    pub by_source_type: BTreeMap<String, usize>,
    /// Keyed by the primary citation of `ruleReference`.
    pub by_rule: BTreeMap<String, usize>,
    pub by_tag: BTreeMap<Tag, usize>,
}

impl CollectionSummary {
    pub fn from_records(records: &[QuestionRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            let source = record.source.trim();
            *summary.by_source.entry(source.to_string()).or_default() += 1;

            let source_type = match split_source(source) {
                Ok((source_type, _)) => source_type.label(),
                Err(_) => source,
            };
            *summary
                .by_source_type
                .entry(source_type.to_string())
                .or_default() += 1;

            if let Some(primary) = record.primary_rule_reference() {
                *summary.by_rule.entry(primary.trim().to_string()).or_default() += 1;
            }

            for tag in &record.tags {
                *summary.by_tag.entry(*tag).or_default() += 1;
            }
        }

        summary
    }

    /// Most frequent tags first; equal counts stay in label order.
    pub fn tags_by_frequency(&self) -> Vec<(Tag, usize)> {
        let mut tags: Vec<(Tag, usize)> = self
            .by_tag
            .iter()
            .map(|(tag, count)| (*tag, *count))
            .collect();
        tags.sort_by(|left, right| right.1.cmp(&left.1));
        tags
    }
}
