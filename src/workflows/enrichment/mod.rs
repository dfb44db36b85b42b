//! Record Enricher: fills derived metadata onto an existing JSON collection.

use crate::workflows::questions::classification::{
    synthesize_explanation, ClassificationError, RuleClassifier, TagClassifier,
};
use crate::workflows::questions::{CollectionSummary, QuestionRecord, SourceDateStrategy};
use tracing::{debug, info};

/// Runs date resolution, rule and tag classification and explanation
/// synthesis over every record of a collection.
pub struct QuestionEnricher {
    rules: RuleClassifier,
    tags: TagClassifier,
    dates: SourceDateStrategy,
}

impl QuestionEnricher {
    /// Enrichment defaults: table date lookup and the broad tag set.
    pub fn new() -> Result<Self, ClassificationError> {
        Ok(Self {
            rules: RuleClassifier::standard()?,
            tags: TagClassifier::enrichment()?,
            dates: SourceDateStrategy::Table,
        })
    }

    pub fn with_date_strategy(mut self, dates: SourceDateStrategy) -> Self {
        self.dates = dates;
        self
    }

    pub fn date_strategy(&self) -> SourceDateStrategy {
        self.dates
    }

    /// Overwrites `ruleReference`, `tags` and `explanation`. A source the
    /// resolver cannot date keeps whatever `sourceDate` it already had.
    pub fn enrich_record(&self, record: &mut QuestionRecord) {
        match self.dates.resolve(&record.source) {
            Ok(date) => record.source_date = Some(date),
            Err(err) => debug!(index = record.index, %err, "source date left unchanged"),
        }

        let reference = self
            .rules
            .classify(&record.situation, &record.correct_answer)
            .to_string();
        record.tags = self.tags.classify(&record.situation, &record.correct_answer);
        record.explanation = Some(synthesize_explanation(&record.correct_answer, &reference));
        debug!(index = record.index, rule_reference = %reference, "record enriched");
        record.rule_reference = Some(reference);
    }

    pub fn enrich(&self, records: &mut [QuestionRecord]) -> CollectionSummary {
        for record in records.iter_mut() {
            self.enrich_record(record);
        }

        let summary = CollectionSummary::from_records(records);
        info!(
            enriched = summary.total,
            rules = summary.by_rule.len(),
            tags = summary.by_tag.len(),
            "question collection enriched"
        );
        summary
    }
}
