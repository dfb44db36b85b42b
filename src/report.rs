use regelfragen::workflows::import::RowError;
use regelfragen::workflows::questions::{CollectionSummary, QuestionRecord};
use std::path::Path;

const EXAMPLE_COUNT: usize = 3;
const EXPLANATION_PREVIEW_CHARS: usize = 100;

pub(crate) fn render_row_errors(errors: &[RowError]) {
    if errors.is_empty() {
        return;
    }

    println!("{} row errors", errors.len());
    for error in errors {
        println!("  - {error}");
    }
    println!();
}

pub(crate) fn render_import(converted: &CollectionSummary, output: &Path, total: Option<usize>) {
    println!(
        "{} questions converted -> {}",
        converted.total,
        output.display()
    );
    if let Some(total) = total {
        println!("   Total: {total} questions");
    }

    println!("\nSources");
    for (source, count) in &converted.by_source {
        println!("  {source}: {count} questions");
    }
}

pub(crate) fn render_enrichment(
    questions: &[QuestionRecord],
    summary: &CollectionSummary,
    output: &Path,
) {
    println!(
        "Enriched {} questions -> {}",
        summary.total,
        output.display()
    );

    println!("\nRule distribution");
    for (rule, count) in &summary.by_rule {
        println!("  {rule}: {count}");
    }

    println!("\nTag distribution");
    for (tag, count) in summary.tags_by_frequency() {
        println!("  {tag}: {count}");
    }

    println!("\nSource types");
    for (source_type, count) in &summary.by_source_type {
        println!("  {source_type}: {count}");
    }

    println!("\nExamples");
    for question in questions.iter().take(EXAMPLE_COUNT) {
        let tags = question
            .tags
            .iter()
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(", ");
        let source_date = question
            .source_date
            .map_or_else(|| "N/A".to_string(), |date| date.to_string());
        let explanation: String = question
            .explanation
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(EXPLANATION_PREVIEW_CHARS)
            .collect();

        println!("\n  Index {} ({})", question.index, question.source);
        println!(
            "    ruleReference: {}",
            question.rule_reference.as_deref().unwrap_or_default()
        );
        println!("    tags: {tags}");
        println!("    sourceDate: {source_date}");
        println!("    explanation: {explanation}...");
    }
}
