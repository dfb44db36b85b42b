use crate::report;
use clap::{Args, Parser, Subcommand};
use regelfragen::config::{AppConfig, ImportConfig};
use regelfragen::error::AppError;
use regelfragen::telemetry;
use regelfragen::workflows::enrichment::QuestionEnricher;
use regelfragen::workflows::import::QuestionImporter;
use regelfragen::workflows::questions::{
    append_questions, load_questions, next_index, save_questions, CollectionSummary,
    SourceDateStrategy,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "regelfragen",
    about = "Import and enrich referee exam questions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the question sheet (CSV export) into JSON records
    Import(ImportArgs),
    /// Add rule references, tags, source dates and explanations to a JSON collection
    Enrich(EnrichArgs),
}

#[derive(Args, Debug)]
struct ImportArgs {
    /// Question sheet exported as CSV
    sheet: PathBuf,
    /// Output JSON file (defaults to APP_IMPORT_OUTPUT next to the sheet)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Append to an existing JSON collection, continuing its index sequence.
    /// Takes precedence over --output
    #[arg(long)]
    append_to: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EnrichArgs {
    /// JSON collection to enrich
    input: PathBuf,
    /// Output JSON file (defaults to rewriting the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Date any well-formed issue instead of using the table of known issues
    #[arg(long)]
    computed_dates: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "regelfragen starting");

    match cli.command {
        Command::Import(args) => run_import(args, &config.import),
        Command::Enrich(args) => run_enrich(args),
    }
}

fn run_import(args: ImportArgs, config: &ImportConfig) -> Result<(), AppError> {
    let ImportArgs {
        sheet,
        output,
        append_to,
    } = args;

    if !sheet.exists() {
        return Err(AppError::InputNotFound(sheet));
    }

    let mut existing = match &append_to {
        Some(target) if target.exists() => load_questions(target)?,
        _ => Vec::new(),
    };
    let start_index = next_index(&existing)?;
    if !existing.is_empty() {
        println!(
            "Existing collection: {} questions (next index {})",
            existing.len(),
            start_index
        );
    }

    let importer = QuestionImporter::new()?;
    let outcome = importer.import_path(&sheet, start_index)?;
    report::render_row_errors(&outcome.errors);

    if outcome.questions.is_empty() {
        if outcome.errors.is_empty() {
            println!("No valid questions found.");
            return Ok(());
        }
        return Err(AppError::NoValidRows {
            errors: outcome.errors.len(),
        });
    }

    let converted = CollectionSummary::from_records(&outcome.questions);
    let (output, total) = match append_to {
        Some(target) => {
            if let Some(ignored) = &output {
                warn!(
                    ignored = %ignored.display(),
                    target = %target.display(),
                    "--output ignored, writing to the append target"
                );
            }
            append_questions(&mut existing, outcome.questions)?;
            save_questions(&target, &existing)?;
            (target, Some(existing.len()))
        }
        None => {
            let output = output.unwrap_or_else(|| config.default_output_for(&sheet));
            save_questions(&output, &outcome.questions)?;
            (output, None)
        }
    };

    info!(output = %output.display(), converted = converted.total, "questions written");
    report::render_import(&converted, &output, total);
    Ok(())
}

fn run_enrich(args: EnrichArgs) -> Result<(), AppError> {
    let EnrichArgs {
        input,
        output,
        computed_dates,
    } = args;

    if !input.exists() {
        return Err(AppError::InputNotFound(input));
    }

    let mut questions = load_questions(&input)?;
    let mut enricher = QuestionEnricher::new()?;
    if computed_dates {
        enricher = enricher.with_date_strategy(SourceDateStrategy::Computed);
    }

    let summary = enricher.enrich(&mut questions);
    let output = output.unwrap_or(input);
    save_questions(&output, &questions)?;

    info!(output = %output.display(), "enriched questions written");
    report::render_enrichment(&questions, &summary, &output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn output_is_accepted_next_to_append_target() {
        let cli = Cli::try_parse_from([
            "regelfragen",
            "import",
            "sheet.csv",
            "--output",
            "a.json",
            "--append-to",
            "b.json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Import(args) => {
                assert_eq!(args.output, Some(PathBuf::from("a.json")));
                assert_eq!(args.append_to, Some(PathBuf::from("b.json")));
            }
            other => panic!("expected import command, got {other:?}"),
        }
    }

    #[test]
    fn append_target_wins_over_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let sheet = dir.path().join("sheet.csv");
        let output = dir.path().join("ignored.json");
        let target = dir.path().join("collection.json");
        std::fs::write(
            &sheet,
            "Quellentyp,Ausgabe,Situation,Antwort\n\
SR-Zeitung,03/2025,Ein Angreifer steht im Abseits.,\"Ja, Abseits.\"\n",
        )
        .expect("write sheet");

        let args = ImportArgs {
            sheet,
            output: Some(output.clone()),
            append_to: Some(target.clone()),
        };
        let config = ImportConfig {
            output_file_name: "questions-manual.json".to_string(),
        };
        run_import(args, &config).expect("import succeeds");

        assert!(!output.exists());
        let written = load_questions(&target).expect("append target written");
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].index, 1);
    }

    #[test]
    fn enrich_parses_optional_flags() {
        let cli = Cli::try_parse_from(["regelfragen", "enrich", "fragen.json", "--computed-dates"])
            .expect("arguments parse");

        match cli.command {
            Command::Enrich(args) => {
                assert_eq!(args.input, PathBuf::from("fragen.json"));
                assert!(args.output.is_none());
                assert!(args.computed_dates);
            }
            other => panic!("expected enrich command, got {other:?}"),
        }
    }
}
