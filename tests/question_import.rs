use regelfragen::workflows::import::{QuestionImporter, RowViolation};
use regelfragen::workflows::questions::{
    append_questions, load_questions, next_index, save_questions, QuestionRecord, Tag,
};
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

const SHEET: &str = "\
Quellentyp,Ausgabe,Situation,Antwort,Regelreferenz
SR-Zeitung,05/2025,Ein Spieler wirft den Ball beim Einwurf mit nur einer Hand ein.,Nein. Einwurf für den Gegner.,Regel 15
SR-Newsletter,06/2025,Der Torwart berührt den Ball nach einem absichtlichen Zuspiel mit der Hand.,Indirekter Freistoß.,
SR-Zeitung,05/2025,Kurz,Ja.,
";

fn existing_collection() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            4,
            "Ein Spieler läuft ohne Erlaubnis auf das Spielfeld.",
            "Verwarnung.",
            "SR-Zeitung 01/2025",
        ),
        QuestionRecord::new(
            9,
            "Der Ball platzt während eines Angriffs.",
            "Schiedsrichterball.",
            "SR-Zeitung 02/2025",
        ),
    ]
}

#[test]
fn appended_sheet_continues_the_index_sequence() {
    let dir = tempdir().expect("temp dir");
    let sheet = dir.path().join("erfassung.csv");
    let collection = dir.path().join("questions.json");
    fs::write(&sheet, SHEET).expect("write sheet");
    save_questions(&collection, &existing_collection()).expect("write collection");

    let mut existing = load_questions(&collection).expect("collection loads");
    let start_index = next_index(&existing).expect("index available");
    assert_eq!(start_index, 10);

    let importer = QuestionImporter::new().expect("classifier tables compile");
    let outcome = importer
        .import_path(&sheet, start_index)
        .expect("sheet imports");

    assert_eq!(outcome.questions.len(), 2);
    assert_eq!(outcome.errors.len(), 2);
    assert!(outcome.errors.iter().all(|error| error.row == 4));
    assert!(outcome
        .errors
        .iter()
        .any(|error| error.violation == RowViolation::SituationTooShort));
    assert!(outcome
        .errors
        .iter()
        .any(|error| error.violation == RowViolation::AnswerTooShort));

    append_questions(&mut existing, outcome.questions).expect("no index collisions");
    save_questions(&collection, &existing).expect("collection saves");

    let merged = load_questions(&collection).expect("merged collection loads");
    let indices: Vec<u32> = merged.iter().map(|question| question.index).collect();
    assert_eq!(indices, vec![4, 9, 10, 11]);
    let unique: HashSet<u32> = indices.iter().copied().collect();
    assert_eq!(unique.len(), indices.len());

    let throw_in = &merged[2];
    assert_eq!(throw_in.source, "SR-Zeitung 05/2025");
    assert_eq!(throw_in.rule_reference.as_deref(), Some("Regel 15"));
    assert_eq!(
        throw_in.explanation.as_deref(),
        Some("Nein. Einwurf für den Gegner. (Vgl. Regel 15)")
    );
    assert_eq!(
        throw_in
            .criteria_full
            .iter()
            .map(|criterion| criterion.label())
            .collect::<Vec<_>>(),
        vec!["Einwurf", "Nein"]
    );

    let keeper = &merged[3];
    assert_eq!(keeper.source_date.map(|date| date.to_string()).as_deref(), Some("2025-06-01"));
    assert!(keeper.tags.contains(&Tag::Torwart));
    assert!(keeper.tags.contains(&Tag::Handspiel));
    assert!(keeper.rule_reference.as_deref().is_some_and(|reference| !reference.is_empty()));
}

#[test]
fn written_collection_is_readable_json_with_umlauts() {
    let dir = tempdir().expect("temp dir");
    let sheet = dir.path().join("erfassung.csv");
    let output = dir.path().join("questions-manual.json");
    fs::write(&sheet, SHEET).expect("write sheet");

    let importer = QuestionImporter::new().expect("classifier tables compile");
    let outcome = importer.import_path(&sheet, 1).expect("sheet imports");
    save_questions(&output, &outcome.questions).expect("collection saves");

    let raw = fs::read_to_string(&output).expect("output written");
    assert!(raw.contains("Indirekter Freistoß"));
    assert!(raw.contains("\"correctAnswer\""));
    assert!(raw.contains("\"sourceDate\": \"2025-05-01\""));
    assert!(raw.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}
