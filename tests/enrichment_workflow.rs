use regelfragen::workflows::enrichment::QuestionEnricher;
use regelfragen::workflows::questions::{load_questions, save_questions, QuestionRecord, Rule, Tag};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn sample_collection() -> serde_json::Value {
    json!([
        {
            "index": 1,
            "situation": "Ein Angreifer steht beim Zuspiel im Abseits und greift ins Spiel ein.",
            "correctAnswer": "Ja. Der Spieler war im Abseits.",
            "source": "SR-Zeitung 01/2025",
            "criteriaFull": ["Ja"],
            "criteriaPartial": [],
            "difficulty": "leicht"
        },
        {
            "index": 2,
            "situation": "Ein Verteidiger hält den Gegner im eigenen Strafraum fest und verhindert so eine klare Torchance.",
            "correctAnswer": "Strafstoß. Da ein Versuch, den Ball zu spielen, fehlt, gibt es einen Feldverweis.",
            "source": "SR-Newsletter 03/2025"
        },
        {
            "index": 3,
            "situation": "Der Schiedsrichter bemerkt vor dem Spiel, dass ein Spieler eine Halskette trägt.",
            "correctAnswer": "Ablegen lassen.",
            "source": "SR-Zeitung 09/2019"
        }
    ])
}

fn citation_is_valid(citation: &str) -> bool {
    let Some(rest) = citation.strip_prefix("Regel ") else {
        return false;
    };
    let Some((number, name)) = rest.split_once(' ') else {
        return false;
    };
    let Ok(number) = number.parse::<u8>() else {
        return false;
    };

    Rule::from_number(number)
        .is_some_and(|rule| name == format!("({})", rule.name()) && rule.number() == number)
}

#[test]
fn enriched_collection_keeps_every_invariant() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("questions-preview.json");
    fs::write(&path, sample_collection().to_string()).expect("write fixture");

    let mut questions = load_questions(&path).expect("collection loads");
    let enricher = QuestionEnricher::new().expect("classifier tables compile");
    let summary = enricher.enrich(&mut questions);
    save_questions(&path, &questions).expect("collection saves");

    let reloaded = load_questions(&path).expect("collection reloads");
    assert_eq!(reloaded, questions);
    assert_eq!(summary.total, 3);

    for question in &reloaded {
        assert!(!question.tags.is_empty(), "question {} has no tags", question.index);

        let reference = question.rule_reference.as_deref().expect("rule reference set");
        let citations: Vec<&str> = reference.split(", ").collect();
        assert!((1..=3).contains(&citations.len()));
        for citation in citations {
            assert!(citation_is_valid(citation), "invalid citation {citation:?}");
        }

        assert!(question.explanation.as_deref().is_some_and(|text| !text.is_empty()));
    }

    let offside = &reloaded[0];
    assert_eq!(offside.rule_reference.as_deref(), Some("Regel 11 (Abseits)"));
    assert_eq!(
        offside.explanation.as_deref(),
        Some("Der Spieler war im Abseits. (Vgl. Regel 11 (Abseits))")
    );
    assert_eq!(offside.source_date.map(|date| date.to_string()).as_deref(), Some("2025-01-01"));
    assert_eq!(offside.extra.get("difficulty"), Some(&json!("leicht")));

    let penalty = &reloaded[1];
    assert!(penalty.tags.contains(&Tag::Strafstoss));
    assert!(penalty.tags.contains(&Tag::Notbremse));
    assert!(penalty
        .rule_reference
        .as_deref()
        .is_some_and(|reference| reference.contains("Regel 12 (Fouls und sonstiges Fehlverhalten)")));

    let undated = &reloaded[2];
    assert_eq!(undated.source_date, None);
    assert_eq!(undated.explanation.as_deref().map(|text| text.starts_with("Siehe ")), Some(true));
}

#[test]
fn rerunning_enrichment_rewrites_identical_bytes() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("questions.json");
    fs::write(&path, sample_collection().to_string()).expect("write fixture");
    let enricher = QuestionEnricher::new().expect("classifier tables compile");

    let mut questions = load_questions(&path).expect("collection loads");
    enricher.enrich(&mut questions);
    save_questions(&path, &questions).expect("first save");
    let first = fs::read(&path).expect("first output");

    let mut questions: Vec<QuestionRecord> = load_questions(&path).expect("collection reloads");
    enricher.enrich(&mut questions);
    save_questions(&path, &questions).expect("second save");
    let second = fs::read(&path).expect("second output");

    assert_eq!(first, second);
}

#[test]
fn drafted_criteria_outside_the_import_vocabulary_pass_through() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("questions-preview.json");
    let draft = json!([
        {
            "index": 1,
            "situation": "Der Ball prallt vom Schiedsrichter direkt ins Tor.",
            "correctAnswer": "Schiedsrichter-Ball. Kein Tor.",
            "source": "SR-Zeitung 03/2025",
            "criteriaFull": ["Schiedsrichter-Ball", "Weiterspielen"],
            "criteriaPartial": ["Weiterspielen"]
        }
    ]);
    fs::write(&path, draft.to_string()).expect("write draft");

    let mut questions = load_questions(&path).expect("draft loads");
    QuestionEnricher::new()
        .expect("classifier tables compile")
        .enrich(&mut questions);
    save_questions(&path, &questions).expect("draft saves");

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read output")).expect("valid json");
    assert_eq!(
        written[0]["criteriaFull"],
        json!(["Schiedsrichter-Ball", "Weiterspielen"])
    );
    assert_eq!(written[0]["criteriaPartial"], json!(["Weiterspielen"]));
    assert!(written[0]["ruleReference"].as_str().is_some_and(|text| !text.is_empty()));
}
