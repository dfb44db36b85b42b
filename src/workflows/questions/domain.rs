use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Publication a question was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "SR-Zeitung")]
    Zeitung,
    #[serde(rename = "SR-Newsletter")]
    Newsletter,
}

impl SourceType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Zeitung, Self::Newsletter]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Zeitung => "SR-Zeitung",
            Self::Newsletter => "SR-Newsletter",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|source_type| source_type.label() == value)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Laws of the Game as numbered in the DFB rule book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Spielfeld,
    Ball,
    Spieler,
    Ausruestung,
    Schiedsrichter,
    WeitereSpieloffizielle,
    DauerDesSpiels,
    BeginnUndFortsetzung,
    BallImUndAusDemSpiel,
    Spielausgang,
    Abseits,
    Fouls,
    Freistoesse,
    Strafstoss,
    Einwurf,
    Abstoss,
    Eckstoss,
}

impl Rule {
    pub const fn ordered() -> [Self; 17] {
        [
            Self::Spielfeld,
            Self::Ball,
            Self::Spieler,
            Self::Ausruestung,
            Self::Schiedsrichter,
            Self::WeitereSpieloffizielle,
            Self::DauerDesSpiels,
            Self::BeginnUndFortsetzung,
            Self::BallImUndAusDemSpiel,
            Self::Spielausgang,
            Self::Abseits,
            Self::Fouls,
            Self::Freistoesse,
            Self::Strafstoss,
            Self::Einwurf,
            Self::Abstoss,
            Self::Eckstoss,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Spielfeld => 1,
            Self::Ball => 2,
            Self::Spieler => 3,
            Self::Ausruestung => 4,
            Self::Schiedsrichter => 5,
            Self::WeitereSpieloffizielle => 6,
            Self::DauerDesSpiels => 7,
            Self::BeginnUndFortsetzung => 8,
            Self::BallImUndAusDemSpiel => 9,
            Self::Spielausgang => 10,
            Self::Abseits => 11,
            Self::Fouls => 12,
            Self::Freistoesse => 13,
            Self::Strafstoss => 14,
            Self::Einwurf => 15,
            Self::Abstoss => 16,
            Self::Eckstoss => 17,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Spielfeld => "Spielfeld",
            Self::Ball => "Ball",
            Self::Spieler => "Spieler",
            Self::Ausruestung => "Ausrüstung der Spieler",
            Self::Schiedsrichter => "Schiedsrichter",
            Self::WeitereSpieloffizielle => "Weitere Spieloffizielle",
            Self::DauerDesSpiels => "Dauer des Spiels",
            Self::BeginnUndFortsetzung => "Beginn und Fortsetzung des Spiels",
            Self::BallImUndAusDemSpiel => "Ball im und aus dem Spiel",
            Self::Spielausgang => "Bestimmung des Spielausgangs",
            Self::Abseits => "Abseits",
            Self::Fouls => "Fouls und sonstiges Fehlverhalten",
            Self::Freistoesse => "Freistöße",
            Self::Strafstoss => "Strafstoß",
            Self::Einwurf => "Einwurf",
            Self::Abstoss => "Abstoß",
            Self::Eckstoss => "Eckstoß",
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|rule| rule.number() == number)
    }

    /// Citation text, e.g. `Regel 11 (Abseits)`.
    pub fn citation(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Regel {} ({})", self.number(), self.name())
    }
}

/// Topic tags. The vocabulary is closed; `Allgemein` is the catch-all.
///
/// Tags order by their label so that tag sets serialize in the same order
/// as a plain string sort of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "Persönliche Strafe")]
    PersoenlicheStrafe,
    #[serde(rename = "Spielfortsetzung")]
    Spielfortsetzung,
    #[serde(rename = "Torwart")]
    Torwart,
    #[serde(rename = "Strafstoß")]
    Strafstoss,
    #[serde(rename = "Elfmeterschießen")]
    Elfmeterschiessen,
    #[serde(rename = "Abseits")]
    Abseits,
    #[serde(rename = "Handspiel")]
    Handspiel,
    #[serde(rename = "Foulspiel")]
    Foulspiel,
    #[serde(rename = "Unsportliches Verhalten")]
    UnsportlichesVerhalten,
    #[serde(rename = "Tätlichkeit")]
    Taetlichkeit,
    #[serde(rename = "Notbremse/DOGSO")]
    Notbremse,
    #[serde(rename = "Vorteilsregel")]
    Vorteilsregel,
    #[serde(rename = "Vorteil")]
    Vorteil,
    #[serde(rename = "Auswechslung")]
    Auswechslung,
    #[serde(rename = "Ausrüstung")]
    Ausruestung,
    #[serde(rename = "Spielfeld")]
    Spielfeld,
    #[serde(rename = "VAR")]
    Var,
    #[serde(rename = "Verlängerung")]
    Verlaengerung,
    #[serde(rename = "Schiedsrichter-Entscheidung")]
    SchiedsrichterEntscheidung,
    #[serde(rename = "Allgemein")]
    Allgemein,
}

impl Tag {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersoenlicheStrafe => "Persönliche Strafe",
            Self::Spielfortsetzung => "Spielfortsetzung",
            Self::Torwart => "Torwart",
            Self::Strafstoss => "Strafstoß",
            Self::Elfmeterschiessen => "Elfmeterschießen",
            Self::Abseits => "Abseits",
            Self::Handspiel => "Handspiel",
            Self::Foulspiel => "Foulspiel",
            Self::UnsportlichesVerhalten => "Unsportliches Verhalten",
            Self::Taetlichkeit => "Tätlichkeit",
            Self::Notbremse => "Notbremse/DOGSO",
            Self::Vorteilsregel => "Vorteilsregel",
            Self::Vorteil => "Vorteil",
            Self::Auswechslung => "Auswechslung",
            Self::Ausruestung => "Ausrüstung",
            Self::Spielfeld => "Spielfeld",
            Self::Var => "VAR",
            Self::Verlaengerung => "Verlängerung",
            Self::SchiedsrichterEntscheidung => "Schiedsrichter-Entscheidung",
            Self::Allgemein => "Allgemein",
        }
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decision keywords graders look for in an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    #[serde(rename = "Strafstoß")]
    Strafstoss,
    #[serde(rename = "Direkter Freistoß")]
    DirekterFreistoss,
    #[serde(rename = "Indirekter Freistoß")]
    IndirekterFreistoss,
    #[serde(rename = "Eckstoß")]
    Eckstoss,
    #[serde(rename = "Einwurf")]
    Einwurf,
    #[serde(rename = "Abstoß")]
    Abstoss,
    #[serde(rename = "Anstoß")]
    Anstoss,
    #[serde(rename = "Feldverweis")]
    Feldverweis,
    #[serde(rename = "Verwarnung")]
    Verwarnung,
    #[serde(rename = "Gelb/Rot")]
    GelbRot,
    #[serde(rename = "Spielabbruch")]
    Spielabbruch,
    #[serde(rename = "Spielunterbrechung")]
    Spielunterbrechung,
    #[serde(rename = "Spielende")]
    Spielende,
    #[serde(rename = "Wiederholung")]
    Wiederholung,
    #[serde(rename = "Schiedsrichterball")]
    Schiedsrichterball,
    #[serde(rename = "Tor")]
    Tor,
    #[serde(rename = "Kein Tor")]
    KeinTor,
    #[serde(rename = "Ja")]
    Ja,
    #[serde(rename = "Nein")]
    Nein,
    #[serde(rename = "Vorteil")]
    Vorteil,
}

impl Criterion {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strafstoss => "Strafstoß",
            Self::DirekterFreistoss => "Direkter Freistoß",
            Self::IndirekterFreistoss => "Indirekter Freistoß",
            Self::Eckstoss => "Eckstoß",
            Self::Einwurf => "Einwurf",
            Self::Abstoss => "Abstoß",
            Self::Anstoss => "Anstoß",
            Self::Feldverweis => "Feldverweis",
            Self::Verwarnung => "Verwarnung",
            Self::GelbRot => "Gelb/Rot",
            Self::Spielabbruch => "Spielabbruch",
            Self::Spielunterbrechung => "Spielunterbrechung",
            Self::Spielende => "Spielende",
            Self::Wiederholung => "Wiederholung",
            Self::Schiedsrichterball => "Schiedsrichterball",
            Self::Tor => "Tor",
            Self::KeinTor => "Kein Tor",
            Self::Ja => "Ja",
            Self::Nein => "Nein",
            Self::Vorteil => "Vorteil",
        }
    }

    pub const fn is_verdict(self) -> bool {
        matches!(self, Self::Ja | Self::Nein)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A criterion as stored on a record.
///
/// The importer only writes known criteria, but collections drafted by other
/// tools carry labels such as `Weiterspielen`. Those are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionLabel {
    Known(Criterion),
    Foreign(String),
}

impl CriterionLabel {
    pub fn label(&self) -> &str {
        match self {
            Self::Known(criterion) => criterion.label(),
            Self::Foreign(label) => label,
        }
    }

    pub fn known(&self) -> Option<Criterion> {
        match self {
            Self::Known(criterion) => Some(*criterion),
            Self::Foreign(_) => None,
        }
    }
}

impl From<Criterion> for CriterionLabel {
    fn from(criterion: Criterion) -> Self {
        Self::Known(criterion)
    }
}

impl PartialEq<Criterion> for CriterionLabel {
    fn eq(&self, other: &Criterion) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for CriterionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single exam question as persisted in the JSON collection.
///
/// Fields this crate does not know about are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub index: u32,
    pub situation: String,
    pub correct_answer: String,
    pub source: String,
    #[serde(default)]
    pub criteria_full: Vec<CriterionLabel>,
    #[serde(default)]
    pub criteria_partial: Vec<CriterionLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_reference: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl QuestionRecord {
    pub fn new(
        index: u32,
        situation: impl Into<String>,
        correct_answer: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            index,
            situation: situation.into(),
            correct_answer: correct_answer.into(),
            source: source.into(),
            criteria_full: Vec::new(),
            criteria_partial: Vec::new(),
            source_date: None,
            rule_reference: None,
            tags: Vec::new(),
            explanation: None,
            extra: BTreeMap::new(),
        }
    }

    /// Citation before the first comma of `rule_reference`.
    pub fn primary_rule_reference(&self) -> Option<&str> {
        self.rule_reference.as_deref().map(primary_citation)
    }
}

pub(crate) fn primary_citation(reference: &str) -> &str {
    reference.split(',').next().unwrap_or(reference)
}
