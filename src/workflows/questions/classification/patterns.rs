//! Fixed keyword tables for the DFB rule book (Fußball-Regeln 2025/2026).
//!
//! Declaration order is significant: rule ties are broken by it and
//! criteria are reported in it.

use super::matcher::PatternSpec;
use crate::workflows::questions::domain::{Criterion, Rule, Tag};

const fn p(source: &'static str) -> PatternSpec {
    PatternSpec::new(source)
}

const NOT_SHOOTOUT: &[&str] = &["schieß"];

/// `(pattern, rule, weight)`; a rule scores `weight` per match.
pub(crate) const RULE_PATTERNS: &[(PatternSpec, Rule, u32)] = &[
    // Regel 14
    (p(r"\b[Ss]trafstoß"), Rule::Strafstoss, 10),
    (p(r"\b[Ee]lfmeter").except(NOT_SHOOTOUT), Rule::Strafstoss, 10),
    (p(r"\b[Ss]chütze\b"), Rule::Strafstoss, 6),
    (p(r"\bStrafstoßausführung"), Rule::Strafstoss, 10),
    (p(r"\bPenalty"), Rule::Strafstoss, 8),
    (p(r"\bzu früh in den Strafraum"), Rule::Strafstoss, 8),
    // Regel 11
    (p(r"\b[Aa]bseits"), Rule::Abseits, 10),
    (p(r"\bAbseitsstellung"), Rule::Abseits, 10),
    (p(r"\bAbseitsvergehen"), Rule::Abseits, 10),
    (p(r"\bstrafbare.{0,15}Abseits"), Rule::Abseits, 10),
    // Regel 15
    (p(r"\b[Ee]inwurf"), Rule::Einwurf, 10),
    (p(r"\beinwerfen"), Rule::Einwurf, 8),
    (p(r"\bSeitenlinie.{0,30}[Bb]all.{0,20}verlassen"), Rule::Einwurf, 6),
    // Regel 16
    (p(r"\b[Aa]bstoß"), Rule::Abstoss, 10),
    (p(r"\bTorwart.{0,30}Abstoß"), Rule::Abstoss, 10),
    // Regel 17
    (p(r"\b[Ee]ckstoß"), Rule::Eckstoss, 10),
    (p(r"\b[Ee]ckball"), Rule::Eckstoss, 8),
    (p(r"\b[Ee]ckfahne"), Rule::Eckstoss, 4),
    // Regel 13
    (p(r"\b[Dd]irekter Freistoß"), Rule::Freistoesse, 8),
    (p(r"\b[Ii]ndirekter Freistoß"), Rule::Freistoesse, 8),
    (p(r"\b[Ff]reistoß"), Rule::Freistoesse, 6),
    (p(r"\bMauer\b"), Rule::Freistoesse, 5),
    // Regel 10, including the shoot-out
    (p(r"\b[Ee]lfmeterschieß"), Rule::Spielausgang, 10),
    (p(r"\b[Tt]or.{0,10}zählt"), Rule::Spielausgang, 6),
    (p(r"\b[Kk]ein Tor\b"), Rule::Spielausgang, 6),
    (p(r"\bSpielausgang"), Rule::Spielausgang, 8),
    (p(r"\bgültiges Tor"), Rule::Spielausgang, 6),
    // Regel 12
    (p(r"\b[Vv]erwarnung"), Rule::Fouls, 7),
    (p(r"\b[Ff]eldverweis"), Rule::Fouls, 8),
    (p(r"\bGelb/Rot\b"), Rule::Fouls, 8),
    (p(r"\bGelbe Karte"), Rule::Fouls, 7),
    (p(r"\bRote Karte"), Rule::Fouls, 8),
    (p(r"\b[Hh]andspiel"), Rule::Fouls, 9),
    (p(r"\b[Ff]oul"), Rule::Fouls, 7),
    (p(r"\b[Tt]ätlichkeit"), Rule::Fouls, 9),
    (p(r"\bunsportlich"), Rule::Fouls, 6),
    (p(r"\b[Ss]chwalbe"), Rule::Fouls, 7),
    (p(r"\bDOGSO"), Rule::Fouls, 9),
    (p(r"\b[Nn]otbremse"), Rule::Fouls, 8),
    (p(r"\boffensichtliche.{0,10}Torchance"), Rule::Fouls, 8),
    (p(r"\bklare Torchance"), Rule::Fouls, 8),
    (p(r"\b[Ss]pucken"), Rule::Fouls, 7),
    (p(r"\b[Ss]chlagen"), Rule::Fouls, 5),
    (p(r"\b[Bb]einstellen"), Rule::Fouls, 6),
    (p(r"\b[Hh]alten"), Rule::Fouls, 3),
    (p(r"\b[Kk]ontaktvergehen"), Rule::Fouls, 7),
    (p(r"\bverzögert.{0,20}Spielfortsetzung"), Rule::Fouls, 6),
    (p(r"\bKritik\b"), Rule::Fouls, 5),
    (p(r"\bBeleidigung"), Rule::Fouls, 7),
    (p(r"\bProtestieren"), Rule::Fouls, 5),
    (p(r"\bErdklumpen"), Rule::Fouls, 6),
    (p(r"\bWerfen.{0,15}Gegenstand"), Rule::Fouls, 6),
    (p(r"\b[Pp]ersönliche.{0,5}Strafe"), Rule::Fouls, 8),
    (p(r"\b[Gg]efährliches Spiel"), Rule::Fouls, 7),
    (p(r"\bZweikampf"), Rule::Fouls, 4),
    (p(r"\bVerhinderung.{0,30}Torchance"), Rule::Fouls, 8),
    // Regel 5
    (p(r"\b[Ss]chiedsrichter.{0,10}(entscheid|Entscheid)"), Rule::Schiedsrichter, 5),
    (p(r"\b[Vv]orteil\b"), Rule::Schiedsrichter, 6),
    (p(r"\bSpielabbruch"), Rule::Schiedsrichter, 9),
    (p(r"\bPublic Announcement"), Rule::Schiedsrichter, 10),
    (p(r"\bKapitänsdialog"), Rule::Schiedsrichter, 10),
    (p(r"\bAnsprechpartner"), Rule::Schiedsrichter, 8),
    (p(r"\b[Ss]pielbericht"), Rule::Schiedsrichter, 8),
    (p(r"\bSchiedsrichter.{0,10}pfeif"), Rule::Schiedsrichter, 5),
    (p(r"\bVorteil.{0,10}(geben|gewähr|spiel)"), Rule::Schiedsrichter, 7),
    (p(r"\bKarenzzeit"), Rule::Schiedsrichter, 7),
    (p(r"\bSignalkarte"), Rule::Schiedsrichter, 6),
    (p(r"\b[Rr]evidier"), Rule::Schiedsrichter, 6),
    // Regel 6
    (p(r"\bAssistent"), Rule::WeitereSpieloffizielle, 7),
    (p(r"\bSchiedsrichter-Assistent"), Rule::WeitereSpieloffizielle, 9),
    (p(r"\bVAR\b"), Rule::WeitereSpieloffizielle, 10),
    (p(r"\bVideo"), Rule::WeitereSpieloffizielle, 6),
    // Regel 7
    (p(r"\bVerlängerung"), Rule::DauerDesSpiels, 7),
    (p(r"\bNachspielzeit"), Rule::DauerDesSpiels, 9),
    (p(r"\bSchlusspfiff"), Rule::DauerDesSpiels, 7),
    (p(r"\bSpielende"), Rule::DauerDesSpiels, 7),
    (p(r"\bHalbzeit"), Rule::DauerDesSpiels, 6),
    (p(r"\bAnstoßzeit"), Rule::DauerDesSpiels, 6),
    (p(r"\bZeitspiel"), Rule::DauerDesSpiels, 6),
    (p(r"\bacht Sekunden"), Rule::DauerDesSpiels, 4),
    (p(r"\b[Rr]unterzählen"), Rule::DauerDesSpiels, 4),
    // Regel 8
    (p(r"\b[Aa]nstoß"), Rule::BeginnUndFortsetzung, 7),
    (p(r"\b[Ss]chiedsrichter.?[Bb]all"), Rule::BeginnUndFortsetzung, 10),
    (p(r"\bSchiedsrichterball"), Rule::BeginnUndFortsetzung, 10),
    (p(r"\bSpielfortsetzung"), Rule::BeginnUndFortsetzung, 5),
    (p(r"\bSpiel fortgesetzt"), Rule::BeginnUndFortsetzung, 5),
    // Regel 3
    (p(r"\b[Aa]uswechsl"), Rule::Spieler, 8),
    (p(r"\b[Ee]inwechsl"), Rule::Spieler, 8),
    (p(r"\b[Rr]ückwechsel"), Rule::Spieler, 8),
    (p(r"\bSpieleranzahl"), Rule::Spieler, 7),
    (p(r"\bsieben Spieler"), Rule::Spieler, 7),
    (p(r"\belf Spieler"), Rule::Spieler, 6),
    (p(r"\bSpielertrainer"), Rule::Spieler, 7),
    (p(r"\b[Tt]eilnahmeberechtigt"), Rule::Spieler, 7),
    (p(r"\bspielberechtigt"), Rule::Spieler, 7),
    (p(r"\babgemeldet\b"), Rule::Spieler, 6),
    // Regel 4
    (p(r"\b[Aa]usrüstung"), Rule::Ausruestung, 9),
    (p(r"\bTrikot"), Rule::Ausruestung, 8),
    (p(r"\b[Ss]chmuck"), Rule::Ausruestung, 8),
    (p(r"\b[Ss]chienbeinschoner"), Rule::Ausruestung, 8),
    (p(r"\b[Kk]opfbedeckung"), Rule::Ausruestung, 9),
    (p(r"\b[Mm]ütze"), Rule::Ausruestung, 9),
    (p(r"\bCap\b"), Rule::Ausruestung, 6),
    (p(r"\b[Ss]chuhe"), Rule::Ausruestung, 6),
    (p(r"\bUnterhose"), Rule::Ausruestung, 7),
    (p(r"\bUnterziehshirt"), Rule::Ausruestung, 7),
    (p(r"\bSchienbeinschützer"), Rule::Ausruestung, 7),
    // Regel 1
    (p(r"\bSpielfeldmarkierung"), Rule::Spielfeld, 9),
    (p(r"\b[Hh]ilfsmarkierung"), Rule::Spielfeld, 10),
    (p(r"\bKreide\b"), Rule::Spielfeld, 7),
    (p(r"\bHütchen\b"), Rule::Spielfeld, 5),
    (p(r"\bSchneebedeckt"), Rule::Spielfeld, 6),
    (p(r"\bPlatzwart"), Rule::Spielfeld, 6),
    (p(r"\b[Ee]ckfahne"), Rule::Spielfeld, 5),
    (p(r"\bMittellinie\b"), Rule::Spielfeld, 4),
    // Regel 2
    (p(r"\bErsatzball"), Rule::Ball, 9),
    (p(r"\b[Bb]all.{0,10}beschädigt"), Rule::Ball, 8),
    (p(r"\b[Bb]all.{0,10}platzt"), Rule::Ball, 8),
    // Regel 9
    (p(r"\bBall im Spiel"), Rule::BallImUndAusDemSpiel, 8),
    (p(r"\bBall aus dem Spiel"), Rule::BallImUndAusDemSpiel, 8),
    // Goalkeeper handling, cited under Regel 12
    (p(r"\bTorhüter.{0,30}(Hand|Händen|aufnimmt|fängt|kontrolliert)"), Rule::Fouls, 5),
    (p(r"\bTorhüter.{0,30}(Sekunden|Ballkontrolle)"), Rule::Fouls, 5),
    (p(r"\bBallkontrolle.{0,20}Torhüter"), Rule::Fouls, 5),
    (p(r"\b[Rr]ückpass"), Rule::Fouls, 7),
];

/// Tag patterns used when enriching JSON collections (matched case-insensitively).
pub(crate) const ENRICHMENT_TAG_PATTERNS: &[(Tag, &[PatternSpec])] = &[
    (
        Tag::PersoenlicheStrafe,
        &[
            p(r"\b[Vv]erwarnung"),
            p(r"\b[Ff]eldverweis"),
            p(r"\bGelb"),
            p(r"\bRot\b"),
            p(r"\bGelb/Rot"),
            p(r"\bKarte\b"),
            p(r"\bpersönliche.{0,5}Strafe"),
            p(r"\bSignalkarte"),
        ],
    ),
    (
        Tag::Spielfortsetzung,
        &[
            p(r"\b[Ff]reistoß"),
            p(r"\b[Ss]trafstoß"),
            p(r"\b[Ee]inwurf"),
            p(r"\b[Aa]bstoß"),
            p(r"\b[Ee]ckstoß"),
            p(r"\b[Ss]chiedsrichterball"),
            p(r"\b[Aa]nstoß"),
            p(r"\b[Ww]eiterspiel"),
        ],
    ),
    (
        Tag::Torwart,
        &[
            p(r"\bTor(hüter|wart)"),
            p(r"\bTorhüter"),
            p(r"\bKeeper"),
            p(r"\bTorwart"),
            p(r"\bBallkontrolle"),
        ],
    ),
    (
        Tag::Strafstoss,
        &[
            p(r"\b[Ss]trafstoß"),
            p(r"\b[Ee]lfmeter").except(NOT_SHOOTOUT),
            p(r"\bStrafstoßausführung"),
            p(r"\b[Ss]chütze"),
        ],
    ),
    (Tag::Elfmeterschiessen, &[p(r"\b[Ee]lfmeterschieß")]),
    (Tag::Abseits, &[p(r"\b[Aa]bseits")]),
    (
        Tag::Handspiel,
        &[
            p(r"\b[Hh]andspiel"),
            p(r"\bHand.{0,5}(Ball|spiel)"),
            p(r"\bmit der Hand"),
            p(r"\bmit dem Arm"),
        ],
    ),
    (
        Tag::Foulspiel,
        &[
            p(r"\b[Ff]oul"),
            p(r"\b[Bb]einstellen"),
            p(r"\b[Ss]toßen"),
            p(r"\b[Rr]empeln"),
            p(r"\b[Tt]reten"),
            p(r"\b[Ss]chlagen"),
            p(r"\bZweikampf"),
            p(r"\b[Hh]alten.{0,15}Gegner"),
            p(r"\b[Hh]altevergehen"),
        ],
    ),
    (
        Tag::UnsportlichesVerhalten,
        &[
            p(r"\bunsportlich"),
            p(r"\b[Ss]chwalbe"),
            p(r"\b[Ss]imulation"),
            p(r"\bverzögert"),
            p(r"\bZeitspiel"),
            p(r"\bKritik"),
            p(r"\bBeleidigung"),
            p(r"\bProtest"),
            p(r"\bProvokation"),
        ],
    ),
    (
        Tag::Taetlichkeit,
        &[
            p(r"\b[Tt]ätlichkeit"),
            p(r"\b[Ss]chlagen"),
            p(r"\b[Ss]pucken"),
            p(r"\b[Bb]eißen"),
            p(r"\b[Kk]opfstoß"),
        ],
    ),
    (
        Tag::Notbremse,
        &[
            p(r"\bDOGSO"),
            p(r"\b[Nn]otbremse"),
            p(r"\boffensichtliche.{0,10}Torchance"),
            p(r"\bklare Torchance"),
            p(r"\bVerhinderung.{0,30}Torchance"),
        ],
    ),
    (Tag::Vorteilsregel, &[p(r"\b[Vv]orteil"), p(r"\badvantage")]),
    (
        Tag::Auswechslung,
        &[
            p(r"\b[Aa]uswechsl"),
            p(r"\b[Ee]inwechsl"),
            p(r"\b[Rr]ückwechsel"),
        ],
    ),
    (
        Tag::Ausruestung,
        &[
            p(r"\b[Aa]usrüstung"),
            p(r"\bTrikot"),
            p(r"\b[Ss]chmuck"),
            p(r"\b[Ss]chienbeinschon"),
            p(r"\b[Kk]opfbedeckung"),
            p(r"\b[Mm]ütze"),
            p(r"\bCap\b"),
            p(r"\b[Ss]chuhe"),
            p(r"\bUnterhose"),
            p(r"\bUnterzieh"),
        ],
    ),
    (
        Tag::Spielfeld,
        &[
            p(r"\bSpielfeldmarkierung"),
            p(r"\b[Hh]ilfsmarkierung"),
            p(r"\bKreide"),
            p(r"\bHütchen"),
            p(r"\b[Ss]chnee"),
            p(r"\bPlatzwart"),
        ],
    ),
    (
        Tag::Var,
        &[p(r"\bVAR\b"), p(r"\bVideo"), p(r"\bPublic Announcement")],
    ),
    (Tag::Verlaengerung, &[p(r"\bVerlängerung")]),
    (
        Tag::SchiedsrichterEntscheidung,
        &[
            p(r"\bSpielabbruch"),
            p(r"\b[Ss]pielbericht"),
            p(r"\bKapitänsdialog"),
            p(r"\bAnsprechpartner"),
            p(r"\b[Rr]evidier"),
        ],
    ),
];

/// Tag patterns used by the spreadsheet import (matched case-sensitively).
pub(crate) const IMPORT_TAG_PATTERNS: &[(Tag, &[PatternSpec])] = &[
    (Tag::Abseits, &[p(r"[Aa]bseits")]),
    (
        Tag::Handspiel,
        &[p(r"[Hh]andspiel"), p(r"mit der Hand"), p(r"mit dem Arm")],
    ),
    (
        Tag::Foulspiel,
        &[
            p(r"[Ff]oulspiel"),
            p(r"[Hh]altevergehen"),
            p(r"tritt.*gegen"),
            p(r"[Bb]einstellen"),
        ],
    ),
    (Tag::Strafstoss, &[p(r"[Ss]trafstoß"), p(r"[Ee]lfmeter")]),
    (
        Tag::Torwart,
        &[p(r"[Tt]orwart"), p(r"[Tt]orhüter"), p(r"[Tt]orsteher")],
    ),
    (
        Tag::PersoenlicheStrafe,
        &[
            p(r"[Vv]erwarnung"),
            p(r"[Ff]eldverweis"),
            p(r"Gelb.?Rot"),
            p(r"Rote Karte"),
            p(r"Gelbe Karte"),
        ],
    ),
    (
        Tag::Spielfortsetzung,
        &[
            p(r"[Ff]reistoß"),
            p(r"[Ss]trafstoß"),
            p(r"[Ee]inwurf"),
            p(r"[Ee]ckstoß"),
            p(r"[Aa]bstoß"),
            p(r"[Aa]nstoß"),
            p(r"Schiedsrichterball"),
        ],
    ),
    (
        Tag::Notbremse,
        &[
            p(r"[Nn]otbremse"),
            p(r"DOGSO"),
            p(r"klare Torchance"),
            p(r"offensichtliche Torchance"),
        ],
    ),
    (
        Tag::UnsportlichesVerhalten,
        &[
            p(r"[Uu]nsportlich"),
            p(r"[Ss]imulation"),
            p(r"[Zz]eitverzögerung"),
        ],
    ),
    (
        Tag::Taetlichkeit,
        &[
            p(r"[Tt]ätlichkeit"),
            p(r"[Ss]chlagen"),
            p(r"[Ss]pucken"),
            p(r"[Bb]eißen"),
        ],
    ),
    (Tag::Var, &[p(r"\bVAR\b"), p(r"[Vv]ideo.?[Aa]ssist")]),
    (Tag::Auswechslung, &[p(r"[Aa]uswechsl"), p(r"[Ee]inwechsl")]),
    (
        Tag::Ausruestung,
        &[
            p(r"[Aa]usrüstung"),
            p(r"[Ss]chmuck"),
            p(r"[Ss]chienbeinschoner"),
        ],
    ),
    (Tag::Elfmeterschiessen, &[p(r"[Ee]lfmeterschieß")]),
    (
        Tag::Verlaengerung,
        &[p(r"[Vv]erlängerung"), p(r"[Nn]achspielzeit")],
    ),
    (Tag::Vorteil, &[p(r"[Vv]orteil")]),
    (
        Tag::SchiedsrichterEntscheidung,
        &[
            p(r"[Ss]chiedsrichter.*entscheid"),
            p(r"[Ss]chiedsrichter.*Irrtum"),
        ],
    ),
    (
        Tag::Spielfeld,
        &[
            p(r"[Ss]pielfeld"),
            p(r"[Tt]orlinie"),
            p(r"[Ss]eitenlinie"),
            p(r"[Mm]ittelkreis"),
        ],
    ),
];

/// How a criteria keyword is confirmed once it occurs in the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeywordCheck {
    /// Case-insensitive occurrence is enough.
    Contains,
    /// Must be the answer's first word, trailing punctuation stripped.
    LeadingWord,
    /// A case-sensitive pattern must also match the answer.
    Pattern(PatternSpec),
}

/// Compound words that share the `Tor` stem without meaning a goal.
pub(crate) const TOR_COMPOUND_SUFFIXES: &[&str] = &["wart", "hüter", "linie", "raum", "schuss"];

/// `(keyword, criterion, check)` in reporting order. Several keywords may
/// map to the same criterion; it is reported once.
pub(crate) const CRITERIA_KEYWORDS: &[(&str, Criterion, KeywordCheck)] = &[
    ("Strafstoß", Criterion::Strafstoss, KeywordCheck::Contains),
    ("Direkter Freistoß", Criterion::DirekterFreistoss, KeywordCheck::Contains),
    ("Indirekter Freistoß", Criterion::IndirekterFreistoss, KeywordCheck::Contains),
    ("Eckstoß", Criterion::Eckstoss, KeywordCheck::Contains),
    ("Einwurf", Criterion::Einwurf, KeywordCheck::Contains),
    ("Abstoß", Criterion::Abstoss, KeywordCheck::Contains),
    ("Anstoß", Criterion::Anstoss, KeywordCheck::Contains),
    ("Feldverweis", Criterion::Feldverweis, KeywordCheck::Contains),
    ("Verwarnung", Criterion::Verwarnung, KeywordCheck::Contains),
    ("Gelb/Rot", Criterion::GelbRot, KeywordCheck::Contains),
    ("Gelb-Rot", Criterion::GelbRot, KeywordCheck::Contains),
    ("Spielabbruch", Criterion::Spielabbruch, KeywordCheck::Contains),
    ("Spielunterbrechung", Criterion::Spielunterbrechung, KeywordCheck::Contains),
    ("Spielende", Criterion::Spielende, KeywordCheck::Contains),
    ("Wiederholung", Criterion::Wiederholung, KeywordCheck::Contains),
    ("Schiedsrichterball", Criterion::Schiedsrichterball, KeywordCheck::Contains),
    (
        "Tor",
        Criterion::Tor,
        KeywordCheck::Pattern(p(r"\b[Tt]or\b").except(TOR_COMPOUND_SUFFIXES)),
    ),
    (
        "Kein Tor",
        Criterion::KeinTor,
        KeywordCheck::Pattern(p(r"\b[Kk]ein\s+Tor\b")),
    ),
    ("Ja", Criterion::Ja, KeywordCheck::LeadingWord),
    ("Nein", Criterion::Nein, KeywordCheck::LeadingWord),
    ("Vorteil", Criterion::Vorteil, KeywordCheck::Contains),
];

/// Most important first; the partial list keeps only the first hit.
pub(crate) const PARTIAL_PRIORITY: &[Criterion] = &[
    Criterion::Feldverweis,
    Criterion::GelbRot,
    Criterion::Verwarnung,
    Criterion::Strafstoss,
    Criterion::DirekterFreistoss,
    Criterion::IndirekterFreistoss,
    Criterion::Spielabbruch,
    Criterion::Tor,
    Criterion::KeinTor,
];
