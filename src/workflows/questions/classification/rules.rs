use super::matcher::{CaseMode, TextPattern};
use super::patterns::RULE_PATTERNS;
use crate::workflows::questions::domain::Rule;
use std::fmt;

/// Controls which scored rules make it into a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSelection {
    /// A secondary rule needs at least this share of the primary score.
    pub secondary_threshold_percent: u32,
    pub max_citations: usize,
    /// Used when no pattern fires at all.
    pub fallback: Rule,
}

impl Default for RuleSelection {
    fn default() -> Self {
        Self {
            secondary_threshold_percent: 40,
            max_citations: 3,
            fallback: Rule::Fouls,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleScore {
    pub rule: Rule,
    pub score: u32,
}

/// One to `max_citations` rules, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReference {
    rules: Vec<Rule>,
}

impl RuleReference {
    pub fn primary(&self) -> Rule {
        self.rules[0]
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl fmt::Display for RuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, rule) in self.rules.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

struct WeightedPattern {
    pattern: TextPattern,
    rule: Rule,
    weight: u32,
}

/// Weighted keyword scorer mapping question text to rule citations.
pub struct RuleClassifier {
    patterns: Vec<WeightedPattern>,
    selection: RuleSelection,
}

impl RuleClassifier {
    pub fn standard() -> Result<Self, regex::Error> {
        Self::with_selection(RuleSelection::default())
    }

    pub fn with_selection(selection: RuleSelection) -> Result<Self, regex::Error> {
        let patterns = RULE_PATTERNS
            .iter()
            .map(|(spec, rule, weight)| {
                Ok(WeightedPattern {
                    pattern: TextPattern::compile(*spec, CaseMode::Insensitive)?,
                    rule: *rule,
                    weight: *weight,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            patterns,
            selection,
        })
    }

    pub fn selection(&self) -> &RuleSelection {
        &self.selection
    }

    /// Scores every rule that matched, best first. Equal scores keep the
    /// order in which the rules first scored while walking the table.
    pub fn scores(&self, situation: &str, answer: &str) -> Vec<RuleScore> {
        let combined = format!("{situation} {answer}");
        let mut scores: Vec<RuleScore> = Vec::new();

        for entry in &self.patterns {
            let matches = entry.pattern.count(&combined) as u32;
            if matches == 0 {
                continue;
            }

            let points = entry.weight * matches;
            match scores.iter_mut().find(|scored| scored.rule == entry.rule) {
                Some(scored) => scored.score += points,
                None => scores.push(RuleScore {
                    rule: entry.rule,
                    score: points,
                }),
            }
        }

        // stable: ties stay in first-scored order
        scores.sort_by(|left, right| right.score.cmp(&left.score));
        scores
    }

    pub fn classify(&self, situation: &str, answer: &str) -> RuleReference {
        let ranked = self.scores(situation, answer);
        RuleReference {
            rules: select_rules(&ranked, &self.selection),
        }
    }
}

/// Takes the primary rule plus the run of secondaries directly behind it
/// that clear the threshold. The scan stops at the first rule that falls
/// short; nothing after it is considered.
pub(crate) fn select_rules(ranked: &[RuleScore], selection: &RuleSelection) -> Vec<Rule> {
    let Some(primary) = ranked.first() else {
        return vec![selection.fallback];
    };

    let required = u64::from(primary.score) * u64::from(selection.secondary_threshold_percent);
    let mut rules = vec![primary.rule];

    for candidate in &ranked[1..] {
        if rules.len() >= selection.max_citations {
            break;
        }
        if u64::from(candidate.score) * 100 < required {
            break;
        }
        rules.push(candidate.rule);
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> RuleClassifier {
        RuleClassifier::standard().expect("rule patterns compile")
    }

    fn ranked(entries: &[(Rule, u32)]) -> Vec<RuleScore> {
        entries
            .iter()
            .map(|(rule, score)| RuleScore {
                rule: *rule,
                score: *score,
            })
            .collect()
    }

    #[test]
    fn falls_back_to_fouls_when_nothing_matches() {
        let reference = classifier().classify("Der Himmel ist blau.", "Weiter geht's.");
        assert_eq!(reference.rules(), &[Rule::Fouls]);
        assert_eq!(
            reference.to_string(),
            "Regel 12 (Fouls und sonstiges Fehlverhalten)"
        );
    }

    #[test]
    fn offside_question_cites_rule_eleven() {
        let reference = classifier().classify(
            "Ein Angreifer steht beim Pass in einer Abseitsstellung und greift ins Spiel ein.",
            "Ja. Der Spieler war im Abseits.",
        );
        assert_eq!(reference.primary(), Rule::Abseits);
        assert_eq!(reference.to_string(), "Regel 11 (Abseits)");
    }

    #[test]
    fn scores_accumulate_weight_per_match() {
        let scores = classifier().scores("Einwurf, dann noch ein Einwurf.", "Einwurf.");
        assert_eq!(
            scores,
            vec![RuleScore {
                rule: Rule::Einwurf,
                score: 30
            }]
        );
    }

    #[test]
    fn secondary_rules_need_forty_percent_of_primary() {
        let selection = RuleSelection::default();
        let rules = select_rules(
            &ranked(&[
                (Rule::Fouls, 10),
                (Rule::Strafstoss, 6),
                (Rule::Abseits, 3),
                (Rule::Einwurf, 2),
            ]),
            &selection,
        );
        assert_eq!(rules, vec![Rule::Fouls, Rule::Strafstoss]);

        let rules = select_rules(
            &ranked(&[(Rule::Fouls, 10), (Rule::Strafstoss, 4)]),
            &selection,
        );
        assert_eq!(rules, vec![Rule::Fouls, Rule::Strafstoss]);

        let rules = select_rules(
            &ranked(&[(Rule::Fouls, 10), (Rule::Strafstoss, 3)]),
            &selection,
        );
        assert_eq!(rules, vec![Rule::Fouls]);
    }

    #[test]
    fn selection_stops_at_first_shortfall() {
        // Not a realistic ranking, but pins down prefix semantics.
        let rules = select_rules(
            &ranked(&[(Rule::Fouls, 10), (Rule::Abseits, 3), (Rule::Einwurf, 9)]),
            &RuleSelection::default(),
        );
        assert_eq!(rules, vec![Rule::Fouls]);
    }

    #[test]
    fn selection_caps_citations() {
        let rules = select_rules(
            &ranked(&[
                (Rule::Fouls, 10),
                (Rule::Strafstoss, 10),
                (Rule::Abseits, 10),
                (Rule::Einwurf, 10),
            ]),
            &RuleSelection::default(),
        );
        assert_eq!(rules, vec![Rule::Fouls, Rule::Strafstoss, Rule::Abseits]);
    }

    #[test]
    fn higher_scores_rank_first() {
        let scores = classifier().scores("Nach dem Anstoß folgt ein Abstoß.", "");
        assert_eq!(
            scores,
            vec![
                RuleScore {
                    rule: Rule::Abstoss,
                    score: 10
                },
                RuleScore {
                    rule: Rule::BeginnUndFortsetzung,
                    score: 7
                },
            ]
        );
    }

    #[test]
    fn ties_keep_first_scored_order() {
        // Einwurf (Regel 15) is declared before Eckstoß (Regel 17).
        let reference = classifier().classify("Eckstoß oder Einwurf?", "");
        assert_eq!(reference.rules(), &[Rule::Einwurf, Rule::Eckstoss]);
        assert_eq!(
            reference.to_string(),
            "Regel 15 (Einwurf), Regel 17 (Eckstoß)"
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = classifier();
        let situation = "Der Torhüter nimmt einen Rückpass mit der Hand auf.";
        let answer = "Indirekter Freistoß. Keine persönliche Strafe.";
        let first = classifier.classify(situation, answer).to_string();
        for _ in 0..5 {
            assert_eq!(classifier.classify(situation, answer).to_string(), first);
        }
    }
}
