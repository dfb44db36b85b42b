use regex::{Regex, RegexBuilder};

/// Source form of a table pattern.
///
/// `not_followed_by` lists text that must not directly follow a match; a
/// match with one of these tails is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpec {
    pub source: &'static str,
    pub not_followed_by: &'static [&'static str],
}

impl PatternSpec {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            not_followed_by: &[],
        }
    }

    pub const fn except(self, not_followed_by: &'static [&'static str]) -> Self {
        Self {
            source: self.source,
            not_followed_by,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Sensitive,
    Insensitive,
}

/// Compiled pattern used by every classifier.
#[derive(Debug, Clone)]
pub struct TextPattern {
    regex: Regex,
    not_followed_by: &'static [&'static str],
    case: CaseMode,
}

impl TextPattern {
    pub fn compile(spec: PatternSpec, case: CaseMode) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(spec.source)
            .case_insensitive(case == CaseMode::Insensitive)
            .build()?;

        Ok(Self {
            regex,
            not_followed_by: spec.not_followed_by,
            case,
        })
    }

    pub fn count(&self, text: &str) -> usize {
        self.regex
            .find_iter(text)
            .filter(|found| self.accepts_tail(&text[found.end()..]))
            .count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex
            .find_iter(text)
            .any(|found| self.accepts_tail(&text[found.end()..]))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn accepts_tail(&self, tail: &str) -> bool {
        !self
            .not_followed_by
            .iter()
            .any(|excluded| starts_with(tail, excluded, self.case))
    }
}

fn starts_with(tail: &str, prefix: &str, case: CaseMode) -> bool {
    match case {
        CaseMode::Sensitive => tail.starts_with(prefix),
        CaseMode::Insensitive => {
            let head: String = tail.chars().take(prefix.chars().count()).collect();
            head.to_lowercase() == prefix.to_lowercase()
        }
    }
}
