//! Pure signal evaluators. Each looks at a context window and votes for at
//! most one proficiency level.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::ProficiencyLevel;

/// The six evidence sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Keywords,
    Duration,
    Cognitive,
    ProjectScale,
    Responsibility,
    Certification,
}

impl Signal {
    pub const COUNT: usize = 6;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Duration => "duration",
            Self::Cognitive => "cognitive",
            Self::ProjectScale => "project_scale",
            Self::Responsibility => "responsibility",
            Self::Certification => "certification",
        }
    }
}

/// A context signal paired with its evaluator.
#[derive(Clone, Copy)]
pub struct SignalEvaluator {
    pub signal: Signal,
    pub evaluate: fn(&str) -> Option<ProficiencyLevel>,
}

/// Context signals in evaluation order. Certification is evaluated
/// separately because it reads the certification text, not the context.
pub const CONTEXT_SIGNALS: [SignalEvaluator; 5] = [
    SignalEvaluator {
        signal: Signal::Keywords,
        evaluate: keywords,
    },
    SignalEvaluator {
        signal: Signal::Duration,
        evaluate: duration,
    },
    SignalEvaluator {
        signal: Signal::Cognitive,
        evaluate: cognitive,
    },
    SignalEvaluator {
        signal: Signal::ProjectScale,
        evaluate: project_scale,
    },
    SignalEvaluator {
        signal: Signal::Responsibility,
        evaluate: responsibility,
    },
];

type LevelTable = [(ProficiencyLevel, Regex); 4];

fn table(patterns: [&str; 4]) -> LevelTable {
    let [b, i, a, e] = patterns.map(|p| Regex::new(&format!(r"(?i)\b(?:{p})")).unwrap());
    [
        (ProficiencyLevel::Beginner, b),
        (ProficiencyLevel::Intermediate, i),
        (ProficiencyLevel::Advanced, a),
        (ProficiencyLevel::Expert, e),
    ]
}

static KEYWORDS: LazyLock<LevelTable> = LazyLock::new(|| {
    table([
        r"basic\b|familiar(?:ity)?\b|beginner\b|novice\b|entry[- ]level\b|exposure to\b|introductory\b",
        r"intermediate\b|proficien(?:t|cy)\b|working knowledge\b|competent\b|solid understanding\b|hands[- ]on\b",
        r"advanced\b|strong\b|extensive\b|in[- ]depth\b|seasoned\b|deep knowledge\b",
        r"expert(?:ise)?\b|mastery\b|master of\b|authority\b|thought leader\b|guru\b",
    ])
});

static COGNITIVE: LazyLock<LevelTable> = LazyLock::new(|| {
    table([
        r"assist\w*|help\w*|learn\w*|understand\w*|follow\w*",
        r"implement\w*|develop\w*|build\w*|built\b|creat\w*|maintain\w*",
        r"design\w*|optimi[sz]\w*|analy[sz]\w*|integrat\w*|evaluat\w*|troubleshoot\w*",
        r"architect\w*|invent\w*|pioneer\w*|innovat\w*|devis\w*|formulat\w*",
    ])
});

static PROJECT_SCALE: LazyLock<LevelTable> = LazyLock::new(|| {
    table([
        r"small\b|personal projects?\b|academic\b|class projects?\b|hobby\b|side projects?\b",
        r"team projects?\b|modules?\b|components?\b|features?\b|moderate\b",
        r"production\b|complex\b|cross[- ]functional\b|large\b|multi[- ]team\b",
        r"enterprise\b|large[- ]scale\b|global\b|mission[- ]critical\b|worldwide\b|nationwide\b|company[- ]wide\b",
    ])
});

static RESPONSIBILITY: LazyLock<LevelTable> = LazyLock::new(|| {
    table([
        r"assisted\b|helped\b|supported\b|shadowed\b",
        r"contributed to\b|participated\b|collaborated\b|coordinated\b|responsible for\b",
        r"managed\b|mentored\b|oversaw\b|supervised\b|coached\b|trained\b",
        r"led\b|headed\b|directed\b|spearheaded\b|founded\b|head of\b",
    ])
});

static CERTIFICATION: LazyLock<LevelTable> = LazyLock::new(|| {
    table([
        r"fundamentals?\b|foundations?\b|foundational\b|essentials\b|entry\b",
        r"associate\b|practitioner\b",
        r"professional\b|specialist\b|specialty\b|advanced\b",
        r"expert\b|master\b|fellow\b|distinguished\b",
    ])
});

/// Most matches wins; ties go to the higher level.
fn vote(table: &LevelTable, text: &str) -> Option<ProficiencyLevel> {
    let mut best: Option<(ProficiencyLevel, usize)> = None;
    for (level, pattern) in table {
        let hits = pattern.find_iter(text).count();
        if hits > 0 && best.is_none_or(|(_, top)| hits >= top) {
            best = Some((*level, hits));
        }
    }
    best.map(|(level, _)| level)
}

#[must_use]
pub fn keywords(context: &str) -> Option<ProficiencyLevel> {
    vote(&KEYWORDS, context)
}

#[must_use]
pub fn cognitive(context: &str) -> Option<ProficiencyLevel> {
    vote(&COGNITIVE, context)
}

#[must_use]
pub fn project_scale(context: &str) -> Option<ProficiencyLevel> {
    vote(&PROJECT_SCALE, context)
}

#[must_use]
pub fn responsibility(context: &str) -> Option<ProficiencyLevel> {
    vote(&RESPONSIBILITY, context)
}

#[must_use]
pub fn certification(certification_text: &str) -> Option<ProficiencyLevel> {
    vote(&CERTIFICATION, certification_text)
}

const NUMBER_WORDS: &[(&str, f32)] = &[
    ("a", 1.0),
    ("an", 1.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("fifteen", 15.0),
    ("twenty", 20.0),
    ("several", 3.0),
    ("couple of", 2.0),
];

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?P<amount>\d+(?:\.\d+)?|an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|fifteen|twenty|several|couple of)\s*\+?\s*(?P<unit>years?|yrs?|months?|decades?)\b(?P<compound>-\w+)?",
    )
    .unwrap()
});

/// Amounts from here up read as calendar years ("the 2023 year-end").
const CALENDAR_YEAR_FLOOR: f32 = 1900.0;

static BARE_DECADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdecades?\b").unwrap());

/// Longest stated experience in years, if any.
#[must_use]
pub fn max_years(context: &str) -> Option<f32> {
    let mut best: Option<f32> = None;
    for caps in DURATION.captures_iter(context) {
        // "year-end", "month-long" describe an event, not experience.
        if caps.name("compound").is_some() {
            continue;
        }
        let raw = caps["amount"].to_lowercase();
        let amount = raw.parse::<f32>().ok().or_else(|| {
            NUMBER_WORDS
                .iter()
                .find(|(word, _)| *word == raw)
                .map(|(_, value)| *value)
        });
        let Some(amount) = amount.filter(|a| *a < CALENDAR_YEAR_FLOOR) else {
            continue;
        };
        let unit = caps["unit"].to_lowercase();
        let years = if unit.starts_with("month") {
            amount / 12.0
        } else if unit.starts_with("decade") {
            amount * 10.0
        } else {
            amount
        };
        best = Some(best.map_or(years, |b: f32| b.max(years)));
    }
    if best.is_none() && BARE_DECADE.is_match(context) {
        best = Some(10.0);
    }
    best
}

/// `<1` Beginner, `1..3` Intermediate, `3..6` Advanced, `>=6` Expert.
#[must_use]
pub fn level_for_years(years: f32) -> ProficiencyLevel {
    if years < 1.0 {
        ProficiencyLevel::Beginner
    } else if years < 3.0 {
        ProficiencyLevel::Intermediate
    } else if years < 6.0 {
        ProficiencyLevel::Advanced
    } else {
        ProficiencyLevel::Expert
    }
}

#[must_use]
pub fn duration(context: &str) -> Option<ProficiencyLevel> {
    max_years(context).map(level_for_years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProficiencyLevel::{Advanced, Beginner, Expert, Intermediate};
    use crate::test_utils::{TestCase, run_table_tests};

    #[test]
    fn duration_thresholds() {
        let cases = vec![
            TestCase::new("months", "6 months of Rust", Some(Beginner)),
            TestCase::new("one year", "one year of Go", Some(Intermediate)),
            TestCase::new("a year", "a year with Java", Some(Intermediate)),
            TestCase::new("three is advanced", "3 years of SQL", Some(Advanced)),
            TestCase::new("plus suffix", "5+ years of Python", Some(Advanced)),
            TestCase::new("six is expert", "6 yrs of C", Some(Expert)),
            TestCase::new("max wins", "2 years of Java and 7 years of C", Some(Expert)),
            TestCase::new("decade", "over a decade of Linux", Some(Expert)),
            TestCase::new("none", "Python developer", None),
            TestCase::new("calendar year", "Closed the 2023 year-end books in Excel", None),
            TestCase::new("year as amount", "since 2019 years of change", None),
            TestCase::new("event length", "ran a 3 month-long migration", None),
            TestCase::new("real amount beside a date", "In 2021, 4 years of SQL", Some(Advanced)),
        ];
        run_table_tests(cases, duration);
    }

    #[test]
    fn month_conversion() {
        let years = max_years("18 months").unwrap();
        assert!((years - 1.5).abs() < 1e-6);
        assert!((max_years("two decades").unwrap() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn keyword_levels() {
        let cases = vec![
            TestCase::new("basic", "basic knowledge", Some(Beginner)),
            TestCase::new("working", "working knowledge of it", Some(Intermediate)),
            TestCase::new("strong", "strong background", Some(Advanced)),
            TestCase::new("expert", "recognized expert", Some(Expert)),
            TestCase::new("tie goes up", "basic then advanced", Some(Advanced)),
            TestCase::new("majority", "basic, familiar, advanced", Some(Beginner)),
            TestCase::new("nothing", "wrote code", None),
        ];
        run_table_tests(cases, keywords);
    }

    #[test]
    fn cognitive_levels() {
        assert_eq!(cognitive("helped the team"), Some(Beginner));
        assert_eq!(cognitive("implemented services"), Some(Intermediate));
        assert_eq!(cognitive("optimized queries"), Some(Advanced));
        assert_eq!(cognitive("Python architecture"), Some(Expert));
    }

    #[test]
    fn project_and_responsibility_levels() {
        assert_eq!(project_scale("a personal project"), Some(Beginner));
        assert_eq!(project_scale("enterprise rollout"), Some(Expert));
        assert_eq!(project_scale("large-scale systems"), Some(Expert));
        assert_eq!(responsibility("contributed to the api"), Some(Intermediate));
        assert_eq!(responsibility("mentored juniors"), Some(Advanced));
        assert_eq!(responsibility("led the team"), Some(Expert));
        assert_eq!(responsibility("the team"), None);
    }

    #[test]
    fn certification_levels() {
        assert_eq!(certification("Azure Fundamentals"), Some(Beginner));
        assert_eq!(certification("AWS Certified Solutions Architect - Associate"), Some(Intermediate));
        assert_eq!(certification("Google Professional Cloud Architect"), Some(Advanced));
        assert_eq!(certification("Cisco Certified Expert"), Some(Expert));
        assert_eq!(certification("PMP"), None);
    }
}
