//! Filters candidate phrases that are not skills.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::taxonomy::Taxonomy;
use crate::text::{clean_phrase, meaningful_words};

/// Longest accepted candidate, in words.
pub const MAX_SKILL_WORDS: usize = 6;

/// Compound technical terms accepted regardless of any other rule.
const TECHNICAL_EXCEPTIONS: &[&str] = &[
    "database management",
    "database systems",
    "database management systems",
    "systems database management",
    "relational databases",
    "data modeling",
    "version control",
    "data analysis",
    "data mining",
    "machine learning",
    "artificial intelligence",
    "natural language processing",
    "computer vision",
    "cloud computing",
    "distributed systems",
    "operating systems",
    "networking",
    "cyber security",
    "information security",
    "web development",
    "mobile development",
    "software engineering",
    "devops",
    "continuous integration",
    "continuous deployment",
];

/// Whole phrases that are never skills on their own.
const GENERIC_PHRASES: &[&str] = &[
    // Section headers
    "key skills", "core skills", "technical skills", "professional skills", "soft skills",
    "hard skills", "primary skills", "skills include", "skills", "skill set",
    "qualifications", "competencies", "expertise", "experience", "education",
    "certification", "certifications", "professional summary", "summary",
    "work experience", "professional experience", "employment", "job history", "career",
    "achievements", "accomplishments", "references", "objective",
    // Vague nouns
    "team", "teams", "work", "tasks", "various tasks", "duties", "responsibilities",
    "projects", "tools", "technologies", "solutions", "systems", "environment",
    "abilities", "knowledge", "proficiency", "capabilities", "background", "strength",
    "talent", "aptitude", "specialty", "foundation", "foundations", "basics", "fundamentals",
    "years", "year", "company", "clients", "customers", "things", "stuff",
    // Fragments
    "key", "core", "technical", "professional", "soft", "hard", "primary",
];

static ACTION_VERB_LEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:collaborated|developed|implemented|managed|created|enhanced|improved|integrated|directed|supervised|assisted|helped|supported|delivered|provided|utilized|demonstrated|worked|led|built|designed|responsible)\b",
    )
    .unwrap()
});

static GERUND_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:using|utilizing|applying|implementing|developing|creating|enhancing|improving)\b")
        .unwrap()
});

static DANGLING_PREPOSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:into|for|with|to|by|from|of|in|on|at)\b|\b(?:into|for|with|to|by|from|of|in|on|at)$")
        .unwrap()
});

static SENTENCE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[.!?:;]\s|\b(?:because|while|when|but|which|although|whereas)\b").unwrap()
});

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Generic,
    StopWordsOnly,
    ActionPhrase,
    Fragment,
    SentenceLike,
    TooLong,
    UnknownSingleWord,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Empty => "empty",
            Self::Generic => "generic phrase",
            Self::StopWordsOnly => "only stop words",
            Self::ActionPhrase => "action phrase",
            Self::Fragment => "dangling preposition",
            Self::SentenceLike => "sentence-like",
            Self::TooLong => "too many words",
            Self::UnknownSingleWord => "single word not in taxonomy",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone)]
pub struct SkillValidator {
    taxonomy: Arc<Taxonomy>,
}

impl SkillValidator {
    #[must_use]
    pub const fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Whether the cleaned form of `raw` could name a skill.
    #[must_use]
    pub fn is_valid_skill_candidate(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }

    /// Like [`is_valid_skill_candidate`](Self::is_valid_skill_candidate), with the reason.
    pub fn check(&self, raw: &str) -> Result<(), Rejection> {
        let cleaned = clean_phrase(raw);
        if cleaned.is_empty() {
            return Err(Rejection::Empty);
        }

        let lowered = cleaned.to_lowercase();
        if TECHNICAL_EXCEPTIONS
            .iter()
            .any(|exception| lowered.contains(exception))
        {
            return Ok(());
        }

        if GENERIC_PHRASES.contains(&lowered.as_str()) {
            return Err(Rejection::Generic);
        }

        let meaningful = meaningful_words(&cleaned);
        if meaningful == 0 {
            return Err(Rejection::StopWordsOnly);
        }
        if ACTION_VERB_LEAD.is_match(&cleaned) || GERUND_VERB.is_match(&cleaned) {
            return Err(Rejection::ActionPhrase);
        }
        if DANGLING_PREPOSITION.is_match(&cleaned) {
            return Err(Rejection::Fragment);
        }
        if SENTENCE_LIKE.is_match(&cleaned) {
            return Err(Rejection::SentenceLike);
        }
        if cleaned.split_whitespace().count() > MAX_SKILL_WORDS {
            return Err(Rejection::TooLong);
        }
        if meaningful < 2 && self.taxonomy.resolve_exact(&cleaned).is_none() {
            return Err(Rejection::UnknownSingleWord);
        }
        Ok(())
    }
}
