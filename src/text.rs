//! Deterministic text helpers shared by the extractors.
//!
//! [`clean_phrase`] is the single cleaning routine every extractor uses;
//! it is idempotent for all inputs.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::model::Span;

/// Filler prefixes removed from the front of a candidate, one per pass.
const FILLER_PREFIXES: &[&str] = &[
    "proficient in ",
    "experience with ",
    "expertise in ",
    "knowledge of ",
    "skilled in ",
    "familiar with ",
    "worked with ",
    "demonstrated ",
    "excellent ",
    "effective ",
    "advanced ",
    "various ",
    "strong ",
    "proven ",
    "using ",
    "some ",
    "many ",
    "used ",
    "the ",
    "an ",
    "a ",
];

const BULLETS: &[char] = &['•', '·', '‣', '▪', '○', '●', '◦', '-', '*', '–', '—', '>'];

const TRAILING: &[char] = &['.', ',', ';', ':', '-', '!', '?'];

static PHRASE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:,|;|&|\band\b|\bor\b|\bas well as\b|\balong with\b|\bincluding\b|\bsuch as\b|\be\.g\.)\s*")
        .unwrap()
});

static CLAUSE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:for|at|since|during|from|which|that|where|because|while|when|to|by|on|across|through|over|under|within|via|in order)\b",
    )
    .unwrap()
});

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n+").unwrap());

/// Normalize a candidate phrase for display and lookup.
///
/// Collapses whitespace, drops leading bullets and filler prefixes, trims
/// trailing punctuation and title-cases every word.
#[must_use]
pub fn clean_phrase(raw: &str) -> String {
    let mut current = raw.split_whitespace().join(" ");
    loop {
        let cased = title_case(&current);
        let stripped = strip_once(&cased);
        if stripped == cased {
            return cased;
        }
        current = stripped;
    }
}

fn strip_once(text: &str) -> String {
    let mut rest = text.trim_start_matches(|c: char| c.is_whitespace() || BULLETS.contains(&c));
    if let Some(prefix) = FILLER_PREFIXES.iter().find(|prefix| {
        rest.len() > prefix.len()
            && rest
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }) {
        rest = &rest[prefix.len()..];
    }
    rest.trim_end_matches(|c: char| c.is_whitespace() || TRAILING.contains(&c))
        .to_string()
}

fn title_case(text: &str) -> String {
    text.split(' ').map(title_word).join(" ")
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    let mut out = String::with_capacity(word.len());
    out.push(head);
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Cut a captured phrase at the first clause-breaking word.
#[must_use]
pub fn truncate_clause(capture: &str) -> &str {
    match CLAUSE_BREAK.find(capture) {
        Some(found) => capture[..found.start()].trim_end(),
        None => capture.trim_end(),
    }
}

/// Split a phrase list on commas, semicolons, `&` and conjunctions.
///
/// Returned spans are byte ranges in the coordinates of the original text,
/// given that `phrase` starts at byte `offset`.
#[must_use]
pub fn split_phrases(phrase: &str, offset: usize) -> Vec<(Span, &str)> {
    let mut pieces = Vec::new();
    let mut cursor = 0;
    let mut push = |start: usize, end: usize| {
        let raw = &phrase[start..end];
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            let lead = raw.len() - raw.trim_start().len();
            let piece_start = start + lead;
            pieces.push((
                Span::new(offset + piece_start, offset + piece_start + trimmed.len()),
                trimmed,
            ));
        }
    };
    for sep in PHRASE_SEPARATOR.find_iter(phrase) {
        push(cursor, sep.start());
        cursor = sep.end();
    }
    push(cursor, phrase.len());
    pieces
}

/// Sentence spans, trimmed, in document order.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut push = |from: usize, to: usize| {
        let raw = &text[from..to];
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            let lead = raw.len() - raw.trim_start().len();
            spans.push(Span::new(from + lead, from + lead + trimmed.len()));
        }
    };
    for brk in SENTENCE_BREAK.find_iter(text) {
        // Keep terminal punctuation inside the sentence.
        let punct_end = brk.as_str().trim_end().len();
        push(start, brk.start() + punct_end);
        start = brk.end();
    }
    push(start, text.len());
    spans
}

/// The sentences around `span`, `radius` on each side.
///
/// The anchor is the last sentence starting at or before `span`; with no
/// such sentence the whole text is returned.
#[must_use]
pub fn context_window(text: &str, sentences: &[Span], span: Span, radius: usize) -> Span {
    let Some(index) = sentences
        .iter()
        .rposition(|sentence| sentence.start <= span.start)
    else {
        return Span::new(0, text.len());
    };
    let first = index.saturating_sub(radius);
    let last = (index + radius).min(sentences.len() - 1);
    Span::new(sentences[first].start, sentences[last].end)
}

/// Count words that carry meaning (not stop words).
#[must_use]
pub fn meaningful_words(phrase: &str) -> usize {
    phrase
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .count()
}

/// Common English function words.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "a", "an", "the", "and", "or", "but", "nor", "of", "in", "on", "at", "to", "for",
        "with", "by", "from", "into", "onto", "as", "is", "are", "was", "were", "be", "been",
        "being", "it", "its", "this", "that", "these", "those", "my", "our", "your", "their",
        "his", "her", "i", "we", "you", "they", "he", "she", "me", "us", "them", "some",
        "many", "much", "more", "most", "very", "also", "such", "other", "various", "all",
        "any", "each", "every", "both", "etc", "via", "per", "than", "then", "so", "not",
        "no", "do", "does", "did", "have", "has", "had", "can", "will", "would", "should",
        "could", "may", "might", "must", "over", "under", "about", "across", "within",
    ];
    let lowered = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    STOP_WORDS.contains(&lowered.as_str())
}
