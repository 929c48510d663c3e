//! Lexicon-driven annotator for plain English resume text.
//!
//! Tags tokens from small closed-class word lists, groups adjective/noun
//! runs into noun chunks, and attaches prepositions, objects and
//! coordinated conjuncts. It is nowhere near a statistical parser, but it
//! yields the `prep -> pobj -> conj` shapes the structural extractor needs.

use std::sync::LazyLock;

use regex::Regex;

use super::{Annotations, DepLabel, LinguisticAnnotator, NounChunk, PartOfSpeech, Token};
use crate::error::Result;
use crate::model::Span;
use crate::text::split_sentences;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w+#./'\-]*\w[+#]*|\w[+#]*|[^\w\s]").unwrap());

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "many", "various", "several",
    "any", "each", "every", "all", "our", "my", "their", "his", "her", "its", "your", "no",
];

const ADPOSITIONS: &[&str] = &[
    "in", "with", "of", "on", "at", "for", "from", "by", "to", "into", "using", "via", "across",
    "through", "over", "under", "within", "during", "since", "about", "including", "throughout",
    "without", "among", "between", "upon",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "nor", "but", "&"];

const PRONOUNS: &[&str] = &[
    "i", "we", "you", "they", "he", "she", "it", "me", "us", "them", "myself", "who", "which",
];

const ADJECTIVES: &[&str] = &[
    "strong", "advanced", "excellent", "proficient", "skilled", "experienced", "expert", "solid",
    "deep", "extensive", "basic", "familiar", "senior", "junior", "large", "small", "complex",
    "new", "good", "great", "effective", "proven", "knowledgeable", "capable", "outstanding",
    "exceptional", "comprehensive", "relevant", "key", "core", "technical", "professional",
    "intermediate", "fluent", "hands-on", "practical", "distributed", "embedded", "automated",
    "related", "detailed", "applied", "structured", "unstructured", "supervised", "unsupervised",
    "certified", "qualified", "responsible",
];

const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "am", "have", "has", "had", "led", "built", "ran",
    "wrote", "drove", "won", "do", "did", "make", "made", "grew", "taught", "lead", "build",
    "manage", "develop", "design", "use", "work", "hold", "holds", "held",
];

/// Rule-based [`LinguisticAnnotator`] with no external model.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnnotator;

impl LinguisticAnnotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotations> {
        let sentences = split_sentences(text);
        let mut tokens = Vec::new();
        let mut noun_chunks = Vec::new();

        for (index, sentence) in sentences.iter().enumerate() {
            let Some(body) = sentence.slice(text) else {
                continue;
            };
            let base = tokens.len();
            let mut words = Vec::new();
            for found in TOKEN.find_iter(body) {
                let word = found.as_str().to_lowercase();
                tokens.push(Token {
                    span: Span::new(sentence.start + found.start(), sentence.start + found.end()),
                    sentence: index,
                    pos: tag(&word),
                    dep: DepLabel::Other,
                    head: None,
                });
                words.push(word);
            }
            let parsed = parse_sentence(&mut tokens[base..], &words, base);
            noun_chunks.extend(parsed.into_iter().map(|span| NounChunk {
                span,
                sentence: index,
            }));
        }

        Ok(Annotations {
            sentences,
            tokens,
            noun_chunks,
        })
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}

fn tag(word: &str) -> PartOfSpeech {
    if word.chars().all(|c| !c.is_alphanumeric()) {
        if CONJUNCTIONS.contains(&word) {
            return PartOfSpeech::Cconj;
        }
        return PartOfSpeech::Punct;
    }
    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return PartOfSpeech::Num;
    }
    if DETERMINERS.contains(&word) {
        PartOfSpeech::Det
    } else if ADPOSITIONS.contains(&word) {
        PartOfSpeech::Adp
    } else if CONJUNCTIONS.contains(&word) {
        PartOfSpeech::Cconj
    } else if PRONOUNS.contains(&word) {
        PartOfSpeech::Pron
    } else if ADJECTIVES.contains(&word) || (word.contains('-') && word.ends_with("ed")) {
        PartOfSpeech::Adj
    } else if VERBS.contains(&word) || (word.len() > 4 && word.ends_with("ed")) {
        PartOfSpeech::Verb
    } else {
        PartOfSpeech::Noun
    }
}

/// Chunk boundaries as local token indices: `first..=head`.
#[derive(Debug, Clone, Copy)]
struct Chunk {
    first: usize,
    head: usize,
}

/// Label one sentence in place; returns its noun-chunk spans.
fn parse_sentence(tokens: &mut [Token], words: &[String], base: usize) -> Vec<Span> {
    let chunks = find_chunks(tokens);
    let mut chunk_at = vec![None; tokens.len()];
    for (i, chunk) in chunks.iter().enumerate() {
        chunk_at[chunk.first] = Some(i);
        for local in chunk.first..chunk.head {
            tokens[local].dep = match tokens[local].pos {
                PartOfSpeech::Det => DepLabel::Det,
                PartOfSpeech::Adj => DepLabel::Amod,
                _ => DepLabel::Compound,
            };
            tokens[local].head = Some(base + chunk.head);
        }
    }

    let in_chunk = |local: usize| chunks.iter().any(|c| (c.first..=c.head).contains(&local));
    let root = tokens
        .iter()
        .enumerate()
        .position(|(local, token)| {
            token.pos == PartOfSpeech::Verb || (token.pos == PartOfSpeech::Adj && !in_chunk(local))
        })
        .or_else(|| chunks.first().map(|chunk| chunk.head));
    if let Some(root) = root {
        tokens[root].dep = DepLabel::Root;
    }

    for local in 0..tokens.len() {
        match tokens[local].pos {
            PartOfSpeech::Adp => {
                let head = if words[local] == "of" {
                    chunks
                        .iter()
                        .rev()
                        .find(|chunk| chunk.head < local)
                        .map(|chunk| chunk.head)
                        .or(root)
                } else {
                    root
                };
                tokens[local].dep = DepLabel::Prep;
                tokens[local].head = head.filter(|&h| h != local).map(|h| base + h);
                attach_object(tokens, words, &chunks, &chunk_at, local, DepLabel::Pobj, base);
            }
            PartOfSpeech::Verb => {
                attach_object(tokens, words, &chunks, &chunk_at, local, DepLabel::Dobj, base);
            }
            _ => {}
        }
    }
    chunks
        .iter()
        .map(|chunk| Span::new(tokens[chunk.first].span.start, tokens[chunk.head].span.end))
        .collect()
}

/// Maximal `DET? (ADJ|NUM|NOUN)+` runs that contain a noun; the last noun heads.
fn find_chunks(tokens: &[Token]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut local = 0;
    while local < tokens.len() {
        let first = local;
        if tokens[local].pos == PartOfSpeech::Det {
            local += 1;
        }
        let mut head = None;
        while local < tokens.len()
            && matches!(
                tokens[local].pos,
                PartOfSpeech::Adj | PartOfSpeech::Num | PartOfSpeech::Noun
            )
        {
            if tokens[local].pos == PartOfSpeech::Noun {
                head = Some(local);
            }
            local += 1;
        }
        match head {
            Some(head) => chunks.push(Chunk { first, head }),
            None => local = first + 1,
        }
    }
    chunks
}

/// Attach the chunk right after `governor` as its object, then follow
/// `, X`, `and X`, `, and X` coordination from that chunk.
fn attach_object(
    tokens: &mut [Token],
    words: &[String],
    chunks: &[Chunk],
    chunk_at: &[Option<usize>],
    governor: usize,
    label: DepLabel,
    base: usize,
) {
    let Some(&Some(first)) = chunk_at.get(governor + 1) else {
        return;
    };
    let anchor = chunks[first].head;
    if tokens[anchor].dep == DepLabel::Root {
        return;
    }
    tokens[anchor].dep = label;
    tokens[anchor].head = Some(base + governor);

    let mut cursor = anchor + 1;
    loop {
        let mut next = cursor;
        while next < tokens.len() && (tokens[next].pos == PartOfSpeech::Cconj || words[next] == ",") {
            next += 1;
        }
        if next == cursor {
            break;
        }
        let Some(&Some(conjunct)) = chunk_at.get(next) else {
            break;
        };
        for link in cursor..next {
            tokens[link].dep = if tokens[link].pos == PartOfSpeech::Cconj {
                DepLabel::Cc
            } else {
                DepLabel::Punct
            };
            tokens[link].head = Some(base + anchor);
        }
        let head = chunks[conjunct].head;
        tokens[head].dep = DepLabel::Conj;
        tokens[head].head = Some(base + anchor);
        cursor = head + 1;
    }
}
