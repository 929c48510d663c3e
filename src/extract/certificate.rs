//! Issuer and issue date of a certification document.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Organizations recognised by name when no issuing phrase is present.
const PROVIDERS: &[&str] = &[
    "AWS",
    "Microsoft",
    "Google Cloud",
    "Cisco",
    "CompTIA",
    "PMI",
    "Scrum Alliance",
    "Scrum.org",
    "Oracle",
    "MongoDB",
    "Linux Foundation",
    "EC-Council",
    "Offensive Security",
    "Salesforce",
    "ISACA",
    "Axelos",
    "The Open Group",
];

const MAX_ISSUER_LEN: usize = 80;

const DATE: &str = r"(?P<date>\d{4}-\d{2}-\d{2}|\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}|(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2},?\s+\d{4}|\d{1,2}\s+(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4})";

const ORG_WORD: &str = r"[A-Z][\w&\-]*(?:\.\w+)*";

fn org() -> String {
    format!(r"(?P<org>{ORG_WORD}(?:[ \t]+(?:(?:of|for|and|&)[ \t]+)?{ORG_WORD})*)")
}

static ISSUE_DATE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"(?i:issue|issuance|issued|completion)\s+(?i:date)\s*[:\-]?\s*{DATE}"),
        format!(r"(?i:date)\s+(?i:issued|of\s+issuance|of\s+completion)\s*[:\-]?\s*{DATE}"),
        format!(r"(?i:valid|issued|awarded|completed)\s+(?i:from|on)\s*[:\-]?\s*{DATE}"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static ISSUER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let org = org();
    [
        format!(r"(?i:issued|provided|authorized|awarded)\s+(?i:by)\s+{org}"),
        format!(r"(?i:issuing|certifying)\s+(?i:organization|authority|body)\s*[:\-]?\s*{org}"),
        format!(r"(?m)^[ \t]*{org}[ \t]+(?i:hereby\s+)?(?i:certifies|confirms)\b"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static PROVIDER: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<String> = PROVIDERS.iter().map(|name| regex::escape(name)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", names.join("|"))).unwrap()
});

/// Who issued a certificate and when, as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,
}

impl CertificateDetails {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.issuer.is_none() && self.issued.is_none()
    }
}

/// Read the issuing organization and issue date out of certification text.
///
/// Explicit phrases ("issued by", "issuing authority", "X certifies") win
/// over a bare mention of a known provider.
#[must_use]
pub fn certificate_details(text: &str) -> CertificateDetails {
    let issued = ISSUE_DATE
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.name("date"))
        .map(|m| m.as_str().trim().to_string());

    let issuer = ISSUER
        .iter()
        .find_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.name("org"))
                .map(|m| m.as_str().trim())
                .find(|name| !name.is_empty() && name.len() <= MAX_ISSUER_LEN && !is_pronoun(name))
        })
        .map(str::to_string)
        .or_else(|| known_provider(text));

    CertificateDetails { issuer, issued }
}

fn is_pronoun(name: &str) -> bool {
    matches!(name.to_lowercase().as_str(), "this" | "it" | "we" | "that")
}

fn known_provider(text: &str) -> Option<String> {
    let found = PROVIDER.find(text)?;
    PROVIDERS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(found.as_str()))
        .map(|name| (*name).to_string())
}
