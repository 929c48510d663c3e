//! Industry classification used to gate industry-specific templates.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Legal,
    Marketing,
    Sales,
}

impl Industry {
    pub const ALL: [Self; 7] = [
        Self::Technology,
        Self::Healthcare,
        Self::Finance,
        Self::Education,
        Self::Legal,
        Self::Marketing,
        Self::Sales,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Education => "education",
            Self::Legal => "legal",
            Self::Marketing => "marketing",
            Self::Sales => "sales",
        }
    }

    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Technology => &[
                "software", "developer", "engineer", "programming", "cloud", "api", "database",
                "devops", "backend", "frontend", "kubernetes", "python", "java", "code",
            ],
            Self::Healthcare => &[
                "patient", "clinical", "hospital", "nurse", "nursing", "medical", "hipaa",
                "physician", "care", "pharmacy", "diagnosis",
            ],
            Self::Finance => &[
                "financial", "finance", "accounting", "audit", "investment", "banking", "budget",
                "portfolio", "tax", "cpa", "ledger",
            ],
            Self::Education => &[
                "teaching", "teacher", "curriculum", "students", "classroom", "school", "lesson",
                "instruction", "education", "tutoring",
            ],
            Self::Legal => &[
                "legal", "law", "attorney", "litigation", "contract", "contracts", "compliance",
                "paralegal", "court", "counsel",
            ],
            Self::Marketing => &[
                "marketing", "campaign", "campaigns", "brand", "seo", "content", "social media",
                "advertising", "audience", "analytics",
            ],
            Self::Sales => &[
                "sales", "quota", "pipeline", "prospecting", "crm", "revenue", "accounts",
                "negotiation", "closing", "leads",
            ],
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = SpError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|industry| industry.as_str() == wanted)
            .ok_or_else(|| SpError::Config(format!("unknown industry '{raw}'")))
    }
}

/// Guesses the industry of a document before extraction.
pub trait IndustryClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Option<Industry>;
}

/// Counts industry keywords; the best industry needs `min_hits` matches.
#[derive(Debug, Clone, Copy)]
pub struct KeywordIndustryClassifier {
    min_hits: usize,
}

impl Default for KeywordIndustryClassifier {
    fn default() -> Self {
        Self { min_hits: 2 }
    }
}

impl KeywordIndustryClassifier {
    #[must_use]
    pub const fn new(min_hits: usize) -> Self {
        Self { min_hits }
    }

    /// Keyword hit count per industry, omitting industries with no hits.
    #[must_use]
    pub fn scores(&self, text: &str) -> BTreeMap<Industry, usize> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        Industry::ALL
            .into_iter()
            .filter_map(|industry| {
                let hits = industry
                    .keywords()
                    .iter()
                    .map(|keyword| {
                        if keyword.contains(' ') {
                            lowered.matches(keyword).count()
                        } else {
                            words.iter().filter(|w| *w == keyword).count()
                        }
                    })
                    .sum::<usize>();
                (hits > 0).then_some((industry, hits))
            })
            .collect()
    }
}

impl IndustryClassifier for KeywordIndustryClassifier {
    fn classify(&self, text: &str) -> Option<Industry> {
        // Highest count wins; ties keep the earlier industry.
        let mut best: Option<(Industry, usize)> = None;
        for (industry, hits) in self.scores(text) {
            if best.is_none_or(|(_, top)| hits > top) {
                best = Some((industry, hits));
            }
        }
        best.filter(|(_, hits)| *hits >= self.min_hits)
            .map(|(industry, _)| industry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_keyword_density() {
        let classifier = KeywordIndustryClassifier::default();
        let text = "Registered nurse providing patient care in a busy hospital";
        assert_eq!(classifier.classify(text), Some(Industry::Healthcare));
    }

    #[test]
    fn requires_minimum_hits() {
        let classifier = KeywordIndustryClassifier::default();
        assert_eq!(classifier.classify("Wrote some code"), None);
        assert_eq!(KeywordIndustryClassifier::new(1).classify("Wrote some code"), Some(Industry::Technology));
    }

    #[test]
    fn ties_prefer_declaration_order() {
        let classifier = KeywordIndustryClassifier::new(1);
        assert_eq!(classifier.classify("software audit"), Some(Industry::Technology));
    }

    #[test]
    fn parses_names() {
        assert_eq!("Finance".parse::<Industry>().unwrap(), Industry::Finance);
        assert!("farming".parse::<Industry>().is_err());
        assert_eq!(serde_json::to_string(&Industry::Legal).unwrap(), "\"legal\"");
    }
}
