//! Regex templates anchored on indicator phrases.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::CandidateMention;
use crate::config::CustomPattern;
use crate::error::{Result, SpError};
use crate::industry::Industry;
use crate::model::{SourceMethod, Span};
use crate::text::{split_phrases, truncate_clause};

/// How a template's capture is turned into candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    /// Cut at clause breaks, then split into phrases.
    List,
    /// Split into phrases without clause truncation.
    Section,
    /// Keep the capture whole.
    Whole,
}

#[derive(Debug, Clone)]
struct Template {
    name: String,
    regex: Regex,
    confidence: f32,
    industry: Option<Industry>,
    capture: Capture,
}

impl Template {
    fn builtin(
        name: &str,
        pattern: &str,
        confidence: f32,
        industry: Option<Industry>,
        capture: Capture,
    ) -> Self {
        Self {
            name: name.to_string(),
            regex: Regex::new(pattern).unwrap(),
            confidence,
            industry,
            capture,
        }
    }
}

const PHRASE: &str = r"(?P<skills>[^\n]+)";
const NAME: &str = r"(?P<skills>[^.,:;\n]+)";

fn indicator(name: &str, lead: &str, confidence: f32) -> Template {
    Template::builtin(name, &format!(r"(?i)\b(?:{lead})\s+{PHRASE}"), confidence, None, Capture::List)
}

fn industry(name: &str, pattern: &str, confidence: f32, industry: Industry) -> Template {
    Template::builtin(name, pattern, confidence, Some(industry), Capture::List)
}

static BUILTIN_TEMPLATES: LazyLock<Vec<Template>> = LazyLock::new(|| {
    use Industry::{Education, Finance, Healthcare, Legal, Marketing, Sales, Technology};

    vec![
        indicator("certified_in", "certified in", 0.85),
        indicator("expertise_in", "expertise in|expert in", 0.8),
        indicator("experienced_in", "experienced in|proficient in|skilled in|specializing in|specialized in", 0.75),
        indicator("trained_in", "trained in|background in|competent in|abilities in", 0.7),
        indicator("knowledge_of", "knowledge of|familiar with|familiarity with", 0.65),
        indicator("experience_with", "experience with|experience in", 0.6),
        indicator("worked_with", "worked with|working with", 0.55),
        Template::builtin(
            "skills_section",
            &format!(
                r"(?im)^[\s\-•*>]*(?:technical skills|skills|core competencies|competencies|technologies|tools|languages|frameworks|platforms)\s*[:\-–]\s*{PHRASE}"
            ),
            0.8,
            None,
            Capture::Section,
        ),
        Template::builtin(
            "adjective_skills",
            r"(?i)\b(?:strong|excellent|advanced|proven|solid)\s+(?P<skills>[\w\s&/+#.\-]+?)\s+skills\b",
            0.7,
            None,
            Capture::Section,
        ),
        Template::builtin(
            "compound_terms",
            r"(?i)\b(?P<skills>database management systems?|relational databases?|data modeling|version control|database design|database administration|database security|database optimization|query optimization|performance tuning|entity relationship diagrams?|data normalization)\b",
            0.85,
            None,
            Capture::Whole,
        ),
        Template::builtin(
            "certificate_of",
            &format!(r"(?i)\bcertificat(?:e|ion)\s+(?:of|in|for)\s+(?:completion\s+(?:of|in)\s+)?{NAME}"),
            0.85,
            None,
            Capture::Whole,
        ),
        Template::builtin("certified_as", &format!(r"(?i)\bcertified\s+as\s+(?:an?\s+)?{NAME}"), 0.85, None, Capture::Whole),
        Template::builtin("completed", &format!(r"(?i)\bsuccessfully\s+completed\s+(?:the\s+)?{NAME}"), 0.8, None, Capture::Whole),
        industry(
            "tech_built_with",
            &format!(r"(?i)\b(?:developed|built|deployed|implemented)\s+(?:\w+\s+){{0,3}}?(?:using|with)\s+{PHRASE}"),
            0.7,
            Technology,
        ),
        industry("tech_stack", &format!(r"(?i)\btech(?:nology)?\s+stack\s*[:\-–]?\s*{PHRASE}"), 0.8, Technology),
        industry(
            "clinical_experience",
            &format!(r"(?i)\b(?:clinical|patient care)\s+(?:experience|skills)\s+(?:in|with)\s+{PHRASE}"),
            0.7,
            Healthcare,
        ),
        industry(
            "ehr_systems",
            &format!(r"(?i)\b(?:ehr|emr)\s+systems?\s+(?:such as|like|including)\s+{PHRASE}"),
            0.75,
            Healthcare,
        ),
        industry(
            "financial_expertise",
            &format!(r"(?i)\b(?:financial|accounting)\s+(?:experience|expertise)\s+(?:in|with)\s+{PHRASE}"),
            0.7,
            Finance,
        ),
        industry(
            "taught",
            &format!(r"(?i)\b(?:taught|teaching|instructed)\s+(?:courses\s+in\s+|classes\s+in\s+)?{PHRASE}"),
            0.65,
            Education,
        ),
        industry("practice_areas", &format!(r"(?i)\bpractice\s+areas?\s*[:\-–]?\s*{PHRASE}"), 0.75, Legal),
        industry("drafted", &format!(r"(?i)\bdrafted\s+{PHRASE}"), 0.6, Legal),
        industry(
            "marketing_tools",
            &format!(r"(?i)\bmarketing\s+(?:tools|channels|platforms)\s*[:\-–]\s*{PHRASE}"),
            0.8,
            Marketing,
        ),
        industry(
            "ran_campaigns",
            r"(?i)\b(?:managed|ran|launched)\s+(?P<skills>[\w\s&/+\-]+?)\s+campaigns?\b",
            0.65,
            Marketing,
        ),
        industry(
            "sales_tools",
            &format!(r"(?i)\b(?:sales|crm)\s+(?:tools|platforms|experience)\s*(?:in|with|including|[:\-–])\s*{PHRASE}"),
            0.7,
            Sales,
        ),
    ]
});

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?:](?:\s|$)|\s[-–]\s").unwrap());

/// Cut a capture at the end of its sentence.
fn clip_sentence(capture: &str) -> &str {
    SENTENCE_END
        .find(capture)
        .map_or(capture, |found| &capture[..found.start()])
}

/// Pattern-based extractor: built-in templates plus compiled custom ones.
#[derive(Debug, Clone, Default)]
pub struct PatternExtractor {
    custom: Vec<Template>,
}

impl PatternExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile configured templates; each needs at least one capture group.
    pub fn with_custom(patterns: &[CustomPattern]) -> Result<Self> {
        let mut custom = Vec::with_capacity(patterns.len());
        for (index, user) in patterns.iter().enumerate() {
            let regex = Regex::new(&user.pattern).map_err(|err| SpError::PatternCompile {
                pattern: user.pattern.clone(),
                reason: err.to_string(),
            })?;
            if regex.captures_len() < 2 {
                return Err(SpError::PatternCompile {
                    pattern: user.pattern.clone(),
                    reason: "pattern has no capture group".to_string(),
                });
            }
            custom.push(Template {
                name: format!("custom_{index}"),
                regex,
                confidence: crate::model::clamp_unit(user.confidence),
                industry: None,
                capture: Capture::List,
            });
        }
        debug!(count = custom.len(), "compiled custom templates");
        Ok(Self { custom })
    }

    /// Number of active templates for `industry`.
    #[must_use]
    pub fn template_count(&self, industry: Option<Industry>) -> usize {
        self.templates(industry).count()
    }

    fn templates(&self, industry: Option<Industry>) -> impl Iterator<Item = &Template> {
        BUILTIN_TEMPLATES
            .iter()
            .chain(&self.custom)
            .filter(move |template| template.industry.is_none() || template.industry == industry)
    }

    /// Run every active template over `text`.
    #[must_use]
    pub fn extract(&self, text: &str, industry: Option<Industry>) -> Vec<CandidateMention> {
        let mut mentions = Vec::new();
        for template in self.templates(industry) {
            let before = mentions.len();
            for caps in template.regex.captures_iter(text) {
                let Some(capture) = caps.name("skills").or_else(|| caps.get(1)) else {
                    continue;
                };
                collect(template, capture.as_str(), capture.start(), &mut mentions);
            }
            if mentions.len() > before {
                debug!(template = %template.name, found = mentions.len() - before, "template matched");
            }
        }
        mentions
    }
}

fn collect(template: &Template, capture: &str, offset: usize, out: &mut Vec<CandidateMention>) {
    let mention = |span: Span, raw: &str| {
        CandidateMention::new(raw, SourceMethod::Pattern, span, template.confidence)
    };
    match template.capture {
        Capture::Whole => {
            let raw = capture.trim_end();
            if !raw.trim().is_empty() {
                let lead = raw.len() - raw.trim_start().len();
                let span = Span::new(offset + lead, offset + raw.len());
                out.push(mention(span, raw.trim_start()));
            }
        }
        Capture::Section => {
            let clipped = clip_sentence(capture);
            out.extend(split_phrases(clipped, offset).into_iter().map(|(span, raw)| mention(span, raw)));
        }
        Capture::List => {
            let clipped = truncate_clause(clip_sentence(capture));
            out.extend(split_phrases(clipped, offset).into_iter().map(|(span, raw)| mention(span, raw)));
        }
    }
}
