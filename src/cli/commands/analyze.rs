//! skillprof analyze - extract and score skills from documents

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::percent;
use crate::annotate::RuleBasedAnnotator;
use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::document::{Document, DocumentType, TextSource};
use crate::engine::{CancellationToken, SessionReport};
use crate::error::{Result, SpError};
use crate::industry::{Industry, KeywordIndustryClassifier};
use crate::learn::learn_into;
use crate::model::{ProficiencyLevel, SkillRecord};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Plain-text documents to analyze
    #[arg(required_unless_present = "certification")]
    pub files: Vec<PathBuf>,

    /// Document type of the positional files
    #[arg(long = "type", default_value = "resume", value_parser = parse_document_type)]
    pub doc_type: DocumentType,

    /// Certification documents used to back skills
    #[arg(long, short = 'c', value_name = "FILE")]
    pub certification: Vec<PathBuf>,

    /// Skip industry detection and use this industry for every document
    #[arg(long, value_parser = parse_industry)]
    pub industry: Option<Industry>,

    /// Show records per document instead of the merged profile
    #[arg(long)]
    pub per_document: bool,

    /// Only show skills at or above this confidence
    #[arg(long, default_value_t = 0.0)]
    pub min_confidence: f32,

    /// Append confident unknown skills to this taxonomy file (json, toml, yaml)
    #[arg(long, value_name = "FILE")]
    pub learn_into: Option<PathBuf>,
}

fn parse_document_type(raw: &str) -> std::result::Result<DocumentType, String> {
    raw.parse().map_err(|err: SpError| err.to_string())
}

fn parse_industry(raw: &str) -> std::result::Result<Industry, String> {
    raw.parse().map_err(|err: SpError| err.to_string())
}

/// Reads document text from the filesystem; ids are paths.
struct FileTextSource;

impl TextSource for FileTextSource {
    fn get_text(&self, id: &str) -> Result<String> {
        std::fs::read_to_string(id).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SpError::DocumentNotFound(id.to_string()),
            _ => SpError::Io(err),
        })
    }
}

fn load(path: &Path, doc_type: DocumentType, industry: Option<Industry>) -> Result<Document> {
    let id = path.display().to_string();
    let mut document = Document::from_source(&FileTextSource, &id, doc_type)?;
    document.industry = industry;
    Ok(document)
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    profile: Vec<SkillRecord>,
    documents: &'a SessionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    learned: Option<LearnedOutput<'a>>,
}

#[derive(Serialize)]
struct LearnedOutput<'a> {
    path: &'a Path,
    skills: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &AnalyzeArgs) -> Result<()> {
    let mut documents = Vec::with_capacity(args.files.len() + args.certification.len());
    for path in &args.files {
        documents.push(load(path, args.doc_type, args.industry)?);
    }
    for path in &args.certification {
        documents.push(load(path, DocumentType::Certification, args.industry)?);
    }

    let session = ctx.engine.run_session(
        &documents,
        &RuleBasedAnnotator,
        &KeywordIndustryClassifier::default(),
        &CancellationToken::new(),
    )?;
    if session.cancelled() {
        return Err(SpError::Cancelled {
            completed: session.documents.len(),
            total: documents.len(),
        });
    }

    let learned = match &args.learn_into {
        Some(path) => Some(LearnedOutput {
            skills: learn_into(ctx.engine.taxonomy(), &session, ctx.config.taxonomy.learn_threshold, path)?,
            path,
        }),
        None => None,
    };

    let profile: Vec<SkillRecord> = session
        .profile()
        .into_iter()
        .filter(|r| r.confidence >= args.min_confidence)
        .collect();

    if ctx.machine_mode() {
        let mut response = robot_ok(AnalyzeOutput {
            profile,
            documents: &session,
            learned,
        });
        for report in session.documents.iter().filter(|r| r.structural_skipped) {
            response = response.with_warning(format!(
                "structural extraction skipped for {}",
                report.document_id
            ));
        }
        return emit_json(&response);
    }

    if let Some(learned) = &learned {
        println!(
            "{} {} new skill(s) into {}",
            "Learned".green(),
            learned.skills.len(),
            learned.path.display()
        );
        for name in &learned.skills {
            println!("  + {name}");
        }
        println!();
    }

    if args.per_document {
        for report in &session.documents {
            println!("{} {}", report.document_id.bold(), format!("({})", report.document_type).dimmed());
            if let Some(industry) = report.industry {
                println!("{}: {}", "Industry".dimmed(), industry);
            }
            if report.structural_skipped {
                println!("{}", "structural extraction skipped".yellow());
            }
            print_records(report.records.iter().filter(|r| r.confidence >= args.min_confidence));
            println!();
        }
        return Ok(());
    }

    println!("{}", "Skill profile".bold());
    println!("{}", "─".repeat(60).dimmed());
    if profile.is_empty() {
        println!("{}", "No skills found".dimmed());
    }
    print_records(profile.iter());
    Ok(())
}

fn print_records<'a>(records: impl Iterator<Item = &'a SkillRecord>) {
    for record in records {
        let level = match record.proficiency {
            ProficiencyLevel::Beginner => record.proficiency.as_str().normal(),
            ProficiencyLevel::Intermediate => record.proficiency.as_str().blue(),
            ProficiencyLevel::Advanced => record.proficiency.as_str().green(),
            ProficiencyLevel::Expert => record.proficiency.as_str().magenta().bold(),
        };
        let backing = record
            .backing_certificate
            .as_deref()
            .map(|cert| match &record.issuer {
                Some(issuer) => format!("  ✓ {cert} ({issuer})").green().to_string(),
                None => format!("  ✓ {cert}").green().to_string(),
            })
            .unwrap_or_default();
        println!(
            "{:<32} {:<14} {:<12} {}{}",
            record.name,
            record.category.to_string().dimmed(),
            level,
            percent(record.confidence),
            backing
        );
    }
}
