//! skillprof resolve - look phrases up in the skill taxonomy

use std::sync::Arc;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::model::SkillCategory;
use crate::text::clean_phrase;
use crate::validator::SkillValidator;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Phrases to resolve
    #[arg(required = true)]
    pub phrases: Vec<String>,

    /// Number of related skills to list
    #[arg(long, default_value_t = 5)]
    pub related: usize,
}

#[derive(Serialize)]
struct Resolved {
    input: String,
    cleaned: String,
    canonical: Option<String>,
    exact: bool,
    category: Option<SkillCategory>,
    related: Vec<String>,
    valid_candidate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ResolveArgs) -> Result<()> {
    let taxonomy = ctx.engine.taxonomy();
    let validator = SkillValidator::new(Arc::clone(taxonomy));

    let results: Vec<Resolved> = args
        .phrases
        .iter()
        .map(|input| {
            let cleaned = clean_phrase(input);
            let hit = taxonomy.resolve_match(&cleaned);
            let canonical = hit.map(|h| h.canonical.to_string());
            let rejection = validator.check(input).err().map(|r| r.to_string());
            Resolved {
                input: input.clone(),
                exact: hit.is_some_and(|h| h.exact),
                category: canonical.as_deref().and_then(|c| taxonomy.category_of(c)).cloned(),
                related: canonical
                    .as_deref()
                    .map(|c| taxonomy.related_skills(c, args.related))
                    .unwrap_or_default(),
                valid_candidate: rejection.is_none(),
                rejection,
                canonical,
                cleaned,
            }
        })
        .collect();

    if ctx.machine_mode() {
        return emit_json(&robot_ok(results));
    }

    for result in &results {
        match &result.canonical {
            Some(canonical) => {
                let how = if result.exact { "exact" } else { "compound" };
                println!("{} → {} {}", result.input, canonical.bold().green(), format!("({how})").dimmed());
                if let Some(category) = &result.category {
                    println!("  {}: {}", "Category".dimmed(), category);
                }
                if !result.related.is_empty() {
                    println!("  {}: {}", "Related".dimmed(), result.related.join(", "));
                }
            }
            None => println!("{} → {}", result.input, "unknown".yellow()),
        }
        if let Some(reason) = &result.rejection {
            println!("  {}: {}", "Rejected".dimmed(), reason.red());
        }
    }
    Ok(())
}
