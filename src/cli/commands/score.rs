//! skillprof score - explain the proficiency score of one skill

use clap::Args;
use colored::Colorize;

use super::percent;
use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Skill name
    pub skill: String,

    /// Text the skill appears in
    #[arg(long, short = 'x')]
    pub context: String,

    /// Certification name or text backing the skill
    #[arg(long)]
    pub certification: Option<String>,

    /// Treat the skill as backed by a certification
    #[arg(long)]
    pub backed: bool,

    /// Confidence boost (defaults to the configured backing boost when --backed)
    #[arg(long)]
    pub boost: Option<f32>,
}

pub fn run(ctx: &AppContext, args: &ScoreArgs) -> Result<()> {
    let boost = args.boost.unwrap_or(if args.backed {
        ctx.config.scoring.backing_boost
    } else {
        0.0
    });
    let skill = ctx
        .engine
        .taxonomy()
        .resolve(&args.skill)
        .map_or_else(|| args.skill.clone(), str::to_string);

    let assessment = ctx.engine.calculator().assess(
        &skill,
        &args.context,
        args.certification.as_deref(),
        args.backed,
        boost,
    );

    if ctx.machine_mode() {
        return emit_json(&robot_ok(serde_json::json!({
            "skill": skill,
            "assessment": assessment,
        })));
    }

    println!(
        "{}: {} {}",
        skill.bold(),
        assessment.level.as_str().green().bold(),
        percent(assessment.confidence)
    );
    if assessment.certification_override {
        println!("{}", "level set by certification".dimmed());
    }
    if assessment.votes.is_empty() {
        println!("{}", "no proficiency evidence in context".dimmed());
    }
    for vote in &assessment.votes {
        println!(
            "  {:<16} {:<12} {}",
            vote.signal.as_str().dimmed(),
            vote.level,
            format!("weight {:.2}", vote.weight).dimmed()
        );
    }
    Ok(())
}
