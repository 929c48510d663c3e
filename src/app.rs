//! Shared state for CLI commands.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::engine::SkillEngine;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub engine: SkillEngine,
    pub output_format: OutputFormat,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Load configuration and build the engine for a CLI invocation.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let mut config = Config::load(cli.config.as_deref(), &project_root)?;
        if let Some(path) = &cli.taxonomy {
            config.taxonomy.custom_path = Some(path.display().to_string());
        }
        let engine = SkillEngine::from_config(&config)?;
        Ok(Self {
            config,
            engine,
            output_format: cli.output_format(),
            project_root,
        })
    }

    #[must_use]
    pub fn machine_mode(&self) -> bool {
        self.output_format.is_machine_readable()
    }
}
