use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::filter::parse_ranges;
use crate::plan::Plan;

#[derive(Parser, Debug)]
#[command(name = "line-prune")]
#[command(version, about = "Delete numbered lines from a text file", long_about = None)]
pub struct Cli {
    /// File to rewrite (default: the built-in target)
    pub file: Option<PathBuf>,

    /// Lines to drop: N, A-B or A..=B (inclusive), A..B (half-open)
    #[arg(short, long, value_delimiter = ',')]
    pub ranges: Vec<String>,

    /// JSON plan with `path` and `ranges`
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Report what would be removed without writing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

/// - Text: `Removed N lines.`
/// - Json: the full report as one object
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Built-in plan, then `--plan`, then FILE and `--ranges` on top.
    pub fn resolve_plan(&self) -> Result<Plan> {
        let mut plan = match &self.plan {
            Some(path) => Plan::load(path)?,
            None => Plan::builtin(),
        };
        if let Some(file) = &self.file {
            plan = plan.with_path(file);
        }
        if !self.ranges.is_empty() {
            plan = plan.with_ranges(parse_ranges(self.ranges.as_slice())?);
        }
        Ok(plan)
    }
}
