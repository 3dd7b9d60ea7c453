use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::filter::LineRange;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub path: PathBuf,
    pub total_lines: usize,
    pub removed: usize,
    pub kept: usize,
    /// 1-based numbers actually dropped, ascending.
    pub removed_lines: Vec<usize>,
    /// Excluded ranges, clipped to the part past the end of the file.
    pub ignored: Vec<LineRange>,
    pub dry_run: bool,
}

impl PruneReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for PruneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would remove" } else { "Removed" };
        write!(f, "{} {} lines.", verb, self.removed)
    }
}
