//! What to prune: the target file and the line ranges to drop.
//!
//! The built-in plan is the default. A JSON plan file replaces it, and the
//! command line can then override the path or the ranges.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PruneError, Result};
use crate::filter::{build_exclusion_set, ExclusionSet, LineRange};

/// File the built-in plan rewrites.
pub const DEFAULT_TARGET: &str = "src/pages/AdminPage.js";

/// Lines the built-in plan removes, inclusive on both ends.
pub const DEFAULT_RANGES: [LineRange; 6] = [
    LineRange::new(251, 253),
    LineRange::new(350, 352),
    LineRange::new(368, 369),
    LineRange::new(413, 414),
    LineRange::new(428, 429),
    LineRange::new(438, 439),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub path: PathBuf,
    pub ranges: Vec<LineRange>,
}

impl Plan {
    pub fn builtin() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TARGET),
            ranges: DEFAULT_RANGES.to_vec(),
        }
    }

    /// Load a plan from a JSON file. Ranges are validated here.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| PruneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let plan: Plan = serde_json::from_str(&raw).map_err(|source| PruneError::Plan {
            path: path.to_path_buf(),
            source,
        })?;
        plan.exclusion_set()?;

        debug!(
            plan = %path.display(),
            target = %plan.path.display(),
            ranges = plan.ranges.len(),
            "Loaded plan"
        );
        Ok(plan)
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_ranges(mut self, ranges: Vec<LineRange>) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn exclusion_set(&self) -> Result<ExclusionSet> {
        build_exclusion_set(&self.ranges)
    }
}
