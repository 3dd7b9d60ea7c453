use crate::error::Result;
use crate::filter::{filter_lines, split_lines};
use crate::plan::Plan;
use crate::report::PruneReport;
use crate::storage::{read_text, replace_atomic};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Compute the report but leave the file untouched.
    pub dry_run: bool,
}

/// Read the target, drop the planned lines, write the rest back.
///
/// Nothing is written if the read or decode fails. Positions past the end
/// of the file are skipped and listed in `PruneReport::ignored`.
pub fn run_prune(plan: &Plan, options: RunOptions) -> Result<PruneReport> {
    let exclude = plan.exclusion_set()?;
    let path = plan.path.as_path();
    if exclude.is_empty() {
        warn!(path = %path.display(), "Plan has no ranges, nothing will be removed");
    } else {
        debug!(
            ranges = exclude.ranges().len(),
            lines = exclude.len(),
            "Built exclusion set"
        );
    }

    let contents = read_text(path)?;
    let physical_lines = split_lines(&contents);
    let total = physical_lines.len();

    let outcome = filter_lines(&physical_lines, &exclude);
    let ignored = exclude.beyond(total);
    if !ignored.is_empty() {
        debug!(
            ranges = ignored.len(),
            total_lines = total,
            "Excluded positions past end of file ignored"
        );
    }

    if options.dry_run {
        info!(path = %path.display(), removed = outcome.removed.len(), "Dry run, file left unchanged");
    } else {
        replace_atomic(path, &outcome.render())?;
        info!(path = %path.display(), removed = outcome.removed.len(), "Pruned file");
    }

    Ok(PruneReport {
        path: plan.path.clone(),
        total_lines: total,
        removed: outcome.removed.len(),
        kept: outcome.kept.len(),
        removed_lines: outcome.removed,
        ignored,
        dry_run: options.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PruneError;
    use crate::filter::LineRange;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_reports_and_rewrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("five.txt");
        fs::write(&path, "a\nb\nc\nd\ne\n").unwrap();

        let plan = Plan::builtin()
            .with_path(&path)
            .with_ranges(vec![LineRange::new(2, 3)]);
        let report = run_prune(&plan, RunOptions::default()).unwrap();

        assert_eq!(report.removed, 2);
        assert_eq!(report.kept, 3);
        assert_eq!(report.removed_lines, vec![2, 3]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nd\ne\n");
    }

    #[test]
    fn test_dry_run_leaves_bytes_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keep.txt");
        fs::write(&path, "1\r\n2\r\n3").unwrap();

        let plan = Plan::builtin()
            .with_path(&path)
            .with_ranges(vec![LineRange::single(1)]);
        let report = run_prune(&plan, RunOptions { dry_run: true }).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.removed, 1);
        assert_eq!(fs::read(&path).unwrap(), b"1\r\n2\r\n3");
    }

    #[test]
    fn test_unbounded_range_on_short_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("three.txt");
        fs::write(&path, "a\nb\nc\n").unwrap();

        let plan = Plan::builtin()
            .with_path(&path)
            .with_ranges(vec![LineRange::new(2, usize::MAX)]);
        let report = run_prune(&plan, RunOptions { dry_run: true }).unwrap();

        assert_eq!(report.removed, 2);
        assert_eq!(report.ignored, vec![LineRange::new(4, usize::MAX)]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_undecodable_file_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        let bytes = [b'o', b'k', b'\n', 0xe9, b'\n', b'z', b'\n'];
        fs::write(&path, bytes).unwrap();

        let plan = Plan::builtin()
            .with_path(&path)
            .with_ranges(vec![LineRange::single(1)]);
        let err = run_prune(&plan, RunOptions::default()).unwrap_err();

        assert!(matches!(err, PruneError::Decode { .. }));
        assert_eq!(fs::read(&path).unwrap(), bytes);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_positions_past_end_are_reported_as_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.txt");
        fs::write(&path, "x\ny\n").unwrap();

        let plan = Plan::builtin()
            .with_path(&path)
            .with_ranges(vec![LineRange::new(2, 4)]);
        let report = run_prune(&plan, RunOptions::default()).unwrap();

        assert_eq!(report.removed, 1);
        assert_eq!(report.ignored, vec![LineRange::new(3, 4)]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }
}
