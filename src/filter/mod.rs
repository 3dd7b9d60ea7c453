mod lines;
mod ranges;
mod types;

pub use lines::{filter_lines, split_lines, FilterOutcome};
pub use ranges::{build_exclusion_set, parse_range, parse_ranges};
pub use types::{ExclusionSet, LineRange};
