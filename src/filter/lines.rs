use super::types::ExclusionSet;

/// Split text into physical lines, each keeping its own terminator.
///
/// `"a\r\nb\nc"` yields `["a\r\n", "b\n", "c"]`. Empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Lines that survived plus the 1-based numbers that were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub kept: Vec<&'a str>,
    pub removed: Vec<usize>,
}

impl FilterOutcome<'_> {
    /// Reassemble the kept lines exactly as they were written.
    pub fn render(&self) -> String {
        self.kept.concat()
    }
}

/// Drop every line whose 1-based position is in `exclude`. Order is preserved.
pub fn filter_lines<'a>(lines: &[&'a str], exclude: &ExclusionSet) -> FilterOutcome<'a> {
    let mut kept = Vec::with_capacity(lines.len());
    let mut removed = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;
        if exclude.contains(number) {
            removed.push(number);
        } else {
            kept.push(*line);
        }
    }

    FilterOutcome { kept, removed }
}
