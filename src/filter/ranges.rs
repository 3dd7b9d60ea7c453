use super::types::{ExclusionSet, LineRange};
use crate::error::{PruneError, Result};

/// Parse one range token.
///
/// Accepted forms: `N`, `A-B` and `A..=B` (inclusive), `A..B` (half-open).
pub fn parse_range(spec: &str) -> Result<LineRange> {
    let text = spec.trim();
    let invalid = |reason: &str| PruneError::InvalidRange {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let range = if let Some((a, b)) = text.split_once("..=") {
        LineRange::new(parse_line(a, spec)?, parse_line(b, spec)?)
    } else if let Some((a, b)) = text.split_once("..") {
        let start = parse_line(a, spec)?;
        let end_exclusive = parse_line(b, spec)?;
        if end_exclusive <= start {
            return Err(invalid("half-open range is empty"));
        }
        LineRange::new(start, end_exclusive - 1)
    } else if let Some((a, b)) = text.split_once('-') {
        LineRange::new(parse_line(a, spec)?, parse_line(b, spec)?)
    } else {
        LineRange::single(parse_line(text, spec)?)
    };

    range.validate(spec)?;
    Ok(range)
}

fn parse_line(token: &str, spec: &str) -> Result<usize> {
    let token = token.trim();
    token.parse::<usize>().map_err(|_| PruneError::InvalidRange {
        spec: spec.to_string(),
        reason: format!("`{}` is not a line number", token),
    })
}

/// Parse a list of tokens, each of which may hold several comma-separated ranges.
pub fn parse_ranges<S: AsRef<str>>(specs: &[S]) -> Result<Vec<LineRange>> {
    let mut out = Vec::new();
    for spec in specs {
        for part in spec.as_ref().split(',') {
            if part.trim().is_empty() {
                continue;
            }
            out.push(parse_range(part)?);
        }
    }
    if out.is_empty() {
        let given: Vec<&str> = specs.iter().map(|s| s.as_ref()).collect();
        return Err(PruneError::InvalidRange {
            spec: given.join(","),
            reason: "no ranges given".to_string(),
        });
    }
    Ok(out)
}

/// Validate every range and union them.
pub fn build_exclusion_set(ranges: &[LineRange]) -> Result<ExclusionSet> {
    for range in ranges {
        range.validate(&format!("{}-{}", range.start, range.end))?;
    }
    Ok(ranges.iter().copied().collect())
}
