//! # Path Parser
//!
//! Turns `"a//b/../*x"` (or an already split list of segments) into path
//! elements. Empty segments are dropped, so leading, trailing and doubled
//! slashes contribute nothing.
//!
//! Each remaining segment is classified in this order:
//! 1. contains `*` or `?` → [`PathElement::ChildPattern`]
//! 2. is exactly `..` → [`PathElement::Parent`]
//! 3. anything else → [`PathElement::ChildName`]

use crate::selection::element::PathElement;
use crate::selection::error::SelectionError;

/// Parses a slash separated path.
pub fn parse(path: &str) -> Result<Vec<PathElement>, SelectionError> {
    parse_segments(path.split('/'))
}

/// Parses segments that are already split. Segments are not split again.
pub fn parse_segments<I, S>(segments: I) -> Result<Vec<PathElement>, SelectionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter(|segment| !segment.as_ref().is_empty())
        .map(|segment| classify(segment.as_ref()))
        .collect()
}

fn classify(segment: &str) -> Result<PathElement, SelectionError> {
    if segment.contains(|c: char| c == '*' || c == '?') {
        PathElement::child_pattern(segment)
    } else if segment == ".." {
        Ok(PathElement::Parent)
    } else {
        Ok(PathElement::child_name(segment))
    }
}
