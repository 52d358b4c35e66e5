//! Placeholder variable extraction.

use super::span::placeholder_spans;
use std::collections::HashSet;

/// Extract the placeholder variable names of a template.
///
/// Works on the raw literal or on its stripped body alike, since quotes
/// never affect brace scanning. Each name appears once, in order of first
/// occurrence. Only the bare name is kept: attribute access, indexing,
/// conversions, and format specs are dropped, and tokens that are not
/// identifiers are skipped.
pub fn extract_variable_names(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholder_spans(raw)
        .into_iter()
        .filter_map(|span| span.variable())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
