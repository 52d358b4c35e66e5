//! Formatted-literal detection.

use crate::literal::{Language, Literal, QuoteStyle, split_prefix};

/// Whether `raw` is a formatted literal.
///
/// The trimmed text must be a quoted literal carrying the `f` marker whose
/// body holds at least one `{`...`}` pair. A marker followed by an opening
/// triple quote that no triple quote closes still counts: it is a template
/// being typed, and any structural problem is reported when rendering.
pub fn is_template(raw: &str) -> bool {
    let text = raw.trim();
    let (prefix, rest) = split_prefix(text, Language::Python);
    let opens_triple = [QuoteStyle::TripleDouble, QuoteStyle::TripleSingle]
        .iter()
        .any(|style| rest.starts_with(style.delimiter()));

    let detected = match Literal::parse(text, Language::Python) {
        Ok(literal) if !opens_triple || literal.style.is_some_and(QuoteStyle::is_triple) => {
            literal.prefix.format && literal.is_quoted() && has_brace_pair(literal.body)
        }
        _ => prefix.format && opens_triple,
    };

    tracing::trace!(detected = detected, "template detection");
    detected
}

fn has_brace_pair(body: &str) -> bool {
    body.find('{')
        .is_some_and(|open| body[open + 1..].contains('}'))
}
