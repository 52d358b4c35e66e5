//! Template rendering: placeholder substitution followed by escape decoding.

use super::span::{Scanner, Segment};
use crate::literal::{Language, Literal, MalformedLiteral, decode_escapes, strip_quotes};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Variable name to bound value.
pub type Bindings = HashMap<String, String>;

/// What to do with a placeholder whose variable has no binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Leave the placeholder text in the output unchanged (default).
    #[default]
    Keep,
    /// Fail the render.
    Error,
}

impl MissingPolicy {
    /// Parse a missing-placeholder policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "keep" => Some(Self::Keep),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Options for [`render_template_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub missing: MissingPolicy,
}

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The quote or brace structure could not be resolved.
    #[error("Invalid template format")]
    Malformed(#[from] MalformedLiteral),

    /// A variable was referenced but not bound, under [`MissingPolicy::Error`].
    #[error("no value bound for placeholder '{name}' at position {position} in template")]
    Unbound {
        /// The name of the unbound variable.
        name: String,
        /// Byte offset of the placeholder within the literal body.
        position: usize,
    },
}

/// Render a template with the default options.
///
/// Unbound placeholders are left in place.
pub fn render_template(raw: &str, bindings: &Bindings) -> Result<String, RenderError> {
    render_template_with(raw, bindings, &RenderOptions::default())
}

/// Render a template by substituting bound values into its placeholders.
///
/// # Arguments
///
/// * `raw` - The template literal, e.g. `f"Hi {name}!"`
/// * `bindings` - Values keyed by variable name
/// * `options` - How to treat unbound placeholders
///
/// # Returns
///
/// * `Ok(String)` - The rendered, escape-decoded text
/// * `Err(RenderError::Malformed)` - An unterminated literal or placeholder
/// * `Err(RenderError::Unbound)` - A placeholder has no binding and
///   `options.missing` is [`MissingPolicy::Error`]
///
/// Each bound value is trimmed and one layer of its own quotes is removed
/// before it replaces the whole placeholder; attribute, index, and
/// format-spec suffixes are discarded, not evaluated. The result is escape
/// decoded once with the Python dialect unless the literal is raw.
pub fn render_template_with(
    raw: &str,
    bindings: &Bindings,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let literal = Literal::parse(raw.trim(), Language::Python)?;
    let mut rendered = String::with_capacity(literal.body.len());

    for segment in Scanner::strict(literal.body) {
        match segment? {
            Segment::Text(text) => rendered.push_str(text),
            Segment::Brace(brace) => rendered.push(brace),
            Segment::Placeholder(span) => {
                let value = span.variable().and_then(|name| bindings.get(name));
                match (value, span.variable()) {
                    (Some(value), _) => rendered.push_str(strip_quotes(value.trim())),
                    (None, Some(name)) if options.missing == MissingPolicy::Error => {
                        return Err(RenderError::Unbound {
                            name: name.to_string(),
                            position: span.start,
                        });
                    }
                    (None, _) => {
                        tracing::debug!(placeholder = span.text, "no binding, placeholder kept");
                        rendered.push_str(span.text);
                    }
                }
            }
        }
    }

    Ok(decode_escapes(&rendered, Language::Python, literal.prefix.raw))
}

/// Helper to create a bindings map from a list of name/value pairs.
#[allow(dead_code)]
pub fn bindings<I, K, V>(pairs: I) -> Bindings
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
