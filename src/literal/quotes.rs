//! Quote stripping: removal of outer delimiters and the literal prefix.

use super::types::{Language, MalformedLiteral, Prefix, QuoteStyle};

/// A quoted literal split into its prefix, delimiter style, and body.
///
/// The body borrows from the parsed text; nothing is decoded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    /// Text between the delimiters (the whole input when unquoted).
    pub body: &'a str,
    /// The delimiter style that framed the body, if any.
    pub style: Option<QuoteStyle>,
    /// Prefix letters found in front of the delimiters.
    pub prefix: Prefix,
}

impl<'a> Literal<'a> {
    /// Parse `text` as an optionally prefixed, optionally quoted literal.
    ///
    /// Delimiter pairs are tried in priority order (triple-double,
    /// triple-single, double, single, then backtick for JavaScript) and the
    /// first pair matching both ends is removed exactly once. A single `f`
    /// or `F` then left at the start of the body is removed as well, unless
    /// the marker was already written in front of the delimiters.
    ///
    /// # Returns
    ///
    /// * `Ok(Literal)` - Unquoted text comes back whole with no style
    /// * `Err(MalformedLiteral::UnterminatedLiteral)` - The text opens a
    ///   literal but no delimiter pair closes it
    pub fn parse(text: &'a str, language: Language) -> Result<Self, MalformedLiteral> {
        let (prefix, rest) = split_prefix(text, language);

        let Some(opener) = opening_style(rest, language) else {
            return Ok(Self {
                body: text,
                style: None,
                prefix: Prefix::default(),
            });
        };

        let Some(style) = language
            .quote_styles()
            .iter()
            .copied()
            .find(|style| encloses(rest, *style))
        else {
            return Err(MalformedLiteral::UnterminatedLiteral {
                delimiter: opener.delimiter(),
            });
        };

        let width = style.delimiter().len();
        let mut body = &rest[width..rest.len() - width];

        // One marker left at the start of the body is dropped: "fHi" -> "Hi"
        if !prefix.format {
            body = body.strip_prefix(|c: char| c == 'f' || c == 'F').unwrap_or(body);
        }

        Ok(Self {
            body,
            style: Some(style),
            prefix,
        })
    }

    /// Whether the body was framed by delimiters.
    pub fn is_quoted(&self) -> bool {
        self.style.is_some()
    }
}

/// Remove one layer of matching outer quotes and the format marker.
///
/// Never fails: text that is not a resolvable quoted literal is returned
/// unchanged.
pub fn strip_quotes(text: &str) -> &str {
    Literal::parse(text, Language::default())
        .map(|literal| literal.body)
        .unwrap_or(text)
}

/// Split leading prefix letters off `text`.
///
/// Letters only count as a prefix when an opening delimiter follows them
/// directly; otherwise the text is returned whole with an empty prefix.
pub(crate) fn split_prefix(text: &str, language: Language) -> (Prefix, &str) {
    let mut prefix = Prefix::default();

    for (offset, c) in text.char_indices().take(3) {
        if opening_style(&text[offset..], language).is_some() {
            return if offset == 0 {
                (Prefix::default(), text)
            } else {
                (prefix, &text[offset..])
            };
        }
        match c.to_ascii_lowercase() {
            'f' if !prefix.format => prefix.format = true,
            'r' if !prefix.raw && language.honours_raw() => prefix.raw = true,
            _ => break,
        }
    }

    (Prefix::default(), text)
}

/// The highest-priority delimiter that `text` starts with.
fn opening_style(text: &str, language: Language) -> Option<QuoteStyle> {
    language
        .quote_styles()
        .iter()
        .copied()
        .find(|style| text.starts_with(style.delimiter()))
}

fn encloses(text: &str, style: QuoteStyle) -> bool {
    let delimiter = style.delimiter();
    text.len() >= delimiter.len() * 2 && text.starts_with(delimiter) && text.ends_with(delimiter)
}
