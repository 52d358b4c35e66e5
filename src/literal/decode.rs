//! Literal decoding: quote stripping followed by escape decoding.

use super::escape::decode_escapes;
use super::quotes::Literal;
use super::types::{Language, MalformedLiteral};

/// Result of decoding a literal.
///
/// Decoding never fails outright. When the literal cannot be resolved the
/// original input is handed back untouched together with the reason, so
/// callers can tell a suppressed anomaly apart from text without escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The literal was stripped and decoded.
    Decoded(String),
    /// The input was returned as-is because it is malformed.
    Unchanged {
        original: String,
        reason: MalformedLiteral,
    },
}

impl DecodeOutcome {
    /// The text to display.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Decoded(text) => text,
            Self::Unchanged { original, .. } => original,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Decoded(text) => text,
            Self::Unchanged { original, .. } => original,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged { .. })
    }
}

/// Decode a raw literal, reporting whether an anomaly was suppressed.
///
/// Surrounding whitespace is ignored. The outer delimiters and prefix are
/// removed, then escapes are decoded per `language`.
pub fn try_decode_literal(raw: &str, language: Language) -> DecodeOutcome {
    match Literal::parse(raw.trim(), language) {
        Ok(literal) => {
            DecodeOutcome::Decoded(decode_escapes(literal.body, language, literal.prefix.raw))
        }
        Err(reason) => {
            tracing::debug!(%reason, language = %language, "literal left unchanged");
            DecodeOutcome::Unchanged {
                original: raw.to_string(),
                reason,
            }
        }
    }
}

/// Decode a raw literal into display text.
///
/// Never fails; malformed input is returned unchanged.
pub fn decode_literal(raw: &str, language: Language) -> String {
    try_decode_literal(raw, language).into_string()
}
