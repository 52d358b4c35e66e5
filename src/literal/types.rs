//! Core types for the string literal model.
//!
//! This module defines the source-language dialects, quote styles, literal
//! prefixes, and the malformed-literal error shared by decoding and rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source language dialect used when decoding escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Python-style literals (default). Honours the `r` raw prefix.
    #[default]
    #[serde(alias = "py")]
    Python,
    /// JavaScript-style literals. Accepts backtick delimiters, no raw strings.
    #[serde(alias = "js")]
    Javascript,
    /// Plain text: quotes are stripped but escapes are never decoded.
    #[serde(alias = "text", alias = "plaintext")]
    Plain,
}

impl Language {
    /// Parse a language name (case-insensitive, common aliases accepted).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Some(Self::Python),
            "javascript" | "js" => Some(Self::Javascript),
            "plain" | "plaintext" | "text" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Plain => "plain",
        }
    }

    /// Whether backslash escapes are decoded at all.
    pub fn decodes_escapes(self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Whether a raw prefix disables escape decoding.
    pub fn honours_raw(self) -> bool {
        matches!(self, Self::Python)
    }

    /// Quote styles recognized by this dialect, in matching priority order.
    pub fn quote_styles(self) -> &'static [QuoteStyle] {
        const COMMON: &[QuoteStyle] = &[
            QuoteStyle::TripleDouble,
            QuoteStyle::TripleSingle,
            QuoteStyle::Double,
            QuoteStyle::Single,
        ];
        const WITH_BACKTICK: &[QuoteStyle] = &[
            QuoteStyle::TripleDouble,
            QuoteStyle::TripleSingle,
            QuoteStyle::Double,
            QuoteStyle::Single,
            QuoteStyle::Backtick,
        ];
        match self {
            Self::Javascript => WITH_BACKTICK,
            Self::Python | Self::Plain => COMMON,
        }
    }

    /// Map the character after a backslash to its decoded character.
    ///
    /// Returns `None` for unknown escape tokens, which callers leave verbatim.
    pub fn escape(self, c: char) -> Option<char> {
        if !self.decodes_escapes() {
            return None;
        }
        match c {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            'f' => Some('\u{0C}'),
            'b' => Some('\u{08}'),
            'v' => Some('\u{0B}'),
            '\\' => Some('\\'),
            '\'' => Some('\''),
            '"' => Some('"'),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Delimiter style framing a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    Single,
    Double,
    TripleSingle,
    TripleDouble,
    Backtick,
}

impl QuoteStyle {
    /// The delimiter text, identical at both ends.
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Single => "'",
            Self::Double => "\"",
            Self::TripleSingle => "'''",
            Self::TripleDouble => "\"\"\"",
            Self::Backtick => "`",
        }
    }

    pub fn is_triple(self) -> bool {
        matches!(self, Self::TripleSingle | Self::TripleDouble)
    }
}

/// Letters written in front of the opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Prefix {
    /// `f` / `F`: the literal is a template.
    pub format: bool,
    /// `r` / `R`: escapes are disabled.
    pub raw: bool,
}

/// A literal whose quote or brace structure cannot be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedLiteral {
    /// An opening delimiter has no matching closing delimiter.
    #[error("literal opened with {delimiter} is never closed")]
    UnterminatedLiteral {
        /// The opening delimiter that was found.
        delimiter: &'static str,
    },

    /// A placeholder `{` has no balancing `}`.
    #[error("placeholder starting at byte {position} has no closing '}}'")]
    UnterminatedPlaceholder {
        /// Byte offset of the opening brace.
        position: usize,
    },
}
