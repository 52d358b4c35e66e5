//! Placeholder scanning.
//!
//! Braces are balanced by depth, so a format spec holding its own `{expr}`
//! (as in `{value:>{width}}`) stays inside the enclosing span. Every pair is
//! matched up front in one pass, keeping scans linear on unbalanced input.

use crate::literal::MalformedLiteral;
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid identifier regex")
});

/// Whether `name` is a valid variable identifier.
///
/// Identifiers are letters, digits, and underscores, not starting with a digit.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

/// A balanced `{...}` region inside a template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpan<'a> {
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte offset one past the closing brace.
    pub end: usize,
    /// The full span text, braces included.
    pub text: &'a str,
    /// The bare token right after the opening brace.
    pub name: &'a str,
    /// Attribute, index, conversion, or format-spec text after the name.
    /// Never evaluated.
    pub remainder: &'a str,
}

impl<'a> PlaceholderSpan<'a> {
    fn new(source: &'a str, start: usize, end: usize) -> Self {
        let inner = &source[start + 1..end - 1];
        let name_len = inner
            .find(|c: char| matches!(c, '.' | '[' | ':' | '!') || c.is_whitespace())
            .unwrap_or(inner.len());

        Self {
            start,
            end,
            text: &source[start..end],
            name: &inner[..name_len],
            remainder: &inner[name_len..],
        }
    }

    /// The variable this span refers to, if its name is an identifier.
    pub fn variable(&self) -> Option<&'a str> {
        is_identifier(self.name).then_some(self.name)
    }
}

/// A piece of a scanned template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text copied as-is.
    Text(&'a str),
    /// A doubled `{{` or `}}`, standing for one brace.
    Brace(char),
    /// A substitution point.
    Placeholder(PlaceholderSpan<'a>),
}

/// Iterator over the segments of a template body.
///
/// In strict mode an unbalanced `{` yields an error and ends the scan; in
/// lenient mode it is treated as text and scanning continues after it.
pub struct Scanner<'a> {
    source: &'a str,
    closers: Vec<Option<usize>>,
    pos: usize,
    text_start: usize,
    lenient: bool,
    pending: Option<Segment<'a>>,
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Scan `source`, failing on the first unbalanced placeholder.
    pub fn strict(source: &'a str) -> Self {
        Self::new(source, false)
    }

    /// Scan `source`, treating unbalanced braces as text.
    pub fn lenient(source: &'a str) -> Self {
        Self::new(source, true)
    }

    fn new(source: &'a str, lenient: bool) -> Self {
        Self {
            source,
            closers: match_braces(source.as_bytes()),
            pos: 0,
            text_start: 0,
            lenient,
            pending: None,
            done: false,
        }
    }

    /// Flush text accumulated before `upto`, queueing `next` behind it.
    fn emit(&mut self, upto: usize, next: Segment<'a>, resume: usize) -> Segment<'a> {
        let source = self.source;
        let text = &source[self.text_start..upto];
        self.pos = resume;
        self.text_start = resume;
        if text.is_empty() {
            next
        } else {
            self.pending = Some(next);
            Segment::Text(text)
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Segment<'a>, MalformedLiteral>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(Ok(segment));
        }
        if self.done {
            return None;
        }

        let source = self.source;
        let bytes = source.as_bytes();
        while self.pos < bytes.len() {
            let at = self.pos;
            match (bytes[at], bytes.get(at + 1).copied()) {
                (b'{', Some(b'{')) => return Some(Ok(self.emit(at, Segment::Brace('{'), at + 2))),
                (b'}', Some(b'}')) => return Some(Ok(self.emit(at, Segment::Brace('}'), at + 2))),
                (b'{', _) => match self.closers.get(at).copied().flatten() {
                    Some(end) => {
                        let span = PlaceholderSpan::new(source, at, end);
                        return Some(Ok(self.emit(at, Segment::Placeholder(span), end)));
                    }
                    None if self.lenient => self.pos += 1,
                    None => {
                        self.done = true;
                        return Some(Err(MalformedLiteral::UnterminatedPlaceholder {
                            position: at,
                        }));
                    }
                },
                _ => self.pos += 1,
            }
        }

        self.done = true;
        let rest = &source[self.text_start..];
        (!rest.is_empty()).then_some(Ok(Segment::Text(rest)))
    }
}

/// Collect every placeholder span in `text`, skipping unbalanced braces.
pub fn placeholder_spans(text: &str) -> Vec<PlaceholderSpan<'_>> {
    Scanner::lenient(text)
        .filter_map(|segment| match segment {
            Ok(Segment::Placeholder(span)) => Some(span),
            _ => None,
        })
        .collect()
}

/// For each `{` in `bytes`, the offset one past the `}` that balances it.
///
/// Indexed by byte offset; entries for other bytes and for braces that
/// never close are `None`. A `}` with nothing open is ignored.
fn match_braces(bytes: &[u8]) -> Vec<Option<usize>> {
    let mut closers = vec![None; bytes.len()];
    let mut open = Vec::new();

    for (offset, &byte) in bytes.iter().enumerate() {
        match byte {
            b'{' => open.push(offset),
            b'}' => {
                if let Some(start) = open.pop() {
                    closers[start] = Some(offset + 1);
                }
            }
            _ => {}
        }
    }

    closers
}
