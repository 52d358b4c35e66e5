//! Backslash escape decoding.

use super::types::Language;

/// Decode backslash escapes in a literal body.
///
/// The body is scanned once, left to right. Each recognized two-character
/// token is replaced by its character and the output is never re-scanned,
/// so `\\n` yields a backslash followed by `n`. Unknown tokens and a
/// trailing lone backslash are copied through verbatim.
///
/// Returns the body unchanged for the plain dialect, and for raw literals
/// in a dialect that has raw strings.
pub fn decode_escapes(body: &str, language: Language, raw: bool) -> String {
    if !language.decodes_escapes() || (raw && language.honours_raw()) {
        return body.to_string();
    }

    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }

        match chars.peek().and_then(|&next| language.escape(next)) {
            Some(replacement) => {
                chars.next();
                decoded.push(replacement);
            }
            None => decoded.push('\\'),
        }
    }

    decoded
}
