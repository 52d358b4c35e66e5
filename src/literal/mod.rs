//! String literal model and decoding.
//!
//! This module turns a quoted literal, as written in source code, into the
//! text it denotes:
//!
//! - **Quote stripping**: removes one layer of matching outer delimiters
//!   (`"..."`, `'...'`, `"""..."""`, `'''...'''`, backticks for JavaScript)
//!   and the `f` / `r` prefix letters
//! - **Escape decoding**: rewrites backslash escapes in a single pass,
//!   per language dialect
//!
//! Decoding favours availability: a malformed literal is passed through
//! unchanged rather than reported as an error.

mod decode;
mod escape;
mod quotes;
mod types;


// Re-export public API
pub use decode::{DecodeOutcome, decode_literal, try_decode_literal};
pub use escape::decode_escapes;
pub use quotes::{Literal, strip_quotes};
pub(crate) use quotes::split_prefix;
pub use types::{Language, MalformedLiteral, Prefix, QuoteStyle};
