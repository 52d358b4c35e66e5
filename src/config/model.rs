//! Config struct definition and default implementation.

use super::types::*;
use crate::literal::Language;
use crate::template::MissingPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for litview.
///
/// This struct represents the contents of `.litview.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dialect used to decode plain literals when no `--language` is given.
    #[serde(default)]
    pub language: Language,

    /// What rendering does with placeholders that have no binding.
    #[serde(default)]
    pub missing_placeholders: MissingPolicy,

    /// Default presentation for `show`.
    #[serde(default)]
    pub output_view: OutputView,

    /// Delimiter wrapped around the result in the raw view.
    #[serde(default = "default_raw_view_delimiter")]
    pub raw_view_delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            missing_placeholders: MissingPolicy::default(),
            output_view: OutputView::default(),
            raw_view_delimiter: default_raw_view_delimiter(),
        }
    }
}
