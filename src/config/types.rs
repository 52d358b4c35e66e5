//! Configuration types and defaults for litview.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Environment variable naming a config file to load.
pub const CONFIG_ENV_VAR: &str = "LITVIEW_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = ".litview.yaml";

/// How `show` presents its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputView {
    /// The decoded or rendered text as-is (default).
    #[default]
    Rendered,
    /// The result wrapped in `raw_view_delimiter`, ready to paste back as a literal.
    Raw,
}

impl OutputView {
    /// Parse an output view from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "rendered" => Some(Self::Rendered),
            "raw" => Some(Self::Raw),
            _ => None,
        }
    }

    /// Present `output` in this view.
    pub fn apply(self, output: &str, delimiter: &str) -> String {
        match self {
            Self::Rendered => output.to_string(),
            Self::Raw => format!("{}{}{}", delimiter, output, delimiter),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_raw_view_delimiter() -> String {
    "\"\"\"".to_string()
}
