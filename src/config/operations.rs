//! Config loading, discovery, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::error::{LitError, Result};
use crate::template::RenderOptions;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LitError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LitError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LitError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LitError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `raw_view_delimiter` must be non-empty and single-line
    pub fn validate(&self) -> Result<()> {
        if self.raw_view_delimiter.is_empty() {
            return Err(LitError::ConfigError(
                "config validation failed: raw_view_delimiter must be non-empty".to_string(),
            ));
        }

        if self.raw_view_delimiter.contains(|c: char| c == '\n' || c == '\r') {
            return Err(LitError::ConfigError(
                "config validation failed: raw_view_delimiter must not contain line breaks"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Locate and load the effective config for this process.
    ///
    /// Lookup order: the explicit path, then `$LITVIEW_CONFIG`, then
    /// `.litview.yaml` in the working directory, then built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty());
        let cwd = std::env::current_dir().map_err(|e| {
            LitError::ConfigError(format!("failed to determine working directory: {}", e))
        })?;

        Self::discover_in(explicit, from_env.as_deref().map(Path::new), &cwd)
    }

    /// Resolve the config from already-gathered lookup inputs.
    ///
    /// An explicit or environment-provided path must exist; the
    /// working-directory file is optional.
    pub fn discover_in(explicit: Option<&Path>, from_env: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit.or(from_env) {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config from working directory");
            return Self::load(candidate);
        }

        tracing::trace!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Render options derived from this config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            missing: self.missing_placeholders,
        }
    }
}
