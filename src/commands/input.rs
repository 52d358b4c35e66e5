//! Input acquisition and argument resolution shared by the commands.

use crate::cli::{BindingArgs, InputArgs};
use crate::config::{Config, OutputView};
use crate::error::{LitError, Result};
use crate::literal::Language;
use crate::template::{Bindings, MissingPolicy, RenderOptions, is_identifier};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Read the literal text from the file, the positional argument, or stdin.
pub fn read_input(args: &InputArgs) -> Result<String> {
    read_input_from(args, std::io::stdin())
}

/// Read the literal text, using `stdin` when no file or argument is given.
pub fn read_input_from<R: Read>(args: &InputArgs, stdin: R) -> Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|e| {
            LitError::UserError(format!("failed to read input file '{}': {}", path.display(), e))
        });
    }

    match args.input.as_deref() {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => std::io::read_to_string(stdin)
            .map_err(|e| LitError::UserError(format!("failed to read standard input: {}", e))),
    }
}

/// Parse a `NAME=VALUE` binding.
///
/// The name is trimmed and must be an identifier; the value is kept as
/// written (rendering trims it and strips its quotes).
pub fn parse_binding(spec: &str) -> Result<(String, String)> {
    let Some((name, value)) = spec.split_once('=') else {
        return Err(LitError::UserError(format!(
            "invalid --var '{}': expected NAME=VALUE",
            spec
        )));
    };

    let name = name.trim();
    if !is_identifier(name) {
        return Err(LitError::UserError(format!(
            "invalid variable name '{}': use letters, digits, and underscores, not starting with a digit",
            name
        )));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Collect bindings from `--vars-file` and `--var`, with `--var` winning.
pub fn load_bindings(args: &BindingArgs) -> Result<Bindings> {
    let mut bindings = match &args.vars_file {
        Some(path) => load_bindings_file(path)?,
        None => Bindings::new(),
    };

    for spec in &args.vars {
        let (name, value) = parse_binding(spec)?;
        bindings.insert(name, value);
    }

    Ok(bindings)
}

/// Load a YAML (or JSON) mapping of variable names to values.
pub fn load_bindings_file(path: &Path) -> Result<Bindings> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LitError::UserError(format!("failed to read vars file '{}': {}", path.display(), e))
    })?;

    bindings_from_yaml(&content).map_err(|e| match e {
        LitError::UserError(msg) => {
            LitError::UserError(format!("{} (in '{}')", msg, path.display()))
        }
        other => other,
    })
}

/// Parse a YAML mapping of variable names to scalar values.
///
/// Numbers and booleans are bound as their text; null binds the empty string.
pub fn bindings_from_yaml(content: &str) -> Result<Bindings> {
    if content.trim().is_empty() {
        return Ok(Bindings::new());
    }

    let entries: BTreeMap<String, Value> = serde_yaml::from_str(content)
        .map_err(|e| LitError::UserError(format!("failed to parse vars file: {}", e)))?;

    let mut bindings = Bindings::with_capacity(entries.len());
    for (name, value) in entries {
        if !is_identifier(&name) {
            return Err(LitError::UserError(format!(
                "invalid variable name '{}' in vars file",
                name
            )));
        }
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            _ => {
                return Err(LitError::UserError(format!(
                    "variable '{}' in vars file must be a string, number, or boolean",
                    name
                )));
            }
        };
        bindings.insert(name, value);
    }

    Ok(bindings)
}

/// Resolve the language from `--language`, falling back to the config.
pub fn resolve_language(arg: Option<&str>, config: &Config) -> Result<Language> {
    match arg {
        None => Ok(config.language),
        Some(name) => Language::from_str(name).ok_or_else(|| {
            LitError::UserError(format!(
                "invalid language '{}'. Valid values: python, javascript, plain",
                name
            ))
        }),
    }
}

/// Resolve render options from `--missing`, falling back to the config.
pub fn resolve_render_options(arg: Option<&str>, config: &Config) -> Result<RenderOptions> {
    let mut options = config.render_options();
    if let Some(policy) = arg {
        options.missing = MissingPolicy::from_str(policy).ok_or_else(|| {
            LitError::UserError(format!(
                "invalid missing-placeholder policy '{}'. Valid values: keep, error",
                policy
            ))
        })?;
    }
    Ok(options)
}

/// Resolve the output view from `--view` / `--raw`, falling back to the config.
pub fn resolve_view(arg: Option<&str>, raw: bool, config: &Config) -> Result<OutputView> {
    if raw {
        return Ok(OutputView::Raw);
    }
    match arg {
        None => Ok(config.output_view),
        Some(name) => OutputView::from_str(name).ok_or_else(|| {
            LitError::UserError(format!(
                "invalid view '{}'. Valid values: rendered, raw",
                name
            ))
        }),
    }
}
