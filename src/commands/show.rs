//! Implementation of the `litview show` command.
//!
//! Classifies the input, then renders it as a template or decodes it as a
//! plain literal, and presents the result or a JSON report.

use crate::cli::ShowArgs;
use crate::commands::input::{
    load_bindings, read_input, resolve_language, resolve_render_options, resolve_view,
};
use crate::config::{Config, OutputView};
use crate::error::{LitError, Result, describe};
use crate::literal::{Language, decode_literal};
use crate::template::{
    Bindings, RenderError, RenderOptions, extract_variable_names, is_template,
    render_template_with,
};
use serde::Serialize;

/// How the input was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Template,
    Plain,
}

/// The outcome of evaluating one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub kind: LiteralKind,
    pub language: Language,
    /// Placeholder variables, empty for plain literals.
    pub variables: Vec<String>,
    pub result: std::result::Result<String, RenderError>,
}

/// Evaluate `raw`: render it if it is a template, decode it otherwise.
///
/// Templates are always rendered with the Python dialect; `language`
/// applies to plain literals.
pub fn evaluate(
    raw: &str,
    language: Language,
    bindings: &Bindings,
    options: &RenderOptions,
) -> Evaluation {
    if is_template(raw) {
        Evaluation {
            kind: LiteralKind::Template,
            language: Language::Python,
            variables: extract_variable_names(raw),
            result: render_template_with(raw, bindings, options),
        }
    } else {
        Evaluation {
            kind: LiteralKind::Plain,
            language,
            variables: Vec::new(),
            result: Ok(decode_literal(raw, language)),
        }
    }
}

/// JSON report printed by `show --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowReport {
    pub kind: LiteralKind,
    pub language: Language,
    pub variables: Vec<String>,
    /// Variables with no binding.
    pub unbound: Vec<String>,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl ShowReport {
    /// Build the report for an evaluation, presenting output in `view`.
    pub fn new(
        evaluation: &Evaluation,
        bindings: &Bindings,
        view: OutputView,
        delimiter: &str,
    ) -> Self {
        let unbound = evaluation
            .variables
            .iter()
            .filter(|name| !bindings.contains_key(*name))
            .cloned()
            .collect();

        let (output, error) = match &evaluation.result {
            Ok(text) => (Some(view.apply(text, delimiter)), None),
            Err(err) => (None, Some(describe(err))),
        };

        Self {
            kind: evaluation.kind,
            language: evaluation.language,
            variables: evaluation.variables.clone(),
            unbound,
            output,
            error,
        }
    }
}

/// Execute the `litview show` command.
pub fn cmd_show(args: ShowArgs, config: &Config) -> Result<()> {
    let raw = read_input(&args.source)?;
    let language = resolve_language(args.language.as_deref(), config)?;
    let options = resolve_render_options(args.bindings.missing.as_deref(), config)?;
    let view = resolve_view(args.view.as_deref(), args.raw, config)?;
    let bindings = load_bindings(&args.bindings)?;

    let evaluation = evaluate(&raw, language, &bindings, &options);
    tracing::debug!(kind = ?evaluation.kind, variables = ?evaluation.variables, "evaluated input");

    if args.json {
        let report = ShowReport::new(&evaluation, &bindings, view, &config.raw_view_delimiter);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| LitError::UserError(format!("failed to serialize report: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    let output = evaluation.result?;
    let shown = view.apply(&output, &config.raw_view_delimiter);
    println!("{}", super::without_line_ending(&shown));
    Ok(())
}
