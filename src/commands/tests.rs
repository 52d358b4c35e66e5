//! Tests for command helpers and the `show` evaluation.

use super::input::{
    bindings_from_yaml, load_bindings, parse_binding, read_input_from, resolve_language,
    resolve_render_options, resolve_view,
};
use super::show::{LiteralKind, ShowReport, evaluate};
use super::without_line_ending;
use crate::cli::{BindingArgs, InputArgs};
use crate::config::{Config, OutputView};
use crate::error::LitError;
use crate::literal::{Language, MalformedLiteral, try_decode_literal};
use crate::template::{Bindings, MissingPolicy, RenderError, RenderOptions, bindings};
use crate::test_support::write_temp_file;
use std::io::Cursor;

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_read_input_from_argument() {
    let args = InputArgs {
        input: Some("'x'".to_string()),
        file: None,
    };
    let text = read_input_from(&args, Cursor::new("ignored")).unwrap();
    assert_eq!(text, "'x'");
}

#[test]
fn test_read_input_from_stdin_when_missing_or_dash() {
    let args = InputArgs::default();
    assert_eq!(read_input_from(&args, Cursor::new("f'{a}'\n")).unwrap(), "f'{a}'\n");

    let args = InputArgs {
        input: Some("-".to_string()),
        file: None,
    };
    assert_eq!(read_input_from(&args, Cursor::new("piped")).unwrap(), "piped");
}

#[test]
fn test_read_input_from_file() {
    let (_dir, path) = write_temp_file("literal.txt", "f\"\"\"a\n{b}\"\"\"");
    let args = InputArgs {
        input: None,
        file: Some(path),
    };
    assert_eq!(
        read_input_from(&args, Cursor::new("")).unwrap(),
        "f\"\"\"a\n{b}\"\"\""
    );
}

#[test]
fn test_read_input_missing_file_is_user_error() {
    let (dir, _path) = write_temp_file("other.txt", "");
    let args = InputArgs {
        input: None,
        file: Some(dir.path().join("missing.txt")),
    };
    let err = read_input_from(&args, Cursor::new("")).unwrap_err();
    assert!(matches!(err, LitError::UserError(_)));
    assert!(err.to_string().contains("failed to read input file"));
}

#[test]
fn test_unchanged_stdin_input_prints_one_line() {
    let args = InputArgs::default();
    let raw = read_input_from(&args, Cursor::new("\"abc\n")).unwrap();
    let outcome = try_decode_literal(&raw, Language::Python);
    assert!(outcome.is_unchanged());
    assert_eq!(without_line_ending(outcome.as_str()), "\"abc");
}

#[test]
fn test_without_line_ending_strips_one_terminator() {
    assert_eq!(without_line_ending("x\r\n"), "x");
    assert_eq!(without_line_ending("x\n\n"), "x\n");
    assert_eq!(without_line_ending("x"), "x");
    assert_eq!(without_line_ending(""), "");
}

// ============================================================================
// Bindings
// ============================================================================

#[test]
fn test_parse_binding() {
    assert_eq!(
        parse_binding("name='Ann'").unwrap(),
        ("name".to_string(), "'Ann'".to_string())
    );
    assert_eq!(
        parse_binding(" padded = a=b ").unwrap(),
        ("padded".to_string(), " a=b ".to_string())
    );
    assert_eq!(parse_binding("empty=").unwrap().1, "");
}

#[test]
fn test_parse_binding_rejects_bad_specs() {
    let err = parse_binding("novalue").unwrap_err();
    assert!(err.to_string().contains("expected NAME=VALUE"));

    let err = parse_binding("1abc=x").unwrap_err();
    assert!(err.to_string().contains("invalid variable name '1abc'"));
}

#[test]
fn test_bindings_from_yaml_scalars() {
    let yaml = r#"
name: Ann
age: 30
admin: true
nothing: ~
"#;
    let vars = bindings_from_yaml(yaml).unwrap();
    assert_eq!(vars.get("name").map(String::as_str), Some("Ann"));
    assert_eq!(vars.get("age").map(String::as_str), Some("30"));
    assert_eq!(vars.get("admin").map(String::as_str), Some("true"));
    assert_eq!(vars.get("nothing").map(String::as_str), Some(""));
}

#[test]
fn test_bindings_from_json() {
    let vars = bindings_from_yaml(r#"{"name": "Ann", "n": 1.5}"#).unwrap();
    assert_eq!(vars.get("name").map(String::as_str), Some("Ann"));
    assert_eq!(vars.get("n").map(String::as_str), Some("1.5"));
}

#[test]
fn test_bindings_from_empty_file() {
    assert!(bindings_from_yaml("").unwrap().is_empty());
    assert!(bindings_from_yaml("  \n").unwrap().is_empty());
}

#[test]
fn test_bindings_from_yaml_rejects_nested_values() {
    let err = bindings_from_yaml("items: [1, 2]").unwrap_err();
    assert!(err.to_string().contains("must be a string, number, or boolean"));

    let err = bindings_from_yaml("bad-name: x").unwrap_err();
    assert!(err.to_string().contains("invalid variable name 'bad-name'"));
}

#[test]
fn test_var_flags_override_vars_file() {
    let (_dir, path) = write_temp_file("vars.yaml", "a: from_file\nb: kept\n");
    let args = BindingArgs {
        vars: vec!["a=from_flag".to_string()],
        vars_file: Some(path),
        missing: None,
    };

    let vars = load_bindings(&args).unwrap();
    assert_eq!(vars.get("a").map(String::as_str), Some("from_flag"));
    assert_eq!(vars.get("b").map(String::as_str), Some("kept"));
}

#[test]
fn test_vars_file_errors_name_the_file() {
    let (_dir, path) = write_temp_file("vars.yaml", "a: [1]\n");
    let args = BindingArgs {
        vars: Vec::new(),
        vars_file: Some(path),
        missing: None,
    };

    let err = load_bindings(&args).unwrap_err();
    assert!(err.to_string().contains("vars.yaml"));
}

// ============================================================================
// Argument resolution
// ============================================================================

#[test]
fn test_resolve_language() {
    let config = Config {
        language: Language::Javascript,
        ..Config::default()
    };
    assert_eq!(resolve_language(None, &config).unwrap(), Language::Javascript);
    assert_eq!(resolve_language(Some("plain"), &config).unwrap(), Language::Plain);

    let err = resolve_language(Some("cobol"), &config).unwrap_err();
    assert!(err.to_string().contains("invalid language 'cobol'"));
}

#[test]
fn test_resolve_render_options() {
    let config = Config::default();
    assert_eq!(
        resolve_render_options(None, &config).unwrap().missing,
        MissingPolicy::Keep
    );
    assert_eq!(
        resolve_render_options(Some("error"), &config).unwrap().missing,
        MissingPolicy::Error
    );
    assert!(resolve_render_options(Some("ignore"), &config).is_err());
}

#[test]
fn test_resolve_view() {
    let config = Config {
        output_view: OutputView::Raw,
        ..Config::default()
    };
    assert_eq!(resolve_view(None, false, &config).unwrap(), OutputView::Raw);
    assert_eq!(
        resolve_view(Some("rendered"), false, &config).unwrap(),
        OutputView::Rendered
    );
    assert_eq!(
        resolve_view(None, true, &Config::default()).unwrap(),
        OutputView::Raw
    );
    assert!(resolve_view(Some("pretty"), false, &config).is_err());
}

// ============================================================================
// Show evaluation
// ============================================================================

#[test]
fn test_evaluate_template() {
    let vars = bindings([("name", "'Ann'")]);
    let evaluation = evaluate(
        "f\"Hi {name}, {greeting}\"",
        Language::Plain,
        &vars,
        &RenderOptions::default(),
    );

    assert_eq!(evaluation.kind, LiteralKind::Template);
    assert_eq!(evaluation.language, Language::Python);
    assert_eq!(evaluation.variables, vec!["name", "greeting"]);
    assert_eq!(evaluation.result, Ok("Hi Ann, {greeting}".to_string()));
}

#[test]
fn test_evaluate_plain_literal_uses_language() {
    let evaluation = evaluate(
        "\"a\\tb\"",
        Language::Plain,
        &Bindings::new(),
        &RenderOptions::default(),
    );

    assert_eq!(evaluation.kind, LiteralKind::Plain);
    assert_eq!(evaluation.language, Language::Plain);
    assert!(evaluation.variables.is_empty());
    assert_eq!(evaluation.result, Ok("a\\tb".to_string()));
}

#[test]
fn test_evaluate_unterminated_template_reports_error() {
    let evaluation = evaluate(
        "f'''{x}",
        Language::Python,
        &Bindings::new(),
        &RenderOptions::default(),
    );

    assert_eq!(evaluation.kind, LiteralKind::Template);
    assert_eq!(evaluation.variables, vec!["x"]);
    assert_eq!(
        evaluation.result,
        Err(RenderError::Malformed(MalformedLiteral::UnterminatedLiteral {
            delimiter: "'''"
        }))
    );
}

#[test]
fn test_show_report_lists_unbound_and_applies_view() {
    let vars = bindings([("a", "1")]);
    let evaluation = evaluate(
        "f'{a}{b}'",
        Language::Python,
        &vars,
        &RenderOptions::default(),
    );
    let report = ShowReport::new(&evaluation, &vars, OutputView::Raw, "\"\"\"");

    assert_eq!(report.unbound, vec!["b"]);
    assert_eq!(report.output.as_deref(), Some("\"\"\"1{b}\"\"\""));
    assert!(report.error.is_none());
}

#[test]
fn test_show_report_json_shape() {
    let evaluation = evaluate(
        "f'{x'",
        Language::Python,
        &Bindings::new(),
        &RenderOptions::default(),
    );
    let report = ShowReport::new(&evaluation, &Bindings::new(), OutputView::Rendered, "\"\"\"");
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["kind"], "plain");
    assert_eq!(json["language"], "python");
    assert!(json["output"].is_string());
    assert!(json["error"].is_null());
}

#[test]
fn test_show_report_carries_error_chain() {
    let evaluation = evaluate(
        "f\"\"\"{x}",
        Language::Python,
        &Bindings::new(),
        &RenderOptions::default(),
    );
    let report = ShowReport::new(&evaluation, &Bindings::new(), OutputView::Rendered, "\"\"\"");

    assert!(report.output.is_none());
    assert_eq!(
        report.error.as_deref(),
        Some("Invalid template format: literal opened with \"\"\" is never closed")
    );
}
