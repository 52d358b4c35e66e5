//! CLI argument parsing for litview.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Litview: decode string literals and render formatted literals.
///
/// Paste a literal as it appears in source code:
/// - Plain literals have their quotes removed and escapes decoded
/// - Formatted literals (`f"..."`) have their `{placeholders}` listed
///   and filled in from `--var NAME=VALUE` bindings
#[derive(Parser, Debug)]
#[command(name = "litview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (defaults to $LITVIEW_CONFIG, then ./.litview.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for litview.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a string literal.
    ///
    /// Strips the outer quotes and prefix, then decodes escape sequences
    /// for the chosen language.
    Decode(DecodeArgs),

    /// Report whether the input is a formatted literal.
    ///
    /// Prints `template` or `plain`.
    Detect(DetectArgs),

    /// List the placeholder variables of a formatted literal.
    ///
    /// Names are printed once each, in order of first appearance.
    Vars(VarsArgs),

    /// Render a formatted literal with variable bindings.
    Render(RenderArgs),

    /// Detect the input, then render or decode it as appropriate.
    ///
    /// This is the one-stop view: templates are rendered with whatever
    /// bindings are given, plain literals are decoded.
    Show(ShowArgs),

    /// Print the effective configuration as YAML.
    Config,
}

/// Where the literal text comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Literal text. Omit or pass `-` to read standard input.
    pub input: Option<String>,

    /// Read the literal from a file instead.
    #[arg(short, long, value_name = "PATH", conflicts_with = "input")]
    pub file: Option<PathBuf>,
}

/// Variable bindings for rendering.
#[derive(Args, Debug, Clone, Default)]
pub struct BindingArgs {
    /// Bind a variable (repeatable), e.g. `--var name=Ann`.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// YAML or JSON file mapping variable names to values.
    /// `--var` entries take precedence.
    #[arg(long, value_name = "PATH")]
    pub vars_file: Option<PathBuf>,

    /// What to do with unbound placeholders (keep, error).
    /// Defaults to the config's `missing_placeholders`.
    #[arg(long, value_name = "POLICY")]
    pub missing: Option<String>,
}

/// Arguments for the `decode` command.
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Language dialect (python, javascript, plain).
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for the `detect` command.
#[derive(Parser, Debug)]
pub struct DetectArgs {
    #[command(flatten)]
    pub source: InputArgs,
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
pub struct VarsArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Print the names as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: InputArgs,

    #[command(flatten)]
    pub bindings: BindingArgs,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: InputArgs,

    #[command(flatten)]
    pub bindings: BindingArgs,

    /// Language dialect for plain literals (python, javascript, plain).
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output view (rendered, raw). Defaults to the config's `output_view`.
    #[arg(long)]
    pub view: Option<String>,

    /// Shorthand for `--view raw`.
    #[arg(long, conflicts_with = "view")]
    pub raw: bool,

    /// Print a JSON report instead of the bare result.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
