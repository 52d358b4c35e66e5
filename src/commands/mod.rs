//! Command implementations for litview.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command reads one literal, runs it through the
//! engine, and prints the result to stdout.

mod input;
mod show;

#[cfg(test)]
mod tests;

use crate::cli::{Command, DecodeArgs, DetectArgs, RenderArgs, VarsArgs};
use crate::config::Config;
use crate::error::{LitError, Result};
use crate::literal::try_decode_literal;
use crate::template::{extract_variable_names, is_template, render_template_with};
use input::{load_bindings, read_input, resolve_language, resolve_render_options};

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Decode(args) => cmd_decode(args, config),
        Command::Detect(args) => cmd_detect(args),
        Command::Vars(args) => cmd_vars(args),
        Command::Render(args) => cmd_render(args, config),
        Command::Show(args) => show::cmd_show(args, config),
        Command::Config => cmd_config(config),
    }
}

/// Execute the `litview decode` command.
///
/// Malformed literals are printed unchanged, as decoding never fails.
fn cmd_decode(args: DecodeArgs, config: &Config) -> Result<()> {
    let raw = read_input(&args.source)?;
    let language = resolve_language(args.language.as_deref(), config)?;

    let outcome = try_decode_literal(&raw, language);
    if outcome.is_unchanged() {
        tracing::info!("input is not a complete literal, printed unchanged");
    }

    println!("{}", without_line_ending(outcome.as_str()));
    Ok(())
}

/// Execute the `litview detect` command.
fn cmd_detect(args: DetectArgs) -> Result<()> {
    let raw = read_input(&args.source)?;
    println!("{}", if is_template(&raw) { "template" } else { "plain" });
    Ok(())
}

/// Execute the `litview vars` command.
fn cmd_vars(args: VarsArgs) -> Result<()> {
    let raw = read_input(&args.source)?;
    let names = extract_variable_names(&raw);

    if args.json {
        let json = serde_json::to_string(&names)
            .map_err(|e| LitError::UserError(format!("failed to serialize names: {}", e)))?;
        println!("{}", json);
    } else {
        for name in &names {
            println!("{}", name);
        }
    }
    Ok(())
}

/// Execute the `litview render` command.
fn cmd_render(args: RenderArgs, config: &Config) -> Result<()> {
    let raw = read_input(&args.source)?;
    let options = resolve_render_options(args.bindings.missing.as_deref(), config)?;
    let bindings = load_bindings(&args.bindings)?;

    if !is_template(&raw) {
        tracing::warn!("input does not look like a formatted literal, rendering anyway");
    }

    let rendered = render_template_with(&raw, &bindings, &options)?;
    println!("{}", rendered);
    Ok(())
}

/// Drop one trailing line ending so `println!` does not double it.
///
/// Unchanged input read from stdin still carries its final newline.
pub(crate) fn without_line_ending(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(text)
}

/// Execute the `litview config` command.
fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
