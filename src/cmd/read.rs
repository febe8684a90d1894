// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only commands: `get`, `keys`, `lines` and `show`.
//!
//! Text output is built by the `format_*` functions so it can be checked
//! without capturing stdout.

use anyhow::Context;

use crate::cli::edit::{GetArgs, KeysArgs, LinesArgs};
use crate::config::Config;
use crate::editor::DotenvEditor;
use crate::error::Result;
use crate::formatter::ParsedLine;
use crate::reader::{KeyMap, LineEntry};

/// Print the value of one key.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the key is absent.
pub fn run_get_command(args: &GetArgs, config: &Config) -> Result<()> {
    let editor = DotenvEditor::open(&config.path)?;
    println!("{}", editor.value(&args.key)?);
    Ok(())
}

/// List key records, optionally restricted to the requested keys.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn run_keys_command(args: &KeysArgs, config: &Config) -> Result<()> {
    let editor = DotenvEditor::open(&config.path)?;
    let keys = editor.keys(&args.keys)?;

    if args.json {
        let json = serde_json::to_string_pretty(&keys).context("failed to serialize keys")?;
        println!("{json}");
    } else if keys.is_empty() {
        println!("No keys found");
    } else {
        for line in format_keys(&keys) {
            println!("{line}");
        }
    }
    Ok(())
}

/// List every line with its classification.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn run_lines_command(args: &LinesArgs, config: &Config) -> Result<()> {
    let editor = DotenvEditor::open(&config.path)?;
    let lines = editor.lines()?;

    if args.json {
        let json = serde_json::to_string_pretty(&lines).context("failed to serialize lines")?;
        println!("{json}");
    } else {
        for line in format_lines(&lines) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Print the raw file content.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn run_show_command(config: &Config) -> Result<()> {
    let editor = DotenvEditor::open(&config.path)?;
    print!("{}", editor.content()?);
    Ok(())
}

/// One line per key: `LINE: [export ]KEY=VALUE[ # comment]`.
#[must_use]
pub fn format_keys(keys: &KeyMap) -> Vec<String> {
    let width = number_width(keys.values().map(|record| record.line));

    keys.iter()
        .map(|(key, record)| {
            let export = if record.export { "export " } else { "" };
            let mut line = format!("{:>width$}: {export}{key}={}", record.line, record.value);
            if let Some(comment) = &record.comment {
                line.push_str(" # ");
                line.push_str(comment);
            }
            line
        })
        .collect()
}

/// One line per entry: `LINE KIND RAW`, kinds padded to a common width.
#[must_use]
pub fn format_lines(lines: &[LineEntry]) -> Vec<String> {
    let width = number_width(lines.iter().map(|entry| entry.line));

    lines
        .iter()
        .map(|entry| {
            let kind = match entry.parsed_data {
                ParsedLine::Empty => "empty",
                ParsedLine::Comment { .. } => "comment",
                ParsedLine::Setter(_) => "setter",
                ParsedLine::Unparsable { .. } => "unparsable",
            };
            format!("{:>width$} {kind:<10} {}", entry.line, entry.raw_data)
                .trim_end()
                .to_string()
        })
        .collect()
}

fn number_width(numbers: impl Iterator<Item = usize>) -> usize {
    numbers.max().map_or(1, |max| max.to_string().len())
}
