// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mutating commands. Each one loads the file, applies its change and saves.

use tracing::info;

use crate::cli::edit::{CommentArgs, DeleteArgs, SetArgs};
use crate::config::Config;
use crate::editor::{DotenvEditor, SetterEntry};
use crate::error::Result;

/// Build the setter entries for a `set` invocation.
#[must_use]
pub fn setter_entries(args: &SetArgs) -> Vec<SetterEntry> {
    args.assignments
        .iter()
        .map(|assignment| {
            SetterEntry::builder()
                .key(assignment.key.as_str())
                .with_value(assignment.value.as_str())
                .maybe_with_comment(args.comment.as_deref())
                .with_export(args.export)
                .build()
        })
        .collect()
}

/// Add or update keys, then save.
///
/// # Errors
///
/// Returns an error if a key or value is rejected or the file cannot be
/// read or written.
pub fn run_set_command(args: &SetArgs, config: &Config) -> Result<()> {
    let entries = setter_entries(args);
    let count = entries.len();

    DotenvEditor::open(&config.path)?
        .set_keys(entries)?
        .save()?;

    info!(count, path = %config.path.display(), "keys set");
    Ok(())
}

/// Delete keys, then save.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn run_delete_command(args: &DeleteArgs, config: &Config) -> Result<()> {
    DotenvEditor::open(&config.path)?
        .delete_keys(&args.keys)?
        .save()?;

    info!(count = args.keys.len(), path = %config.path.display(), "keys deleted");
    Ok(())
}

/// Append a comment line, then save.
///
/// # Errors
///
/// Returns an error if the text spans several lines or the file cannot be
/// read or written.
pub fn run_comment_command(args: &CommentArgs, config: &Config) -> Result<()> {
    DotenvEditor::open(&config.path)?
        .add_comment(&args.text)?
        .save()?;
    Ok(())
}

/// Append an empty line, then save.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn run_empty_command(config: &Config) -> Result<()> {
    DotenvEditor::open(&config.path)?.add_empty().save()?;
    Ok(())
}
