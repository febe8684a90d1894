// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for commands that read or rewrite the `.env` file.

use clap::Args;

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Key to look up, as written in the file.
    pub key: String,
}

/// Arguments for the `keys` command.
#[derive(Debug, Clone, Default, Args)]
pub struct KeysArgs {
    /// Only list these keys. Lists every key when empty.
    pub keys: Vec<String>,

    /// Print records as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lines` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LinesArgs {
    /// Print lines as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Assignments in the form KEY=VALUE. The key is normalized before use.
    #[arg(required = true, value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<Assignment>,

    /// Trailing comment written on every assigned line.
    #[arg(long, value_name = "TEXT")]
    pub comment: Option<String>,

    /// Prefix every assigned line with `export`.
    #[arg(long)]
    pub export: bool,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Keys to remove, matched exactly as written.
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Arguments for the `comment` command.
#[derive(Debug, Clone, Args)]
pub struct CommentArgs {
    /// Comment text; an empty string writes a bare `#`.
    pub text: String,
}

/// One `KEY=VALUE` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// Split `KEY=VALUE` at the first `=`.
///
/// # Errors
///
/// Returns an error message if there is no `=` or the key part is empty.
pub fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got '{raw}'"));
    };
    if key.trim().is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok(Assignment {
        key: key.trim().to_string(),
        value: value.to_string(),
    })
}
