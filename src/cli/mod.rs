// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for dotenv-edit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dotenv-edit [global options] <command>
//! get KEY
//! keys [--json] [KEY...]
//! lines [--json]
//! show
//! set KEY=VALUE... [--comment TEXT] [--export]
//! delete KEY...
//! comment TEXT
//! empty
//! options
//! configs
//! ```

pub mod edit;
pub mod global;


use crate::cli::edit::{CommentArgs, DeleteArgs, GetArgs, KeysArgs, LinesArgs, SetArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Programmatic `.env` file editor.
#[derive(Debug, Parser)]
#[command(
    name = "dotenv-edit",
    author,
    version,
    about = "Read and edit .env files",
    long_about = "dotenv-editor Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads, adds, updates and deletes KEY=VALUE entries in a .env\n\
                  file while leaving unrelated lines untouched.",
    after_help = "CONFIGURATION:\n\n\
                  `dotenv-editor.toml` in the current directory is loaded when\n\
                  present, then every --config file in order, then DOTENV_EDITOR_*\n\
                  environment variables (DOTENV_EDITOR_PATH, DOTENV_EDITOR_LOG_LEVEL,\n\
                  DOTENV_EDITOR_LOG_FILE). Command-line flags override all of them."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the value of one key.
    Get(GetArgs),

    /// Lists keys with their line, value, comment and export marker.
    Keys(KeysArgs),

    /// Lists every line with its classification.
    Lines(LinesArgs),

    /// Prints the raw file content.
    Show,

    /// Adds or updates keys and saves the file.
    Set(SetArgs),

    /// Deletes keys and saves the file.
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// Appends a comment line and saves the file.
    Comment(CommentArgs),

    /// Appends an empty line and saves the file.
    Empty,

    /// Lists all options and their values from the configuration.
    Options,

    /// Lists the configuration files used.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
