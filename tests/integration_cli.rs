// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and configuration layering.

use std::path::PathBuf;

use clap::Parser;
use dotenv_editor::cli::{Cli, Command};
use dotenv_editor::config::Config;
use dotenv_editor::logging::LogLevel;
use tempfile::TempDir;

// =============================================================================
// Command parsing
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["dotenv-edit"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_read_commands() {
    for (args, expected) in [
        (vec!["dotenv-edit", "show"], "show"),
        (vec!["dotenv-edit", "lines", "--json"], "lines"),
        (vec!["dotenv-edit", "keys", "A", "B"], "keys"),
        (vec!["dotenv-edit", "get", "A"], "get"),
        (vec!["dotenv-edit", "options"], "options"),
        (vec!["dotenv-edit", "configs"], "configs"),
    ] {
        let cli = Cli::try_parse_from(&args).unwrap();
        let name = match cli.command {
            Some(Command::Show) => "show",
            Some(Command::Lines(_)) => "lines",
            Some(Command::Keys(_)) => "keys",
            Some(Command::Get(_)) => "get",
            Some(Command::Options) => "options",
            Some(Command::Configs) => "configs",
            _ => "other",
        };
        assert_eq!(name, expected, "{args:?}");
    }
}

#[test]
fn cli_get_requires_key() {
    assert!(Cli::try_parse_from(["dotenv-edit", "get"]).is_err());
}

#[test]
fn cli_delete_requires_key() {
    assert!(Cli::try_parse_from(["dotenv-edit", "delete"]).is_err());
}

#[test]
fn cli_comment_accepts_empty_text() {
    let cli = Cli::try_parse_from(["dotenv-edit", "comment", ""]).unwrap();
    let Some(Command::Comment(args)) = cli.command else {
        panic!("expected comment command");
    };
    assert_eq!(args.text, "");
}

// =============================================================================
// Configuration layering
// =============================================================================

#[test]
fn config_file_then_cli_override() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("dotenv-editor.toml");
    std::fs::write(&file, "path = \"from-file.env\"\n[log]\nlevel = 1\n").unwrap();

    let cli = Cli::try_parse_from([
        "dotenv-edit",
        "--config",
        file.to_str().unwrap(),
        "--file",
        "from-cli.env",
        "show",
    ])
    .unwrap();

    let mut loader = Config::builder();
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    for (key, value) in cli.global.to_config_overrides() {
        loader = loader.set(key, value).unwrap();
    }
    let config = loader.build().unwrap().config;

    assert_eq!(config.path, PathBuf::from("from-cli.env"));
    assert_eq!(config.log.level, LogLevel::ERROR);
}

#[test]
fn config_log_level_override_from_cli() {
    let cli = Cli::try_parse_from(["dotenv-edit", "-l", "5", "show"]).unwrap();

    let mut loader = Config::builder();
    for (key, value) in cli.global.to_config_overrides() {
        loader = loader.set(key, value).unwrap();
    }
    let config = loader.build().unwrap().config;

    assert_eq!(config.path, PathBuf::from(".env"));
    assert_eq!(config.log.level, LogLevel::TRACE);
}
