// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tempfile::TempDir;

use crate::cli::edit::{Assignment, CommentArgs, DeleteArgs, GetArgs, SetArgs};
use crate::cmd::edit::{
    run_comment_command, run_delete_command, run_empty_command, run_set_command, setter_entries,
};
use crate::cmd::config::format_sources;
use crate::cmd::read::{format_keys, format_lines, run_get_command};
use crate::config::loader::ConfigLoader;
use crate::config::Config;
use crate::editor::DotenvEditor;
use crate::error::DotenvError;

fn config_for(dir: &TempDir, content: Option<&str>) -> Config {
    let path = dir.path().join(".env");
    if let Some(content) = content {
        std::fs::write(&path, content).unwrap();
    }
    Config {
        path,
        ..Config::default()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

fn assignment(key: &str, value: &str) -> Assignment {
    Assignment {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_format_keys() {
    let dir = TempDir::new().unwrap();
    let config = config_for(
        &dir,
        Some("A=1\n\n\n\n\n\n\n\n\nexport B=two # note\n# tail\nC=\"x y\"\n"),
    );
    let keys = DotenvEditor::open(&config.path).unwrap().keys::<&str>(&[]).unwrap();

    assert_eq!(
        format_keys(&keys),
        vec![" 1: A=1", "10: export B=two # note", "12: C=x y"]
    );
}

#[test]
fn test_format_lines() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, Some("# header\n\nKEY=value\nnot a setter\n"));
    let lines = DotenvEditor::open(&config.path).unwrap().lines().unwrap();

    insta::assert_snapshot!(format_lines(&lines).join("\n"), @r"
    1 comment    # header
    2 empty
    3 setter     KEY=value
    4 unparsable not a setter
    ");
}

#[test]
fn test_setter_entries_share_flags() {
    let args = SetArgs {
        assignments: vec![assignment("a", "1"), assignment("b", "2")],
        comment: Some("managed".to_string()),
        export: true,
    };

    let entries = setter_entries(&args);
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.export));
    assert!(entries.iter().all(|e| e.comment.as_deref() == Some("managed")));
    assert_eq!(entries[1].key, "b");
    assert_eq!(entries[1].value.as_deref(), Some("2"));
}

#[test]
fn test_set_command_creates_and_updates() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, None);

    let args = SetArgs {
        assignments: vec![assignment("app.name", "My App")],
        comment: None,
        export: false,
    };
    run_set_command(&args, &config).unwrap();
    assert_eq!(read(&config.path), "APPNAME=\"My App\"\n");

    let args = SetArgs {
        assignments: vec![assignment("APPNAME", "other")],
        comment: Some("renamed".to_string()),
        export: false,
    };
    run_set_command(&args, &config).unwrap();
    assert_eq!(read(&config.path), "APPNAME=other # renamed\n");
}

#[test]
fn test_set_command_rejects_invalid_key() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, Some("A=1\n"));

    let args = SetArgs {
        assignments: vec![assignment("!!", "x")],
        comment: None,
        export: false,
    };
    let err = run_set_command(&args, &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DotenvError>(),
        Some(DotenvError::InvalidKey(_))
    ));
    assert_eq!(read(&config.path), "A=1\n");
}

#[test]
fn test_delete_comment_and_empty_commands() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, Some("A=1\nB=2\nA=3\n"));

    run_delete_command(
        &DeleteArgs {
            keys: vec!["A".to_string(), "MISSING".to_string()],
        },
        &config,
    )
    .unwrap();
    run_comment_command(
        &CommentArgs {
            text: "trailer".to_string(),
        },
        &config,
    )
    .unwrap();
    run_empty_command(&config).unwrap();

    assert_eq!(read(&config.path), "B=2\n# trailer\n\n");
}

#[test]
fn test_get_command_missing_key() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, Some("A=1\n"));

    assert!(run_get_command(&GetArgs { key: "A".to_string() }, &config).is_ok());

    let err = run_get_command(
        &GetArgs {
            key: "B".to_string(),
        },
        &config,
    )
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"requested key not found: 'B'");
}

#[test]
fn test_format_sources_lists_merged_layers() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("dotenv-editor.toml");
    std::fs::write(&file, "path = \"app.env\"\n").unwrap();

    let loaded = ConfigLoader::new()
        .add_toml_file_optional(&file)
        .add_toml_file_optional(dir.path().join("missing.toml"))
        .set("log.level", "4")
        .unwrap()
        .build()
        .unwrap();

    let lines = format_sources(&loaded.sources);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("1. [optional] {}", file.display()));
    assert_eq!(lines[1], "2. [override] log.level");
    assert!(format_sources(&[]).is_empty());
}
