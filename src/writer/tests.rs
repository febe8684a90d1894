// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use tempfile::TempDir;

use super::DotenvWriter;
use crate::error::DotenvError;
use crate::formatter::{ParsedLine, parse_line};

fn writer_with(content: &str) -> DotenvWriter {
    let mut writer = DotenvWriter::new();
    writer.set_buffer(Some(content));
    writer
}

// =============================================================================
// Buffer lifecycle
// =============================================================================

#[test]
fn test_set_buffer_trims_and_terminates() {
    assert_eq!(writer_with("A=1\n\n\n   ").buffer(), "A=1\n");
    assert_eq!(writer_with("A=1").buffer(), "A=1\n");
}

#[test]
fn test_set_buffer_normalizes_line_endings() {
    assert_eq!(writer_with("A=1\r\nB=2\rC=3\r\n").buffer(), "A=1\nB=2\nC=3\n");
}

#[test]
fn test_set_buffer_empty_or_none_clears() {
    let mut writer = writer_with("A=1");
    writer.set_buffer(Some(""));
    assert_eq!(writer.buffer(), "");

    writer.set_buffer(Some("B=2"));
    writer.set_buffer(None);
    assert_eq!(writer.buffer(), "");
}

// =============================================================================
// Appending
// =============================================================================

#[test]
fn test_append_chain() {
    let mut writer = DotenvWriter::new();
    writer
        .append_comment_line("Application")
        .unwrap()
        .append_setter("APP_NAME", Some("Demo App"), None, false)
        .unwrap()
        .append_empty_line()
        .append_setter("APP_KEY", None, Some("generated"), true)
        .unwrap();

    insta::assert_snapshot!(writer.buffer(), @r#"
    # Application
    APP_NAME="Demo App"

    export APP_KEY= # generated
    "#);
}

#[test]
fn test_append_setter_reads_back() {
    let mut writer = DotenvWriter::new();
    writer
        .append_setter("TOKEN", Some("a b#c"), None, false)
        .unwrap();

    let lines: Vec<&str> = writer.buffer().lines().collect();
    assert_eq!(lines.len(), 1);
    let ParsedLine::Setter(setter) = parse_line(lines[0]) else {
        panic!("expected setter line, got {:?}", lines[0]);
    };
    assert_eq!(setter.key, "TOKEN");
    assert_eq!(setter.value, "a b#c");
}

#[test]
fn test_append_rejects_multiline_value() {
    let mut writer = writer_with("A=1");
    let err = writer
        .append_setter("B", Some("x\ny"), None, false)
        .unwrap_err();
    assert!(matches!(err, DotenvError::InvalidValue(_)));
    assert_eq!(writer.buffer(), "A=1\n");
}

// =============================================================================
// Updating
// =============================================================================

#[test]
fn test_update_replaces_only_that_line() {
    let mut writer = writer_with("# db\nDB_HOST=localhost\nDB_PORT=5432\n");
    writer
        .update_setter("DB_HOST", Some("db.internal"), None, false)
        .unwrap();
    assert_eq!(writer.buffer(), "# db\nDB_HOST=db.internal\nDB_PORT=5432\n");
}

#[test]
fn test_update_matches_export_and_whitespace() {
    let mut writer = writer_with("  export\tDB_HOST =  old # c\nOTHER=1\n");
    writer
        .update_setter("DB_HOST", Some("new"), Some("c"), true)
        .unwrap();
    assert_eq!(writer.buffer(), "export DB_HOST=new # c\nOTHER=1\n");
}

#[test]
fn test_update_first_match_only() {
    let mut writer = writer_with("FOO=1\nBAR=2\nFOO=3\n");
    writer.update_setter("FOO", Some("9"), None, false).unwrap();
    assert_eq!(writer.buffer(), "FOO=9\nBAR=2\nFOO=3\n");
}

#[test]
fn test_update_does_not_touch_prefixed_keys_or_comments() {
    let original = "# FOO=commented\nFOOBAR=1\nMY_FOO=2\n";
    let mut writer = writer_with(original);
    writer.update_setter("FOO", Some("x"), None, false).unwrap();
    assert_eq!(writer.buffer(), original);
}

#[test]
fn test_update_absent_key_is_noop() {
    let mut writer = writer_with("A=1\n");
    writer.update_setter("B", Some("2"), None, false).unwrap();
    assert_eq!(writer.buffer(), "A=1\n");
}

#[test]
fn test_update_value_with_dollar_is_literal() {
    let mut writer = writer_with("PRICE=1\n");
    writer
        .update_setter("PRICE", Some("$1.00"), None, false)
        .unwrap();
    assert_eq!(writer.buffer(), "PRICE=$1.00\n");
}

#[test]
fn test_update_keeps_line_count() {
    let mut writer = writer_with("A=1\n\n# x\nB=2\nC=3\n");
    let before: Vec<String> = writer.buffer().lines().map(String::from).collect();

    writer.update_setter("B", Some("two words"), None, false).unwrap();
    let after: Vec<&str> = writer.buffer().lines().collect();

    assert_eq!(before.len(), after.len());
    for (idx, (old, new)) in before.iter().zip(&after).enumerate() {
        if idx == 3 {
            assert_eq!(*new, "B=\"two words\"");
        } else {
            assert_eq!(old, new);
        }
    }
}

// =============================================================================
// Deleting
// =============================================================================

#[test]
fn test_delete_removes_every_match() {
    let mut writer = writer_with("FOO=1\nBAR=2\n  export FOO=3\nBAZ=4\n");
    writer.delete_setter("FOO").unwrap();
    assert_eq!(writer.buffer(), "BAR=2\nBAZ=4\n");
}

#[test]
fn test_delete_absent_key_is_noop() {
    let mut writer = writer_with("A=1\n# B=2\n");
    writer.delete_setter("B").unwrap();
    assert_eq!(writer.buffer(), "A=1\n# B=2\n");
}

#[test]
fn test_delete_only_line_empties_buffer() {
    let mut writer = DotenvWriter::new();
    writer.append_setter("A", Some("1"), None, false).unwrap();
    writer.delete_setter("A").unwrap();
    assert_eq!(writer.buffer(), "");
}

// =============================================================================
// Saving
// =============================================================================

#[test]
fn test_save_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");

    let mut writer = DotenvWriter::new();
    writer.append_setter("NAME", Some("value"), None, false).unwrap();
    writer.save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "NAME=value\n");
}

#[test]
fn test_save_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "A=1\nB=2\nC=3\n").unwrap();

    writer_with("A=1").save(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "A=1\n");
}

#[test]
fn test_save_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join(".env");

    let err = writer_with("A=1").save(&path).unwrap_err();
    assert!(matches!(err, DotenvError::UnableWriteFile { .. }));
    assert!(!path.exists());
}

#[test]
fn test_save_to_directory_fails() {
    let dir = TempDir::new().unwrap();
    let err = writer_with("A=1").save(dir.path()).unwrap_err();
    assert!(matches!(err, DotenvError::UnableWriteFile { .. }));
}

#[test]
fn test_save_read_only_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "A=1\n").unwrap();

    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(&path, perms).unwrap();

    let err = writer_with("A=2").save(&path).unwrap_err();
    assert!(matches!(err, DotenvError::UnableWriteFile { source: None, .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "A=1\n");
}
