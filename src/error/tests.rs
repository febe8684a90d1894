// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error as _;
use std::path::Path;

use super::{DotenvError, DotenvResult};

#[test]
fn test_invalid_key_display() {
    let err = DotenvError::invalid_key("#!");
    insta::assert_snapshot!(err.to_string(), @"invalid key: '#!'");
}

#[test]
fn test_key_not_found_display() {
    let err = DotenvError::key_not_found("MISSING");
    insta::assert_snapshot!(err.to_string(), @"requested key not found: 'MISSING'");
}

#[test]
fn test_invalid_value_display() {
    let err = DotenvError::invalid_value("FOO", "line breaks are not allowed");
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'FOO': line breaks are not allowed"
    );
}

#[test]
fn test_unable_read_keeps_io_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = DotenvError::unable_read(Path::new("/tmp/missing.env"), Some(io));

    assert_eq!(err.to_string(), "unable to read the file at /tmp/missing.env");
    let source = err.source().expect("io error should be the source");
    assert_eq!(source.to_string(), "gone");
}

#[test]
fn test_unable_write_without_source() {
    let err = DotenvError::unable_write(Path::new("/readonly/.env"), None);
    assert_eq!(err.to_string(), "unable to write to the file at /readonly/.env");
    assert!(err.source().is_none());
}

#[test]
fn test_dotenv_error_size() {
    // Box<str> path (16) + Option<Box<io::Error>> (8) + discriminant
    let size = std::mem::size_of::<DotenvError>();
    assert!(size <= 32, "DotenvError is {size} bytes, expected <= 32");
}

#[test]
fn test_dotenv_result_size() {
    let size = std::mem::size_of::<DotenvResult<()>>();
    assert!(size <= 32, "DotenvResult<()> is {size} bytes, expected <= 32");
}

#[test]
fn test_config_error_display() {
    let err = super::ConfigError::InvalidValue {
        section: "log".to_string(),
        key: "level".to_string(),
        message: "log level must be 0-5, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'level' in section '[log]': log level must be 0-5, got 9"
    );
}
