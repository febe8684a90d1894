// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                DotenvError (~32 bytes)
//!                       |
//!   +--------+--------+--------+--------+--------+
//!   |        |        |        |        |        |
//!   v        v        v        v        v        v
//! Invalid  KeyNot   Unable   Unable   Invalid  Pattern
//!   Key    Found    Read     Write    Value
//!
//! Read/Write carry the path plus an optional boxed io::Error.
//!
//! ConfigError   InvalidValue, NotFound   (settings, log levels)
//! ```
//!
//! Library operations return [`DotenvResult`]; the application layer
//! (config loading, CLI commands) uses [`Result`] from `anyhow`.

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DotenvError`].
pub type DotenvResult<T> = std::result::Result<T, DotenvError>;

/// Errors raised by the formatter, reader, writer and editor.
///
/// Payloads are boxed to keep this enum at ~32 bytes on the stack.
#[derive(Debug, Error)]
pub enum DotenvError {
    /// Key is empty (or unusable) after normalization.
    #[error("invalid key: '{0}'")]
    InvalidKey(Box<str>),

    /// Requested key is absent from the current key map.
    #[error("requested key not found: '{0}'")]
    KeyNotFound(Box<str>),

    /// File is missing, not a regular file, or not readable.
    #[error("unable to read the file at {path}")]
    UnableReadFile {
        path: Box<str>,
        #[source]
        source: Option<Box<std::io::Error>>,
    },

    /// File (or its parent directory, for new files) is not writable.
    #[error("unable to write to the file at {path}")]
    UnableWriteFile {
        path: Box<str>,
        #[source]
        source: Option<Box<std::io::Error>>,
    },

    /// Value or comment cannot be stored on a single line.
    #[error("invalid value for '{}': {}", .0.key, .0.message)]
    InvalidValue(Box<InvalidValueError>),

    /// The line pattern for a key failed to compile.
    #[error("failed to build line pattern for '{key}': {source}")]
    Pattern {
        key: Box<str>,
        #[source]
        source: Box<regex::Error>,
    },
}

/// Context for [`DotenvError::InvalidValue`].
#[derive(Debug)]
pub struct InvalidValueError {
    pub key: String,
    pub message: String,
}

impl DotenvError {
    /// Build an [`DotenvError::InvalidKey`] for the raw key as supplied.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into().into_boxed_str())
    }

    /// Build a [`DotenvError::KeyNotFound`].
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into().into_boxed_str())
    }

    /// Build a [`DotenvError::UnableReadFile`] for `path`.
    pub fn unable_read(path: &Path, source: Option<std::io::Error>) -> Self {
        Self::UnableReadFile {
            path: path.display().to_string().into_boxed_str(),
            source: source.map(Box::new),
        }
    }

    /// Build a [`DotenvError::UnableWriteFile`] for `path`.
    pub fn unable_write(path: &Path, source: Option<std::io::Error>) -> Self {
        Self::UnableWriteFile {
            path: path.display().to_string().into_boxed_str(),
            source: source.map(Box::new),
        }
    }

    /// Build a [`DotenvError::InvalidValue`].
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue(Box::new(InvalidValueError {
            key: key.into(),
            message: message.into(),
        }))
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests;
