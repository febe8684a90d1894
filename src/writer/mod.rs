// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Write side of the editor: an in-memory buffer flushed on `save`.
//!
//! ```text
//! set_buffer(content)   trim end, normalize to LF, one trailing LF
//!        |
//!   append_empty_line / append_comment_line / append_setter
//!   update_setter(key)  replace FIRST matching line
//!   delete_setter(key)  remove EVERY matching line
//!        |
//!   save(path)          truncate + write (UnableWriteFile)
//! ```
//!
//! Setter lines are located with a line-anchored pattern:
//!
//! ```text
//! ^[ \t]*(export[ \t]+)?KEY[ \t]*=.*$
//! ```
//!
//! Note the asymmetry: `update_setter` only rewrites the first match while
//! `delete_setter` removes all of them. With duplicate keys an update
//! therefore leaves later duplicates (including the one the reader reports)
//! untouched. This mirrors long-standing behavior and is kept on purpose,
//! though it is most likely an inconsistency.

use std::path::Path;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::error::{DotenvError, DotenvResult};
use crate::formatter::{format_comment_line, format_setter_line};
use crate::utility::encoding::{LINE_ENDING, normalize_line_endings};

/// Owns the text buffer under construction.
#[derive(Debug, Default)]
pub struct DotenvWriter {
    buffer: String,
}

impl DotenvWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Replace the buffer.
    ///
    /// Non-empty content has trailing whitespace trimmed and gets exactly
    /// one trailing line terminator; `None` or `""` clears the buffer.
    pub fn set_buffer(&mut self, content: Option<&str>) -> &mut Self {
        self.buffer = match content {
            Some(text) if !text.is_empty() => {
                let mut buffer = normalize_line_endings(text.trim_end()).into_owned();
                buffer.push_str(LINE_ENDING);
                buffer
            }
            _ => String::new(),
        };
        self
    }

    /// Current buffer, verbatim.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn append_empty_line(&mut self) -> &mut Self {
        self.append_line("")
    }

    /// Append `# text`.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::InvalidValue`] if `text` spans several lines.
    pub fn append_comment_line(&mut self, text: &str) -> DotenvResult<&mut Self> {
        let line = format_comment_line(text)?;
        Ok(self.append_line(&line))
    }

    /// Append one setter line.
    ///
    /// # Errors
    ///
    /// See [`format_setter_line`].
    pub fn append_setter(
        &mut self,
        key: &str,
        value: Option<&str>,
        comment: Option<&str>,
        export: bool,
    ) -> DotenvResult<&mut Self> {
        let line = format_setter_line(key, value, comment, export)?;
        Ok(self.append_line(&line))
    }

    /// Rewrite the first setter line for `key`.
    ///
    /// Every other line is left untouched. If no line matches, the buffer is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// See [`format_setter_line`].
    pub fn update_setter(
        &mut self,
        key: &str,
        value: Option<&str>,
        comment: Option<&str>,
        export: bool,
    ) -> DotenvResult<&mut Self> {
        let line = format_setter_line(key, value, comment, export)?;
        let pattern = setter_pattern(key, "")?;

        let replaced = pattern.is_match(&self.buffer);
        if replaced {
            self.buffer = pattern
                .replace(&self.buffer, NoExpand(&line))
                .into_owned();
        }
        debug!(key, replaced, "update setter");

        Ok(self)
    }

    /// Remove every setter line for `key`, terminators included.
    ///
    /// Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::Pattern`] if the line pattern cannot be built.
    pub fn delete_setter(&mut self, key: &str) -> DotenvResult<&mut Self> {
        let pattern = setter_pattern(key, r"(?:\n|\z)")?;

        let removed = pattern.find_iter(&self.buffer).count();
        if removed > 0 {
            self.buffer = pattern.replace_all(&self.buffer, "").into_owned();
        }
        debug!(key, removed, "delete setter");

        Ok(self)
    }

    /// Write the whole buffer to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableWriteFile`] if `path` is an existing
    /// read-only file, if it does not exist and its parent directory is
    /// missing or read-only, or if the write itself fails.
    pub fn save(&self, path: &Path) -> DotenvResult<()> {
        ensure_writable(path)?;
        std::fs::write(path, &self.buffer).map_err(|e| DotenvError::unable_write(path, Some(e)))?;
        debug!(path = %path.display(), bytes = self.buffer.len(), "saved buffer");
        Ok(())
    }

    fn append_line(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self.buffer.push_str(LINE_ENDING);
        self
    }
}

/// Line-anchored pattern for a setter of `key`, followed by `suffix`.
fn setter_pattern(key: &str, suffix: &str) -> DotenvResult<Regex> {
    let pattern = format!(
        r"(?m)^[ \t]*(?:export[ \t]+)?{}[ \t]*=.*{suffix}",
        regex::escape(key)
    );
    Regex::new(&pattern).map_err(|e| DotenvError::Pattern {
        key: key.into(),
        source: Box::new(e),
    })
}

/// Existing files must not be read-only; new files need a writable parent.
fn ensure_writable(path: &Path) -> DotenvResult<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            if meta.permissions().readonly() {
                return Err(DotenvError::unable_write(path, None));
            }
            Ok(())
        }
        _ => {
            let parent = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            match std::fs::metadata(parent) {
                Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => Ok(()),
                Ok(_) => Err(DotenvError::unable_write(path, None)),
                Err(e) => Err(DotenvError::unable_write(path, Some(e))),
            }
        }
    }
}

#[cfg(test)]
mod tests;
