// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Load → read → mutate → save orchestration.
//!
//! ```text
//! DotenvEditor::load(path?)
//!   reset reader + writer
//!   path = given | configured default
//!   file exists? --> writer.set_buffer(content)
//!        |
//! set_keys(entries)                         delete_keys(keys)
//!   format_key(key)                           writer.delete_setter
//!   file missing or key absent --> append
//!   otherwise                  --> update (keep old comment if none given)
//!        |
//! save() --> writer.save(path)
//! ```
//!
//! Reads (`keys`, `value`, `lines`) always reflect the file on disk, never
//! the unsaved buffer.
//!
//! # Example
//!
//! ```no_run
//! use dotenv_editor::editor::{DotenvEditor, SetterEntry};
//!
//! let mut editor = DotenvEditor::new(".env");
//! editor
//!     .load(None)?
//!     .set_key(("app_name", "Demo"))?
//!     .set_key(
//!         SetterEntry::builder()
//!             .key("db_port")
//!             .with_value("5432")
//!             .with_comment("primary")
//!             .build(),
//!     )?
//!     .delete_key("legacy_flag")?
//!     .save()?;
//! # Ok::<(), dotenv_editor::error::DotenvError>(())
//! ```

use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DotenvError, DotenvResult};
use crate::formatter::format_key;
use crate::reader::{DotenvReader, KeyMap, LineEntry};
use crate::writer::DotenvWriter;

/// One key to set.
///
/// Bare `(key, value)` pairs convert into an entry without comment or
/// export marker.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SetterEntry {
    /// Raw key; normalized with [`format_key`] before use.
    #[builder(into)]
    pub key: String,
    #[builder(into, setters(name = with_value))]
    pub value: Option<String>,
    /// `None` keeps the comment already stored for an existing key.
    #[builder(into, setters(name = with_comment))]
    pub comment: Option<String>,
    #[builder(setters(name = with_export), default = false)]
    pub export: bool,
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for SetterEntry {
    fn from((key, value): (K, V)) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            comment: None,
            export: false,
        }
    }
}

/// Edits one `.env` file at a time.
#[derive(Debug)]
pub struct DotenvEditor {
    default_path: PathBuf,
    /// Holds the active path once loaded.
    reader: DotenvReader,
    writer: DotenvWriter,
}

impl DotenvEditor {
    /// Create an editor whose `load(None)` targets `default_path`.
    ///
    /// Nothing is loaded yet.
    #[must_use]
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
            reader: DotenvReader::new(),
            writer: DotenvWriter::new(),
        }
    }

    /// Create an editor targeting the configured `path`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.path)
    }

    /// Create an editor and load `path` right away.
    ///
    /// # Errors
    ///
    /// See [`DotenvEditor::load`].
    pub fn open(path: impl Into<PathBuf>) -> DotenvResult<Self> {
        let mut editor = Self::new(path);
        editor.load(None)?;
        Ok(editor)
    }

    /// Start a fresh session on `path`, or on the default path when `None`.
    ///
    /// The buffer is seeded from the file only if it already exists;
    /// otherwise it starts empty and `save` creates the file.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableReadFile`] if the file exists but cannot
    /// be read.
    pub fn load(&mut self, path: Option<&Path>) -> DotenvResult<&mut Self> {
        self.reset();

        let path = path.map_or_else(|| self.default_path.clone(), Path::to_path_buf);
        let exists = path.exists();
        self.reader.load(Some(path));

        if exists {
            let content = self.reader.content()?;
            self.writer.set_buffer(Some(&content));
        }
        debug!(path = %self.active_path().display(), exists, "loaded dotenv file");

        Ok(self)
    }

    fn reset(&mut self) {
        self.reader.load(None);
        self.writer.set_buffer(None);
    }

    /// The active path, or the default one before the first `load`.
    #[must_use]
    pub fn active_path(&self) -> &Path {
        self.reader.path().unwrap_or(&self.default_path)
    }

    fn file_exists(&self) -> bool {
        self.reader.path().is_some_and(Path::is_file)
    }

    // --- Reading ---

    /// Raw file content.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableReadFile`] if the file cannot be read.
    pub fn content(&self) -> DotenvResult<String> {
        self.reader.content()
    }

    /// All lines of the file, classified.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableReadFile`] if the file cannot be read.
    pub fn lines(&self) -> DotenvResult<Vec<LineEntry>> {
        self.reader.lines()
    }

    /// Key records from the file; restricted to `filter` when it is not
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableReadFile`] if the file cannot be read.
    pub fn keys<S: AsRef<str>>(&self, filter: &[S]) -> DotenvResult<KeyMap> {
        let mut keys = self.reader.keys()?;
        if !filter.is_empty() {
            keys.retain(|key, _| filter.iter().any(|wanted| wanted.as_ref() == key.as_str()));
        }
        Ok(keys)
    }

    /// Whether `key` is set in the file.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableReadFile`] if the file cannot be read.
    pub fn key_exists(&self, key: &str) -> DotenvResult<bool> {
        Ok(self.reader.keys()?.contains_key(key))
    }

    /// Value stored for `key`.
    ///
    /// # Errors
    ///
    /// - [`DotenvError::KeyNotFound`] if the key is not in the file.
    /// - [`DotenvError::UnableReadFile`] if the file cannot be read.
    pub fn value(&self, key: &str) -> DotenvResult<String> {
        self.reader
            .keys()?
            .remove(key)
            .map(|record| record.value)
            .ok_or_else(|| DotenvError::key_not_found(key))
    }

    // --- Writing ---

    /// The unsaved buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        self.writer.buffer()
    }

    pub fn add_empty(&mut self) -> &mut Self {
        self.writer.append_empty_line();
        self
    }

    /// Append a `# text` line.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::InvalidValue`] if `text` spans several lines.
    pub fn add_comment(&mut self, text: &str) -> DotenvResult<&mut Self> {
        self.writer.append_comment_line(text)?;
        Ok(self)
    }

    /// Set several keys in order.
    ///
    /// A key is appended when the file does not exist yet or does not
    /// contain it, and updated in place otherwise. Updates without a comment
    /// keep the comment already stored for the key. Entries before a failing
    /// one stay applied.
    ///
    /// # Errors
    ///
    /// - [`DotenvError::InvalidKey`] if a key normalizes to nothing.
    /// - [`DotenvError::InvalidValue`] if a value or comment spans lines.
    /// - [`DotenvError::UnableReadFile`] if the existing file cannot be read.
    pub fn set_keys<I, E>(&mut self, entries: I) -> DotenvResult<&mut Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<SetterEntry>,
    {
        for entry in entries {
            self.apply_entry(entry.into())?;
        }
        Ok(self)
    }

    /// Set a single key. See [`DotenvEditor::set_keys`].
    ///
    /// # Errors
    ///
    /// See [`DotenvEditor::set_keys`].
    pub fn set_key(&mut self, entry: impl Into<SetterEntry>) -> DotenvResult<&mut Self> {
        self.set_keys([entry.into()])
    }

    fn apply_entry(&mut self, entry: SetterEntry) -> DotenvResult<()> {
        let key = format_key(&entry.key)?;
        let value = entry.value.as_deref();

        let existing = if self.file_exists() {
            self.reader.keys()?.remove(&key)
        } else {
            None
        };

        match existing {
            None => {
                debug!(key = %key, "key not in file, appending");
                self.writer
                    .append_setter(&key, value, entry.comment.as_deref(), entry.export)?;
            }
            Some(record) => {
                debug!(key = %key, line = record.line, "key in file, updating");
                let comment = entry.comment.or(record.comment);
                self.writer
                    .update_setter(&key, value, comment.as_deref(), entry.export)?;
            }
        }
        Ok(())
    }

    /// Delete every line for each key. Absent keys are ignored.
    ///
    /// Keys are matched as given, without normalization.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::Pattern`] if a key pattern cannot be built.
    pub fn delete_keys<S: AsRef<str>>(
        &mut self,
        keys: impl IntoIterator<Item = S>,
    ) -> DotenvResult<&mut Self> {
        for key in keys {
            self.writer.delete_setter(key.as_ref())?;
        }
        Ok(self)
    }

    /// Delete a single key. See [`DotenvEditor::delete_keys`].
    ///
    /// # Errors
    ///
    /// See [`DotenvEditor::delete_keys`].
    pub fn delete_key(&mut self, key: &str) -> DotenvResult<&mut Self> {
        self.delete_keys([key])
    }

    /// Write the buffer to the active path.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableWriteFile`] if the target is not writable.
    pub fn save(&mut self) -> DotenvResult<&mut Self> {
        let path = self.active_path().to_path_buf();
        self.writer.save(&path)?;
        info!(path = %path.display(), "saved dotenv file");
        Ok(self)
    }
}
