// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read side of the editor.
//!
//! ```text
//! DotenvReader::load(path)          no disk access
//!        |
//!   content()  --> raw text          (UnableReadFile)
//!   lines()    --> Vec<LineEntry>    parse_line per line
//!   keys()     --> BTreeMap<key, KeyRecord>  setters only, last wins
//! ```
//!
//! Nothing is cached: every call re-opens the file, so changes made by
//! other processes between calls are observed.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{trace, warn};

use crate::error::{DotenvError, DotenvResult};
use crate::formatter::{ParsedLine, parse_line};
use crate::utility::encoding::{decode_text, split_lines};

/// One classified line of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineEntry {
    /// 1-based line number.
    pub line: usize,
    pub raw_data: String,
    pub parsed_data: ParsedLine,
}

/// Latest metadata for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRecord {
    /// 1-based line number of the setter that produced this record.
    pub line: usize,
    pub export: bool,
    pub value: String,
    pub comment: Option<String>,
}

/// Key name → latest [`KeyRecord`].
pub type KeyMap = BTreeMap<String, KeyRecord>;

/// Reads and classifies a `.env` file on demand.
#[derive(Debug, Default)]
pub struct DotenvReader {
    path: Option<PathBuf>,
}

impl DotenvReader {
    #[must_use]
    pub const fn new() -> Self {
        Self { path: None }
    }

    /// Target `path` for subsequent reads; `None` clears the target.
    pub fn load(&mut self, path: Option<PathBuf>) -> &mut Self {
        self.path = path;
        self
    }

    /// The loaded path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Full file contents.
    ///
    /// # Errors
    ///
    /// Returns [`DotenvError::UnableReadFile`] if no path is loaded, or the
    /// path is missing, not a regular file, or not readable.
    pub fn content(&self) -> DotenvResult<String> {
        let path = self.readable_path()?;
        let bytes = std::fs::read(path).map_err(|e| DotenvError::unable_read(path, Some(e)))?;
        Ok(decode_text(&bytes).into_owned())
    }

    /// Every line of the file, classified.
    ///
    /// # Errors
    ///
    /// See [`DotenvReader::content`].
    pub fn lines(&self) -> DotenvResult<Vec<LineEntry>> {
        let content = self.content()?;

        let entries = split_lines(&content)
            .enumerate()
            .map(|(idx, raw)| {
                let parsed = parse_line(raw);
                trace!(line = idx + 1, ?parsed, "parsed line");
                LineEntry {
                    line: idx + 1,
                    raw_data: raw.to_string(),
                    parsed_data: parsed,
                }
            })
            .collect();

        Ok(entries)
    }

    /// Setter lines keyed by name.
    ///
    /// When a key appears more than once the later line wins; the file
    /// itself still contains every occurrence.
    ///
    /// # Errors
    ///
    /// See [`DotenvReader::content`].
    pub fn keys(&self) -> DotenvResult<KeyMap> {
        let content = self.content()?;
        let mut keys = KeyMap::new();

        for (idx, raw) in split_lines(&content).enumerate() {
            let ParsedLine::Setter(setter) = parse_line(raw) else {
                continue;
            };

            let record = KeyRecord {
                line: idx + 1,
                export: setter.export,
                value: setter.value,
                comment: setter.comment,
            };

            match keys.entry(setter.key) {
                Entry::Occupied(mut entry) => {
                    warn!(
                        key = %entry.key(),
                        line = record.line,
                        previous_line = entry.get().line,
                        "duplicate key, later line wins"
                    );
                    entry.insert(record);
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }

        Ok(keys)
    }

    fn readable_path(&self) -> DotenvResult<&Path> {
        let Some(path) = self.path.as_deref() else {
            return Err(DotenvError::unable_read(Path::new(""), None));
        };

        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(path),
            Ok(_) => Err(DotenvError::unable_read(path, None)),
            Err(e) => Err(DotenvError::unable_read(path, Some(e))),
        }
    }
}
