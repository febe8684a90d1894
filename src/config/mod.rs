// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for dotenv-editor.
//!
//! The target `.env` path is injected through configuration instead of being
//! discovered from the filesystem.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults                path = ".env"
//! 2. dotenv-editor.toml      (cwd, optional)
//! 3. --config FILE           (repeatable)
//! 4. DOTENV_EDITOR_* env vars
//! 5. CLI overrides           (--file, --log-level, --log-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DOTENV_EDITOR_PATH=/srv/app/.env  → path = "/srv/app/.env"
//! DOTENV_EDITOR_LOG_LEVEL=4         → log.level = 4
//! DOTENV_EDITOR_LOG_FILE=edit.log   → log.file = "edit.log"
//! ```
//!
//! # Example
//!
//! ```toml
//! path = "deploy/.env.production"
//!
//! [log]
//! level = 3
//! file = "logs/dotenv-edit.log"
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;

use loader::ConfigLoader;

/// File name of the optional configuration file looked up in the current
/// directory.
pub const DEFAULT_CONFIG_FILE: &str = "dotenv-editor.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DOTENV_EDITOR";

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `.env` file edited when no explicit path is given.
    pub path: PathBuf,
    /// Logging options.
    pub log: LogSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".env"),
            log: LogSection::default(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// Console verbosity (0-5).
    pub level: LogLevel,
    /// Optional log file, written at debug level or the console level,
    /// whichever is more verbose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dotenv_editor::config::Config;
    ///
    /// let loaded = Config::builder()
    ///     .add_toml_file_optional("dotenv-editor.toml")
    ///     .with_env_prefix("DOTENV_EDITOR")
    ///     .build()?;
    /// println!("editing {}", loaded.config.path.display());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        Ok(Self::builder().add_toml_file(path).build()?.config)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::builder().add_toml_str(content).build()?.config)
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `path` is empty.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "root".to_string(),
                key: "path".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("path", self.path.display().to_string());
        options.insert("log.level", self.log.level.as_u8().to_string());
        options.insert(
            "log.file",
            self.log
                .file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
