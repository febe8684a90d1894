// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("dotenv-editor.toml")   skipped if absent
//!   .add_toml_file(--config)                         must exist
//!   .add_toml_str(..)                                inline TOML
//!   .with_env_prefix("DOTENV_EDITOR")                DOTENV_EDITOR_*
//!   .set("path", ..)                                 CLI flags
//!        |
//!        v
//!    build() --> LoadedConfig { config, sources }
//! ```
//!
//! `sources` lists only what was merged, in merge order, so `configs` can
//! report it without loading twice.

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use tracing::debug;

use super::Config;
use crate::error::Result;

/// One layer that contributed to the merged configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// TOML file given explicitly.
    File(PathBuf),
    /// Optional TOML file that was present.
    OptionalFile(PathBuf),
    /// TOML passed as a string.
    Inline,
    /// Environment variables carrying the prefix.
    Environment(String),
    /// Programmatic override of one key.
    Override(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[inline] <string>"),
            Self::Environment(prefix) => write!(f, "[env] {prefix}_*"),
            Self::Override(key) => write!(f, "[override] {key}"),
        }
    }
}

/// Result of [`ConfigLoader::build`].
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Merged layers, lowest priority first.
    pub sources: Vec<ConfigSource>,
}

/// Collects configuration layers; later layers win.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Add a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        self.add_file(path, true, ConfigSource::File(path.to_path_buf()))
    }

    /// Add a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        if !path.is_file() {
            debug!(path = %path.display(), "optional config file not found");
            return self;
        }
        self.add_file(path, false, ConfigSource::OptionalFile(path.to_path_buf()))
    }

    fn add_file(mut self, path: &Path, required: bool, source: ConfigSource) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self.sources.push(source);
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Read `PREFIX_KEY` variables (`PREFIX_LOG_LEVEL` → `log.level`) after
    /// all files.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Override one dotted key, above every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be addressed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override for '{key}': {e}"))?;
        self.sources.push(ConfigSource::Override(key.to_string()));
        Ok(self)
    }

    /// Merge all layers, deserialize and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, the merged values do not fit [`Config`], or validation fails.
    pub fn build(self) -> Result<LoadedConfig> {
        let Self {
            mut builder,
            env_prefix,
            sources,
        } = self;

        // The config crate applies overrides above every source, whatever
        // the call order.
        let (mut layers, overrides): (Vec<_>, Vec<_>) = sources
            .into_iter()
            .partition(|source| !matches!(source, ConfigSource::Override(_)));

        if let Some(prefix) = env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(&prefix)
                    .separator("_")
                    .try_parsing(true),
            );
            if env_has_prefix(&prefix) {
                layers.push(ConfigSource::Environment(prefix));
            }
        }
        layers.extend(overrides);

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(layers = layers.len(), path = %config.path.display(), "configuration loaded");

        Ok(LoadedConfig {
            config,
            sources: layers,
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn env_has_prefix(prefix: &str) -> bool {
    let wanted = format!("{}_", prefix.to_ascii_uppercase());
    std::env::vars_os().any(|(name, _)| {
        name.to_str()
            .is_some_and(|name| name.to_ascii_uppercase().starts_with(&wanted))
    })
}
