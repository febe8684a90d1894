// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use crate::config::Config;
use crate::config::loader::ConfigSource;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display the configuration layers that were merged.
pub fn run_configs_command(sources: &[ConfigSource]) {
    if sources.is_empty() {
        println!("No configuration sources loaded, using defaults");
    } else {
        for line in format_sources(sources) {
            println!("{line}");
        }
    }
}

/// Number sources in merge order, lowest priority first.
#[must_use]
pub fn format_sources(sources: &[ConfigSource]) -> Vec<String> {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| format!("{}. {source}", i + 1))
        .collect()
}
