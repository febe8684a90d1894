// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   read:   get, keys, lines, show
//!   edit:   set, delete, comment, empty
//!   config: options, configs
//! ```

pub mod config;
pub mod edit;
pub mod read;

#[cfg(test)]
mod tests;
