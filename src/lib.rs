// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          read / edit / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          editor           |
//!              |  load -> mutate -> save   |
//!              '--+-----------------+------'
//!                 |                 |
//!                 v                 v
//!              reader             writer
//!           lines / keys     buffer + regex edits
//!                 |                 |
//!                 +--------+--------+
//!                          v
//!                      formatter
//!               parse_line / format_key
//!
//!   +-----------------------------------------+
//!   |  config   TOML + env, target path       |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod editor;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod reader;
pub mod utility;
pub mod writer;
