// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()             BOM sniff --> UTF-8
//!   split_lines()             CR | LF | CRLF line iterator
//!   normalize_line_endings()  CR/CRLF --> LF
//! ```

pub mod encoding;
