// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding and line splitting for `.env` content.
//!
//! ```text
//! file bytes --(BOM sniff)--> UTF-8 text --(CR | LF | CRLF)--> lines
//!                                  |
//!                                  +--(normalize)--> LF-only buffer
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::UTF_8;
use std::borrow::Cow;

/// Canonical line terminator used for every line written to a buffer.
pub const LINE_ENDING: &str = "\n";

/// Decodes raw file bytes into text.
///
/// A UTF-8 or UTF-16 (LE/BE) byte order mark selects the encoding and is
/// stripped; anything else is treated as UTF-8.
///
/// # Example
/// ```
/// use dotenv_editor::utility::encoding::decode_text;
///
/// let text = decode_text(b"\xEF\xBB\xBFFOO=1\n");
/// assert_eq!(text, "FOO=1\n");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _encoding, _had_errors) = UTF_8.decode(bytes);
    text
}

/// Splits text into lines, accepting `\n`, `\r\n` and a lone `\r` as
/// terminators.
///
/// Terminators are not part of the yielded lines. A trailing terminator does
/// not produce a final empty line, but blank lines in between are kept.
///
/// # Example
/// ```
/// use dotenv_editor::utility::encoding::split_lines;
///
/// let lines: Vec<&str> = split_lines("A=1\r\n\rB=2\n").collect();
/// assert_eq!(lines, vec!["A=1", "", "B=2"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    LineSplitter { rest: text }
}

/// Rewrites every `\r\n` and lone `\r` as [`LINE_ENDING`].
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        out.push_str(&rest[..end]);
        if end == rest.len() {
            break;
        }
        out.push_str(LINE_ENDING);
        rest = skip_terminator(&rest[end..]);
    }
    Cow::Owned(out)
}

/// Iterator behind [`split_lines`].
struct LineSplitter<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &self.rest[..end];
                self.rest = skip_terminator(&self.rest[end..]);
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Drops one line terminator (`\r\n`, `\r` or `\n`) from the front of `text`.
fn skip_terminator(text: &str) -> &str {
    text.strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\r'))
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text)
}
