// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line grammar: classify raw lines and render setters back to text.
//!
//! ```text
//! parse_line(raw)
//!   blank?      --> Empty
//!   '#' first?  --> Comment { text }
//!   setter?     --> Setter { key, value, export, comment }
//!   otherwise   --> Unparsable { raw }
//!
//! setter := [export WS+] KEY WS* '=' WS* VALUE [WS* '#' COMMENT]
//! KEY    := [A-Za-z_][A-Za-z0-9_]*
//! VALUE  := "double \" \\ escapes" | 'single \' \\ escapes' | bare (\# escape)
//! ```
//!
//! [`format_setter_line`] is the inverse of the setter branch: any line it
//! renders parses back to the same key, value, export flag and comment.

use serde::Serialize;

use crate::error::{DotenvError, DotenvResult};

/// Classification of one raw line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedLine {
    /// Blank or whitespace-only line.
    Empty,
    /// Comment line; `text` is everything after `#`, trimmed.
    Comment { text: String },
    /// `KEY=value` assignment.
    Setter(Setter),
    /// Anything else, kept verbatim.
    Unparsable { raw: String },
}

/// A parsed `[export ]KEY=VALUE[ # comment]` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setter {
    pub key: String,
    /// Value with quotes stripped and escapes resolved.
    pub value: String,
    pub export: bool,
    /// Trailing comment, `None` when absent or empty.
    pub comment: Option<String>,
}

impl Setter {
    /// Render this setter as a single line.
    ///
    /// # Errors
    ///
    /// See [`format_setter_line`].
    pub fn to_line(&self) -> DotenvResult<String> {
        format_setter_line(
            &self.key,
            Some(&self.value),
            self.comment.as_deref(),
            self.export,
        )
    }
}

/// Classify one raw line (without its terminator).
///
/// # Example
/// ```
/// use dotenv_editor::formatter::{parse_line, ParsedLine};
///
/// let ParsedLine::Setter(setter) = parse_line("export DB_HOST = \"db.local\" # primary") else {
///     panic!("expected a setter");
/// };
/// assert_eq!(setter.key, "DB_HOST");
/// assert_eq!(setter.value, "db.local");
/// assert!(setter.export);
/// assert_eq!(setter.comment.as_deref(), Some("primary"));
/// ```
#[must_use]
pub fn parse_line(raw: &str) -> ParsedLine {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return ParsedLine::Empty;
    }

    if let Some(text) = trimmed.strip_prefix('#') {
        return ParsedLine::Comment {
            text: text.trim().to_string(),
        };
    }

    parse_setter(raw.trim_matches(is_blank)).map_or_else(
        || ParsedLine::Unparsable {
            raw: raw.to_string(),
        },
        ParsedLine::Setter,
    )
}

/// Normalize a user-supplied key: uppercase it and drop every character
/// outside `[A-Za-z0-9_]`.
///
/// # Errors
///
/// Returns [`DotenvError::InvalidKey`] if nothing is left, or if the result
/// starts with a digit (it could not be read back as a setter).
///
/// # Example
/// ```
/// use dotenv_editor::formatter::format_key;
///
/// assert_eq!(format_key("app.name").unwrap(), "APPNAME");
/// assert_eq!(format_key(" db_host ").unwrap(), "DB_HOST");
/// assert!(format_key("--").is_err());
/// ```
pub fn format_key(key: &str) -> DotenvResult<String> {
    let formatted: String = key
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if formatted.is_empty() || formatted.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(DotenvError::invalid_key(key));
    }

    Ok(formatted)
}

/// Render `[export ]KEY=VALUE[ # comment]`.
///
/// A `None` value renders as nothing after `=`. Values containing
/// whitespace, `#` or quote characters are wrapped in double quotes with
/// inner `"` and `\` escaped; everything else is written bare. An empty
/// comment is omitted.
///
/// # Errors
///
/// - [`DotenvError::InvalidKey`] if `key` is not a valid identifier.
/// - [`DotenvError::InvalidValue`] if the value or comment contains a line
///   break.
///
/// # Example
/// ```
/// use dotenv_editor::formatter::format_setter_line;
///
/// let line = format_setter_line("APP_NAME", Some("My App"), Some("display name"), true).unwrap();
/// assert_eq!(line, "export APP_NAME=\"My App\" # display name");
/// ```
pub fn format_setter_line(
    key: &str,
    value: Option<&str>,
    comment: Option<&str>,
    export: bool,
) -> DotenvResult<String> {
    if !is_valid_key(key) {
        return Err(DotenvError::invalid_key(key));
    }

    let value = value.unwrap_or_default();
    if has_line_break(value) {
        return Err(DotenvError::invalid_value(
            key,
            "line breaks are not allowed in values",
        ));
    }

    let mut line = String::with_capacity(key.len() + value.len() + 8);
    if export {
        line.push_str("export ");
    }
    line.push_str(key);
    line.push('=');
    push_value(&mut line, value);

    if let Some(comment) = comment.map(str::trim).filter(|c| !c.is_empty()) {
        if has_line_break(comment) {
            return Err(DotenvError::invalid_value(
                key,
                "line breaks are not allowed in comments",
            ));
        }
        line.push_str(" # ");
        line.push_str(comment);
    }

    Ok(line)
}

/// Render a standalone comment line, `# text`.
///
/// # Errors
///
/// Returns [`DotenvError::InvalidValue`] if `text` contains a line break.
pub fn format_comment_line(text: &str) -> DotenvResult<String> {
    if has_line_break(text) {
        return Err(DotenvError::invalid_value(
            "#",
            "line breaks are not allowed in comments",
        ));
    }

    let text = text.trim();
    if text.is_empty() {
        return Ok("#".to_string());
    }
    Ok(format!("# {text}"))
}

/// Whether `key` matches `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    identifier_len(key) == Some(key.len())
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

fn needs_quotes(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\''))
}

fn push_value(line: &mut String, value: &str) {
    if !needs_quotes(value) {
        line.push_str(value);
        return;
    }

    line.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            line.push('\\');
        }
        line.push(c);
    }
    line.push('"');
}

// --- Setter parsing ---

/// Separator accepted around `export`, the key and `=`. Must stay in sync
/// with the writer's line pattern.
const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

fn parse_setter(line: &str) -> Option<Setter> {
    // `export=1` and `export_FOO=1` are plain keys, so fall back when the
    // exported form does not parse.
    strip_export(line)
        .and_then(|rest| parse_assignment(rest, true))
        .or_else(|| parse_assignment(line, false))
}

fn strip_export(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("export")?;
    let trimmed = rest.trim_start_matches(is_blank);
    (trimmed.len() < rest.len()).then_some(trimmed)
}

fn parse_assignment(line: &str, export: bool) -> Option<Setter> {
    let key_len = identifier_len(line)?;
    let (key, rest) = line.split_at(key_len);
    let rest = rest.trim_start_matches(is_blank).strip_prefix('=')?;
    let (value, comment) = parse_value(rest.trim_start_matches(is_blank))?;

    Some(Setter {
        key: key.to_string(),
        value,
        export,
        comment,
    })
}

/// Byte length of the leading identifier, `None` if there is none.
fn identifier_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None,
    }

    let len = chars
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map_or(text.len(), |(idx, _)| idx);
    Some(len)
}

type ValueAndComment = (String, Option<String>);

fn parse_value(text: &str) -> Option<ValueAndComment> {
    match text.chars().next() {
        Some(quote @ ('"' | '\'')) => parse_quoted(&text[1..], quote),
        _ => Some(parse_bare(text)),
    }
}

fn parse_quoted(body: &str, quote: char) -> Option<ValueAndComment> {
    let mut value = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&(_, next)) if next == quote || next == '\\' => {
                    value.push(next);
                    chars.next();
                }
                _ => value.push('\\'),
            }
        } else if c == quote {
            let comment = trailing_comment(&body[idx + c.len_utf8()..])?;
            return Some((value, comment));
        } else {
            value.push(c);
        }
    }

    // unterminated quote
    None
}

fn parse_bare(text: &str) -> ValueAndComment {
    let mut value = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some((_, '#'))) => {
                value.push('#');
                chars.next();
            }
            '#' => {
                let comment = non_empty(text[idx + 1..].trim());
                return (value.trim_end().to_string(), comment);
            }
            _ => value.push(c),
        }
    }

    (value.trim_end().to_string(), None)
}

/// What may follow a closing quote: nothing, or a `#` comment.
fn trailing_comment(rest: &str) -> Option<Option<String>> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Some(None);
    }
    rest.strip_prefix('#').map(|c| non_empty(c.trim()))
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
