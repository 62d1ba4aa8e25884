use std::fmt;

use crate::ast::Kind;

/// The main error type for YCONF parsing and access.
///
/// Line-level variants are reported to a [`DiagnosticSink`] while a
/// document is parsed and never abort the parse. Access variants are
/// returned from the typed getters on [`crate::YConf`].
#[derive(Debug, Clone, PartialEq)]
pub enum YConfError {
    /// Raised when a leading indentation run mixes spaces and tabs.
    MixedIndentation {
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a line has no `:` or starts with one.
    MissingSeparator {
        content: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    EmptyName {
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a value token matches none of the known types.
    UnknownType {
        token: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ArrayTypeMismatch {
        expected: Kind,
        found: Kind,
        element: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the line source fails after it was opened.
    ReadError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for YConfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YConfError::MixedIndentation { line, hint, code } =>
                write!(f, "[YCONF] Mixed tabs and spaces in indentation at line {}{}",
                    line, suffix(hint, code)),
            YConfError::MissingSeparator { content, line, hint, code } =>
                write!(f, "[YCONF] Invalid line {}: '{}' has no name/value separator{}",
                    line, content, suffix(hint, code)),
            YConfError::EmptyName { line, hint, code } =>
                write!(f, "[YCONF] Missing parameter name at line {}{}",
                    line, suffix(hint, code)),
            YConfError::UnknownType { token, line, hint, code } =>
                write!(f, "[YCONF] Unknown type '{}' at line {}{}",
                    token, line, suffix(hint, code)),
            YConfError::ArrayTypeMismatch { expected, found, element, line, hint, code } =>
                write!(f, "[YCONF] Array entries should have the same type at line {}: expected {}, got {} ('{}'){}",
                    line, expected, found, element, suffix(hint, code)),
            YConfError::FileError { message, path, hint, code } =>
                write!(f, "[YCONF] File Error '{}': {}{}",
                    path, message, suffix(hint, code)),
            YConfError::ReadError { message, line, hint, code } =>
                write!(f, "[YCONF] Read Error after line {}: {}{}",
                    line, message, suffix(hint, code)),
            YConfError::TypeError { message, line, hint, code } =>
                write!(f, "[YCONF] Type Error at line {}: {}{}",
                    line, message, suffix(hint, code)),
            YConfError::NotFound { path, hint, code } =>
                write!(f, "[YCONF] Path '{}' not found{}",
                    path, suffix(hint, code)),
        }
    }
}

impl std::error::Error for YConfError {}

impl YConfError {
    /// Numeric code attached to the error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            YConfError::MixedIndentation { code, .. }
            | YConfError::MissingSeparator { code, .. }
            | YConfError::EmptyName { code, .. }
            | YConfError::UnknownType { code, .. }
            | YConfError::ArrayTypeMismatch { code, .. }
            | YConfError::FileError { code, .. }
            | YConfError::ReadError { code, .. }
            | YConfError::TypeError { code, .. }
            | YConfError::NotFound { code, .. } => *code,
        }
    }

    /// Source line the error refers to, `0` when it has none.
    pub fn line(&self) -> usize {
        match self {
            YConfError::MixedIndentation { line, .. }
            | YConfError::MissingSeparator { line, .. }
            | YConfError::EmptyName { line, .. }
            | YConfError::UnknownType { line, .. }
            | YConfError::ArrayTypeMismatch { line, .. }
            | YConfError::ReadError { line, .. }
            | YConfError::TypeError { line, .. } => *line,
            YConfError::FileError { .. } | YConfError::NotFound { .. } => 0,
        }
    }
}

/// Receiver for non-fatal parse diagnostics.
///
/// Implemented for [`LogSink`] and for any `FnMut(YConfError)` closure, so
/// callers can collect diagnostics with `|d| diags.push(d)`.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: YConfError);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(YConfError),
{
    fn report(&mut self, diagnostic: YConfError) {
        self(diagnostic)
    }
}

/// Default sink: forwards every diagnostic to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: YConfError) {
        log::warn!("{}", diagnostic);
    }
}
