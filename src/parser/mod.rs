use std::borrow::Cow;
use std::io::BufRead;

use crate::ast::{Document, Value};
use crate::error::{DiagnosticSink, LogSink};
use crate::lexer::{Lexer, Token};
use crate::YConfError;

mod document;
mod value;

pub use value::classify;

/// Result of scanning and classifying one source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub indent: usize,
    pub name: String,
    pub value: Value,
    /// Trimmed value token, quotes stripped for string scalars.
    pub raw: String,
}

/// Line-by-line YCONF parser.
///
/// Malformed lines never abort a parse; each problem is handed to the
/// sink and the line is skipped.
pub struct Parser<S: DiagnosticSink> {
    sink: S,
    line: usize,
}

impl Default for Parser<LogSink> {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl<S: DiagnosticSink> Parser<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, line: 0 }
    }

    /// Number of the line most recently handed to [`Parser::parse_line`].
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub(crate) fn report(&mut self, diagnostic: YConfError) {
        self.sink.report(diagnostic);
    }

    /// Scan one raw line and classify its value.
    ///
    /// Returns `None` for blank lines, comments and rejected lines.
    pub fn parse_line(&mut self, raw: &str) -> Option<ParsedLine> {
        self.line += 1;

        let token = match Lexer::new(raw, self.line).next_token() {
            Ok(token) => token,
            Err(e) => {
                self.report(e);
                return None;
            }
        };

        match token {
            Token::Blank | Token::Comment => None,
            Token::Assignment { indent, name, value } => {
                let classified = value::classify(value, self.line, &mut self.sink);
                let raw = match &classified {
                    Value::String(items) if items.len() == 1 && !value.starts_with('[') => items[0].clone(),
                    _ => value.to_string(),
                };
                Some(ParsedLine {
                    indent,
                    name: name.to_string(),
                    value: classified,
                    raw,
                })
            }
        }
    }

    /// Classify a bare value token against the current line number.
    pub fn classify(&mut self, token: &str) -> Value {
        value::classify(token, self.line, &mut self.sink)
    }

    /// Build a document from lines delivered in source order.
    pub fn parse_document<'l, I>(&mut self, lines: I) -> Document
    where
        I: IntoIterator<Item = &'l str>,
    {
        self.line = 0;
        let mut builder = document::DocumentBuilder::new();
        for raw in lines {
            builder.feed(self, raw);
        }
        builder.finish(self.line)
    }

    /// Build a document from a buffered reader.
    ///
    /// Lines are split on `\n` (a trailing `\r` is dropped) and decoded
    /// lossily, so stray non-UTF-8 bytes only affect their own line. A read
    /// failure stops the parse; it is reported once and the entries gathered
    /// so far are kept.
    pub fn parse_reader<R: BufRead>(&mut self, mut reader: R) -> Document {
        self.line = 0;
        let mut builder = document::DocumentBuilder::new();
        let mut failure = None;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    if buf.last() == Some(&b'\n') {
                        buf.pop();
                        if buf.last() == Some(&b'\r') {
                            buf.pop();
                        }
                    }
                    let raw = String::from_utf8_lossy(&buf);
                    if let Cow::Owned(_) = raw {
                        log::debug!("line {} is not valid UTF-8, decoded lossily", self.line + 1);
                    }
                    builder.feed(self, &raw);
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        if let Some(e) = failure {
            self.report(YConfError::ReadError {
                message: e.to_string(),
                line: self.line,
                hint: Some("Entries read before the failure were kept".into()),
                code: Some(302),
            });
        }

        builder.finish(self.line)
    }
}
