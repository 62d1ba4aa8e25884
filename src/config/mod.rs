// Author: Dustin Pilgrim
// License: MIT

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::ast::{Document, Entry, Value};
use crate::error::{DiagnosticSink, LogSink};
use crate::parser::Parser;
use crate::YConfError;

mod access;
mod conversion;
mod helpers;

/// Parsed configuration: dotted path → typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YConf {
    document: Document,
}

/// Knobs for loading a config.
///
/// ```no_run
/// # use yconf::{LogSink, ParseOptions};
/// # fn main() -> Result<(), yconf::YConfError> {
/// let config = ParseOptions::new()
///     .sorted(true)
///     .strict(true)
///     .parse_file("app.conf", LogSink)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    sorted: bool,
    strict: bool,
}

/// Forwards diagnostics and remembers the first one.
struct FirstDiagnostic<S> {
    inner: S,
    first: Option<YConfError>,
}

impl<S: DiagnosticSink> DiagnosticSink for FirstDiagnostic<S> {
    fn report(&mut self, diagnostic: YConfError) {
        if self.first.is_none() {
            self.first = Some(diagnostic.clone());
        }
        self.inner.report(diagnostic);
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order entries by path instead of by first appearance.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Fail with the first diagnostic instead of skipping bad lines.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn parse_str<S: DiagnosticSink>(&self, content: &str, sink: S) -> Result<YConf, YConfError> {
        self.finish(self.build(sink, |parser| parser.parse_document(content.lines())))
    }

    pub fn parse_lines<'l, I, S>(&self, lines: I, sink: S) -> Result<YConf, YConfError>
    where
        I: IntoIterator<Item = &'l str>,
        S: DiagnosticSink,
    {
        self.finish(self.build(sink, |parser| parser.parse_document(lines)))
    }

    pub fn parse_reader<R: BufRead, S: DiagnosticSink>(&self, reader: R, sink: S) -> Result<YConf, YConfError> {
        self.finish(self.build(sink, |parser| parser.parse_reader(reader)))
    }

    /// Load a config file. `~/` expands to the home directory.
    ///
    /// An unreadable file is a diagnostic like any other: outside strict
    /// mode the result is an empty config.
    pub fn parse_file<P: AsRef<Path>, S: DiagnosticSink>(&self, path: P, sink: S) -> Result<YConf, YConfError> {
        self.finish(self.build(sink, |parser| load_file(parser, path.as_ref())))
    }

    fn build<S, F>(&self, sink: S, parse: F) -> (YConf, Option<YConfError>)
    where
        S: DiagnosticSink,
        F: FnOnce(&mut Parser<FirstDiagnostic<S>>) -> Document,
    {
        let mut parser = Parser::new(FirstDiagnostic { inner: sink, first: None });
        let mut document = parse(&mut parser);
        if self.sorted {
            document.entries.sort_keys();
        }
        (YConf { document }, parser.into_sink().first)
    }

    fn finish(&self, (config, first): (YConf, Option<YConfError>)) -> Result<YConf, YConfError> {
        match first {
            Some(e) if self.strict => Err(e),
            _ => Ok(config),
        }
    }
}

fn load_file<S: DiagnosticSink>(parser: &mut Parser<S>, path: &Path) -> Document {
    let opened = helpers::expand_home(path).and_then(|full| {
        File::open(&full).map_err(|e| YConfError::FileError {
            message: format!("Failed to open file: {}", e),
            path: full.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })
    });

    match opened {
        Ok(file) => {
            log::debug!("reading config from {}", path.display());
            parser.parse_reader(BufReader::new(file))
        }
        Err(e) => {
            parser.report(e);
            Document::default()
        }
    }
}

impl YConf {
    /// Parse a config from a string, logging diagnostics.
    ///
    /// # Example
    /// ```
    /// let config = yconf::YConf::from_str("server:\n  port: 8080");
    /// let port: u16 = config.get("server.port").unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn from_str(content: &str) -> Self {
        Self::from_str_with_sink(content, LogSink)
    }

    pub fn from_str_with_sink<S: DiagnosticSink>(content: &str, sink: S) -> Self {
        ParseOptions::new().build(sink, |parser| parser.parse_document(content.lines())).0
    }

    /// Parse, failing on the first malformed line.
    pub fn from_str_strict(content: &str) -> Result<Self, YConfError> {
        ParseOptions::new().strict(true).parse_str(content, LogSink)
    }

    pub fn from_lines<'l, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'l str>,
    {
        ParseOptions::new().build(LogSink, |parser| parser.parse_document(lines)).0
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::from_reader_with_sink(reader, LogSink)
    }

    pub fn from_reader_with_sink<R: BufRead, S: DiagnosticSink>(reader: R, sink: S) -> Self {
        ParseOptions::new().build(sink, |parser| parser.parse_reader(reader)).0
    }

    /// Load a config file, logging diagnostics.
    ///
    /// A missing or unreadable file yields an empty config.
    ///
    /// # Example
    /// ```no_run
    /// let config = yconf::YConf::from_file("~/.app/config.txt");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file_with_sink(path, LogSink)
    }

    pub fn from_file_with_sink<P: AsRef<Path>, S: DiagnosticSink>(path: P, sink: S) -> Self {
        ParseOptions::new().build(sink, |parser| load_file(parser, path.as_ref())).0
    }

    /// Load a config file, failing if it cannot be read or has a bad line.
    pub fn from_file_strict<P: AsRef<Path>>(path: P) -> Result<Self, YConfError> {
        ParseOptions::new().strict(true).parse_file(path, LogSink)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests;
