use indexmap::IndexMap;

use super::*;
use crate::ast::Entry;

/// One open ancestor: its indentation and how many bytes it added to the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Frame {
    indent: usize,
    segment_len: usize,
}

/// Open chain of ancestor names and the dotted path they spell.
#[derive(Debug, Default)]
pub(super) struct PathStack {
    frames: Vec<Frame>,
    path: String,
}

impl PathStack {
    /// Close every frame at `indent` or deeper, then open `name` beneath
    /// what remains. Returns the full path of the new frame.
    pub(super) fn enter(&mut self, indent: usize, name: &str) -> &str {
        while let Some(top) = self.frames.last().copied() {
            if indent > top.indent {
                break;
            }
            self.frames.pop();
            // the root segment has no leading dot
            let keep = self.path.len().saturating_sub(top.segment_len);
            self.path.truncate(keep);
            log::trace!("closed frame at indent {}, path now '{}'", top.indent, self.path);
        }

        if !self.path.is_empty() {
            self.path.push('.');
        }
        self.path.push_str(name);
        self.frames.push(Frame {
            indent,
            segment_len: 1 + name.len(),
        });

        &self.path
    }

    #[cfg(test)]
    pub(super) fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// Accumulates entries across the lines of one document.
pub(super) struct DocumentBuilder {
    stack: PathStack,
    entries: IndexMap<String, Entry>,
}

impl DocumentBuilder {
    pub(super) fn new() -> Self {
        Self {
            stack: PathStack::default(),
            entries: IndexMap::new(),
        }
    }

    pub(super) fn feed<S: DiagnosticSink>(&mut self, parser: &mut Parser<S>, raw: &str) {
        let Some(parsed) = parser.parse_line(raw) else {
            return;
        };

        let path = self.stack.enter(parsed.indent, &parsed.name).to_string();
        if parsed.value.is_none() {
            log::trace!("'{}' has no value at line {}", path, parser.line());
            return;
        }

        // last write wins; the key keeps its first position
        self.entries.insert(
            path.clone(),
            Entry {
                path,
                value: parsed.value,
                raw: parsed.raw,
                line: parser.line(),
            },
        );
    }

    pub(super) fn finish(self, lines: usize) -> Document {
        log::debug!("parsed {} lines into {} entries", lines, self.entries.len());
        Document {
            entries: self.entries,
            lines,
        }
    }
}
