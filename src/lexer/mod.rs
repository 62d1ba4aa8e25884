// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;
use crate::YConfError;

mod scanner;
mod tokenizer;

/// What a single source line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Line whose first non-indentation character is `#`.
    Comment,
    /// `name: value`, with both sides trimmed. `value` may be empty.
    Assignment {
        indent: usize,
        name: &'a str,
        value: &'a str,
    },
}

/// Scans one raw line (no trailing newline) of a config document.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, line: usize) -> Self {
        let mut chars = input.chars();
        let peek = chars.next();
        Lexer {
            input,
            chars,
            peek,
            line,
            column: 0,
        }
    }

    /// Classify the line and split out its name and value text.
    pub fn next_token(&mut self) -> Result<Token<'a>, YConfError> {
        tokenizer::tokenize_line(self)
    }
}
