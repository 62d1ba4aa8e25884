use super::*;

/// Advance the character iterator and update column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if curr.is_some() {
        lexer.column += 1;
    }
    lexer.peek = lexer.chars.next();
    curr
}

/// Consume the leading indentation run.
///
/// Every space or tab counts as one unit. A run holding both is rejected,
/// unless nothing follows it: a whitespace-only line is blank.
pub(super) fn skip_indentation(lexer: &mut Lexer) -> Result<usize, YConfError> {
    let mut spaces = 0;
    let mut tabs = 0;

    while let Some(c) = lexer.peek {
        match c {
            ' ' => spaces += 1,
            '\t' => tabs += 1,
            _ => break,
        }
        bump(lexer);
    }

    if spaces > 0 && tabs > 0 && lexer.peek.is_some() {
        return Err(YConfError::MixedIndentation {
            line: lexer.line,
            hint: Some("Indent with either spaces or tabs, not both".into()),
            code: Some(101),
        });
    }

    Ok(spaces + tabs)
}

/// Everything not yet consumed
pub(super) fn remainder<'a>(lexer: &Lexer<'a>) -> &'a str {
    let input = lexer.input;
    // indentation is ASCII, so the column is also a byte offset
    &input[lexer.column..]
}

