use super::*;
use super::scanner::{remainder, skip_indentation};

pub(super) fn tokenize_line<'a>(lexer: &mut Lexer<'a>) -> Result<Token<'a>, YConfError> {
    let indent = skip_indentation(lexer)?;

    match lexer.peek {
        None => Ok(Token::Blank),
        Some('#') => Ok(Token::Comment),
        Some(_) => tokenize_assignment(lexer, indent),
    }
}

fn tokenize_assignment<'a>(lexer: &mut Lexer<'a>, indent: usize) -> Result<Token<'a>, YConfError> {
    let rest = remainder(lexer);

    let separator = match rest.find(':') {
        Some(n) if n > 0 => n,
        _ => {
            return Err(YConfError::MissingSeparator {
                content: rest.to_string(),
                line: lexer.line,
                hint: Some("Write entries as `name: value`".into()),
                code: Some(102),
            });
        }
    };

    let name = rest[..separator].trim();
    if name.is_empty() {
        return Err(YConfError::EmptyName {
            line: lexer.line,
            hint: Some("Put a parameter name before the ':'".into()),
            code: Some(103),
        });
    }

    let value = rest[separator + 1..].trim();

    Ok(Token::Assignment { indent, name, value })
}
