use crate::ast::{Kind, Value};
use crate::error::DiagnosticSink;
use crate::YConfError;

/// A single classified array element or scalar.
#[derive(Debug, Clone, PartialEq)]
enum Scalar {
    String(String),
    Boolean(bool),
    Float(f64),
    Integer(i64),
}

impl Scalar {
    fn kind(&self) -> Kind {
        match self {
            Scalar::String(_) => Kind::String,
            Scalar::Boolean(_) => Kind::Boolean,
            Scalar::Float(_) => Kind::Float,
            Scalar::Integer(_) => Kind::Integer,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => Value::String(vec![s]),
            Scalar::Boolean(b) => Value::Boolean(vec![b]),
            Scalar::Float(n) => Value::Float(vec![n]),
            Scalar::Integer(n) => Value::Integer(vec![n]),
        }
    }
}

/// Infer the type of a trimmed value token.
///
/// Precedence, first match wins:
/// 1. empty → `None`
/// 2. `"..."` (longer than two characters) → string, outer quotes stripped
/// 3. `[...]` → array of the rules below, all elements of one type
/// 4. contains `TRUE` / `FALSE` → boolean
/// 5. contains `.` and parses as a float → float
/// 6. parses as an integer → integer
///
/// Rule 4 is a substring test, so `xTRUEx` is `true`. Tokens matching
/// nothing are reported and yield `None`.
pub fn classify<S>(token: &str, line: usize, sink: &mut S) -> Value
where
    S: DiagnosticSink + ?Sized,
{
    if token.is_empty() {
        return Value::None;
    }

    if let Some(s) = parse_as_string(token) {
        return Value::String(vec![s.to_string()]);
    }

    if token.len() >= 2 && token.starts_with('[') && token.ends_with(']') {
        return classify_array(&token[1..token.len() - 1], line, sink);
    }

    match classify_scalar(token) {
        Some(scalar) => scalar.into(),
        None => {
            sink.report(unknown_type(token, line));
            Value::None
        }
    }
}

fn classify_array<S>(interior: &str, line: usize, sink: &mut S) -> Value
where
    S: DiagnosticSink + ?Sized,
{
    let mut values = Value::None;
    if interior.is_empty() {
        log::debug!("empty array at line {}", line);
        return values;
    }

    let mut rest = interior;
    loop {
        let (element, tail) = match rest.find(',') {
            Some(n) => (&rest[..n], Some(&rest[n + 1..])),
            None => (rest, None),
        };
        let element = element.trim();

        let Some(scalar) = classify_scalar(element) else {
            sink.report(unknown_type(element, line));
            break;
        };

        if let Err(rejected) = append(&mut values, scalar) {
            sink.report(YConfError::ArrayTypeMismatch {
                expected: values.kind(),
                found: rejected.kind(),
                element: element.to_string(),
                line,
                hint: Some("Keep every array element the same type".into()),
                code: Some(202),
            });
            break;
        }

        // a trailing comma ends the array
        match tail.map(str::trim) {
            Some(next) if !next.is_empty() => rest = next,
            _ => break,
        }
    }

    values
}

/// Push `scalar` onto `values`, or hand it back if its type differs.
fn append(values: &mut Value, scalar: Scalar) -> Result<(), Scalar> {
    if values.is_none() {
        *values = scalar.into();
        return Ok(());
    }

    match (values, scalar) {
        (Value::String(items), Scalar::String(s)) => items.push(s),
        (Value::Boolean(items), Scalar::Boolean(b)) => items.push(b),
        (Value::Float(items), Scalar::Float(n)) => items.push(n),
        (Value::Integer(items), Scalar::Integer(n)) => items.push(n),
        (_, other) => return Err(other),
    }
    Ok(())
}

/// Rules 2, 4, 5 and 6; shared by scalars and array elements.
fn classify_scalar(token: &str) -> Option<Scalar> {
    if let Some(s) = parse_as_string(token) {
        return Some(Scalar::String(s.to_string()));
    }
    if let Some(b) = parse_as_boolean(token) {
        return Some(Scalar::Boolean(b));
    }
    if let Some(n) = parse_as_float(token) {
        return Some(Scalar::Float(n));
    }
    parse_as_integer(token).map(Scalar::Integer)
}

fn parse_as_string(token: &str) -> Option<&str> {
    if token.len() > 2 && token.starts_with('"') && token.ends_with('"') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

fn parse_as_boolean(token: &str) -> Option<bool> {
    if token.contains("TRUE") {
        Some(true)
    } else if token.contains("FALSE") {
        Some(false)
    } else {
        None
    }
}

fn parse_as_float(token: &str) -> Option<f64> {
    if !token.contains('.') {
        return None;
    }
    token.parse::<f64>().ok()
}

fn parse_as_integer(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

fn unknown_type(token: &str, line: usize) -> YConfError {
    YConfError::UnknownType {
        token: token.to_string(),
        line,
        hint: Some("Use a quoted string, TRUE/FALSE, a number or a [list]".into()),
        code: Some(201),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_collect(token: &str) -> (Value, Vec<YConfError>) {
        let mut diags = Vec::new();
        let value = classify(token, 1, &mut |d: YConfError| diags.push(d));
        (value, diags)
    }

    #[test]
    fn test_empty_token_is_none() {
        let (value, diags) = classify_collect("");
        assert_eq!(value, Value::None);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_quoted_string_stripped_once() {
        assert_eq!(classify_collect("\"x\"").0, Value::String(vec!["x".into()]));
        assert_eq!(classify_collect("\"\"x\"\"").0, Value::String(vec!["\"x\"".into()]));
        assert_eq!(classify_collect("\"a\\nb\"").0, Value::String(vec!["a\\nb".into()]));
    }

    #[test]
    fn test_two_char_quotes_are_not_a_string() {
        let (value, diags) = classify_collect("\"\"");
        assert_eq!(value, Value::None);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_boolean_substring_quirk() {
        assert_eq!(classify_collect("TRUE").0, Value::Boolean(vec![true]));
        assert_eq!(classify_collect("FALSE").0, Value::Boolean(vec![false]));
        assert_eq!(classify_collect("xTRUEx").0, Value::Boolean(vec![true]));
        assert_eq!(classify_collect("NOTTRUE").0, Value::Boolean(vec![true]));
        assert_eq!(classify_collect("\"TRUE\"").0, Value::String(vec!["TRUE".into()]));
    }

    #[test]
    fn test_lowercase_booleans_are_unknown() {
        let (value, diags) = classify_collect("true");
        assert_eq!(value, Value::None);
        assert!(matches!(diags[0], YConfError::UnknownType { .. }));
    }

    #[test]
    fn test_float_needs_a_dot() {
        assert_eq!(classify_collect("3.14").0, Value::Float(vec![3.14]));
        assert_eq!(classify_collect("-0.5").0, Value::Float(vec![-0.5]));
        assert_eq!(classify_collect("42").0, Value::Integer(vec![42]));
        assert_eq!(classify_collect("-7").0, Value::Integer(vec![-7]));
    }

    #[test]
    fn test_bad_number_is_unknown() {
        let (value, diags) = classify_collect("1.2.3");
        assert_eq!(value, Value::None);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code(), Some(201));

        let (value, _) = classify_collect("localhost");
        assert_eq!(value, Value::None);
    }

    #[test]
    fn test_integer_array() {
        let (value, diags) = classify_collect("[1, 2, 3]");
        assert_eq!(value, Value::Integer(vec![1, 2, 3]));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_string_and_bool_arrays() {
        assert_eq!(
            classify_collect("[\"a\",\"b\" , \"c\"]").0,
            Value::String(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(
            classify_collect("[TRUE, FALSE]").0,
            Value::Boolean(vec![true, false])
        );
        assert_eq!(classify_collect("[1.5, 2.25]").0, Value::Float(vec![1.5, 2.25]));
    }

    #[test]
    fn test_mixed_array_keeps_prefix() {
        let (value, diags) = classify_collect("[1, 2.0]");
        assert_eq!(value, Value::Integer(vec![1]));
        assert_eq!(diags.len(), 1);
        assert!(matches!(
            diags[0],
            YConfError::ArrayTypeMismatch { expected: Kind::Integer, found: Kind::Float, .. }
        ));
    }

    #[test]
    fn test_mismatch_stops_consuming() {
        let (value, diags) = classify_collect("[\"a\", \"b\", 3, \"d\"]");
        assert_eq!(value, Value::String(vec!["a".into(), "b".into()]));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_unknown_element_keeps_prefix() {
        let (value, diags) = classify_collect("[1, two, 3]");
        assert_eq!(value, Value::Integer(vec![1]));
        assert!(matches!(diags[0], YConfError::UnknownType { .. }));
    }

    #[test]
    fn test_empty_array_is_none() {
        let (value, diags) = classify_collect("[]");
        assert_eq!(value, Value::None);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_trailing_comma_ignored() {
        let (value, diags) = classify_collect("[1, 2,]");
        assert_eq!(value, Value::Integer(vec![1, 2]));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_single_element_array_is_scalar_shaped() {
        assert_eq!(classify_collect("[7]").0, Value::Integer(vec![7]));
    }
}
