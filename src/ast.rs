use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    None,
    String,
    Boolean,
    Float,
    Integer,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::None => "none",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Float => "float",
            Kind::Integer => "integer",
        };
        f.write_str(name)
    }
}

/// A typed configuration value.
///
/// Every non-`None` variant holds one or more elements of the same type;
/// a scalar is a sequence of length one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    String(Vec<String>),
    Boolean(Vec<bool>),
    Float(Vec<f64>),
    Integer(Vec<i64>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::None => Kind::None,
            Value::String(_) => Kind::String,
            Value::Boolean(_) => Kind::Boolean,
            Value::Float(_) => Kind::Float,
            Value::Integer(_) => Kind::Integer,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Number of elements held.
    pub fn len(&self) -> usize {
        match self {
            Value::None => 0,
            Value::String(v) => v.len(),
            Value::Boolean(v) => v.len(),
            Value::Float(v) => v.len(),
            Value::Integer(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        self.len() == 1
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        if let Value::String(v) = self { Some(v) } else { None }
    }

    pub fn as_bools(&self) -> Option<&[bool]> {
        if let Value::Boolean(v) = self { Some(v) } else { None }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        if let Value::Float(v) = self { Some(v) } else { None }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        if let Value::Integer(v) = self { Some(v) } else { None }
    }
}

/// Renders in the `<T>value` / `<T>[a, b]` listing format.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T>(
            f: &mut fmt::Formatter<'_>,
            tag: char,
            items: &[T],
            mut each: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
        ) -> fmt::Result {
            let array = items.len() > 1;
            write!(f, "<{}>", tag)?;
            if array {
                f.write_str("[")?;
            }
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                each(f, item)?;
            }
            if array {
                f.write_str("]")?;
            }
            Ok(())
        }

        match self {
            Value::None => f.write_str("<N>"),
            Value::String(v) => list(f, 'S', v, |f, s| write!(f, "\"{}\"", s)),
            Value::Boolean(v) => list(f, 'B', v, |f, b| f.write_str(if *b { "TRUE" } else { "FALSE" })),
            Value::Float(v) => list(f, 'F', v, |f, n| write!(f, "{}", n)),
            Value::Integer(v) => list(f, 'I', v, |f, n| write!(f, "{}", n)),
        }
    }
}

/// Scalars serialize as a bare value, arrays as a sequence.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fn elements<S: Serializer, T: Serialize>(serializer: S, items: &[T]) -> Result<S::Ok, S::Error> {
            if let [single] = items {
                return single.serialize(serializer);
            }
            let mut seq = serializer.serialize_seq(Some(items.len()))?;
            for item in items {
                seq.serialize_element(item)?;
            }
            seq.end()
        }

        match self {
            Value::None => serializer.serialize_unit(),
            Value::String(v) => elements(serializer, v),
            Value::Boolean(v) => elements(serializer, v),
            Value::Float(v) => elements(serializer, v),
            Value::Integer(v) => elements(serializer, v),
        }
    }
}

/// One parsed `name: value` assignment, keyed by its full dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub path: String,
    pub value: Value,
    /// Trimmed value token; quotes are stripped from string scalars.
    pub raw: String,
    /// 1-based source line.
    pub line: usize,
}

/// Parse output: every entry keyed by dotted path, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub entries: IndexMap<String, Entry>,
    /// Number of source lines consumed.
    pub lines: usize,
}

impl Document {
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path).map(|entry| &entry.value)
    }
}
