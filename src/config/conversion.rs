// Author: Dustin Pilgrim
// License: MIT

use crate::{Value, YConfError};

fn type_error(message: String, hint: &str, code: u32) -> YConfError {
    YConfError::TypeError {
        message,
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

/// Unwrap a length-one element list.
fn single<T>(mut items: Vec<T>, what: &str) -> Result<T, YConfError> {
    if items.len() == 1 {
        if let Some(item) = items.pop() {
            return Ok(item);
        }
    }
    Err(type_error(
        format!("Expected a single {}, got an array of {}", what, items.len()),
        "Request a Vec<_> for array values",
        404,
    ))
}

impl Value {
    /// Split into one single-element value per element.
    pub fn into_elements(self) -> Vec<Value> {
        match self {
            Value::None => Vec::new(),
            Value::String(v) => v.into_iter().map(|s| Value::String(vec![s])).collect(),
            Value::Boolean(v) => v.into_iter().map(|b| Value::Boolean(vec![b])).collect(),
            Value::Float(v) => v.into_iter().map(|n| Value::Float(vec![n])).collect(),
            Value::Integer(v) => v.into_iter().map(|n| Value::Integer(vec![n])).collect(),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = YConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(v) => single(v, "string"),
            _ => Err(type_error(
                format!("Expected string, got {}", value),
                "Quote string values in your config",
                401,
            )),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = YConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(v) => single(v, "number"),
            Value::Integer(v) => single(v, "number").map(|n| n as f64),
            _ => Err(type_error(
                format!("Expected number, got {}", value),
                "Use a number value in your config",
                402,
            )),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = YConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for i64 {
    type Error = YConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(v) => single(v, "integer"),
            _ => Err(type_error(
                format!("Expected integer, got {}", value),
                "Write integers without a decimal point",
                402,
            )),
        }
    }
}

macro_rules! narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = YConfError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| type_error(
                        format!("Number {} out of range for {}", n, stringify!($ty)),
                        concat!("Use a value that fits in ", stringify!($ty)),
                        405,
                    ))
                }
            }
        )*
    };
}

narrow_integer!(i32, u8, u16, u32, u64, usize);

impl TryFrom<Value> for bool {
    type Error = YConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(v) => single(v, "boolean"),
            Value::String(ref v) if v.len() == 1 && matches!(v[0].as_str(), "TRUE" | "FALSE") => {
                Err(type_error(
                    format!("Expected boolean, got quoted string \"{}\"", v[0]),
                    "Remove the quotes around TRUE/FALSE",
                    403,
                ))
            }
            _ => Err(type_error(
                format!("Expected boolean, got {}", value),
                "Use TRUE or FALSE",
                403,
            )),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = YConfError>,
{
    type Error = YConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.into_elements().into_iter().map(T::try_from).collect()
    }
}
