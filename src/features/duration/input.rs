use std::borrow::Cow;

use serde_json::Value;

/// Anything the parser can be handed: text, a millisecond count, or a value
/// of some other type coming from dynamic data (rejected with `INVALID_TYPE`).
#[derive(Debug, Clone, PartialEq)]
pub enum DurationInput<'a> {
    Text(Cow<'a, str>),
    Millis(f64),
    Unsupported(&'static str),
}

impl DurationInput<'_> {
    /// Raw representation carried in error values.
    pub fn raw(&self) -> String {
        match self {
            DurationInput::Text(text) => text.to_string(),
            DurationInput::Millis(ms) => ms.to_string(),
            DurationInput::Unsupported(kind) => format!("<{kind}>"),
        }
    }
}

impl<'a> From<&'a str> for DurationInput<'a> {
    fn from(value: &'a str) -> Self {
        DurationInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for DurationInput<'a> {
    fn from(value: &'a String) -> Self {
        DurationInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for DurationInput<'_> {
    fn from(value: String) -> Self {
        DurationInput::Text(Cow::Owned(value))
    }
}

impl From<f64> for DurationInput<'_> {
    fn from(value: f64) -> Self {
        DurationInput::Millis(value)
    }
}

impl From<i64> for DurationInput<'_> {
    fn from(value: i64) -> Self {
        DurationInput::Millis(value as f64)
    }
}

impl From<i32> for DurationInput<'_> {
    fn from(value: i32) -> Self {
        DurationInput::Millis(f64::from(value))
    }
}

impl From<u64> for DurationInput<'_> {
    fn from(value: u64) -> Self {
        DurationInput::Millis(value as f64)
    }
}

impl<'a> From<&'a Value> for DurationInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => DurationInput::Text(Cow::Borrowed(text.as_str())),
            Value::Number(number) => match number.as_f64() {
                Some(ms) => DurationInput::Millis(ms),
                None => DurationInput::Unsupported("number"),
            },
            Value::Null => DurationInput::Unsupported("null"),
            Value::Bool(_) => DurationInput::Unsupported("boolean"),
            Value::Array(_) => DurationInput::Unsupported("array"),
            Value::Object(_) => DurationInput::Unsupported("object"),
        }
    }
}
