//! State inspection for screen components.
//!
//! Debuggers and test harnesses read screen state through paths rather than
//! through each component's own accessors. Queries never change state.

use std::fmt;

/// A dynamically-typed value returned by a state query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Byte value, such as a colour's wire code.
    U8(u8),
    /// 16-bit value, such as a grid coordinate.
    U16(u16),
    /// String value.
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a property by path.
    ///
    /// Paths are dot-separated, e.g. `foreground` or `cursor.x`.
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// All paths `query()` understands.
    fn query_paths(&self) -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain() {
        assert_eq!(Value::U8(9).to_string(), "9");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from("green").to_string(), "green");
    }
}
