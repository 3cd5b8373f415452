//! Runtime values.

use std::fmt;

/// A runtime value.
///
/// Closed set: every operator matches on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Value {
    /// Name of the value's type, used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "double",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
        }
    }

    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Numeric value promoted to float; `None` for bool and char.
    #[expect(
        clippy::cast_precision_loss,
        reason = "int-to-double promotion is the language's mixed arithmetic rule"
    )]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(n as f64),
            Value::Float(f) => Some(f),
            Value::Bool(_) | Value::Char(_) => None,
        }
    }
}

/// The printed form: integers in decimal, floats with at least one
/// fractional digit, booleans as `true`/`false`, characters as themselves.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
        }
    }
}
