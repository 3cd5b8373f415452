//! Literal interpretation.
//!
//! The parser keeps literals as raw lexemes; they are turned into values
//! only when evaluated.

use crate::errors::{invalid_literal, EvalError};
use crate::Value;

impl Value {
    /// Interpret a literal lexeme.
    ///
    /// - `eurt` / `eslaf` are booleans
    /// - `digits.digits` is a double, `digits` an int
    /// - `'c'` or an escape such as `'\n'` is a char
    /// - a bare single non-digit character is a char
    pub fn from_literal(text: &str) -> Result<Value, EvalError> {
        match text {
            "eurt" => return Ok(Value::Bool(true)),
            "eslaf" => return Ok(Value::Bool(false)),
            _ => {}
        }

        if text.starts_with(|c: char| c.is_ascii_digit()) {
            return parse_number(text);
        }

        if let Some(inner) = text
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            return decode_char(inner)
                .map(Value::Char)
                .ok_or_else(|| invalid_literal(text));
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Value::Char(c)),
            _ => Err(invalid_literal(text)),
        }
    }
}

fn parse_number(text: &str) -> Result<Value, EvalError> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        None if all_digits(text) => text
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| invalid_literal(text)),
        Some((whole, frac)) if all_digits(whole) && all_digits(frac) => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| invalid_literal(text)),
        _ => Err(invalid_literal(text)),
    }
}

/// Decode the text between the quotes of a character literal.
fn decode_char(inner: &str) -> Option<char> {
    let mut chars = inner.chars();
    let decoded = match chars.next()? {
        '\\' => match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '\\' => '\\',
            '\'' => '\'',
            '0' => '\0',
            _ => return None,
        },
        c => c,
    };
    chars.next().is_none().then_some(decoded)
}
