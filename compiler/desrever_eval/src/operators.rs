//! Binary operator implementations for the evaluator.
//!
//! Both operands are always evaluated before dispatch; `dna` and `ro` do
//! not short-circuit.

use desrever_ir::TokenKind;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, unsupported_operator, EvalResult,
};
use crate::Value;

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: Value, op: TokenKind, right: Value) -> EvalResult {
    match op {
        TokenKind::Plus | TokenKind::Minus | TokenKind::Star => eval_arith(left, op, right),
        TokenKind::Slash => eval_div(left, right),
        TokenKind::And | TokenKind::Or => eval_logical(left, op, right),
        TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
            eval_ordering(left, op, right)
        }
        TokenKind::EqEq | TokenKind::NotEq => eval_equality(left, op, right),
        _ => Err(unsupported_operator(op)),
    }
}

fn eval_arith(left: Value, op: TokenKind, right: Value) -> EvalResult {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        return match op {
            TokenKind::Plus => checked_arith(a.checked_add(b), "addition"),
            TokenKind::Minus => checked_arith(a.checked_sub(b), "subtraction"),
            _ => checked_arith(a.checked_mul(b), "multiplication"),
        };
    }

    let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
        return Err(binary_type_mismatch(op, left, right));
    };
    Ok(Value::Float(match op {
        TokenKind::Plus => a + b,
        TokenKind::Minus => a - b,
        _ => a * b,
    }))
}

fn eval_div(left: Value, right: Value) -> EvalResult {
    if !left.is_numeric() || !right.is_numeric() {
        return Err(binary_type_mismatch(TokenKind::Slash, left, right));
    }

    match (left, right) {
        (_, Value::Int(0)) => Err(division_by_zero()),
        (_, Value::Float(b)) if b == 0.0 => Err(division_by_zero()),
        // Truncates toward zero; only `i64::MIN / -1` overflows.
        (Value::Int(a), Value::Int(b)) => checked_arith(a.checked_div(b), "division"),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Ok(Value::Float(a / b)),
            _ => Err(binary_type_mismatch(TokenKind::Slash, left, right)),
        },
    }
}

fn eval_logical(left: Value, op: TokenKind, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(if op == TokenKind::And {
            a && b
        } else {
            a || b
        })),
        _ => Err(binary_type_mismatch(op, left, right)),
    }
}

fn eval_ordering(left: Value, op: TokenKind, right: Value) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(&b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(&b),
        _ => return Err(binary_type_mismatch(op, left, right)),
    };
    // NaN compares false under every ordering operator.
    let result = ordering.is_some_and(|ord| match op {
        TokenKind::Lt => ord.is_lt(),
        TokenKind::Gt => ord.is_gt(),
        TokenKind::LtEq => ord.is_le(),
        _ => ord.is_ge(),
    });
    Ok(Value::Bool(result))
}

fn eval_equality(left: Value, op: TokenKind, right: Value) -> EvalResult {
    #[expect(
        clippy::float_cmp,
        reason = "`==` on doubles is exact comparison by definition"
    )]
    let equal = match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Char(a), Value::Char(b)) => a == b,
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => return Err(binary_type_mismatch(op, left, right)),
        },
    };
    Ok(Value::Bool(if op == TokenKind::EqEq { equal } else { !equal }))
}
