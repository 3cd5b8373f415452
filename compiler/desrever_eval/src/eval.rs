//! Expression evaluation.

use desrever_ir::{Expr, ExprKind};
use desrever_stack::ensure_sufficient_stack;

use crate::errors::{undefined_variable, EvalResult};
use crate::operators::evaluate_binary;
use crate::{Environment, Value};

/// Evaluate an expression tree against the variable table.
///
/// Errors carry the span of the innermost expression that failed.
pub fn evaluate(expr: &Expr<'_>, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| match &expr.kind {
        ExprKind::Literal(text) => Value::from_literal(text).map_err(|e| e.with_span(expr.span)),
        ExprKind::Variable(name) => env
            .lookup(name)
            .ok_or_else(|| undefined_variable(name).with_span(expr.span)),
        ExprKind::Binary { left, op, right } => {
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            evaluate_binary(left, op.kind, right).map_err(|e| e.or_span(expr.span))
        }
    })
}

#[cfg(test)]
mod tests;
