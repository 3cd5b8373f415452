use super::*;
use crate::errors::{EvalError, EvalErrorKind};
use desrever_ir::{Span, TokenList};
use pretty_assertions::assert_eq;

fn lex(source: &str) -> TokenList {
    match desrever_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(e) => panic!("lex error: {e}"),
    }
}

fn eval_in(source: &str, env: &Environment) -> Result<Value, EvalError> {
    let tokens = lex(source);
    match desrever_parse::parse_expression(&tokens) {
        Ok(expr) => evaluate(&expr, env),
        Err(e) => panic!("parse error: {e}"),
    }
}

fn eval(source: &str) -> Result<Value, EvalError> {
    eval_in(source, &Environment::new())
}

#[test]
fn literals() {
    assert_eq!(eval("42"), Ok(Value::Int(42)));
    assert_eq!(eval("4.5"), Ok(Value::Float(4.5)));
    assert_eq!(eval("eurt"), Ok(Value::Bool(true)));
    assert_eq!(eval("'q'"), Ok(Value::Char('q')));
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(eval("1 + 2"), Ok(Value::Int(3)));
    assert_eq!(eval("1 + 2.0"), Ok(Value::Float(3.0)));
    assert_eq!(eval("2 + 3 * 4"), Ok(Value::Int(14)));
    assert_eq!(eval("(2 + 3) * 4"), Ok(Value::Int(20)));
    assert_eq!(eval("10 - 2 - 3"), Ok(Value::Int(5)));
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(eval("1 < 2"), Ok(Value::Bool(true)));
    assert_eq!(eval("1 + 1 == 2"), Ok(Value::Bool(true)));
    assert_eq!(eval("eurt dna eslaf"), Ok(Value::Bool(false)));
    assert_eq!(eval("eurt ro eslaf == eurt"), Ok(Value::Bool(true)));
}

#[test]
fn variables() {
    let mut env = Environment::new();
    env.define("x", Value::Int(3));
    assert_eq!(eval_in("x", &env), Ok(Value::Int(3)));
    assert_eq!(eval_in("x * x + 1", &env), Ok(Value::Int(10)));
}

#[test]
fn undefined_variable_has_span() {
    let err = eval("1 + y");
    assert_eq!(
        err.map_err(|e| (e.kind, e.span)),
        Err((
            EvalErrorKind::UndefinedVariable {
                name: "y".to_string()
            },
            Some(Span::new(4, 5))
        ))
    );
}

#[test]
fn division_by_zero_spans_the_operation() {
    let Err(error) = eval("1 + 5 / 0") else {
        panic!("expected division by zero");
    };
    assert_eq!(error.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(error.span, Some(Span::new(4, 9)));
}

#[test]
fn float_division_by_zero() {
    assert!(matches!(
        eval("5.0 / 0.0").map_err(|e| e.kind),
        Err(EvalErrorKind::DivisionByZero)
    ));
}

#[test]
fn both_operands_always_evaluated() {
    // No short-circuit: the undefined right operand is still looked up.
    assert!(matches!(
        eval("eslaf dna missing").map_err(|e| e.kind),
        Err(EvalErrorKind::UndefinedVariable { .. })
    ));
}

#[test]
fn deep_tree() {
    let source = vec!["1"; 1_000].join(" + ");
    assert_eq!(eval(&source), Ok(Value::Int(1_000)));
}
