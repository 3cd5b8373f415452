use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(
        integer_overflow("multiplication").to_string(),
        "integer overflow in multiplication"
    );
    assert_eq!(
        binary_type_mismatch(TokenKind::And, Value::Int(1), Value::Bool(true)).to_string(),
        "cannot apply `dna` to int and bool"
    );
    assert_eq!(
        undefined_variable("y").to_string(),
        "undefined variable `y`"
    );
    assert_eq!(invalid_literal("'ab'").to_string(), "invalid literal `'ab'`");
    assert_eq!(
        non_bool_condition(Value::Int(1)).to_string(),
        "condition must be bool, found int"
    );
    assert_eq!(
        non_int_loop_count(Value::Float(2.0)).to_string(),
        "loop count must be int, found double"
    );
    assert_eq!(
        unsupported_operator(TokenKind::Eq).to_string(),
        "`=` is not a binary operator"
    );
}

#[test]
fn factories_start_without_span() {
    assert_eq!(division_by_zero().span, None);
}

#[test]
fn or_span_keeps_innermost() {
    let inner = Span::new(4, 5);
    let outer = Span::new(0, 9);
    let error = undefined_variable("x").or_span(inner).or_span(outer);
    assert_eq!(error.span, Some(inner));
}

#[test]
fn with_span_replaces() {
    let error = division_by_zero()
        .with_span(Span::new(1, 2))
        .with_span(Span::new(3, 4));
    assert_eq!(error.span, Some(Span::new(3, 4)));
}
