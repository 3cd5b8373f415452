use super::*;
use crate::print_handler::buffer_handler;
use crate::{EvalError, EvalErrorKind};
use desrever_parse::ParseErrorKind;
use pretty_assertions::assert_eq;

fn lex(source: &str) -> TokenList {
    match desrever_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(e) => panic!("lex error: {e}"),
    }
}

/// Run `source`, returning captured output and the run result.
fn run(source: &str) -> (String, Result<Environment, Error>) {
    let tokens = lex(source);
    let handler = buffer_handler();
    let mut interpreter = Interpreter::new(&tokens, handler.clone());
    let result = interpreter.run().map(|()| interpreter.into_env());
    (handler.get_output(), result)
}

fn output(source: &str) -> String {
    match run(source) {
        (out, Ok(_)) => out,
        (_, Err(e)) => panic!("run failed: {e}"),
    }
}

#[test]
fn declaration_binds_value() {
    let (_, result) = run("tni x = 3; elbuod d = x * 1.5;");
    let Ok(env) = result else {
        panic!("run failed");
    };
    assert_eq!(env.lookup("x"), Some(Value::Int(3)));
    assert_eq!(env.lookup("d"), Some(Value::Float(4.5)));
}

#[test]
fn declared_type_not_enforced() {
    let (_, result) = run("tni c = 'a';");
    assert_eq!(result.map(|env| env.lookup("c")), Ok(Some(Value::Char('a'))));
}

#[test]
fn print_statement() {
    assert_eq!(output("prit(1 + 2); prit(eurt); prit('z');"), "3\ntrue\nz\n");
}

#[test]
fn if_else_takes_one_branch() {
    assert_eq!(output("fi (1 < 2) { prit(1); } esle { prit(2); }"), "1\n");
    assert_eq!(output("fi (2 < 1) { prit(1); } esle { prit(2); }"), "2\n");
}

#[test]
fn if_without_else() {
    assert_eq!(output("fi (eslaf) { prit(1); } prit(3);"), "3\n");
    assert_eq!(output("fi (eurt) { prit(1); } prit(3);"), "1\n3\n");
}

#[test]
fn false_branch_skips_nested_braces() {
    let source = "fi (eslaf) { fi (eurt) { prit(1); } rof (2) { prit(2); } } prit(9);";
    assert_eq!(output(source), "9\n");
}

#[test]
fn loop_replays_body() {
    assert_eq!(output("rof (3) { prit(1); } prit(0);"), "1\n1\n1\n0\n");
}

#[test]
fn zero_and_negative_counts_skip_body() {
    assert_eq!(output("rof (0) { prit(1); } prit(2);"), "2\n");
    assert_eq!(output("rof (0 - 4) { prit(1); } prit(2);"), "2\n");
}

#[test]
fn nested_loops() {
    assert_eq!(
        output("tni n = 0; rof (2) { rof (3) { tni n = n + 1; } } prit(n);"),
        "6\n"
    );
}

#[test]
fn loop_count_evaluated_once() {
    let source = "tni n = 2; rof (n) { tni n = n + 10; prit(n); }";
    assert_eq!(output(source), "12\n22\n");
}

#[test]
fn non_bool_condition() {
    let (_, result) = run("fi (1) { prit(1); }");
    let Err(Error::Eval(error)) = result else {
        panic!("expected eval error");
    };
    assert_eq!(error.kind, EvalErrorKind::NonBoolCondition { found: "int" });
    assert_eq!(error.span, Some(Span::new(4, 5)));
}

#[test]
fn non_int_loop_count() {
    let (out, result) = run("rof (2.0) { prit(1); }");
    assert_eq!(out, "");
    assert!(matches!(
        result,
        Err(Error::Eval(EvalError {
            kind: EvalErrorKind::NonIntLoopCount { found: "double" },
            ..
        }))
    ));
}

#[test]
fn unexpected_statement() {
    let (_, result) = run("5;");
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError {
            kind: ParseErrorKind::UnexpectedStatement { .. },
            ..
        }))
    ));
}

#[test]
fn missing_semicolon() {
    let (_, result) = run("prit(1)");
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Semicolon,
                ..
            },
            ..
        }))
    ));
}

#[test]
fn unclosed_block_fails_before_running_it() {
    let (out, result) = run("prit(0); fi (eurt) { prit(1);");
    assert_eq!(out, "0\n");
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError {
            kind: ParseErrorKind::UnclosedBlock,
            ..
        }))
    ));
}

#[test]
fn output_before_error_is_kept() {
    let (out, result) = run("prit(1); prit(y); prit(2);");
    assert_eq!(out, "1\n");
    assert!(matches!(
        result,
        Err(Error::Eval(EvalError {
            kind: EvalErrorKind::UndefinedVariable { .. },
            ..
        }))
    ));
}

#[test]
fn deeply_nested_blocks() {
    let depth = 500;
    let source = format!(
        "{}prit(1);{}",
        "fi (eurt) { ".repeat(depth),
        " }".repeat(depth)
    );
    assert_eq!(output(&source), "1\n");
}
