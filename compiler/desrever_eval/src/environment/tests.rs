use super::*;
use pretty_assertions::assert_eq;

#[test]
fn define_and_lookup() {
    let mut env = Environment::new();
    assert!(env.is_empty());
    env.define("x", Value::Int(3));
    assert_eq!(env.lookup("x"), Some(Value::Int(3)));
    assert!(env.contains("x"));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn redefinition_overwrites() {
    let mut env = Environment::new();
    env.define("x", Value::Int(3));
    env.define("x", Value::Char('c'));
    assert_eq!(env.lookup("x"), Some(Value::Char('c')));
    assert_eq!(env.len(), 1);
}

#[test]
fn sorted_bindings_orders_by_name() {
    let mut env = Environment::new();
    env.define("zeta", Value::Bool(true));
    env.define("alpha", Value::Float(1.5));
    env.define("mid", Value::Int(0));
    assert_eq!(
        env.sorted_bindings(),
        vec![
            ("alpha", Value::Float(1.5)),
            ("mid", Value::Int(0)),
            ("zeta", Value::Bool(true)),
        ]
    );
}
