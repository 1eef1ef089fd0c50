use insta::assert_snapshot;

use super::{report, Interpreter};
use crate::value::{self, Value, ValueKind};

fn eval(source: &str) -> String {
    let mut interp = Interpreter::new();
    match interp.run(source) {
        Ok(Some(v)) => interp.inspect(&v),
        Ok(None) => "<none>".to_owned(),
        Err(err) => report(&err, source),
    }
}

fn truthy(source: &str) -> bool {
    let mut interp = Interpreter::new();
    match interp.run(source) {
        Ok(Some(Value::Bool(b))) => b,
        other => panic!("{} did not produce a boolean: {:?}", source, other),
    }
}

#[test]
fn to_int_floors_floats() {
    assert_snapshot!(eval("2.7.to_int"), @"2");
    assert_snapshot!(eval("-2.7.to_int"), @"-3");
    assert_snapshot!(eval("3.0.to_int"), @"3");
    assert_snapshot!(eval("(-0.5).to_int"), @"-1");
}

#[test]
fn to_int_on_integer_is_identity() {
    assert_snapshot!(eval("42.to_int"), @"42");
    assert!(truthy("let n = 42; n.to_int.equal?(n)"));
}

#[test]
fn dup_returns_the_receiver_for_immediates() {
    assert!(truthy("let n = nil; n.dup.equal?(n)"));
    assert!(truthy("true.dup.equal?(true)"));
    assert!(truthy("false.dup.equal?(false)"));
    assert!(truthy("42.dup.equal?(42)"));
    assert!(truthy(":symbol_token.dup.equal?(:symbol_token)"));
    assert!(truthy("42.dup.dup.equal?(42.dup)"));
}

#[test]
fn dup_of_symbol_does_not_grow_the_symbol_table() {
    let mut interp = Interpreter::new();
    interp.run("let s = :symbol_token").unwrap();
    let before = interp.symbols().len();
    let dup = interp.run("s.dup.dup").unwrap().unwrap();
    assert_eq!(interp.symbols().len(), before);
    assert!(dup.identical(interp.get("s").unwrap()));
}

#[test]
fn string_dup_goes_through_kernel() {
    assert!(truthy("let s = \"text\"; s.dup.eql?(s)"));
    assert!(!truthy("let s = \"text\"; s.dup.equal?(s)"));
    assert!(truthy("let s = \"text\"; s.equal?(s)"));
    assert!(!truthy("\"text\".equal?(\"text\")"));
}

#[test]
fn frozen_and_nil_predicates() {
    assert!(truthy("1.5.frozen?"));
    assert!(!truthy("\"s\".frozen?"));
    assert!(truthy("nil.nil?"));
    assert!(!truthy("false.nil?"));
}

#[test]
fn float_has_no_identity_dup() {
    assert_snapshot!(eval("2.5.dup"), @r"
    error: can't dup Float (line 1, column 5)
    2.5.dup
        ^^^
    ");
}

#[test]
fn non_finite_coercion_is_an_error() {
    assert_snapshot!(eval("INFINITY.to_int"), @r"
    error: float domain error: Infinity (line 1, column 10)
    INFINITY.to_int
             ^^^^^^
    ");
    assert_snapshot!(eval("NAN.to_int"), @r"
    error: float domain error: NaN (line 1, column 5)
    NAN.to_int
        ^^^^^^
    ");
    assert_snapshot!(eval("-1e20.to_int"), @r"
    error: float -1e20 out of range of integer (line 1, column 7)
    -1e20.to_int
          ^^^^^^
    ");
}

#[test]
fn to_int_is_not_defined_for_other_kinds() {
    let mut interp = Interpreter::new();
    let err = interp.run(":sym.to_int").unwrap_err();
    assert_eq!(
        err.value_error(),
        Some(&value::Error::NoMethod {
            method: "to_int".to_owned(),
            kind: ValueKind::Symbol,
        })
    );
    assert_snapshot!(eval("nil.to_int"), @r"
    error: undefined method 'to_int' for NilClass (line 1, column 5)
    nil.to_int
        ^^^^^^
    ");
}

#[test]
fn wrong_argument_count() {
    assert_snapshot!(eval("nil.equal?"), @r"
    error: wrong number of arguments (given 0, expected 1) (line 1, column 5)
    nil.equal?
        ^^^^^^
    ");
}

#[test]
fn undefined_variable_and_parse_errors() {
    assert_snapshot!(eval("let a = 1\nb.dup"), @r"
    error: undefined local variable 'b' (line 2, column 1)
    b.dup
    ^
    ");
    assert_snapshot!(eval("1.dup(2"), @r"
    error: unexpected end of input, expected ')' (line 1, column 8)
    1.dup(2
           ^
    ");
}

#[test]
fn program_value_is_the_last_expression() {
    assert_snapshot!(eval("let x = 1.5; x.to_int; :done"), @":done");
    assert_snapshot!(eval("let x = 1"), @"<none>");
    assert_snapshot!(eval("# only a comment"), @"<none>");
}

#[test]
fn methods_can_be_overridden_per_kind() {
    let mut interp = Interpreter::new();
    interp
        .methods_mut()
        .define(ValueKind::Float, method!("dup", recv => Ok(recv.clone())));
    assert_eq!(interp.run("2.5.dup").unwrap(), Some(Value::Float(2.5)));
}
