//! Parameterized tests using test-case
//!
//! These tests run the built-in base types and value conversions over a
//! table of inputs.

use ruleweave::{Registry, RuleDef, Value, ValueKind};
use test_case::test_case;

fn read(rule: &str, input: &str) -> Option<(Value, usize)> {
    let reg = Registry::new([RuleDef::literal("unused", "")]).unwrap();
    let m = reg.read_rule(input, 0, rule).unwrap();
    m.is_success().then(|| (m.value().cloned().unwrap(), m.end()))
}

// =============================================================================
// Base types
// =============================================================================

#[test_case("INT", "42", Some((Value::Int(42), 2)) ; "plain int")]
#[test_case("INT", "-7 rest", Some((Value::Int(-7), 2)) ; "negative int")]
#[test_case("INT", "99999999999999999999", None ; "int overflow fails")]
#[test_case("INT", "abc", None ; "int rejects letters")]
#[test_case("FLOAT", "1.25", Some((Value::Float(1.25), 4)) ; "decimal float")]
#[test_case("FLOAT", "6", Some((Value::Float(6.0), 1)) ; "float accepts integer")]
#[test_case("FLOAT", "+1e2", Some((Value::Float(100.0), 4)) ; "signed exponent float")]
#[test_case("STRICTFLOAT", "6", None ; "strict float rejects integer")]
#[test_case("STRICTFLOAT", "-.25", Some((Value::Float(-0.25), 4)) ; "strict float leading dot")]
#[test_case("BOOL", "false", Some((Value::Bool(false), 5)) ; "bool false")]
#[test_case("BOOL", "True", None ; "bool is case sensitive")]
#[test_case("ID", "_tmp9 x", Some((Value::Text("_tmp9".into()), 5)) ; "id with underscore")]
#[test_case("ID", "9lives", None ; "id cannot start with digit")]
#[test_case("STRING", r#""""#, Some((Value::Text(r#""""#.into()), 2)) ; "empty string")]
#[test_case("NUMBER", "3.0", Some((Value::Float(3.0), 3)) ; "number float")]
#[test_case("NUMBER", "30", Some((Value::Int(30), 2)) ; "number int")]
#[test_case("BASETYPE", "\t\"q\"", Some((Value::Text("\"q\"".into()), 4)) ; "basetype string after tab")]
fn test_base_type(rule: &str, input: &str, expected: Option<(Value, usize)>) {
    assert_eq!(read(rule, input), expected);
}

// =============================================================================
// Value conversion
// =============================================================================

#[test_case(ValueKind::Text, "hi", Some(Value::Text("hi".into())) ; "text")]
#[test_case(ValueKind::Bool, "TRUE", Some(Value::Bool(true)) ; "bool any case")]
#[test_case(ValueKind::Bool, "yes", Some(Value::Bool(false)) ; "bool other text is false")]
#[test_case(ValueKind::Int, "12", Some(Value::Int(12)) ; "int")]
#[test_case(ValueKind::Int, "1.5", None ; "int rejects decimal")]
#[test_case(ValueKind::Float, "2.5", Some(Value::Float(2.5)) ; "float")]
#[test_case(ValueKind::Float, "x", None ; "float rejects text")]
fn test_value_conversion(kind: ValueKind, text: &str, expected: Option<Value>) {
    assert_eq!(kind.convert(text), expected);
}

// =============================================================================
// Literal matching
// =============================================================================

#[test_case("foo", "foo", 0, true ; "exact")]
#[test_case("foo", "  foo", 0, true ; "after whitespace")]
#[test_case("foo", "fo", 0, false ; "input too short")]
#[test_case("foo", "xfoo", 1, true ; "at offset")]
#[test_case("foo", "foo", 4, false ; "start past end")]
#[test_case("", "abc", 3, true ; "empty literal at end")]
fn test_literal(text: &str, input: &str, start: usize, expected: bool) {
    let reg = Registry::new([RuleDef::literal("lit", text)]).unwrap();
    assert_eq!(reg.read(input, start).is_success(), expected);
}
