//! Tests for registry construction, lookup and skip handling

use ruleweave::basetypes::NAMES;
use ruleweave::registry::{DEFAULT_SKIP_PATTERN, SKIP};
use ruleweave::{GrammarError, Registry, Repetition, RuleDef, RuleKind, Span};

use crate::common::{id_list, registry};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_builtins_come_first() {
    let reg = id_list();
    let names: Vec<_> = reg.rule_names().collect();
    assert_eq!(&names[..NAMES.len()], NAMES);
    assert_eq!(&names[NAMES.len()..], ["list", "comma", SKIP]);
    assert_eq!(reg.len(), NAMES.len() + 3);
    assert!(!reg.is_empty());
}

#[test]
fn test_synthesized_skip_rule() {
    let reg = id_list();
    let skip = reg.lookup(SKIP).unwrap();
    assert_eq!(skip.id(), reg.skip_rule());
    assert!(!skip.applies_skip());
    match skip.rule().kind() {
        RuleKind::Pattern(pattern) => assert_eq!(pattern.as_str(), DEFAULT_SKIP_PATTERN),
        other => panic!("expected a pattern, got {}", other.label()),
    }
}

#[test]
fn test_custom_skip_rule() {
    // whitespace and `#` comments
    let reg = registry([
        RuleDef::repeat("main", Repetition::new("ID")),
        RuleDef::pattern("skip", r"(?:\s|#[^\n]*)*").unwrap(),
    ]);
    let m = reg.read("a # first\nb\n# done\nc", 0);
    assert_eq!(m.as_list().unwrap().len(), 3);
    assert_eq!(reg.rule_names().filter(|n| *n == SKIP).count(), 1);
}

#[test]
fn test_unknown_reference_names_both_rules() {
    let err = Registry::new([RuleDef::optional("maybe", "nothing")]).unwrap_err();
    match err {
        GrammarError::UnknownRule {
            rule,
            referenced_by,
        } => {
            assert_eq!(rule, "nothing");
            assert_eq!(referenced_by.as_deref(), Some("maybe"));
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_bounds_rejected() {
    let err = Registry::new([RuleDef::repeat("r", Repetition::new("ID").bounds(3, Some(1)))])
        .unwrap_err();
    assert!(matches!(err, GrammarError::InvalidBounds { min: 3, max: 1, .. }));
}

#[test]
fn test_shape_index_out_of_range_rejected() {
    let err = Registry::new([RuleDef::extract_one("s", ["ID", "INT"], 2)]).unwrap_err();
    assert!(matches!(err, GrammarError::ShapeIndexOutOfRange { index: 2, len: 2, .. }));
}

#[test]
fn test_invalid_pattern_rejected() {
    let err = RuleDef::pattern("bad", "(unclosed").unwrap_err();
    assert!(matches!(err, GrammarError::InvalidPattern { ref rule, .. } if rule == "bad"));
}

// =============================================================================
// Entry rules
// =============================================================================

#[test]
fn test_main_is_default_entry() {
    let reg = registry([RuleDef::literal("first", "x"), RuleDef::literal("main", "y")]);
    assert_eq!(reg.default_entry(), "main");
    assert!(reg.read("y", 0).is_success());
}

#[test]
fn test_set_default_entry() {
    let mut reg = registry([RuleDef::literal("a", "a"), RuleDef::literal("b", "b")]);
    reg.set_default_entry("b").unwrap();
    assert_eq!(reg.default_entry(), "b");
    assert!(reg.set_default_entry("ghost").is_err());
    assert_eq!(reg.default_entry(), "b");
}

#[test]
fn test_read_rule_by_name() {
    let reg = id_list();
    let m = reg.read_rule("  x", 0, "ID").unwrap();
    assert_eq!(m.span(), Span::new(2, 3));
    assert!(matches!(reg.read_rule("x", 0, "nope"), Err(GrammarError::UnknownRule { .. })));
}

#[test]
fn test_contains_and_lookup() {
    let reg = id_list();
    assert!(reg.contains("comma"));
    assert!(reg.contains("STRING"));
    assert!(!reg.contains("Comma"));
    let comma = reg.lookup("comma").unwrap();
    assert_eq!(comma.name(), "comma");
    assert_eq!(reg.rule_name(comma.id()), Some("comma"));
    assert!(comma.read(" ,", 0).is_success());
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn test_start_past_end_fails_there() {
    let reg = id_list();
    let m = reg.read_rule("abc", 10, "ID").unwrap();
    assert!(!m.is_success());
    assert_eq!(m.span(), Span::new(10, 10));
}

#[test]
fn test_start_inside_char_fails() {
    let reg = registry([RuleDef::literal("e", "é")]);
    assert!(reg.read("é", 0).is_success());
    assert!(!reg.read("éé", 1).is_success());
}

#[test]
fn test_offsets_are_bytes() {
    let reg = id_list();
    let input = "é, b";
    // ID does not accept `é`, so the list is empty
    let m = reg.read(input, 0);
    assert!(m.is_success());
    assert!(m.is_empty());
    let m = reg.read(input, 3);
    assert_eq!(m.as_list().unwrap()[0].span(), Span::new(4, 5));
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
}
