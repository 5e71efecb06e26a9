//! Tests for loading grammars from TOML

use ruleweave::config::RuleSpec;
use ruleweave::{ConfigError, Grammar, GrammarError, Value};

use crate::common::{GrammarFile, LOGIC_GRAMMAR};

#[test]
fn test_load_from_file() {
    let file = GrammarFile::new(LOGIC_GRAMMAR);
    let grammar = Grammar::load(file.path()).unwrap();
    assert_eq!(grammar.rules.len(), 8);
    assert_eq!(grammar.rules[0].name, "main");
}

#[test]
fn test_logic_program() {
    let registry = Grammar::from_toml_str(LOGIC_GRAMMAR).unwrap().to_registry().unwrap();
    let input = "parent. child :- parent, ready.";
    let m = registry.read(input, 0);
    assert!(m.is_success());
    assert_eq!(m.end(), input.len());

    let clauses = m.as_list().unwrap();
    assert_eq!(clauses[0].value(), Some(&Value::Text("parent".into())));
    assert_eq!(clauses[1].field("head").unwrap().text(input), "child");
    let body: Vec<_> =
        clauses[1].field("body").unwrap().as_list().unwrap().iter().map(|b| b.text(input)).collect();
    assert_eq!(body, ["parent", "ready"]);
}

#[test]
fn test_empty_body_rejected_by_min() {
    let registry = Grammar::from_toml_str(LOGIC_GRAMMAR).unwrap().to_registry().unwrap();
    let m = registry.read_rule("h :- .", 0, "rule").unwrap();
    assert!(!m.is_success());
}

#[test]
fn test_skip_override() {
    let grammar = Grammar::from_toml_str(
        r#"
[[rule]]
name = "tight"
kind = "literal"
text = "x"
skip = false
"#,
    )
    .unwrap();
    assert_eq!(grammar.rules[0].skip, Some(false));
    let registry = grammar.to_registry().unwrap();
    assert!(registry.read("x", 0).is_success());
    assert!(!registry.read(" x", 0).is_success());
}

#[test]
fn test_repeat_keys() {
    let grammar = Grammar::from_toml_str(
        r#"
[[rule]]
name = "pair"
kind = "repeat"
element = "INT"
min = 2
max = 2
"#,
    )
    .unwrap();
    assert!(matches!(
        grammar.rules[0].spec,
        RuleSpec::Repeat { min: 2, max: Some(2), collapse_single: false, .. }
    ));
    let registry = grammar.to_registry().unwrap();
    assert!(registry.read("1 2", 0).is_success());
    assert!(!registry.read("1", 0).is_success());
}

#[test]
fn test_custom_skip_from_file() {
    let grammar = Grammar::from_toml_str(
        r#"
[[rule]]
name = "words"
kind = "repeat"
element = "ID"

[[rule]]
name = "skip"
kind = "pattern"
regex = "[ ;]*"
"#,
    )
    .unwrap();
    let registry = grammar.to_registry().unwrap();
    let m = registry.read("a;;b c", 0);
    assert_eq!(m.as_list().map(<[ruleweave::Match]>::len), Some(3));
}

#[test]
fn test_unknown_reference_in_file() {
    let grammar = Grammar::from_toml_str(
        "[[rule]]\nname = \"main\"\nkind = \"optional\"\ninner = \"missing\"\n",
    )
    .unwrap();
    let err = grammar.to_registry().unwrap_err();
    assert!(matches!(err, ConfigError::Grammar(GrammarError::UnknownRule { .. })));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_bad_regex_in_file() {
    let grammar =
        Grammar::from_toml_str("[[rule]]\nname = \"bad\"\nkind = \"pattern\"\nregex = \"[\"\n")
            .unwrap();
    assert!(matches!(
        grammar.to_registry(),
        Err(ConfigError::Grammar(GrammarError::InvalidPattern { .. }))
    ));
}

#[test]
fn test_missing_required_key() {
    let err = Grammar::from_toml_str("[[rule]]\nname = \"lit\"\nkind = \"literal\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}
