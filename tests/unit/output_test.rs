//! Tests for the output module

use ruleweave::output::{OutputMode, ParseReport, RuleList};
use ruleweave::{Grammar, Registry};

use crate::common::{LOGIC_GRAMMAR, id_list};

fn logic() -> Registry {
    Grammar::from_toml_str(LOGIC_GRAMMAR).unwrap().to_registry().unwrap()
}

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_report_json_shape() {
    let reg = logic();
    let input = "a. b :- c.";
    let report = ParseReport::new(&reg, "main", input, &reg.read(input, 0));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["entry"], "main");
    assert_eq!(json["success"], true);
    assert_eq!(json["complete"], true);
    assert_eq!(json["input_len"], 10);
    assert_eq!(json["tree"]["result"][0]["rule"], "ID");
    assert_eq!(json["tree"]["result"][1]["rule"], "rule");
    assert_eq!(json["tree"]["result"][1]["result"]["head"]["result"], "b");
}

#[test]
fn test_human_tree_lists_fields() {
    colored::control::set_override(false);
    let reg = logic();
    let input = "b :- c, d.";
    let text = ParseReport::new(&reg, "main", input, &reg.read(input, 0)).to_human();

    assert!(text.starts_with("OK main matched 0..10"));
    assert!(text.contains("  rule [0..10]"));
    assert!(text.contains("head: ID [0..1] = \"b\""));
    assert!(text.contains("body: body [4..9]"));
}

#[test]
fn test_human_failure() {
    colored::control::set_override(false);
    let reg = id_list();
    let text = ParseReport::new(&reg, "ID", "1", &reg.read_rule("1", 0, "ID").unwrap()).to_human();
    assert_eq!(text, "FAIL ID did not match at 0\n");
}

#[test]
fn test_rule_list_json() {
    let list = RuleList::new(&id_list());
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["default_entry"], "list");
    let names: Vec<_> = json["rules"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["builtin"] == false)
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["list", "comma", "skip"]);
}
