//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::dump::{DumpResult, MatchDump};
use crate::matches::Match;
use crate::registry::Registry;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a parse
#[derive(Debug, Serialize)]
pub struct ParseReport {
    /// Entry rule used
    pub entry: String,
    /// Whether the entry rule matched
    pub success: bool,
    /// Whether the match covered the input from `start` to its end
    pub complete: bool,
    /// Input length in bytes
    pub input_len: usize,
    /// Match tree
    pub tree: MatchDump,
}

impl ParseReport {
    /// Build a report for `m`, read by `entry` over `input`
    #[must_use]
    pub fn new(registry: &Registry, entry: &str, input: &str, m: &Match) -> Self {
        Self {
            entry: entry.to_string(),
            success: m.is_success(),
            complete: m.is_success() && m.end() == input.len(),
            input_len: input.len(),
            tree: registry.dump(m),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        if self.success {
            let _ = writeln!(
                out,
                "{} {} matched {}..{} ({} of {} bytes)",
                "OK".green().bold(),
                self.entry,
                self.tree.start,
                self.tree.end,
                self.tree.end - self.tree.start,
                self.input_len
            );
            if !self.complete {
                let _ = writeln!(out, "{}", "warning: input not fully consumed".yellow());
            }
            let _ = writeln!(out);
            write_tree(&mut out, &self.tree, None, 0);
        } else {
            let _ = writeln!(
                out,
                "{} {} did not match at {}",
                "FAIL".red().bold(),
                self.entry,
                self.tree.start
            );
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn write_tree(out: &mut String, node: &MatchDump, label: Option<&str>, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = label.map(|l| format!("{}: ", l.cyan())).unwrap_or_default();
    let value = match &node.result {
        Some(DumpResult::Value(value)) => format!(" = {value}"),
        _ => String::new(),
    };
    let _ = writeln!(out, "{indent}{label}{} [{}..{}]{value}", node.rule.bold(), node.start, node.end);

    match &node.result {
        Some(DumpResult::List(items)) => {
            for item in items {
                write_tree(out, item, None, depth + 1);
            }
        },
        Some(DumpResult::Object(fields)) => {
            for (field, item) in fields {
                write_tree(out, item, Some(field), depth + 1);
            }
        },
        _ => {},
    }
}

/// Rule listing for a grammar
#[derive(Debug, Serialize)]
pub struct RuleList {
    /// Default entry rule
    pub default_entry: String,
    /// Rules in registration order
    pub rules: Vec<RuleInfo>,
}

/// Summary of one rule
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// Rule name
    pub name: String,
    /// Combinator kind
    pub kind: String,
    /// Whether the skip rule runs first
    pub skip: bool,
    /// Whether this is a built-in base type
    pub builtin: bool,
}

impl RuleList {
    /// Summarize the rules of `registry`
    #[must_use]
    pub fn new(registry: &Registry) -> Self {
        let rules = registry
            .rules()
            .map(|r| RuleInfo {
                name: r.name().to_string(),
                kind: r.rule().kind().label().to_string(),
                skip: r.applies_skip(),
                builtin: crate::basetypes::is_reserved(r.name()),
            })
            .collect();
        Self {
            default_entry: registry.default_entry().to_string(),
            rules,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Rules (default entry: {}):\n", self.default_entry);
        for rule in self.rules.iter().filter(|r| !r.builtin) {
            let skip = if rule.skip { " +skip" } else { "" };
            let _ = writeln!(out, "  {:<16} {}{skip}", rule.name, rule.kind);
        }
        let builtins: Vec<_> =
            self.rules.iter().filter(|r| r.builtin).map(|r| r.name.as_str()).collect();
        let _ = writeln!(out, "\nBuilt-in: {}", builtins.join(", "));
        out
    }
}
