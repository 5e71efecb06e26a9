//! Diagnostic projection of match trees
//!
//! Turns a [`Match`] and everything nested in its payload into a plain,
//! serializable tree. Nothing here takes part in matching.
//!
//! ```json
//! {
//!   "success": true,
//!   "rule": "rule",
//!   "start": 0,
//!   "end": 16,
//!   "result": { "head": { "success": true, "rule": "ID", ... } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matches::{Match, Payload};
use crate::registry::Registry;
use crate::value::Value;

/// Serializable view of one match
///
/// `result` is `null` whenever the payload is absent, including failed
/// matches and empty repetitions; it is never an empty array or object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDump {
    /// Whether the rule matched
    pub success: bool,
    /// Name of the producing rule
    pub rule: String,
    /// Start offset
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Payload, `null` when absent
    #[serde(default)]
    pub result: Option<DumpResult>,
}

/// Serializable payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DumpResult {
    /// A primitive
    Value(Value),
    /// Nested matches, in order
    List(Vec<MatchDump>),
    /// Nested matches by field
    Object(BTreeMap<String, MatchDump>),
}

impl MatchDump {
    /// Project `m`, naming rules through `registry`
    #[must_use]
    pub fn new(registry: &Registry, m: &Match) -> Self {
        let result = match m.payload() {
            Payload::Absent => None,
            Payload::Scalar(value) => Some(DumpResult::Value(value.clone())),
            Payload::List(items) => {
                Some(DumpResult::List(items.iter().map(|item| Self::new(registry, item)).collect()))
            },
            Payload::Object(fields) => Some(DumpResult::Object(
                fields.iter().map(|(k, v)| (k.clone(), Self::new(registry, v))).collect(),
            )),
        };
        Self {
            success: m.is_success(),
            rule: registry.rule_name(m.rule()).unwrap_or("<unknown>").to_string(),
            start: m.start(),
            end: m.end(),
            result,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Generic JSON value
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Number of nodes in the tree
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + match &self.result {
            Some(DumpResult::List(items)) => items.iter().map(Self::node_count).sum(),
            Some(DumpResult::Object(fields)) => fields.values().map(Self::node_count).sum(),
            _ => 0,
        }
    }
}

impl Registry {
    /// Diagnostic tree for `m`
    #[must_use]
    pub fn dump(&self, m: &Match) -> MatchDump {
        MatchDump::new(self, m)
    }
}
