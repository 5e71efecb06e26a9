//! Grammar files
//!
//! Grammars can be declared in TOML as an array of `[[rule]]` tables. Each
//! table has a `name`, a `kind` and the keys for that kind, plus an optional
//! `skip` flag (leaves default to `true`, combinators to `false`):
//!
//! ```toml
//! entry = "main"
//!
//! [[rule]]
//! name = "main"
//! kind = "repeat"
//! element = "item"
//!
//! [[rule]]
//! name = "item"
//! kind = "choice"
//! options = ["fact", "rule"]
//!
//! [[rule]]
//! name = "fact"
//! kind = "sequence"
//! items = ["ID", "dot"]
//! extract = 0
//!
//! [[rule]]
//! name = "dot"
//! kind = "literal"
//! text = "."
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::registry::Registry;
use crate::rule::{Repetition, RuleDef, Shape};
use crate::value::ValueKind;

/// A grammar as written in a grammar file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grammar {
    /// Default entry rule, overriding `main` / first rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Rule declarations, in order
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleEntry>,
}

/// One `[[rule]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Rule name
    pub name: String,
    /// Whether the skip rule runs first (kind default when omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
    /// Kind-specific settings
    #[serde(flatten)]
    pub spec: RuleSpec,
}

/// Kind-specific rule settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    /// Fixed text
    Literal {
        /// Text to match
        text: String,
    },
    /// Anchored regular expression
    Pattern {
        /// Regular expression
        regex: String,
        /// Conversion of the matched text
        #[serde(default)]
        value: ValueKind,
    },
    /// Ordered items; at most one of the shaping keys may be set
    Sequence {
        /// Item rule names
        items: Vec<String>,
        /// Keep only this item's payload
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extract: Option<usize>,
        /// Keep these items
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extract_some: Option<Vec<usize>>,
        /// Name items: field name to item index
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fields: Option<BTreeMap<String, usize>>,
    },
    /// Alternatives tried in order
    Choice {
        /// Alternative rule names
        options: Vec<String>,
    },
    /// Optional inner rule
    Optional {
        /// Inner rule name
        inner: String,
    },
    /// Bounded repetition
    Repeat {
        /// Element rule name
        element: String,
        /// Separator rule name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        separator: Option<String>,
        /// Inclusive lower bound
        #[serde(default)]
        min: usize,
        /// Inclusive upper bound, unbounded when omitted
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        /// Return the element's own match when `max` is 1
        #[serde(default)]
        collapse_single: bool,
        /// Keep separators as `[separator, element]` pairs
        #[serde(default)]
        retain_separators: bool,
    },
}

impl RuleEntry {
    /// Convert to an unlinked rule definition
    pub fn to_def(&self) -> Result<RuleDef, ConfigError> {
        let name = self.name.as_str();
        let def = match &self.spec {
            RuleSpec::Literal { text } => RuleDef::literal(name, text.as_str()),
            RuleSpec::Pattern { regex, value } => RuleDef::pattern_as(name, regex, *value)?,
            RuleSpec::Sequence {
                items,
                extract,
                extract_some,
                fields,
            } => {
                let shape = match (extract, extract_some, fields) {
                    (None, None, None) => Shape::CollectAll,
                    (Some(index), None, None) => Shape::ExtractOne(*index),
                    (None, Some(indices), None) => Shape::ExtractSome(indices.clone()),
                    (None, None, Some(fields)) => Shape::Object(
                        fields.iter().map(|(field, index)| (*index, field.clone())).collect(),
                    ),
                    _ => return Err(ConfigError::ConflictingShape(self.name.clone())),
                };
                RuleDef::shaped(name, items.iter().map(String::as_str), shape)
            },
            RuleSpec::Choice { options } => RuleDef::choice(name, options.iter().map(String::as_str)),
            RuleSpec::Optional { inner } => RuleDef::optional(name, inner.as_str()),
            RuleSpec::Repeat {
                element,
                separator,
                min,
                max,
                collapse_single,
                retain_separators,
            } => {
                let mut rep = Repetition::new(element.as_str())
                    .bounds(*min, *max)
                    .collapse_single(*collapse_single)
                    .retain_separators(*retain_separators);
                if let Some(separator) = separator {
                    rep = rep.separated_by(separator.as_str());
                }
                RuleDef::repeat(name, rep)
            },
        };
        Ok(match self.skip {
            Some(skip) => def.with_skip(skip),
            None => def,
        })
    }
}

impl Grammar {
    /// Parse a grammar from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a grammar file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded grammar file {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Rule definitions, in declaration order
    pub fn to_defs(&self) -> Result<Vec<RuleDef>, ConfigError> {
        self.rules.iter().map(RuleEntry::to_def).collect()
    }

    /// Build and link a registry for this grammar
    pub fn to_registry(&self) -> Result<Registry, ConfigError> {
        let mut registry = Registry::new(self.to_defs()?)?;
        if let Some(entry) = &self.entry {
            registry.set_default_entry(entry)?;
        }
        Ok(registry)
    }
}
