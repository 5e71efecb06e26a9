//! Configuration errors
//!
//! These are raised while a grammar is being assembled or linked, never while
//! matching. A rule that cannot match is reported through
//! [`Match::success`](crate::Match::success), not through these types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that make a grammar unusable
#[derive(Debug, Error)]
pub enum GrammarError {
    /// No user rules were supplied
    #[error("a grammar requires at least one rule")]
    EmptyGrammar,

    /// A user rule tried to take a built-in base type name
    #[error("rule name {0:?} is reserved for a built-in base type")]
    ReservedName(String),

    /// Two user rules share a name
    #[error("rule name {0:?} is declared more than once")]
    DuplicateName(String),

    /// A rule refers to a name that nothing declares
    #[error("unknown rule {rule:?}{}", referenced_by.as_ref().map(|by| format!(" (referenced by {by:?})")).unwrap_or_default())]
    UnknownRule {
        /// The missing name
        rule: String,
        /// The rule holding the dangling reference, if any
        referenced_by: Option<String>,
    },

    /// A pattern rule was given text the regex engine rejects
    #[error("invalid pattern for rule {rule:?}: {source}")]
    InvalidPattern {
        /// Rule being constructed
        rule: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A repetition whose lower bound exceeds its upper bound
    #[error("invalid bounds for rule {rule:?}: min {min} > max {max}")]
    InvalidBounds {
        /// Repetition rule
        rule: String,
        /// Lower bound
        min: usize,
        /// Upper bound
        max: usize,
    },

    /// A sequence shaping index that does not address one of its items
    #[error("rule {rule:?} extracts item {index}, but the sequence has {len} item(s)")]
    ShapeIndexOutOfRange {
        /// Sequence rule
        rule: String,
        /// Offending index
        index: usize,
        /// Number of items in the sequence
        len: usize,
    },
}

impl GrammarError {
    pub(crate) fn unknown(rule: &str, referenced_by: Option<&str>) -> Self {
        Self::UnknownRule {
            rule: rule.to_string(),
            referenced_by: referenced_by.map(str::to_string),
        }
    }
}

/// Errors raised while loading a grammar file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Grammar file could not be read
    #[error("cannot read grammar file {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Grammar file is not valid TOML or has the wrong shape
    #[error("invalid grammar file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A sequence entry declares more than one shaping key
    #[error("sequence {0:?} sets more than one of extract, extract_some and fields")]
    ConflictingShape(String),

    /// The declared rules do not form a valid grammar
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}
