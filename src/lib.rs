//! ruleweave - Composable grammar rules for parsing text into match trees
//!
//! This library provides a registry of named rules (literals, anchored
//! patterns, sequences, choices, optionals and repetitions) that reference
//! each other by name, and a reader that turns input text into a tree of
//! [`Match`] values carrying typed payloads.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod basetypes;
pub mod config;
pub mod dump;
pub mod error;
pub mod matches;
pub mod output;
pub mod registry;
pub mod rule;
pub mod span;
pub mod value;

pub use config::Grammar;
pub use dump::MatchDump;
pub use error::{ConfigError, GrammarError};
pub use matches::{Match, Payload};
pub use registry::{Registry, RuleRef};
pub use rule::{Pattern, Repetition, Rule, RuleDef, RuleId, RuleKind, Sequence, Shape};
pub use span::Span;
pub use value::{Value, ValueKind};
