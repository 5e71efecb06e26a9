//! Match results
//!
//! A [`Match`] is the outcome of one attempt by one rule at one position. It
//! carries the rule that made the attempt, the span it covered and a payload
//! whose shape depends on that rule:
//!
//! - leaf rules produce a [`Payload::Scalar`]
//! - collecting sequences and repetitions produce a [`Payload::List`]
//! - object-shaped sequences produce a [`Payload::Object`]
//! - failures, optional misses and empty repetitions carry [`Payload::Absent`]
//!
//! A failed match is always zero-width at the position where the attempt
//! was made, and never has a payload.

use std::collections::BTreeMap;

use crate::rule::RuleId;
use crate::span::Span;
use crate::value::Value;

/// Semantic content of a match
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// Nothing (failure, or an empty success)
    #[default]
    Absent,
    /// A parsed primitive
    Scalar(Value),
    /// Ordered child matches
    List(Vec<Match>),
    /// Child matches keyed by field name
    Object(BTreeMap<String, Match>),
}

impl Payload {
    /// Check if the payload is absent
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Outcome of one match attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    success: bool,
    span: Span,
    rule: RuleId,
    payload: Payload,
}

impl Match {
    /// A successful match
    #[must_use]
    pub const fn success(rule: RuleId, span: Span, payload: Payload) -> Self {
        Self {
            success: true,
            span,
            rule,
            payload,
        }
    }

    /// A failed attempt at `at`
    #[must_use]
    pub const fn failure(rule: RuleId, at: usize) -> Self {
        Self {
            success: false,
            span: Span::empty(at),
            rule,
            payload: Payload::Absent,
        }
    }

    /// A zero-width success with no payload
    #[must_use]
    pub const fn empty(rule: RuleId, at: usize) -> Self {
        Self::success(rule, Span::empty(at), Payload::Absent)
    }

    /// Same rule and payload over a different span and outcome
    #[must_use]
    pub fn copy_with(&self, start: usize, end: usize, success: bool) -> Self {
        self.clone().respan(start, end, success)
    }

    pub(crate) fn respan(self, start: usize, end: usize, success: bool) -> Self {
        Self {
            success,
            span: Span::new(start, end),
            ..self
        }
    }

    /// Whether the rule matched
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Span covered by the match
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Start offset
    #[must_use]
    pub const fn start(&self) -> usize {
        self.span.start
    }

    /// End offset (exclusive)
    #[must_use]
    pub const fn end(&self) -> usize {
        self.span.end
    }

    /// Check if the match consumed no input
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Rule that produced this match
    #[must_use]
    pub const fn rule(&self) -> RuleId {
        self.rule
    }

    /// Semantic payload
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Take ownership of the payload
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Scalar payload, if any
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// List payload, if any
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match &self.payload {
            Payload::List(items) => Some(items),
            _ => None,
        }
    }

    /// Object payload, if any
    #[must_use]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match &self.payload {
            Payload::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Named field of an object payload
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        self.as_object().and_then(|fields| fields.get(name))
    }

    /// Source text covered by the match
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        self.span.slice(input).unwrap_or_default()
    }
}
