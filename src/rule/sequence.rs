//! Sequence rules
//!
//! A sequence threads the read position through its items in order. The
//! first failing item fails the whole sequence at its start position and
//! everything read so far is dropped. On success the children are reshaped
//! according to the sequence's [`Shape`].

use std::collections::BTreeMap;

use crate::error::GrammarError;
use crate::matches::{Match, Payload};
use crate::registry::Registry;
use crate::rule::RuleId;
use crate::span::Span;

/// How a successful sequence presents its children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Shape {
    /// Every child match, in order
    #[default]
    CollectAll,
    /// The payload of one child, stretched to the end of the sequence
    ExtractOne(usize),
    /// The children at these indices, in this order (repeats allowed)
    ExtractSome(Vec<usize>),
    /// Children keyed by field name, as `(index, field)` pairs
    Object(Vec<(usize, String)>),
}

impl Shape {
    fn indices(&self) -> Vec<usize> {
        match self {
            Self::CollectAll => Vec::new(),
            Self::ExtractOne(i) => vec![*i],
            Self::ExtractSome(indices) => indices.clone(),
            Self::Object(fields) => fields.iter().map(|(i, _)| *i).collect(),
        }
    }

    fn build(&self, id: RuleId, span: Span, children: Vec<Match>) -> Match {
        match self {
            Self::CollectAll => Match::success(id, span, Payload::List(children)),
            Self::ExtractOne(index) => match children.into_iter().nth(*index) {
                Some(inner) => {
                    let inner_start = inner.start();
                    inner.respan(inner_start, span.end, true)
                },
                None => Match::failure(id, span.start),
            },
            Self::ExtractSome(indices) => {
                let picked = indices.iter().filter_map(|&i| children.get(i).cloned()).collect();
                Match::success(id, span, Payload::List(picked))
            },
            Self::Object(fields) => {
                let object: BTreeMap<String, Match> = fields
                    .iter()
                    .filter_map(|(i, field)| children.get(*i).map(|m| (field.clone(), m.clone())))
                    .collect();
                Match::success(id, span, Payload::Object(object))
            },
        }
    }
}

/// Ordered items plus a result shape
#[derive(Debug, Clone)]
pub struct Sequence<R> {
    pub(crate) items: Vec<R>,
    pub(crate) shape: Shape,
}

impl<R> Sequence<R> {
    /// Items, in matching order
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Result shape
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn validate(&self, rule: &str) -> Result<(), GrammarError> {
        let len = self.items.len();
        match self.shape.indices().into_iter().find(|&i| i >= len) {
            Some(index) => Err(GrammarError::ShapeIndexOutOfRange {
                rule: rule.to_string(),
                index,
                len,
            }),
            None => Ok(()),
        }
    }
}

impl Sequence<RuleId> {
    pub(crate) fn read(&self, id: RuleId, registry: &Registry, input: &str, start: usize) -> Match {
        let mut children = Vec::with_capacity(self.items.len());
        let mut position = start;
        for &item in &self.items {
            let m = registry.read_id(item, input, position);
            if !m.is_success() {
                return Match::failure(id, start);
            }
            position = m.end();
            children.push(m);
        }
        self.shape.build(id, Span::new(start, position), children)
    }
}
