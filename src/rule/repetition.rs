//! Bounded repetition
//!
//! An element is read once, then repeatedly as `separator element` (or just
//! `element` when there is no separator) until a pair fails, the upper bound
//! is reached, or a pair consumes no input. Fewer occurrences than the lower
//! bound fail the whole repetition at its start, discarding what was read.

use crate::error::GrammarError;
use crate::matches::{Match, Payload};
use crate::registry::Registry;
use crate::rule::RuleId;
use crate::span::Span;

/// Repetition settings, with dependencies of type `R`
#[derive(Debug, Clone)]
pub struct Repetition<R> {
    pub(crate) element: R,
    pub(crate) separator: Option<R>,
    pub(crate) min: usize,
    pub(crate) max: Option<usize>,
    pub(crate) collapse_single: bool,
    pub(crate) retain_separators: bool,
}

impl Repetition<String> {
    /// Zero or more `element`, no separator
    #[must_use]
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            separator: None,
            min: 0,
            max: None,
            collapse_single: false,
            retain_separators: false,
        }
    }

    /// One or more `element`
    #[must_use]
    pub fn one_or_more(element: impl Into<String>) -> Self {
        Self::new(element).min(1)
    }

    /// Read `separator` between elements
    #[must_use]
    pub fn separated_by(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }
}

impl<R> Repetition<R> {
    /// Set the inclusive lower bound
    #[must_use]
    pub const fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Set the inclusive upper bound
    #[must_use]
    pub const fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both bounds; `None` leaves the upper bound open
    #[must_use]
    pub const fn bounds(mut self, min: usize, max: Option<usize>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Return the element's own match when at most one occurrence is allowed
    #[must_use]
    pub const fn collapse_single(mut self, collapse: bool) -> Self {
        self.collapse_single = collapse;
        self
    }

    /// Keep separators as `[separator, element]` pairs
    #[must_use]
    pub const fn retain_separators(mut self, retain: bool) -> Self {
        self.retain_separators = retain;
        self
    }

    /// Element rule
    #[must_use]
    pub const fn element(&self) -> &R {
        &self.element
    }

    /// Separator rule, if any
    #[must_use]
    pub const fn separator(&self) -> Option<&R> {
        self.separator.as_ref()
    }

    /// Inclusive lower bound
    #[must_use]
    pub const fn min_count(&self) -> usize {
        self.min
    }

    /// Inclusive upper bound, `None` when unbounded
    #[must_use]
    pub const fn max_count(&self) -> Option<usize> {
        self.max
    }

    pub(crate) fn validate(&self, rule: &str) -> Result<(), GrammarError> {
        match self.max {
            Some(max) if self.min > max => Err(GrammarError::InvalidBounds {
                rule: rule.to_string(),
                min: self.min,
                max,
            }),
            _ => Ok(()),
        }
    }
}

impl Repetition<RuleId> {
    pub(crate) fn read(&self, id: RuleId, registry: &Registry, input: &str, start: usize) -> Match {
        if self.max == Some(0) {
            return Match::empty(id, start);
        }

        let first = registry.read_id(self.element, input, start);
        if !first.is_success() {
            return if self.min == 0 {
                Match::empty(id, start)
            } else {
                Match::failure(id, start)
            };
        }
        if self.collapse_single && self.max == Some(1) {
            return first;
        }

        let mut position = first.end();
        let mut items = vec![first];
        while self.max.is_none_or(|max| items.len() < max) {
            let Some(next) = self.read_next(id, registry, input, position) else {
                break;
            };
            if next.end() > position {
                position = next.end();
                items.push(next);
                continue;
            }
            // A step that consumes nothing repeats identically from here on:
            // count it up to `max`, or up to `min` when unbounded
            let target = self.max.unwrap_or(self.min);
            while items.len() < target {
                items.push(next.clone());
            }
            break;
        }

        if items.len() < self.min {
            return Match::failure(id, start);
        }
        Match::success(id, Span::new(start, position), Payload::List(items))
    }

    /// One `separator element` step from `position`
    fn read_next(
        &self,
        id: RuleId,
        registry: &Registry,
        input: &str,
        position: usize,
    ) -> Option<Match> {
        let separator = match self.separator {
            Some(sep) => {
                let m = registry.read_id(sep, input, position);
                if !m.is_success() {
                    return None;
                }
                Some(m)
            },
            None => None,
        };
        let at = separator.as_ref().map_or(position, Match::end);
        let element = registry.read_id(self.element, input, at);
        if !element.is_success() {
            return None;
        }

        match separator {
            Some(sep) if self.retain_separators => {
                let span = Span::new(position, element.end());
                Some(Match::success(id, span, Payload::List(vec![sep, element])))
            },
            _ => Some(element),
        }
    }
}
