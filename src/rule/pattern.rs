//! Regular-expression rules
//!
//! Patterns are anchored at the read position and may stop before the end
//! of the input. The text before the read position is invisible to the
//! pattern, so `^` matches at the read position.

use regex::Regex;

use crate::error::GrammarError;
use crate::matches::{Match, Payload};
use crate::rule::RuleId;
use crate::span::Span;
use crate::value::ValueKind;

/// A compiled, anchored pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Pattern as written
    source: String,

    /// Anchored form used for matching
    regex: Regex,

    /// Conversion applied to the matched text
    value: ValueKind,
}

impl Pattern {
    /// Compile `source` for the rule `rule`
    pub fn new(rule: &str, source: &str, value: ValueKind) -> Result<Self, GrammarError> {
        let invalid = |err| GrammarError::InvalidPattern {
            rule: rule.to_string(),
            source: err,
        };
        // Validate on its own first so a stray `)` cannot close the anchor group
        Regex::new(source).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{source})")).map_err(invalid)?;
        Ok(Self {
            source: source.to_string(),
            regex,
            value,
        })
    }

    /// Pattern as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Conversion applied to the matched text
    #[must_use]
    pub const fn value_kind(&self) -> ValueKind {
        self.value
    }

    pub(crate) fn read(&self, id: RuleId, input: &str, start: usize) -> Match {
        let Some(rest) = input.get(start..) else {
            return Match::failure(id, start);
        };
        let Some(found) = self.regex.find(rest) else {
            return Match::failure(id, start);
        };
        match self.value.convert(found.as_str()) {
            Some(value) => {
                let span = Span::new(start, start + found.end());
                Match::success(id, span, Payload::Scalar(value))
            },
            None => Match::failure(id, start),
        }
    }
}
