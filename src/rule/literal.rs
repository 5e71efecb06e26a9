//! Fixed-text rules

use crate::matches::{Match, Payload};
use crate::rule::RuleId;
use crate::span::Span;
use crate::value::Value;

/// Match `text` at exactly `start`
///
/// Fails when the input is too short, differs, or `start` is not a char
/// boundary.
pub(crate) fn read(id: RuleId, text: &str, input: &str, start: usize) -> Match {
    let found = input.get(start..).is_some_and(|rest| rest.starts_with(text));
    if !found {
        return Match::failure(id, start);
    }
    let span = Span::new(start, start + text.len());
    Match::success(id, span, Payload::Scalar(Value::Text(text.to_string())))
}
