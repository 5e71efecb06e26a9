//! Ordered choice
//!
//! Alternatives are tried in order at the same position and the first
//! success is returned as is, so the result names the alternative that
//! matched, not the choice rule.

use crate::matches::Match;
use crate::registry::Registry;
use crate::rule::RuleId;

pub(crate) fn read(
    id: RuleId,
    options: &[RuleId],
    registry: &Registry,
    input: &str,
    start: usize,
) -> Match {
    options
        .iter()
        .map(|&option| registry.read_id(option, input, start))
        .find(Match::is_success)
        .unwrap_or_else(|| Match::failure(id, start))
}
