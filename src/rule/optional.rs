//! Optional rules

use crate::matches::Match;
use crate::registry::Registry;
use crate::rule::RuleId;

/// Return the inner match, or an empty success in its place
pub(crate) fn read(
    id: RuleId,
    inner: RuleId,
    registry: &Registry,
    input: &str,
    start: usize,
) -> Match {
    let m = registry.read_id(inner, input, start);
    if m.is_success() {
        m
    } else {
        Match::empty(id, start)
    }
}
