//! Property-based tests for reading
//!
//! Uses proptest to check properties that hold for any input.

use proptest::prelude::*;
use ruleweave::Span;

use crate::common::id_list;

proptest! {
    /// A match never reaches outside the input or before `start`
    #[test]
    fn match_stays_in_bounds(input in "[a-z, ]{0,40}", start in 0usize..45) {
        let start = start.min(input.len());
        let reg = id_list();
        let m = reg.read(&input, start);
        prop_assert!(m.start() >= start);
        prop_assert!(m.start() <= m.end());
        prop_assert!(m.end() <= input.len());
    }

    /// Failures are empty and sit at the requested start
    #[test]
    fn failure_is_empty_at_start(input in "[0-9]{0,20}", start in 0usize..25) {
        let reg = id_list();
        let m = reg.read_rule(&input, start, "ID").unwrap();
        prop_assert!(!m.is_success());
        prop_assert_eq!(m.span(), Span::empty(start));
    }

    /// Every identifier in a comma-joined list comes back in order
    #[test]
    fn list_returns_every_identifier(ids in prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..8)) {
        let input = ids.join(", ");
        let reg = id_list();
        let m = reg.read(&input, 0);
        prop_assert!(m.is_success());
        prop_assert_eq!(m.end(), input.len());
        let found: Vec<_> = m.as_list().unwrap().iter().map(|item| item.text(&input)).collect();
        prop_assert_eq!(found, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Reading is deterministic
    #[test]
    fn reading_twice_gives_same_match(input in "[a-z,]{0,30}") {
        let reg = id_list();
        prop_assert_eq!(reg.read(&input, 0), reg.read(&input, 0));
    }
}
