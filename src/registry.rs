//! Rule registry and linker
//!
//! A [`Registry`] is built once from a list of [`RuleDef`]s:
//!
//! 1. the built-in base types are registered
//! 2. user rules are registered, rejecting reserved and duplicate names
//! 3. a default `skip` rule (optional whitespace) is added if none was given
//! 4. every rule is linked, turning dependency names into [`RuleId`]s
//!
//! The default entry rule is `main` if declared, otherwise the first user
//! rule. After construction only the default entry can change; the rule graph
//! itself is frozen, so a registry can be shared between threads and read
//! concurrently.
//!
//! # Examples
//!
//! ```
//! use ruleweave::{Registry, Repetition, RuleDef};
//!
//! let registry = Registry::new([
//!     RuleDef::repeat("list", Repetition::new("ID").separated_by("comma")),
//!     RuleDef::literal("comma", ","),
//! ])
//! .unwrap();
//!
//! let m = registry.read("a, b, c", 0);
//! assert!(m.is_success());
//! assert_eq!(m.as_list().unwrap().len(), 3);
//! ```

use std::collections::HashMap;

use crate::basetypes;
use crate::error::GrammarError;
use crate::matches::Match;
use crate::rule::{Rule, RuleDef, RuleId};

/// Name of the preferred default entry rule
pub const MAIN: &str = "main";

/// Name of the rule run before every rule that applies skip
pub const SKIP: &str = "skip";

/// Pattern of the skip rule added when a grammar declares none
pub const DEFAULT_SKIP_PATTERN: &str = r"\s*";

/// A linked grammar
pub struct Registry {
    rules: Vec<Rule>,
    index: HashMap<String, RuleId>,
    skip: RuleId,
    default_entry: RuleId,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("rules", &format!("{} rule(s)", self.rules.len()))
            .field("default_entry", &self.default_entry())
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Register and link `defs` together with the built-in base types
    pub fn new<I>(defs: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = RuleDef>,
    {
        let mut pending = basetypes::definitions()?;
        let mut index: HashMap<String, RuleId> = pending
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name().to_string(), RuleId(i)))
            .collect();

        let first_user = RuleId(pending.len());
        for def in defs {
            if basetypes::is_reserved(def.name()) {
                return Err(GrammarError::ReservedName(def.name().to_string()));
            }
            if index.contains_key(def.name()) {
                return Err(GrammarError::DuplicateName(def.name().to_string()));
            }
            index.insert(def.name().to_string(), RuleId(pending.len()));
            pending.push(def);
        }
        if pending.len() == first_user.0 {
            return Err(GrammarError::EmptyGrammar);
        }

        let default_entry = index.get(MAIN).copied().unwrap_or(first_user);
        let skip = if let Some(&id) = index.get(SKIP) {
            id
        } else {
            log::debug!("no {SKIP:?} rule declared, skipping whitespace by default");
            let id = RuleId(pending.len());
            pending.push(RuleDef::pattern(SKIP, DEFAULT_SKIP_PATTERN)?.with_skip(false));
            index.insert(SKIP.to_string(), id);
            id
        };

        let rules = pending
            .into_iter()
            .map(|def| def.link(|name| index.get(name).copied()))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "linked {} rule(s) ({} user), default entry {:?}",
            rules.len(),
            rules.len() - first_user.0,
            rules[default_entry.0].name()
        );

        Ok(Self {
            rules,
            index,
            skip,
            default_entry,
        })
    }

    /// Read from `start` with the default entry rule
    ///
    /// Failure to match is reported in the returned [`Match`], never as an
    /// error.
    #[must_use]
    pub fn read(&self, input: &str, start: usize) -> Match {
        log::trace!("reading {:?} at {start}", self.default_entry());
        self.read_id(self.default_entry, input, start)
    }

    /// Read from `start` with the rule named `rule`
    ///
    /// Only an unknown rule name is an error.
    pub fn read_rule(&self, input: &str, start: usize, rule: &str) -> Result<Match, GrammarError> {
        let id = self.id(rule)?;
        log::trace!("reading {rule:?} at {start}");
        Ok(self.read_id(id, input, start))
    }

    /// Run rule `id` at `start`, applying skip first when the rule asks for it
    pub(crate) fn read_id(&self, id: RuleId, input: &str, start: usize) -> Match {
        let rule = &self.rules[id.0];
        let position = if rule.applies_skip() && id != self.skip {
            self.read_id(self.skip, input, start).end()
        } else {
            start
        };
        rule.read_here(id, self, input, position)
    }

    /// Handle to the rule named `name`
    pub fn lookup(&self, name: &str) -> Result<RuleRef<'_>, GrammarError> {
        self.id(name).map(|id| RuleRef { registry: self, id })
    }

    fn id(&self, name: &str) -> Result<RuleId, GrammarError> {
        self.index.get(name).copied().ok_or_else(|| GrammarError::unknown(name, None))
    }

    /// Linked rule with id `id`
    #[must_use]
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.0)
    }

    /// Name of the rule with id `id`
    #[must_use]
    pub fn rule_name(&self, id: RuleId) -> Option<&str> {
        self.rule(id).map(Rule::name)
    }

    /// Check if a rule named `name` exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Rule names in registration order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    /// Linked rules in registration order
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        (0..self.rules.len()).map(|i| RuleRef {
            registry: self,
            id: RuleId(i),
        })
    }

    /// Number of rules, built-ins and skip included
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: a registry holds at least one user rule
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Name of the default entry rule
    #[must_use]
    pub fn default_entry(&self) -> &str {
        self.rules[self.default_entry.0].name()
    }

    /// Make `name` the default entry rule
    pub fn set_default_entry(&mut self, name: &str) -> Result<(), GrammarError> {
        self.default_entry = self.id(name)?;
        log::debug!("default entry set to {name:?}");
        Ok(())
    }

    /// Id of the skip rule
    #[must_use]
    pub const fn skip_rule(&self) -> RuleId {
        self.skip
    }
}

/// A rule borrowed from its registry
#[derive(Debug, Clone, Copy)]
pub struct RuleRef<'a> {
    registry: &'a Registry,
    id: RuleId,
}

impl<'a> RuleRef<'a> {
    /// Rule id
    #[must_use]
    pub const fn id(&self) -> RuleId {
        self.id
    }

    /// Linked rule
    #[must_use]
    pub fn rule(&self) -> &'a Rule {
        &self.registry.rules[self.id.0]
    }

    /// Rule name
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.rule().name()
    }

    /// Whether the skip rule runs before this rule
    #[must_use]
    pub fn applies_skip(&self) -> bool {
        self.rule().applies_skip()
    }

    /// Match this rule at `start`
    #[must_use]
    pub fn read(&self, input: &str, start: usize) -> Match {
        self.registry.read_id(self.id, input, start)
    }
}
