//! Grammar rules
//!
//! A grammar is written as a list of [`RuleDef`]s. Each definition names the
//! rules it depends on by string; nothing is resolved until the definitions
//! are handed to a [`Registry`](crate::Registry), which assigns every rule a
//! [`RuleId`] and rewrites the names into ids. After that the rule graph is
//! frozen, so recursive and mutually recursive rules need no shared mutable
//! state.
//!
//! - [`literal`] - fixed text
//! - [`pattern`] - anchored regular expression
//! - [`sequence`] - ordered items with a result shape
//! - [`choice`] - first successful alternative
//! - [`optional`] - never-failing wrapper
//! - [`repetition`] - bounded, optionally separated repetition

pub mod choice;
pub mod literal;
pub mod optional;
pub mod pattern;
pub mod repetition;
pub mod sequence;

use crate::error::GrammarError;
use crate::matches::Match;
use crate::registry::Registry;
use crate::value::ValueKind;

pub use pattern::Pattern;
pub use repetition::Repetition;
pub use sequence::{Sequence, Shape};

/// Index of a linked rule inside its registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub(crate) usize);

impl RuleId {
    /// Position of the rule in registration order
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a rule does, with dependencies of type `R`
///
/// `R` is `String` before linking and [`RuleId`] after.
#[derive(Debug, Clone)]
pub enum RuleKind<R> {
    /// Fixed text
    Literal(String),
    /// Anchored regular expression
    Pattern(Pattern),
    /// Ordered items
    Sequence(Sequence<R>),
    /// Alternatives tried in order
    Choice(Vec<R>),
    /// Optional inner rule
    Optional(R),
    /// Bounded repetition
    Repetition(Repetition<R>),
}

impl<R> RuleKind<R> {
    /// Short name of the combinator
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Pattern(_) => "pattern",
            Self::Sequence(_) => "sequence",
            Self::Choice(_) => "choice",
            Self::Optional(_) => "optional",
            Self::Repetition(_) => "repeat",
        }
    }

    fn try_map<S, E>(self, mut f: impl FnMut(R) -> Result<S, E>) -> Result<RuleKind<S>, E> {
        Ok(match self {
            Self::Literal(text) => RuleKind::Literal(text),
            Self::Pattern(pattern) => RuleKind::Pattern(pattern),
            Self::Sequence(seq) => RuleKind::Sequence(Sequence {
                items: seq.items.into_iter().map(&mut f).collect::<Result<_, _>>()?,
                shape: seq.shape,
            }),
            Self::Choice(options) => {
                RuleKind::Choice(options.into_iter().map(&mut f).collect::<Result<_, _>>()?)
            },
            Self::Optional(inner) => RuleKind::Optional(f(inner)?),
            Self::Repetition(rep) => RuleKind::Repetition(Repetition {
                element: f(rep.element)?,
                separator: rep.separator.map(&mut f).transpose()?,
                min: rep.min,
                max: rep.max,
                collapse_single: rep.collapse_single,
                retain_separators: rep.retain_separators,
            }),
        })
    }
}

/// An unlinked rule definition
#[derive(Debug, Clone)]
pub struct RuleDef {
    name: String,
    applies_skip: bool,
    kind: RuleKind<String>,
}

fn names<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl RuleDef {
    fn new(name: impl Into<String>, applies_skip: bool, kind: RuleKind<String>) -> Self {
        Self {
            name: name.into(),
            applies_skip,
            kind,
        }
    }

    /// Match `text` exactly
    #[must_use]
    pub fn literal(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, true, RuleKind::Literal(text.into()))
    }

    /// Match a regular expression anchored at the current position
    pub fn pattern(name: impl Into<String>, regex: &str) -> Result<Self, GrammarError> {
        Self::pattern_as(name, regex, ValueKind::Text)
    }

    /// Match a regular expression and convert the text to `value`
    pub fn pattern_as(
        name: impl Into<String>,
        regex: &str,
        value: ValueKind,
    ) -> Result<Self, GrammarError> {
        let name = name.into();
        let pattern = Pattern::new(&name, regex, value)?;
        Ok(Self::new(name, true, RuleKind::Pattern(pattern)))
    }

    /// Match `items` in order and collect every child match
    #[must_use]
    pub fn sequence<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::shaped(name, items, Shape::CollectAll)
    }

    /// Match `items` in order and keep only the payload of item `index`
    #[must_use]
    pub fn extract_one<I, S>(name: impl Into<String>, items: I, index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::shaped(name, items, Shape::ExtractOne(index))
    }

    /// Match `items` in order and keep the children at `indices`
    #[must_use]
    pub fn extract_some<I, S>(
        name: impl Into<String>,
        items: I,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::shaped(name, items, Shape::ExtractSome(indices.into_iter().collect()))
    }

    /// Match `items` in order and name the children listed in `fields`
    #[must_use]
    pub fn object<I, S, F, K>(name: impl Into<String>, items: I, fields: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: IntoIterator<Item = (usize, K)>,
        K: Into<String>,
    {
        let fields = fields.into_iter().map(|(i, k)| (i, k.into())).collect();
        Self::shaped(name, items, Shape::Object(fields))
    }

    /// Match `items` in order with an explicit shape
    #[must_use]
    pub fn shaped<I, S>(name: impl Into<String>, items: I, shape: Shape) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let seq = Sequence {
            items: names(items),
            shape,
        };
        Self::new(name, false, RuleKind::Sequence(seq))
    }

    /// Try `options` in order
    #[must_use]
    pub fn choice<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, false, RuleKind::Choice(names(options)))
    }

    /// Match `inner` if possible, succeed empty otherwise
    #[must_use]
    pub fn optional(name: impl Into<String>, inner: impl Into<String>) -> Self {
        Self::new(name, false, RuleKind::Optional(inner.into()))
    }

    /// Repeat an element as configured by `repetition`
    #[must_use]
    pub fn repeat(name: impl Into<String>, repetition: Repetition<String>) -> Self {
        Self::new(name, false, RuleKind::Repetition(repetition))
    }

    /// Set whether the skip rule runs before this rule
    #[must_use]
    pub fn with_skip(mut self, applies_skip: bool) -> Self {
        self.applies_skip = applies_skip;
        self
    }

    /// Rule name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the skip rule runs before this rule
    #[must_use]
    pub const fn applies_skip(&self) -> bool {
        self.applies_skip
    }

    /// Rule behaviour, with dependencies still as names
    #[must_use]
    pub const fn kind(&self) -> &RuleKind<String> {
        &self.kind
    }

    /// Resolve every dependency name through `resolve`
    pub(crate) fn link(
        self,
        mut resolve: impl FnMut(&str) -> Option<RuleId>,
    ) -> Result<Rule, GrammarError> {
        self.validate()?;
        let Self {
            name,
            applies_skip,
            kind,
        } = self;
        let kind = kind
            .try_map(|dep| resolve(&dep).ok_or_else(|| GrammarError::unknown(&dep, Some(&name))))?;
        Ok(Rule {
            name,
            applies_skip,
            kind,
        })
    }

    fn validate(&self) -> Result<(), GrammarError> {
        match &self.kind {
            RuleKind::Sequence(seq) => seq.validate(&self.name),
            RuleKind::Repetition(rep) => rep.validate(&self.name),
            _ => Ok(()),
        }
    }
}

/// A linked rule
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    applies_skip: bool,
    kind: RuleKind<RuleId>,
}

impl Rule {
    /// Rule name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the skip rule runs before this rule
    #[must_use]
    pub const fn applies_skip(&self) -> bool {
        self.applies_skip
    }

    /// Rule behaviour, with dependencies resolved
    #[must_use]
    pub const fn kind(&self) -> &RuleKind<RuleId> {
        &self.kind
    }

    /// Run this rule's own matching at `start`, skip already applied
    pub(crate) fn read_here(
        &self,
        id: RuleId,
        registry: &Registry,
        input: &str,
        start: usize,
    ) -> Match {
        match &self.kind {
            RuleKind::Literal(text) => literal::read(id, text, input, start),
            RuleKind::Pattern(pattern) => pattern.read(id, input, start),
            RuleKind::Sequence(seq) => seq.read(id, registry, input, start),
            RuleKind::Choice(options) => choice::read(id, options, registry, input, start),
            RuleKind::Optional(inner) => optional::read(id, *inner, registry, input, start),
            RuleKind::Repetition(rep) => rep.read(id, registry, input, start),
        }
    }
}
