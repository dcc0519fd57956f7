//! Boundary rules
//!
//! A rule looks at one [`Split`] and votes to fuse the two sides, to keep
//! them apart, or abstains. Rules are grouped in layers: the Russian and
//! English layers run first, the shared layer last. The first non-abstaining
//! vote settles the boundary; if nobody votes, the sides stay apart.

pub mod common;
pub mod english;
pub mod russian;

use crate::lexicon::WordDictionary;
use crate::tokenizer::Profile;
use crate::types::Atom;
use crate::window::Split;
use std::fmt;
use std::sync::Arc;

/// Outcome of a rule at one boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Fuse both sides into one token
    Join,
    /// Keep the sides apart and stop asking
    Split,
    /// No opinion, ask the next rule
    Abstain,
}

/// A single boundary predicate
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, split: &Split<'_>) -> Decision;
}

/// Content atoms around a single-character delimiter
///
/// At `что-|то` the delimiter is `left_1` and the content is
/// (`left_2`, `right_1`); at `что|-то` it is `right_1` and the content is
/// (`left_1`, `right_2`).
#[derive(Debug, Clone, Copy)]
pub struct Bridge<'a> {
    pub left: &'a Atom,
    pub delimiter: &'a Atom,
    pub right: &'a Atom,
    /// The delimiter sits before the boundary
    pub on_left: bool,
}

impl<'a> Bridge<'a> {
    /// Find the delimiter on either side of the boundary
    ///
    /// Returns `None` when neither `left_1` nor `right_1` is a delimiter or
    /// one of the content atoms is missing.
    pub fn find(split: &Split<'a>, is_delimiter: impl Fn(&Atom) -> bool) -> Option<Self> {
        if is_delimiter(split.left_1) {
            Some(Self {
                left: split.left_2?,
                delimiter: split.left_1,
                right: split.right_1,
                on_left: true,
            })
        } else if is_delimiter(split.right_1) {
            Some(Self {
                left: split.left_1,
                delimiter: split.right_1,
                right: split.right_2?,
                on_left: false,
            })
        } else {
            None
        }
    }

    /// Content atoms sit directly against the delimiter on both sides
    pub fn is_tight(&self) -> bool {
        self.left.bytes.end == self.delimiter.bytes.start
            && self.delimiter.bytes.end == self.right.bytes.start
    }
}

/// Rule built from a delimiter test and a decision over the content pair
pub(crate) struct BridgeRule<D, R> {
    name: &'static str,
    delimiter: D,
    rule: R,
}

impl<D, R> BridgeRule<D, R>
where
    D: Fn(&Atom) -> bool + Send + Sync,
    R: Fn(&Bridge<'_>, &Split<'_>) -> Decision + Send + Sync,
{
    pub(crate) fn new(name: &'static str, delimiter: D, rule: R) -> Self {
        Self {
            name,
            delimiter,
            rule,
        }
    }
}

impl<D, R> Rule for BridgeRule<D, R>
where
    D: Fn(&Atom) -> bool + Send + Sync,
    R: Fn(&Bridge<'_>, &Split<'_>) -> Decision + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, split: &Split<'_>) -> Decision {
        match Bridge::find(split, &self.delimiter) {
            Some(bridge) => (self.rule)(&bridge, split),
            None => Decision::Abstain,
        }
    }
}

/// Rule wrapping a plain function over the window
pub(crate) struct FnRule<F> {
    name: &'static str,
    rule: F,
}

impl<F> FnRule<F>
where
    F: Fn(&Split<'_>) -> Decision + Send + Sync,
{
    pub(crate) fn new(name: &'static str, rule: F) -> Self {
        Self { name, rule }
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&Split<'_>) -> Decision + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, split: &Split<'_>) -> Decision {
        (self.rule)(split)
    }
}

/// `Join` when the condition holds, `Abstain` otherwise
#[inline]
pub(crate) fn join_if(condition: bool) -> Decision {
    if condition {
        Decision::Join
    } else {
        Decision::Abstain
    }
}

/// Ordered rule layers for one profile
pub struct RuleChain {
    rules: Vec<Box<dyn Rule>>,
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

impl RuleChain {
    /// Language layers of `profile` followed by the shared layer
    pub fn for_profile(
        profile: Profile,
        words: Arc<dyn WordDictionary>,
        abbreviations: Arc<dyn WordDictionary>,
    ) -> Self {
        let mut rules = Vec::new();
        if profile.has_russian() {
            rules.extend(russian::rules());
        }
        if profile.has_english() {
            rules.extend(english::rules());
        }
        rules.extend(common::rules(words, abbreviations));
        Self { rules }
    }

    /// Chain over an explicit rule list
    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Settle one boundary
    ///
    /// Whitespace always separates. Otherwise the first rule that does not
    /// abstain decides; a boundary nobody claims is a split.
    pub fn decide(&self, split: &Split<'_>) -> Decision {
        if !split.is_tight() {
            return Decision::Split;
        }
        for rule in &self.rules {
            match rule.evaluate(split) {
                Decision::Abstain => continue,
                decision => {
                    log::trace!(
                        "{}|{} -> {:?} by {}",
                        split.left(),
                        split.right(),
                        decision,
                        rule.name()
                    );
                    return decision;
                }
            }
        }
        Decision::Split
    }
}
