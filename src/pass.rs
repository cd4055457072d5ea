//! Translation passes
//!
//! A pass is a list of compiled matchers applied in order. Each pass takes an
//! [`AnnotatedText`] and returns the rewritten text together with the changes
//! it made, so passes chain without sharing any mutable state. Highlights from
//! an earlier pass (or an earlier matcher of the same pass) are never matched
//! again.

use crate::annotated::AnnotatedText;
use crate::change::Change;
use crate::dictionary::RuleSet;
use crate::direction::Direction;
use crate::error::DictionaryError;
use crate::matcher::{Label, Matcher, Replacement};
use crate::time::time_matcher;
use std::fmt;
use tracing::debug;

/// The four kinds of pass, in the order a translation applies them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    Vocabulary,
    Spelling,
    Titles,
    Time,
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PassKind::Vocabulary => "vocabulary",
            PassKind::Spelling => "spelling",
            PassKind::Titles => "titles",
            PassKind::Time => "time",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Pass {
    kind: PassKind,
    matchers: Vec<Matcher>,
}

impl Pass {
    /// Dialect-only vocabulary, longest source first.
    ///
    /// `rules` is already oriented: `american_only` for American→British,
    /// `british_only` for British→American. Replacements are inserted as
    /// stored and each change is labelled with the source token.
    pub fn vocabulary(rules: &RuleSet) -> Result<Self, DictionaryError> {
        let matchers = rules
            .longest_first()
            .into_iter()
            .map(|rule| {
                Matcher::word(
                    &rule.source,
                    Replacement::Verbatim(rule.target.clone()),
                    Label::Token(rule.source.clone()),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(PassKind::Vocabulary, matchers))
    }

    /// Spelling variants in either direction.
    ///
    /// `spelling` maps American to British. British→American matches the
    /// British side instead. Either way the change is labelled with the
    /// American spelling.
    pub fn spelling(spelling: &RuleSet, direction: Direction) -> Result<Self, DictionaryError> {
        let oriented = orient(spelling, direction);
        let matchers = oriented
            .longest_first()
            .into_iter()
            .map(|rule| {
                let american = match direction {
                    Direction::AmericanToBritish => &rule.source,
                    Direction::BritishToAmerican => &rule.target,
                };
                Matcher::word(
                    &rule.source,
                    Replacement::FollowCase(rule.target.clone()),
                    Label::Token(american.clone()),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(PassKind::Spelling, matchers))
    }

    /// Honorific titles in either direction; changes carry the matched text
    pub fn titles(titles: &RuleSet, direction: Direction) -> Result<Self, DictionaryError> {
        let oriented = orient(titles, direction);
        let matchers = oriented
            .longest_first()
            .into_iter()
            .map(|rule| {
                Matcher::title(
                    &rule.source,
                    Replacement::FollowCase(rule.target.clone()),
                    Label::Matched,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(PassKind::Titles, matchers))
    }

    /// Clock times written in the source dialect
    pub fn time(direction: Direction) -> Result<Self, DictionaryError> {
        Ok(Self::new(PassKind::Time, vec![time_matcher(direction)?]))
    }

    fn new(kind: PassKind, matchers: Vec<Matcher>) -> Self {
        Self { kind, matchers }
    }

    pub fn kind(&self) -> PassKind {
        self.kind
    }

    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }

    /// Run every matcher of this pass over the plain parts of `text`
    pub fn apply(&self, text: AnnotatedText) -> (AnnotatedText, Vec<Change>) {
        let mut changes = Vec::new();
        let mut text = text;
        for matcher in &self.matchers {
            text = text.rewrite_plain(|segment, at_end| {
                matcher.replace(segment, at_end, &mut changes)
            });
        }

        if !changes.is_empty() {
            debug!(pass = %self.kind, changes = changes.len(), "applied pass");
        }
        (text, changes)
    }
}

/// `rules` turned to map from the source dialect of `direction`
fn orient(rules: &RuleSet, direction: Direction) -> RuleSet {
    match direction {
        Direction::AmericanToBritish => rules.clone(),
        Direction::BritishToAmerican => rules.inverted(),
    }
}
