//! Translation dictionaries
//!
//! Four flat rule sets drive every translation:
//!
//! - `american_only`: American vocabulary → British, used American→British only
//! - `spelling`: American spelling → British spelling, used in both directions
//! - `titles`: American honorifics (`mr.`) → British (`mr`), used in both directions
//! - `british_only`: British vocabulary → American, used British→American only
//!
//! Rule sets are validated when they are built and never change afterwards.

pub mod loader;

use crate::error::DictionaryError;
use std::collections::HashSet;

pub use loader::{load_dictionaries_from_dir, load_rule_set_from_file, parse_rule_set};

/// File names of the four rule sets, both for the built-in data and for
/// dictionaries loaded from a directory
pub const AMERICAN_ONLY_FILE: &str = "american_only.json";
pub const SPELLING_FILE: &str = "american_to_british_spelling.json";
pub const TITLES_FILE: &str = "american_to_british_titles.json";
pub const BRITISH_ONLY_FILE: &str = "british_only.json";

const BUILTIN_AMERICAN_ONLY: &str = include_str!("../../data/american_only.json");
const BUILTIN_SPELLING: &str = include_str!("../../data/american_to_british_spelling.json");
const BUILTIN_TITLES: &str = include_str!("../../data/american_to_british_titles.json");
const BUILTIN_BRITISH_ONLY: &str = include_str!("../../data/british_only.json");

/// A single `source → target` substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRule {
    pub source: String,
    pub target: String,
}

impl TranslationRule {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The same rule with source and target swapped
    pub fn inverted(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }
}

/// A named, validated list of rules
///
/// Source tokens are unique ignoring case and no rule maps a token to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    name: String,
    rules: Vec<TranslationRule>,
}

impl RuleSet {
    /// Build a rule set, rejecting empty tokens, duplicate sources and
    /// identity mappings
    pub fn new(name: &str, rules: Vec<TranslationRule>) -> Result<Self, DictionaryError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if rule.source.is_empty() || rule.target.is_empty() {
                return Err(DictionaryError::EmptyToken {
                    rule_set: name.to_string(),
                });
            }
            let folded = rule.source.to_lowercase();
            if folded == rule.target.to_lowercase() {
                return Err(DictionaryError::IdentityMapping {
                    rule_set: name.to_string(),
                    token: rule.source.clone(),
                });
            }
            if !seen.insert(folded) {
                return Err(DictionaryError::DuplicateSource {
                    rule_set: name.to_string(),
                    token: rule.source.clone(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            rules,
        })
    }

    /// Convenience constructor from `(source, target)` pairs
    pub fn from_pairs<I, S, T>(name: &str, pairs: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .map(|(source, target)| TranslationRule::new(source, target))
            .collect();
        Self::new(name, rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Case-insensitive lookup of a source token
    pub fn lookup(&self, token: &str) -> Option<&str> {
        let folded = token.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.source.to_lowercase() == folded)
            .map(|rule| rule.target.as_str())
    }

    /// The rule set with every rule turned around.
    ///
    /// Several sources can share a target; when their inversions collide the
    /// first rule in order wins and the rest are dropped.
    pub fn inverted(&self) -> RuleSet {
        let mut seen = HashSet::with_capacity(self.rules.len());
        let rules = self
            .rules
            .iter()
            .filter(|rule| seen.insert(rule.target.to_lowercase()))
            .map(TranslationRule::inverted)
            .collect();

        RuleSet {
            name: format!("{} (inverted)", self.name),
            rules,
        }
    }

    /// Rules ordered longest source first, ties broken alphabetically
    pub fn longest_first(&self) -> Vec<&TranslationRule> {
        let mut ordered: Vec<&TranslationRule> = self.rules.iter().collect();
        ordered.sort_by(|a, b| {
            b.source
                .chars()
                .count()
                .cmp(&a.source.chars().count())
                .then_with(|| a.source.cmp(&b.source))
        });
        ordered
    }
}

/// The complete set of dictionaries a translator is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
    pub american_only: RuleSet,
    pub spelling: RuleSet,
    pub titles: RuleSet,
    pub british_only: RuleSet,
}

impl Dictionaries {
    pub fn new(
        american_only: RuleSet,
        spelling: RuleSet,
        titles: RuleSet,
        british_only: RuleSet,
    ) -> Self {
        Self {
            american_only,
            spelling,
            titles,
            british_only,
        }
    }

    /// The dictionaries shipped with the crate
    pub fn builtin() -> Result<Self, DictionaryError> {
        Ok(Self {
            american_only: parse_rule_set(AMERICAN_ONLY_FILE, BUILTIN_AMERICAN_ONLY)?,
            spelling: parse_rule_set(SPELLING_FILE, BUILTIN_SPELLING)?,
            titles: parse_rule_set(TITLES_FILE, BUILTIN_TITLES)?,
            british_only: parse_rule_set(BRITISH_ONLY_FILE, BUILTIN_BRITISH_ONLY)?,
        })
    }

    /// Total number of rules across all four sets
    pub fn rule_count(&self) -> usize {
        self.american_only.len()
            + self.spelling.len()
            + self.titles.len()
            + self.british_only.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dictionaries_load() {
        let dictionaries = Dictionaries::builtin().unwrap();
        assert!(!dictionaries.american_only.is_empty());
        assert!(!dictionaries.spelling.is_empty());
        assert!(!dictionaries.british_only.is_empty());
        assert_eq!(dictionaries.titles.len(), 6);
        assert_eq!(dictionaries.titles.lookup("Mr."), Some("mr"));
    }

    #[test]
    fn test_builtin_metadata_is_skipped() {
        let dictionaries = Dictionaries::builtin().unwrap();
        assert_eq!(dictionaries.spelling.lookup("@metadata"), None);
    }

    #[test]
    fn test_duplicate_source_rejected_ignoring_case() {
        let result = RuleSet::from_pairs("test", [("Color", "colour"), ("color", "colour")]);
        assert!(matches!(
            result,
            Err(DictionaryError::DuplicateSource { token, .. }) if token == "color"
        ));
    }

    #[test]
    fn test_identity_mapping_rejected() {
        let result = RuleSet::from_pairs("test", [("Grey", "grey")]);
        assert!(matches!(
            result,
            Err(DictionaryError::IdentityMapping { .. })
        ));
    }

    #[test]
    fn test_empty_token_rejected() {
        let result = RuleSet::from_pairs("test", [("", "something")]);
        assert!(matches!(result, Err(DictionaryError::EmptyToken { .. })));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let rules = RuleSet::from_pairs("test", [("parking lot", "car park")]).unwrap();
        assert_eq!(rules.lookup("Parking Lot"), Some("car park"));
        assert_eq!(rules.lookup("parking"), None);
    }

    #[test]
    fn test_inverted_first_wins_on_collision() {
        let rules =
            RuleSet::from_pairs("test", [("condo", "flat"), ("apartment", "flat")]).unwrap();
        let inverted = rules.inverted();
        assert_eq!(inverted.len(), 1);
        assert_eq!(inverted.lookup("flat"), Some("condo"));
    }

    #[test]
    fn test_longest_first_ordering() {
        let rules = RuleSet::from_pairs(
            "test",
            [("mom", "mum"), ("mom-and-pop", "family-run"), ("dad", "father")],
        )
        .unwrap();
        let ordered: Vec<&str> = rules
            .longest_first()
            .iter()
            .map(|rule| rule.source.as_str())
            .collect();
        assert_eq!(ordered, vec!["mom-and-pop", "dad", "mom"]);
    }
}
