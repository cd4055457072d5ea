//! The translation engine
//!
//! A [`Translator`] is compiled once from a set of [`Dictionaries`] and can
//! then translate any number of texts, from any number of threads. Each
//! translation runs four passes in a fixed order:
//!
//! 1. vocabulary (`american_only` or `british_only`)
//! 2. spelling
//! 3. titles
//! 4. time notation
//!
//! Vocabulary goes first so that multi-word terms are highlighted, and thereby
//! protected, before the spelling pass could split them up.
//!
//! # Example
//!
//! ```
//! use amerbrit::{Direction, Translator};
//!
//! let translator = Translator::builtin().unwrap();
//! let result = translator
//!     .translate("Mangoes are my favorite fruit.", Direction::AmericanToBritish)
//!     .unwrap();
//! assert_eq!(
//!     result.translation(),
//!     r#"Mangoes are my <span class="highlight">favourite</span> fruit."#
//! );
//! ```

use crate::annotated::AnnotatedText;
use crate::api::TranslateResponse;
use crate::change::Change;
use crate::dictionary::Dictionaries;
use crate::direction::Direction;
use crate::error::{DictionaryError, TranslateError};
use crate::pass::Pass;
use tracing::debug;

/// Returned in place of a translation when nothing needed changing
pub const NOTHING_TO_TRANSLATE: &str = "Everything looks good to me!";

/// The outcome of translating one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    original: String,
    direction: Direction,
    rendered: AnnotatedText,
    changes: Vec<Change>,
}

impl TranslationResult {
    /// The text as it was submitted
    pub fn text(&self) -> &str {
        &self.original
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The translated text with highlight markup, or
    /// [`NOTHING_TO_TRANSLATE`] when nothing changed
    pub fn translation(&self) -> String {
        if self.is_unchanged() {
            NOTHING_TO_TRANSLATE.to_string()
        } else {
            self.rendered.render()
        }
    }

    /// The translated text without markup, or [`NOTHING_TO_TRANSLATE`] when
    /// nothing changed
    pub fn plain(&self) -> String {
        if self.is_unchanged() {
            NOTHING_TO_TRANSLATE.to_string()
        } else {
            self.rendered.plain_text()
        }
    }

    /// The segmented translation, highlights in document order
    pub fn annotated(&self) -> &AnnotatedText {
        &self.rendered
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }

    /// The `{ text, translation }` body sent back to clients
    pub fn to_response(&self) -> TranslateResponse {
        TranslateResponse {
            text: self.original.clone(),
            translation: self.translation(),
        }
    }
}

/// Compiled translation pipelines for both directions
#[derive(Debug, Clone)]
pub struct Translator {
    american_to_british: Vec<Pass>,
    british_to_american: Vec<Pass>,
}

impl Translator {
    /// Compile every matcher for both directions
    pub fn new(dictionaries: &Dictionaries) -> Result<Self, DictionaryError> {
        let american_to_british = vec![
            Pass::vocabulary(&dictionaries.american_only)?,
            Pass::spelling(&dictionaries.spelling, Direction::AmericanToBritish)?,
            Pass::titles(&dictionaries.titles, Direction::AmericanToBritish)?,
            Pass::time(Direction::AmericanToBritish)?,
        ];
        let british_to_american = vec![
            Pass::vocabulary(&dictionaries.british_only)?,
            Pass::spelling(&dictionaries.spelling, Direction::BritishToAmerican)?,
            Pass::titles(&dictionaries.titles, Direction::BritishToAmerican)?,
            Pass::time(Direction::BritishToAmerican)?,
        ];

        let translator = Self {
            american_to_british,
            british_to_american,
        };
        for direction in Direction::ALL {
            debug!(
                %direction,
                matchers = translator.matcher_count(direction),
                "compiled translation pipeline"
            );
        }
        Ok(translator)
    }

    /// A translator over the dictionaries shipped with the crate
    pub fn builtin() -> Result<Self, DictionaryError> {
        Self::new(&Dictionaries::builtin()?)
    }

    /// The passes run for `direction`, in order
    pub fn pipeline(&self, direction: Direction) -> &[Pass] {
        match direction {
            Direction::AmericanToBritish => &self.american_to_british,
            Direction::BritishToAmerican => &self.british_to_american,
        }
    }

    /// Number of compiled matchers for `direction`
    pub fn matcher_count(&self, direction: Direction) -> usize {
        self.pipeline(direction).iter().map(Pass::matcher_count).sum()
    }

    /// Translate `text` in `direction`.
    ///
    /// Empty text is a missing field.
    pub fn translate(
        &self,
        text: &str,
        direction: Direction,
    ) -> Result<TranslationResult, TranslateError> {
        if text.is_empty() {
            return Err(TranslateError::MissingField);
        }

        let mut annotated = AnnotatedText::new(text);
        let mut changes = Vec::new();
        for pass in self.pipeline(direction) {
            let (rewritten, applied) = pass.apply(annotated);
            annotated = rewritten;
            changes.extend(applied);
        }

        debug!(%direction, changes = changes.len(), "translated text");
        Ok(TranslationResult {
            original: text.to_string(),
            direction,
            rendered: annotated,
            changes,
        })
    }

    /// Translate with loosely typed input, as it arrives from a request.
    ///
    /// An absent or empty text or locale is a missing field; a locale that
    /// names no direction is an invalid value.
    pub fn translate_locale(
        &self,
        text: Option<&str>,
        locale: Option<&str>,
    ) -> Result<TranslationResult, TranslateError> {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(TranslateError::MissingField),
        };
        let direction = Direction::from_locale(locale)?;
        self.translate(text, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::RuleSet;

    fn small_dictionaries() -> Dictionaries {
        Dictionaries::new(
            RuleSet::from_pairs("american_only", [("trashcan", "bin"), ("condo", "flat")])
                .unwrap(),
            RuleSet::from_pairs("spelling", [("color", "colour"), ("theater", "theatre")])
                .unwrap(),
            RuleSet::from_pairs("titles", [("mr.", "mr"), ("dr.", "dr")]).unwrap(),
            RuleSet::from_pairs("british_only", [("flat", "apartment"), ("bin", "trash can")])
                .unwrap(),
        )
    }

    #[test]
    fn test_translate_runs_all_passes_in_order() {
        let translator = Translator::new(&small_dictionaries()).unwrap();
        let result = translator
            .translate(
                "Mr. Smith painted his condo a new color at 10:30",
                Direction::AmericanToBritish,
            )
            .unwrap();
        assert_eq!(
            result.plain(),
            "Mr Smith painted his flat a new colour at 10.30"
        );
        let labels: Vec<&str> = result.changes().iter().map(Change::label).collect();
        assert_eq!(labels, vec!["condo", "color", "Mr.", "10:30"]);
        let highlights: Vec<&str> = result.annotated().highlighted().collect();
        assert_eq!(highlights, vec!["Mr", "flat", "colour", "10.30"]);
    }

    #[test]
    fn test_vocabulary_output_is_not_translated_back() {
        // "bin" is British vocabulary but must survive once it was produced
        let translator = Translator::new(&small_dictionaries()).unwrap();
        let result = translator
            .translate("Toss it in the trashcan.", Direction::AmericanToBritish)
            .unwrap();
        assert_eq!(
            result.translation(),
            r#"Toss it in the <span class="highlight">bin</span>."#
        );
        assert_eq!(result.change_count(), 1);
    }

    #[test]
    fn test_nothing_to_translate() {
        let translator = Translator::new(&small_dictionaries()).unwrap();
        for direction in Direction::ALL {
            let result = translator.translate("Nothing to see here.", direction).unwrap();
            assert!(result.is_unchanged());
            assert_eq!(result.translation(), NOTHING_TO_TRANSLATE);
            assert_eq!(result.plain(), NOTHING_TO_TRANSLATE);
            assert_eq!(result.text(), "Nothing to see here.");
        }
    }

    #[test]
    fn test_empty_text_is_missing_field() {
        let translator = Translator::new(&small_dictionaries()).unwrap();
        assert_eq!(
            translator.translate("", Direction::AmericanToBritish),
            Err(TranslateError::MissingField)
        );
    }

    #[test]
    fn test_translate_locale_validation() {
        let translator = Translator::new(&small_dictionaries()).unwrap();
        assert_eq!(
            translator.translate_locale(None, Some("american-to-british")),
            Err(TranslateError::MissingField)
        );
        assert_eq!(
            translator.translate_locale(Some(""), Some("american-to-british")),
            Err(TranslateError::MissingField)
        );
        assert_eq!(
            translator.translate_locale(Some("color"), None),
            Err(TranslateError::MissingField)
        );
        assert_eq!(
            translator.translate_locale(Some("color"), Some("klingon-to-vulcan")),
            Err(TranslateError::InvalidDirection)
        );
        let result = translator
            .translate_locale(Some("colour"), Some("british-to-american"))
            .unwrap();
        assert_eq!(result.plain(), "color");
        assert_eq!(result.direction(), Direction::BritishToAmerican);
    }

    #[test]
    fn test_missing_field_checked_before_direction() {
        let translator = Translator::new(&small_dictionaries()).unwrap();
        assert_eq!(
            translator.translate_locale(None, Some("klingon-to-vulcan")),
            Err(TranslateError::MissingField)
        );
    }

    #[test]
    fn test_to_response() {
        let translator = Translator::new(&small_dictionaries()).unwrap();
        let response = translator
            .translate("my flat", Direction::BritishToAmerican)
            .unwrap()
            .to_response();
        assert_eq!(response.text, "my flat");
        assert_eq!(
            response.translation,
            r#"my <span class="highlight">apartment</span>"#
        );
    }

    #[test]
    fn test_translator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
