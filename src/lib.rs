//! Translate English text between American and British conventions.
//!
//! Vocabulary, spelling variants, honorific titles and clock times are
//! rewritten, and every substitution is wrapped in a
//! `<span class="highlight">` so it can be shown to the reader.
//!
//! ```
//! use amerbrit::{Direction, Translator};
//!
//! let translator = Translator::builtin().unwrap();
//!
//! let result = translator
//!     .translate("Lunch is at 12:15 today.", Direction::AmericanToBritish)
//!     .unwrap();
//! assert_eq!(
//!     result.translation(),
//!     r#"Lunch is at <span class="highlight">12.15</span> today."#
//! );
//!
//! let result = translator
//!     .translate("Nothing to do here.", Direction::BritishToAmerican)
//!     .unwrap();
//! assert_eq!(result.translation(), "Everything looks good to me!");
//! ```

pub mod annotated;
pub mod api;
pub mod change;
pub mod dictionary;
pub mod direction;
pub mod error;
pub mod matcher;
pub mod pass;
pub mod time;
pub mod translator;


// Re-export main types for convenient access
pub use annotated::{AnnotatedText, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, Segment};
pub use api::{ErrorResponse, TranslateRequest, TranslateResponse};
pub use change::Change;
pub use dictionary::{
    Dictionaries, RuleSet, TranslationRule, load_dictionaries_from_dir, load_rule_set_from_file,
};
pub use direction::Direction;
pub use error::{DictionaryError, TranslateError};
pub use pass::{Pass, PassKind};
pub use translator::{NOTHING_TO_TRANSLATE, TranslationResult, Translator};
