/// Error types for translation and dictionary loading
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors reported for a translation request.
///
/// The `Display` text of each variant is the exact message returned to
/// clients in the `{ "error": ... }` body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Text or locale absent (or the engine was handed empty text)
    #[error("Required field(s) missing")]
    MissingField,
    /// Locale present but not one of the recognized directions
    #[error("Invalid value for locale field")]
    InvalidDirection,
    /// Text present but empty; only the request handler reports this
    #[error("No text to translate")]
    EmptyText,
}

/// Errors raised while loading, validating or compiling dictionaries
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from '{origin}': {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid dictionary '{origin}': root must be an object")]
    NotAnObject { origin: String },

    #[error("Invalid dictionary '{origin}': value for '{key}' is not a string")]
    NonStringValue { origin: String, key: String },

    #[error("Dictionary file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Rule set '{rule_set}' has duplicate source token '{token}'")]
    DuplicateSource { rule_set: String, token: String },

    #[error("Rule set '{rule_set}' maps '{token}' to itself")]
    IdentityMapping { rule_set: String, token: String },

    #[error("Rule set '{rule_set}' contains an empty token")]
    EmptyToken { rule_set: String },

    #[error("Failed to compile matcher for '{token}': {source}")]
    Pattern {
        token: String,
        #[source]
        source: regex::Error,
    },
}
