//! Request and response bodies shared by the web server and the CLI

use crate::direction::Direction;
use crate::error::TranslateError;
use serde::{Deserialize, Serialize};

/// An incoming translation request
///
/// Both fields are optional so that an absent field can be reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl TranslateRequest {
    /// Check the request before it reaches the translator.
    ///
    /// In order: an absent text or locale is a missing field, an unknown
    /// locale is an invalid value, and an empty text is reported as having
    /// nothing to translate.
    pub fn validate(&self) -> Result<(&str, Direction), TranslateError> {
        let (Some(text), Some(locale)) = (self.text.as_deref(), self.locale.as_deref()) else {
            return Err(TranslateError::MissingField);
        };
        let direction = locale.parse::<Direction>()?;
        if text.is_empty() {
            return Err(TranslateError::EmptyText);
        }
        Ok((text, direction))
    }
}

/// A successful translation: the submitted text and its highlighted
/// translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub text: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<TranslateError> for ErrorResponse {
    fn from(error: TranslateError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
