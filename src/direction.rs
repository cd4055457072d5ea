//! Translation direction
//!
//! Clients name a direction with a locale string such as
//! `"american-to-british"`. Parsing that string is the only place an
//! unrecognized direction can appear; everything past it works with the enum.

use crate::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which dialect is the source and which is the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    AmericanToBritish,
    BritishToAmerican,
}

impl Direction {
    /// Both directions, American→British first
    pub const ALL: [Direction; 2] = [Direction::AmericanToBritish, Direction::BritishToAmerican];

    /// The locale string clients send for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::AmericanToBritish => "american-to-british",
            Direction::BritishToAmerican => "british-to-american",
        }
    }

    /// Parse an optional locale the way the request handler receives it.
    ///
    /// An absent or empty locale is a missing field; anything else that is
    /// not a recognized direction is an invalid value.
    pub fn from_locale(locale: Option<&str>) -> Result<Direction, TranslateError> {
        match locale {
            None | Some("") => Err(TranslateError::MissingField),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for Direction {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "american-to-british" => Ok(Direction::AmericanToBritish),
            "british-to-american" => Ok(Direction::BritishToAmerican),
            _ => Err(TranslateError::InvalidDirection),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_locales() {
        assert_eq!(
            "american-to-british".parse::<Direction>(),
            Ok(Direction::AmericanToBritish)
        );
        assert_eq!(
            "british-to-american".parse::<Direction>(),
            Ok(Direction::BritishToAmerican)
        );
    }

    #[test]
    fn test_parse_is_exact() {
        // Locale names are matched literally, no case folding
        assert_eq!(
            "American-To-British".parse::<Direction>(),
            Err(TranslateError::InvalidDirection)
        );
        assert_eq!(
            "klingon-to-vulcan".parse::<Direction>(),
            Err(TranslateError::InvalidDirection)
        );
    }

    #[test]
    fn test_from_locale_missing() {
        assert_eq!(Direction::from_locale(None), Err(TranslateError::MissingField));
        assert_eq!(
            Direction::from_locale(Some("")),
            Err(TranslateError::MissingField)
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&Direction::BritishToAmerican).unwrap();
        assert_eq!(json, "\"british-to-american\"");
        let parsed: Direction = serde_json::from_str("\"american-to-british\"").unwrap();
        assert_eq!(parsed, Direction::AmericanToBritish);
    }
}
