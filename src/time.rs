//! Clock time notation
//!
//! American text writes times as `12:15`, British text as `12.15`. The hour
//! has one or two digits, the minutes exactly two.

use crate::direction::Direction;
use crate::error::DictionaryError;
use crate::matcher::{Label, Matcher, Replacement};

const AMERICAN_TIME: &str = r"(?-u:\b)[0-9]{1,2}:[0-9]{2}(?-u:\b)";
const BRITISH_TIME: &str = r"(?-u:\b)[0-9]{1,2}\.[0-9]{2}(?-u:\b)";

/// The separator used by the source dialect of `direction`, and the one it
/// becomes
pub fn separators(direction: Direction) -> (char, char) {
    match direction {
        Direction::AmericanToBritish => (':', '.'),
        Direction::BritishToAmerican => ('.', ':'),
    }
}

/// Build the matcher that rewrites source-dialect times for `direction`
pub fn time_matcher(direction: Direction) -> Result<Matcher, DictionaryError> {
    let pattern = match direction {
        Direction::AmericanToBritish => AMERICAN_TIME,
        Direction::BritishToAmerican => BRITISH_TIME,
    };
    let (from, to) = separators(direction);
    Matcher::pattern(
        "time",
        pattern,
        Replacement::Separator { from, to },
        Label::Matched,
    )
}
