//! Compiled single-token matchers
//!
//! A [`Matcher`] finds one token in plain text and turns every accepted
//! occurrence into a highlighted segment. Matchers are compiled once, when a
//! translator is built.

use crate::annotated::Segment;
use crate::change::Change;
use crate::error::DictionaryError;
use regex::Regex;
use tracing::trace;

/// What must follow a match for it to be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    /// An ASCII word boundary, part of the pattern itself
    WordBoundary,
    /// Whitespace, or the end of the whole document
    WhitespaceOrEnd,
}

/// How the highlighted text is produced from a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Insert the stored text as is
    Verbatim(String),
    /// Insert the stored text, uppercasing its first letter when the matched
    /// text starts with an uppercase letter
    FollowCase(String),
    /// Keep the matched text, swapping its separator character
    Separator { from: char, to: char },
}

impl Replacement {
    fn produce(&self, matched: &str) -> String {
        match self {
            Replacement::Verbatim(text) => text.clone(),
            Replacement::FollowCase(text) => preserve_case(matched, text),
            Replacement::Separator { from, to } => {
                matched.replacen(*from, &to.to_string(), 1)
            }
        }
    }
}

/// What each accepted match is recorded as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// A fixed dictionary token
    Token(String),
    /// The matched text itself
    Matched,
}

/// Carry the case of `original`'s first character over to `replacement`.
///
/// Only the first character is looked at: `"Theatre"` gives `"Theater"`, and
/// `"THEATRE"` gives `"Theater"` too. Anything other than a leading ASCII
/// uppercase letter leaves `replacement` untouched.
pub fn preserve_case(original: &str, replacement: &str) -> String {
    let starts_upper = original
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase());
    if !starts_upper {
        return replacement.to_string();
    }

    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Byte offset of the character after the one starting at `at`
fn next_char(text: &str, at: usize) -> usize {
    at + text[at..].chars().next().map_or(1, char::len_utf8)
}

/// A case-insensitive matcher for one token
#[derive(Debug, Clone)]
pub struct Matcher {
    token: String,
    regex: Regex,
    trailing: Trailing,
    replacement: Replacement,
    label: Label,
}

impl Matcher {
    /// Match `token` as a whole word: ASCII word boundaries on both ends
    pub fn word(
        token: &str,
        replacement: Replacement,
        label: Label,
    ) -> Result<Self, DictionaryError> {
        let pattern = format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(token));
        Self::compile(token, &pattern, Trailing::WordBoundary, replacement, label)
    }

    /// Match `token` after a word boundary, accepting it only when followed
    /// by whitespace or the end of the document
    pub fn title(
        token: &str,
        replacement: Replacement,
        label: Label,
    ) -> Result<Self, DictionaryError> {
        let pattern = format!(r"(?i)(?-u:\b){}", regex::escape(token));
        Self::compile(token, &pattern, Trailing::WhitespaceOrEnd, replacement, label)
    }

    /// Match a raw regular expression
    pub fn pattern(
        name: &str,
        pattern: &str,
        replacement: Replacement,
        label: Label,
    ) -> Result<Self, DictionaryError> {
        Self::compile(name, pattern, Trailing::WordBoundary, replacement, label)
    }

    fn compile(
        token: &str,
        pattern: &str,
        trailing: Trailing,
        replacement: Replacement,
        label: Label,
    ) -> Result<Self, DictionaryError> {
        let regex = Regex::new(pattern).map_err(|source| DictionaryError::Pattern {
            token: token.to_string(),
            source,
        })?;
        Ok(Self {
            token: token.to_string(),
            regex,
            trailing,
            replacement,
            label,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace every accepted match in one plain segment.
    ///
    /// `at_document_end` tells whether the end of `segment` is the end of the
    /// whole document. Accepted matches become highlighted segments and push
    /// a [`Change`]; the text between them stays plain.
    pub fn replace(
        &self,
        segment: &str,
        at_document_end: bool,
        changes: &mut Vec<Change>,
    ) -> Vec<Segment> {
        let mut output = Vec::new();
        let mut copied = 0;
        let mut search_from = 0;

        while search_from <= segment.len() {
            let Some(found) = self.regex.find_at(segment, search_from) else {
                break;
            };

            if !self.accepts_end(segment, found.end(), at_document_end) {
                trace!(token = %self.token, at = found.start(), "rejected match");
                search_from = next_char(segment, found.start());
                continue;
            }

            if found.start() > copied {
                output.push(Segment::Plain(segment[copied..found.start()].to_string()));
            }
            let matched = found.as_str();
            changes.push(match &self.label {
                Label::Token(token) => Change::new(token.clone()),
                Label::Matched => Change::new(matched),
            });
            output.push(Segment::Highlighted(self.replacement.produce(matched)));

            copied = found.end();
            search_from = if found.end() > found.start() {
                found.end()
            } else {
                next_char(segment, found.end())
            };
        }

        if copied < segment.len() {
            output.push(Segment::Plain(segment[copied..].to_string()));
        }
        output
    }

    fn accepts_end(&self, segment: &str, end: usize, at_document_end: bool) -> bool {
        match self.trailing {
            Trailing::WordBoundary => true,
            Trailing::WhitespaceOrEnd => match segment[end..].chars().next() {
                Some(next) => next.is_whitespace(),
                None => at_document_end,
            },
        }
    }
}
