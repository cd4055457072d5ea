use serde::{Deserialize, Serialize};
use std::fmt;

/// One applied substitution
///
/// A change is identified only by its label: the dictionary token for
/// vocabulary and spelling substitutions, the matched text for titles and
/// times. It carries no position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Change {
    label: String,
}

impl Change {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
