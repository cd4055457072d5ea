use super::{
    AMERICAN_ONLY_FILE, BRITISH_ONLY_FILE, Dictionaries, RuleSet, SPELLING_FILE, TITLES_FILE,
    TranslationRule,
};
use crate::error::DictionaryError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a rule set from JSON text
///
/// The JSON should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "color": "colour",
///     "center": "centre"
/// }
/// ```
///
/// `origin` names the rule set and appears in error messages.
///
/// # Errors
/// - Invalid JSON
/// - Root is not an object
/// - A non-metadata value is not a string
/// - The rules fail rule set validation
pub fn parse_rule_set(origin: &str, content: &str) -> Result<RuleSet, DictionaryError> {
    let json: Value = serde_json::from_str(content).map_err(|source| DictionaryError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let obj = json.as_object().ok_or_else(|| DictionaryError::NotAnObject {
        origin: origin.to_string(),
    })?;

    let mut rules = Vec::with_capacity(obj.len());
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        let target = value
            .as_str()
            .ok_or_else(|| DictionaryError::NonStringValue {
                origin: origin.to_string(),
                key: key.clone(),
            })?;
        rules.push(TranslationRule::new(key.as_str(), target));
    }

    let rule_set = RuleSet::new(origin, rules)?;
    debug!(rule_set = rule_set.name(), rules = rule_set.len(), "parsed rule set");
    Ok(rule_set)
}

/// Load a rule set from a single JSON file
///
/// The file name becomes the rule set name.
///
/// # Errors
/// - File read errors
/// - Any error from [`parse_rule_set`]
pub fn load_rule_set_from_file(path: &Path) -> Result<RuleSet, DictionaryError> {
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("dictionary");
    parse_rule_set(name, &content)
}

/// Load all four rule sets from a directory
///
/// The directory must contain `american_only.json`,
/// `american_to_british_spelling.json`, `american_to_british_titles.json`
/// and `british_only.json`.
///
/// # Errors
/// - Directory or one of the files not found
/// - File read/parse/validation errors
pub fn load_dictionaries_from_dir(dir: &Path) -> Result<Dictionaries, DictionaryError> {
    if !dir.is_dir() {
        return Err(DictionaryError::MissingFile(dir.to_path_buf()));
    }

    let load = |file_name: &str| {
        let path = dir.join(file_name);
        if !path.is_file() {
            return Err(DictionaryError::MissingFile(path));
        }
        load_rule_set_from_file(&path)
    };

    let dictionaries = Dictionaries::new(
        load(AMERICAN_ONLY_FILE)?,
        load(SPELLING_FILE)?,
        load(TITLES_FILE)?,
        load(BRITISH_ONLY_FILE)?,
    );
    debug!(
        dir = %dir.display(),
        rules = dictionaries.rule_count(),
        "loaded dictionaries"
    );
    Ok(dictionaries)
}
