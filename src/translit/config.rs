use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct LexiconConfig {
    lexicon: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[lexicon] table is empty")]
    Empty,
    #[error("key is not lowercase ASCII letters: {0}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
}

/// Parse TOML text into a sorted `BTreeMap<word, devanagari>` suitable for
/// [`RuleSet::with_lexicon_overrides`](super::RuleSet::with_lexicon_overrides).
///
/// Keys must be lowercase ASCII letters because lexicon lookup lowercases
/// the input word; any other key could never match.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<BTreeMap<String, String>, LexiconConfigError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconConfigError::Parse(e.to_string()))?;

    if config.lexicon.is_empty() {
        return Err(LexiconConfigError::Empty);
    }

    for (key, value) in &config.lexicon {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(LexiconConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(LexiconConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.lexicon)
}
