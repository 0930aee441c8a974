use std::collections::HashMap;
use std::sync::OnceLock;

use super::data::{CONSONANTS, LEXICON, MATRAS, SPECIALS, VOWELS};

/// A keyed token table with a precomputed longest-first match order.
#[derive(Debug)]
pub(crate) struct MatchTable {
    /// Entries sorted by descending key length. The sort is stable, so
    /// equal-length keys keep their declaration order, which is the
    /// tie-break the rule set was authored against.
    entries: Vec<(&'static str, &'static str)>,
}

impl MatchTable {
    fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// Longest key matching at byte position `pos`, ties by declaration order.
    ///
    /// Keys are ASCII, so a match never lands inside a multi-byte code point.
    pub(crate) fn match_at(&self, s: &str, pos: usize) -> Option<(&'static str, &'static str)> {
        self.entries
            .iter()
            .copied()
            .find(|(key, _)| s[pos..].starts_with(key))
    }
}

/// The full rule set: the four phonetic tables plus the word lexicon.
///
/// Immutable after construction; the default instance is built once and
/// shared process-wide, so lookups need no locks.
#[derive(Debug)]
pub struct RuleSet {
    pub(crate) vowels: MatchTable,
    pub(crate) consonants: MatchTable,
    pub(crate) specials: MatchTable,
    matras: HashMap<&'static str, &'static str>,
    lexicon: HashMap<String, String>,
}

impl RuleSet {
    fn builtin() -> Self {
        Self {
            vowels: MatchTable::new(VOWELS),
            consonants: MatchTable::new(CONSONANTS),
            specials: MatchTable::new(SPECIALS),
            matras: MATRAS.iter().copied().collect(),
            lexicon: LEXICON
                .iter()
                .map(|&(word, dev)| (word.to_string(), dev.to_string()))
                .collect(),
        }
    }

    /// Get or initialize the process-wide default rule set.
    pub fn global() -> &'static RuleSet {
        static INSTANCE: OnceLock<RuleSet> = OnceLock::new();
        INSTANCE.get_or_init(RuleSet::builtin)
    }

    /// Built-in rules with extra whole-word lexicon entries layered on top.
    /// Override keys shadow built-in entries with the same word.
    pub fn with_lexicon_overrides<I>(overrides: I) -> RuleSet
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut rules = Self::builtin();
        rules.lexicon.extend(overrides);
        rules
    }

    /// Lexicon lookup. The caller lowercases the word first.
    pub(crate) fn lexicon_get(&self, word: &str) -> Option<&str> {
        self.lexicon.get(word).map(String::as_str)
    }

    /// Matra for a vowel key; empty for the inherent "a".
    pub(crate) fn matra_for(&self, vowel_key: &str) -> &str {
        self.matras.get(vowel_key).copied().unwrap_or("")
    }
}
