//! Romanized-Nepali to Devanagari transliteration.
//!
//! A deterministic single-pass pipeline: raw input is segmented into
//! literal (`{...}`) and transliterable spans, whole words are resolved
//! against a lexicon of colloquial overrides, everything else runs through
//! a greedy longest-match syllable automaton, and the result is optionally
//! rewritten as HTML numeric character references.
//!
//! The whole pipeline is pure and total: every input string produces a
//! defined output, nothing blocks or fails, and the shared rule set is
//! immutable, so calls may run concurrently without locks.

mod config;
mod data;
mod encode;
mod segment;
mod syllable;
mod table;
mod word;


use tracing::debug_span;

pub use config::{parse_lexicon_toml, LexiconConfigError};
pub use encode::{encode, OutputMode};
pub use segment::{segment, Span, SpanKind};
pub use syllable::translit_syllables;
pub use table::RuleSet;
pub use word::resolve_span;

/// Transliterate with the built-in rule set.
pub fn transliterate(input: &str, mode: OutputMode) -> String {
    transliterate_with(RuleSet::global(), input, mode)
}

/// Transliterate with an explicit rule set (e.g. one carrying user lexicon
/// overrides loaded from TOML).
pub fn transliterate_with(rules: &RuleSet, input: &str, mode: OutputMode) -> String {
    let _span = debug_span!("transliterate", len = input.len()).entered();

    let mut out = String::with_capacity(input.len() * 3);
    for span in segment(input) {
        match span.kind {
            SpanKind::Literal => out.push_str(&span.text),
            SpanKind::Transliterable => out.push_str(&resolve_span(rules, &span.text)),
        }
    }
    encode(&out, mode)
}
