use tracing::debug;

use super::syllable::translit_syllables;
use super::table::RuleSet;
use crate::unicode::{HALANT, ZWNJ};

/// Resolve one transliterable span.
///
/// Maximal runs of ASCII letters are looked up in the lexicon (lowercased;
/// casing never affects the result) and otherwise handed to the syllable
/// automaton in their original casing. The `/` and `\` escapes emit ZWNJ and
/// halant here so they work across word boundaries (`pratishat/ko`). Every
/// other character, including digits, `*`, and text already in Devanagari,
/// copies through unchanged and never reaches the automaton.
pub fn resolve_span(rules: &RuleSet, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        let Some(ch) = rest.chars().next() else { break };

        if ch.is_ascii_alphabetic() {
            let end = rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            let word = &rest[..end];
            match rules.lexicon_get(&word.to_ascii_lowercase()) {
                Some(dev) => {
                    debug!(word, dev, "lexicon hit");
                    out.push_str(dev);
                }
                None => out.push_str(&translit_syllables(rules, word)),
            }
            i += end;
        } else if ch == '/' {
            out.push(ZWNJ);
            i += 1;
        } else if ch == '\\' {
            out.push(HALANT);
            i += 1;
        } else {
            out.push(ch);
            i += ch.len_utf8();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> String {
        resolve_span(RuleSet::global(), text)
    }

    #[test]
    fn test_lexicon_word() {
        assert_eq!(resolve("ke"), "के");
        assert_eq!(resolve("mero"), "मेरो");
    }

    #[test]
    fn test_lexicon_case_insensitive() {
        assert_eq!(resolve("KE"), "के");
        assert_eq!(resolve("Mero"), "मेरो");
        assert_eq!(resolve("RaMrO"), "राम्रो");
    }

    #[test]
    fn test_phonetic_fallback_keeps_casing() {
        // Not in the lexicon; the automaton sees the original casing,
        // where T is retroflex.
        assert_eq!(resolve("Tika"), "टिक");
        assert_eq!(resolve("tika"), "तिक");
    }

    #[test]
    fn test_punctuation_and_digits_copy_through() {
        assert_eq!(resolve("ke?"), "के?");
        assert_eq!(resolve("123"), "123");
        assert_eq!(resolve("ke, ko; 42."), "के, को; 42.");
    }

    #[test]
    fn test_star_copies_through() {
        // `*` never reaches the automaton, so the anusvara special does
        // not fire at this level.
        assert_eq!(resolve("ma*"), "म*");
    }

    #[test]
    fn test_devanagari_copies_through() {
        assert_eq!(resolve("नमस्ते"), "नमस्ते");
    }

    #[test]
    fn test_slash_emits_zwnj_between_words() {
        // Both sides keep their word-level resolution: "ko" is a lexicon hit.
        assert_eq!(resolve("pratishat/ko"), "प्रतिशत\u{200C}को");
    }

    #[test]
    fn test_backslash_emits_halant() {
        assert_eq!(resolve("t\\"), "त\u{094D}");
        // Single "k" is itself a lexicon word (के); the halant still lands.
        assert_eq!(resolve("k\\"), "के\u{094D}");
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(resolve("Mero desh Nepal ho."), "मेरो देश नेपाल हो.");
    }

    #[test]
    fn test_empty() {
        assert_eq!(resolve(""), "");
    }
}
