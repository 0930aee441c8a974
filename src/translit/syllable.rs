//! The phonetic automaton: one Latin token in, Devanagari out.
//!
//! A single left-to-right pass with an explicit byte cursor and output
//! buffer. Every step consumes at least one character, so the loop always
//! terminates; nothing already emitted is ever revisited.

use super::table::RuleSet;
use crate::unicode::{AA_MATRA, ANUSVARA, HALANT, ZWNJ};

/// Consonant letters that turn a preceding `n`/`m` into anusvara.
fn is_nasal_trigger(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'k' | 'g' | 'c' | 'j' | 'q' | 't' | 'd' | 'p' | 'b' | 's' | 'h' | 'x'
    )
}

/// Emit a consonant glyph with an optional vowel key applied.
///
/// `None` and `Some("a")` both mean the inherent vowel: the glyph stands
/// alone. Quirk carried over from the reference rule set: a bare `य` takes
/// the "aa" matra instead, so `ya`-type syllables render as या.
fn push_syllable(rules: &RuleSet, out: &mut String, base: &str, vowel_key: Option<&str>) {
    let inherent = vowel_key.map_or(true, |key| key == "a");
    if base == "य" && inherent {
        out.push_str(base);
        out.push(AA_MATRA);
        return;
    }
    out.push_str(base);
    if !inherent {
        if let Some(key) = vowel_key {
            out.push_str(rules.matra_for(key));
        }
    }
}

/// Convert a single token to Devanagari. Total: any input produces output.
pub fn translit_syllables(rules: &RuleSet, token: &str) -> String {
    let mut out = String::with_capacity(token.len() * 3);
    let mut i = 0;

    while i < token.len() {
        let rest = &token[i..];
        let Some(ch) = rest.chars().next() else { break };

        // Explicit separators.
        if ch == '/' {
            out.push(ZWNJ);
            i += 1;
            continue;
        }
        if ch == '\\' {
            out.push(HALANT);
            i += 1;
            continue;
        }

        // Punctuation, whitespace, anything non-alphanumeric but `*`.
        if !ch.is_ascii_alphanumeric() && ch != '*' {
            out.push(ch);
            i += ch.len_utf8();
            continue;
        }

        // Direct special sequences.
        if let Some((key, glyphs)) = rules.specials.match_at(token, i) {
            out.push_str(glyphs);
            i += key.len();
            continue;
        }

        // Nasalization shortcut: n/m before a stop consonant → anusvara.
        // Only the n/m is consumed; the trigger letter is processed next.
        if ch == 'n' || ch == 'm' {
            if let Some(next) = rest[1..].chars().next() {
                if is_nasal_trigger(next) {
                    out.push(ANUSVARA);
                    i += 1;
                    continue;
                }
            }
        }

        // Consonant, optionally followed by a vowel or a conjunct partner.
        if let Some((c_key, base)) = rules.consonants.match_at(token, i) {
            i += c_key.len();

            if let Some((v_key, _)) = rules.vowels.match_at(token, i) {
                push_syllable(rules, &mut out, base, Some(v_key));
                i += v_key.len();
            } else if rules.consonants.match_at(token, i).is_some() {
                // No vowel and another consonant follows: halant conjunct.
                // The next consonant is left for the next iteration, so
                // longer chains compose left to right.
                out.push_str(base);
                out.push(HALANT);
            } else {
                push_syllable(rules, &mut out, base, None);
            }
            continue;
        }

        // Standalone vowel.
        if let Some((v_key, letter)) = rules.vowels.match_at(token, i) {
            out.push_str(letter);
            i += v_key.len();
            continue;
        }

        // Unmapped alphanumeric: pass through.
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(token: &str) -> String {
        translit_syllables(RuleSet::global(), token)
    }

    #[test]
    fn test_consonant_inherent_vowel() {
        assert_eq!(syl("k"), "क");
        assert_eq!(syl("ka"), "क");
    }

    #[test]
    fn test_consonant_matra() {
        assert_eq!(syl("ki"), "कि");
        assert_eq!(syl("kaa"), "का");
        assert_eq!(syl("koo"), "कू");
        assert_eq!(syl("kau"), "कौ");
    }

    #[test]
    fn test_aspirated_longest_match() {
        assert_eq!(syl("kha"), "ख");
        assert_eq!(syl("gha"), "घ");
        assert_eq!(syl("chhu"), "छु");
    }

    #[test]
    fn test_retroflex_uppercase() {
        assert_eq!(syl("Ta"), "ट");
        assert_eq!(syl("Thulo"), "ठुलो");
    }

    #[test]
    fn test_standalone_vowels() {
        assert_eq!(syl("a"), "अ");
        assert_eq!(syl("aama"), "आम");
        assert_eq!(syl("ee"), "ई");
    }

    #[test]
    fn test_conjunct_via_halant() {
        assert_eq!(syl("ksha"), "क्ष");
        assert_eq!(syl("pra"), "प्र");
        assert_eq!(syl("sta"), "स्त");
    }

    #[test]
    fn test_conjunct_chain() {
        // Three consonants with no vowels: two halants, left to right.
        assert_eq!(syl("str"), "स्त्र");
    }

    #[test]
    fn test_ya_quirk_takes_aa_matra() {
        assert_eq!(syl("ya"), "या");
        assert_eq!(syl("y"), "या");
        // With a real vowel the quirk does not apply.
        assert_eq!(syl("yo"), "यो");
        // As a conjunct head it stays bare.
        assert_eq!(syl("hya"), "ह्या");
    }

    #[test]
    fn test_nasalization_shortcut() {
        assert_eq!(syl("rang"), "रंग");
        assert_eq!(syl("samjha"), "संझ");
        // n before a vowel is an ordinary consonant.
        assert_eq!(syl("ni"), "नि");
    }

    #[test]
    fn test_nasalization_case_sensitive_head() {
        // Uppercase N is the retroflex consonant, never the shortcut.
        assert_eq!(syl("Nk"), "ण्क");
    }

    #[test]
    fn test_om_special() {
        assert_eq!(syl("om"), "ॐ");
        assert_eq!(syl("omkar"), "ॐकर");
    }

    #[test]
    fn test_anusvara_chandrabindu_specials() {
        assert_eq!(syl("*"), "\u{0902}");
        assert_eq!(syl("**"), "\u{0901}");
        assert_eq!(syl("ma*"), "म\u{0902}");
    }

    #[test]
    fn test_reph_special() {
        assert_eq!(syl("rr"), "र\u{094D}\u{200D}");
    }

    #[test]
    fn test_zwnj_escape() {
        assert_eq!(syl("k/k"), "क\u{200C}क");
    }

    #[test]
    fn test_forced_halant_escape() {
        assert_eq!(syl("k\\"), "क\u{094D}");
    }

    #[test]
    fn test_punctuation_passthrough() {
        assert_eq!(syl("ka!"), "क!");
        assert_eq!(syl("."), ".");
    }

    #[test]
    fn test_unmapped_alphanumerics_passthrough() {
        assert_eq!(syl("5"), "5");
        assert_eq!(syl("q"), "q");
        assert_eq!(syl("F"), "F");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(syl("क"), "क");
        assert_eq!(syl("é"), "é");
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(syl(""), "");
    }

    #[test]
    fn test_full_words() {
        assert_eq!(syl("pratishat"), "प्रतिशत");
        assert_eq!(syl("desh"), "देश");
        assert_eq!(syl("pratigya"), "प्रतिज्ञ");
    }
}
