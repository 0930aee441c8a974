/// Character-level Unicode classification and constants for Devanagari text.

/// Zero-width non-joiner, inserted for the `/` escape to suppress a conjunct.
pub const ZWNJ: char = '\u{200C}';

/// Zero-width joiner, used inside the reph-forming `rr` special.
pub const ZWJ: char = '\u{200D}';

/// Virama (halant), suppresses a consonant's inherent vowel.
pub const HALANT: char = '\u{094D}';

/// Anusvara nasalization mark.
pub const ANUSVARA: char = '\u{0902}';

/// Chandrabindu nasalization mark.
pub const CHANDRABINDU: char = '\u{0901}';

/// The dependent "aa" vowel sign.
pub const AA_MATRA: char = '\u{093E}';

pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a string contains only Devanagari characters (joiners allowed).
///
/// Accepts the zero-width joiner/non-joiner, which appear in engine output
/// around suppressed or forced conjuncts.
pub fn is_devanagari_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_devanagari(c) || c == ZWNJ || c == ZWJ)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_devanagari('क'));
        assert!(is_devanagari(HALANT));
        assert!(is_devanagari(ANUSVARA));
        assert!(!is_devanagari('a'));
        assert!(!is_devanagari('あ'));
        assert!(is_latin('a'));
        assert!(is_latin('Z'));
        assert!(!is_latin('क'));
    }

    #[test]
    fn test_is_devanagari_text() {
        assert!(is_devanagari_text("नमस्ते"));
        assert!(is_devanagari_text("प्रति\u{200C}शत"));
        assert!(!is_devanagari_text("abc"));
        assert!(!is_devanagari_text("नम a"));
        assert!(!is_devanagari_text(""));
    }
}
