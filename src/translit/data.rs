//! Static rule-set data.
//!
//! Declaration order is semantic: match orders are built with a stable
//! longest-first sort, so equal-length keys keep the order they appear here.
//! Changing any entry changes observable output for existing inputs; the
//! tables are versioned together with the engine.

/// Independent vowel letters.
pub(crate) const VOWELS: &[(&str, &str)] = &[
    ("a", "अ"),
    ("aa", "आ"),
    ("A", "आ"),
    ("i", "इ"),
    ("ee", "ई"),
    ("I", "ई"),
    ("u", "उ"),
    ("oo", "ऊ"),
    ("U", "ऊ"),
    ("e", "ए"),
    ("ai", "ऐ"),
    ("o", "ओ"),
    ("au", "औ"),
    ("rri", "ऋ"),
    ("rree", "ॠ"),
];

/// Dependent vowel signs. The inherent "a" has no visible matra.
pub(crate) const MATRAS: &[(&str, &str)] = &[
    ("a", ""),
    ("aa", "ा"),
    ("A", "ा"),
    ("i", "ि"),
    ("ee", "ी"),
    ("I", "ी"),
    ("u", "ु"),
    ("oo", "ू"),
    ("U", "ू"),
    ("e", "े"),
    ("ai", "ै"),
    ("o", "ो"),
    ("au", "ौ"),
    ("rri", "ृ"),
    ("rree", "ॄ"),
];

/// Base consonant glyphs.
pub(crate) const CONSONANTS: &[(&str, &str)] = &[
    // Velars
    ("k", "क"),
    ("kh", "ख"),
    ("g", "ग"),
    ("gh", "घ"),
    ("x", "क्ष"),
    // Palatals
    ("c", "च"),
    ("ch", "च"),
    ("chh", "छ"),
    ("j", "ज"),
    ("jh", "झ"),
    ("ny", "ञ"),
    ("yna", "ञ"),
    // Dentals & retroflex
    ("t", "त"),
    ("th", "थ"),
    ("d", "द"),
    ("dh", "ध"),
    ("n", "न"),
    ("ta", "त"),
    ("tha", "थ"),
    ("da", "द"),
    ("dha", "ध"),
    ("na", "न"),
    ("T", "ट"),
    ("Th", "ठ"),
    ("D", "ड"),
    ("Dh", "ढ"),
    ("N", "ण"),
    ("Ta", "ट"),
    ("Tha", "ठ"),
    ("Da", "ड"),
    ("Dha", "ढ"),
    ("Na", "ण"),
    // Labials
    ("p", "प"),
    ("ph", "फ"),
    ("b", "ब"),
    ("bh", "भ"),
    ("m", "म"),
    // Others
    ("y", "य"),
    ("r", "र"),
    ("l", "ल"),
    ("w", "व"),
    ("v", "व"),
    ("s", "स"),
    ("sh", "श"),
    ("Sh", "ष"),
    ("h", "ह"),
    // Compounds
    ("ksha", "क्ष"),
    ("gya", "ज्ञ"),
];

/// Direct multi-glyph outputs, matched before the phonetic rules.
pub(crate) const SPECIALS: &[(&str, &str)] = &[
    ("*", "\u{0902}"),
    ("**", "\u{0901}"),
    ("om", "ॐ"),
    ("rr", "र\u{094D}\u{200D}"), // reph-forming: ra + halant + ZWJ
    ("ri^", "रि"),
];

/// Whole-word overrides, consulted (lowercased) before the phonetic rules.
pub(crate) const LEXICON: &[(&str, &str)] = &[
    // particles / auxiliaries
    ("ke", "के"),
    ("ko", "को"),
    ("le", "ले"),
    ("laai", "लाई"),
    ("lai", "लाई"),
    ("ra", "र"),
    ("ho", "हो"),
    ("huncha", "हुन्छ"),
    ("hunchha", "हुन्छ"),
    ("hucha", "हुन्छ"),
    ("cha", "छ"),
    ("chha", "छ"),
    ("xa", "छ"),
    ("xha", "छ"),
    ("chan", "छन्"),
    ("chu", "छु"),
    ("chhau", "छौँ"),
    ("chhau\u{0304}", "छौँ"), // decomposed ū, as in the source rule set
    ("chhaen", "छैन"),
    ("chaina", "छैन"),
    ("chhaina", "छैन"),
    ("xaina", "छैन"),
    // frequent conversational
    ("raichha", "रैछ"),
    ("raicha", "रैछ"),
    ("raixa", "रैछ"),
    ("k", "के"),
    ("kha", "खा"),
    ("kasto", "कस्तो"),
    ("ramro", "राम्रो"),
    ("dherai", "धेरै"),
    ("sabai", "सबै"),
    ("huney", "हुने"),
    ("hune", "हुने"),
    // pronouns
    ("ma", "म"),
    ("hamro", "हाम्रो"),
    ("hamrai", "हाम्रोै"),
    ("mero", "मेरो"),
    ("timi", "तिमी"),
    ("tapai", "तपाईं"),
    ("tapai\u{0304}", "तपाईं"), // decomposed ī
    // interjections
    ("hya", "हया"),
    // formal words and place names the phonetic rules alone mis-render
    ("namaskar", "नमस्कार"),
    ("nepal", "नेपाल"),
    ("kathmandu", "काठमाडौं"),
    ("dhanyawaad", "धन्यवाद"),
    ("sagarmatha", "सगरमाथा"),
];
