use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// How the final Unicode string is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain Unicode text.
    Unicode,
    /// Decimal HTML numeric character references, one per code point.
    Html,
    /// Surface-level alias of `Unicode`; the UI exposes it as a distinct
    /// mode but no distinct transformation is specified.
    Smart,
}

/// Apply the output mode to an already-transliterated string.
///
/// `Html` is exactly reversible: decoding the `&#N;` references yields the
/// `Unicode`-mode string byte for byte.
pub fn encode(text: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Unicode | OutputMode::Smart => text.to_string(),
        OutputMode::Html => {
            let mut out = String::with_capacity(text.len() * 6);
            for c in text.chars() {
                // Writing into a String cannot fail.
                let _ = write!(out, "&#{};", c as u32);
            }
            out
        }
    }
}
