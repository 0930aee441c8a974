pub mod trace_init;
pub mod translit;
pub mod unicode;

pub use translit::{transliterate, transliterate_with, OutputMode, RuleSet};
