//! Kana-to-Hangul transducer.
//!
//! Table-driven longest match over hiragana/katakana, followed by a pass
//! that folds geminates (っ) and moraic nasals (ん) into the preceding
//! syllable's final consonant, and an optional pass spelling out long vowels.

mod convert;
mod dict;
mod table;
#[cfg(test)]
mod tests;

pub use convert::kana_to_hangul;
pub use dict::KanaDictionary;
