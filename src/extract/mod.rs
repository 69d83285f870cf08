//! Pronunciation extraction over analyzer lattices.
//!
//! For every word on the analyzer's best path, collect the readings offered
//! by competing same-span nodes and render each one as hiragana, katakana
//! and Hangul.

mod explain;
pub mod feature;
mod pronunciation;
mod types;


pub use explain::format_text;
pub use feature::{FeatureSchema, Pos, Reading};
pub use pronunciation::{extract_pronunciations, AnalyzeError, ExtractOptions, Extractor};
pub use types::{AlternativePronunciation, SentenceAnalysis, WordInfo};
