//! Japanese lyrics to Hangul pronunciation.
//!
//! Kana are transcribed syllable by syllable ([`kana_to_hangul`]); words
//! written in kanji get their candidate readings from a morphological
//! analyzer's lattice ([`Extractor`]), and a [`LyricSheet`] of analyzed
//! lines is rendered back to text by [`render_sheet`].

pub mod extract;
pub mod hangul;
pub mod kana;
pub mod lattice;
pub mod render;
pub mod settings;
pub mod sheet;
pub mod tagger;
pub mod trace_init;
pub mod unicode;

#[cfg(test)]
mod testutil;

pub use extract::{
    extract_pronunciations, AlternativePronunciation, AnalyzeError, ExtractOptions, Extractor,
    SentenceAnalysis, WordInfo,
};
pub use kana::kana_to_hangul;
pub use lattice::{Lattice, LatticeDocument, LatticeError, Node, NodeId};
pub use render::{render_line, render_sheet, RenderOptions};
pub use sheet::{LyricSheet, SelectionError};
pub use tagger::{SerializedTagger, Tagger, TaggerError};
