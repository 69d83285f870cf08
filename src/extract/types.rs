use serde::{Deserialize, Serialize};

/// One candidate reading of a word, in every script the client shows.
///
/// `*_pron` is the pronunciation form (long vowels as `ー`, hyphen in
/// Hangul); `*_kana` is the reading form with long vowels spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlternativePronunciation {
    pub hiragana_pron: String,
    pub hiragana_kana: String,
    pub katakana_pron: String,
    pub katakana_kana: String,
    pub hangul_pron: String,
    pub hangul_kana: String,
    pub pos1: String,
    pub pos2: String,
    pub pos3: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordInfo {
    pub surface: String,
    /// Index into `alternative_pronunciations`.
    pub selected_id: usize,
    pub alternative_pronunciations: Vec<AlternativePronunciation>,
}

impl WordInfo {
    pub fn selected(&self) -> Option<&AlternativePronunciation> {
        self.alternative_pronunciations.get(self.selected_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub original_text: String,
    pub word_count: usize,
    pub words: Vec<WordInfo>,
}

impl SentenceAnalysis {
    pub fn new(original_text: impl Into<String>, words: Vec<WordInfo>) -> Self {
        Self {
            original_text: original_text.into(),
            word_count: words.len(),
            words,
        }
    }

    /// A line with no words, as produced for blank input lines.
    pub fn empty(original_text: impl Into<String>) -> Self {
        Self::new(original_text, Vec::new())
    }
}
