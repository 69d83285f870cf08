//! Multi-line lyrics: one [`SentenceAnalysis`] per input line, plus the
//! user's choice of reading for each word.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::{AnalyzeError, Extractor, SentenceAnalysis};
use crate::tagger::Tagger;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("line {line} out of range ({count} lines)")]
    LineOutOfRange { line: usize, count: usize },
    #[error("word {word} out of range on line {line} ({count} words)")]
    WordOutOfRange { line: usize, word: usize, count: usize },
    #[error("alternative {selected} out of range for word {word} ({count} alternatives)")]
    AlternativeOutOfRange {
        word: usize,
        selected: usize,
        count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LyricSheet {
    pub lines: Vec<SentenceAnalysis>,
}

impl LyricSheet {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Point word `word` of line `line` at another of its readings.
    pub fn update_selection(
        &mut self,
        line: usize,
        word: usize,
        selected_id: usize,
    ) -> Result<(), SelectionError> {
        let line_count = self.lines.len();
        let sentence = self
            .lines
            .get_mut(line)
            .ok_or(SelectionError::LineOutOfRange {
                line,
                count: line_count,
            })?;
        let word_count = sentence.words.len();
        let info = sentence
            .words
            .get_mut(word)
            .ok_or(SelectionError::WordOutOfRange {
                line,
                word,
                count: word_count,
            })?;
        let count = info.alternative_pronunciations.len();
        if selected_id >= count {
            return Err(SelectionError::AlternativeOutOfRange {
                word,
                selected: selected_id,
                count,
            });
        }
        info.selected_id = selected_id;
        Ok(())
    }
}

impl<T: Tagger> Extractor<T> {
    /// Analyze every line of `text`. Blank lines are kept as empty lines so
    /// the sheet lines up with the input.
    pub fn analyze_lines(&self, text: &str) -> Result<LyricSheet, AnalyzeError> {
        let lines = text
            .trim()
            .split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    Ok(SentenceAnalysis::empty(line))
                } else {
                    self.analyze_sentence(line.trim())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(lines = lines.len(), "analyzed sheet");
        Ok(LyricSheet { lines })
    }
}
