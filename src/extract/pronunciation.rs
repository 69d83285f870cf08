use std::collections::HashSet;

use tracing::{debug, debug_span, warn};

use super::feature::{decode_node, Pos, Reading};
use super::types::{AlternativePronunciation, SentenceAnalysis, WordInfo};
use crate::kana::kana_to_hangul;
use crate::lattice::{collect_same_span_nodes, Lattice, LatticeError, Node, NodeId};
use crate::settings::settings;
use crate::tagger::{Tagger, TaggerError};
use crate::unicode::{has_kanji, to_hiragana, to_katakana};

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Tagger(#[from] TaggerError),
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Bound for the same-span walk.
    pub max_depth: usize,
    /// Part of speech whose kana reading is replaced by its pronunciation.
    pub particle_pos: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        let s = settings();
        Self {
            max_depth: s.lattice.max_depth,
            particle_pos: s.extract.particle_pos.clone(),
        }
    }
}

/// Candidate readings of one word, keyed by pronunciation. The first node
/// to produce a pronunciation wins.
#[derive(Default)]
struct Candidates {
    seen: HashSet<String>,
    entries: Vec<(Reading, Pos)>,
}

impl Candidates {
    fn insert(&mut self, node: &Node, particle_pos: &str) {
        let (reading, pos) = decode_node(node, particle_pos);
        if self.seen.insert(reading.pron.clone()) {
            self.entries.push((reading, pos));
        }
    }
}

/// Turn each primary-path word into a [`WordInfo`] listing its readings.
///
/// Words whose surface contains kanji keep every distinct reading the
/// lattice offers for the same span; other words keep only the first.
pub fn extract_pronunciations(lattice: &Lattice, options: &ExtractOptions) -> Vec<WordInfo> {
    let _span = debug_span!("extract_pronunciations", nodes = lattice.len()).entered();

    let words: Vec<WordInfo> = lattice
        .primary_path()
        .filter(|(_, node)| !node.is_boundary())
        .map(|(id, node)| word_info(lattice, id, node, options))
        .collect();

    debug!(words = words.len());
    words
}

fn word_info(lattice: &Lattice, id: NodeId, node: &Node, options: &ExtractOptions) -> WordInfo {
    let candidates = match gather(lattice, id, node, options) {
        Ok(c) => c,
        Err(e) => {
            warn!(surface = %node.surface, error = %e, "lattice walk failed, using primary reading");
            let mut c = Candidates::default();
            c.insert(node, &options.particle_pos);
            c
        }
    };

    let kanji = has_kanji(&node.surface);
    let mut emitted: HashSet<(String, String)> = HashSet::new();
    let mut alternatives = Vec::new();

    for (reading, pos) in candidates.entries {
        if kanji && reading.pron == node.surface {
            continue;
        }
        let hiragana_pron = to_hiragana(&reading.pron);
        if !emitted.insert((hiragana_pron.clone(), reading.pron.clone())) {
            continue;
        }
        alternatives.push(AlternativePronunciation {
            hiragana_pron,
            hiragana_kana: to_hiragana(&reading.kana),
            katakana_pron: to_katakana(&reading.pron),
            katakana_kana: to_katakana(&reading.kana),
            hangul_pron: kana_to_hangul(&reading.pron, true),
            hangul_kana: kana_to_hangul(&reading.kana, false),
            pos1: pos.pos1,
            pos2: pos.pos2,
            pos3: pos.pos3,
        });
        if !kanji {
            break;
        }
    }

    WordInfo {
        surface: node.surface.clone(),
        selected_id: 0,
        alternative_pronunciations: alternatives,
    }
}

fn gather(
    lattice: &Lattice,
    id: NodeId,
    node: &Node,
    options: &ExtractOptions,
) -> Result<Candidates, LatticeError> {
    let mut candidates = Candidates::default();
    for alt_id in collect_same_span_nodes(lattice, id, node.length, options.max_depth)? {
        let alt = lattice.node(alt_id).ok_or(LatticeError::MissingNode(alt_id.0))?;
        candidates.insert(alt, &options.particle_pos);
    }
    Ok(candidates)
}

/// Runs an analyzer and extracts readings from its lattices.
pub struct Extractor<T> {
    tagger: T,
    options: ExtractOptions,
}

impl<T: Tagger> Extractor<T> {
    /// Extractor using the global settings.
    pub fn new(tagger: T) -> Self {
        Self::with_options(tagger, ExtractOptions::default())
    }

    pub fn with_options(tagger: T, options: ExtractOptions) -> Self {
        Self { tagger, options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn analyze_sentence(&self, text: &str) -> Result<SentenceAnalysis, AnalyzeError> {
        let lattice = self.tagger.parse(text)?;
        let words = extract_pronunciations(&lattice, &self.options);
        Ok(SentenceAnalysis::new(text, words))
    }
}
