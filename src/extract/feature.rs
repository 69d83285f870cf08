//! Feature-string decoding.
//!
//! The field layout depends on the analyzer dictionary, so the decoder
//! picks a schema from the field count alone:
//!
//! | schema   | fields | pron     | kana                         |
//! |----------|--------|----------|------------------------------|
//! | `Full`   | >= 18  | field 9  | field 17 (particles: pron)   |
//! | `Wide`   | >= 10  | field 9  | pron                         |
//! | `Narrow` | >= 8   | field 7  | pron                         |
//! | `Bare`   | < 8    | surface  | surface                      |

use crate::lattice::Node;

const FULL_PRON: usize = 9;
const FULL_KANA: usize = 17;
const NARROW_PRON: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSchema {
    /// UniDic-style rows with both pronunciation and kana reading.
    Full,
    /// Truncated UniDic-style rows, pronunciation only.
    Wide,
    /// IPADIC-style rows, reading at field 7.
    Narrow,
    Bare,
}

impl FeatureSchema {
    pub fn detect(field_count: usize) -> Self {
        match field_count {
            n if n >= FULL_KANA + 1 => Self::Full,
            n if n >= FULL_PRON + 1 => Self::Wide,
            n if n >= NARROW_PRON + 1 => Self::Narrow,
            _ => Self::Bare,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pos {
    pub pos1: String,
    pub pos2: String,
    pub pos3: String,
}

impl Pos {
    pub fn from_fields(fields: &[&str]) -> Self {
        let at = |i: usize| fields.get(i).copied().unwrap_or_default().to_string();
        Self {
            pos1: at(0),
            pos2: at(1),
            pos3: at(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Pronunciation form, long vowels written with `ー`.
    pub pron: String,
    /// Reading form, long vowels spelled out.
    pub kana: String,
}

/// `*` marks an attribute the dictionary does not know.
fn usable(field: Option<&str>) -> Option<&str> {
    field.filter(|f| !f.is_empty() && *f != "*")
}

/// Decode the reading of a node whose feature is already split into `fields`.
pub fn decode(surface: &str, fields: &[&str], particle_pos: &str) -> Reading {
    let field = |i: usize| usable(fields.get(i).copied());

    match FeatureSchema::detect(fields.len()) {
        FeatureSchema::Full => {
            let pron = field(FULL_PRON).unwrap_or(surface).to_string();
            let kana = if fields.first() == Some(&particle_pos) {
                // は/へ as particles are read わ/え; only pron carries that.
                pron.clone()
            } else {
                field(FULL_KANA).map_or_else(|| pron.clone(), str::to_string)
            };
            Reading { pron, kana }
        }
        FeatureSchema::Wide => same(field(FULL_PRON).unwrap_or(surface)),
        FeatureSchema::Narrow => same(field(NARROW_PRON).unwrap_or(surface)),
        FeatureSchema::Bare => same(surface),
    }
}

fn same(pron: &str) -> Reading {
    Reading {
        pron: pron.to_string(),
        kana: pron.to_string(),
    }
}

/// Reading and part of speech of `node`.
pub fn decode_node(node: &Node, particle_pos: &str) -> (Reading, Pos) {
    let fields = node.fields();
    (
        decode(&node.surface, &fields, particle_pos),
        Pos::from_fields(&fields),
    )
}
