//! Arithmetic over the precomposed Hangul syllable block (U+AC00..=U+D7A3).
//!
//! A syllable is `BASE + (cho * 21 + jung) * 28 + jong`. Every helper here
//! passes code points outside the block through unchanged (or answers
//! `false`), so callers can feed arbitrary transducer output.

mod longsound;

pub use longsound::{hyphen_to_long_sound, long_sound_to_hyphen, LONG_SOUND_MARK};

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;

const CHOSEONG_COUNT: u32 = 19;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// Initial ㅇ (silent onset).
pub const CHO_IEUNG: u32 = 11;

/// Final ㅅ, used for the geminate っ.
pub const JONG_SIOT: u32 = 19;
/// Final ㄴ, used for the moraic nasal ん.
pub const JONG_NIEUN: u32 = 4;

// Vowel indices used by the long-sound exception table.
const JUNG_A: u32 = 0;
const JUNG_YA: u32 = 2;
const JUNG_EO: u32 = 4;
const JUNG_YEO: u32 = 6;
const JUNG_O: u32 = 8;
const JUNG_YO: u32 = 12;
const JUNG_U: u32 = 13;
const JUNG_YU: u32 = 17;

/// (previous vowel, current vowel) pairs that still read as a long vowel.
/// Empirical table; keep as data.
const LONG_SOUND_VOWEL_PAIRS: &[(u32, u32)] = &[
    (JUNG_O, JUNG_U),
    (JUNG_YA, JUNG_A),
    (JUNG_YEO, JUNG_EO),
    (JUNG_YO, JUNG_O),
    (JUNG_YO, JUNG_U),
    (JUNG_YU, JUNG_U),
];

/// Decomposed syllable indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jamo {
    pub cho: u32,
    pub jung: u32,
    pub jong: u32,
}

pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Split a syllable into initial/vowel/final indices.
pub fn decompose(c: char) -> Option<Jamo> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - SYLLABLE_BASE;
    Some(Jamo {
        cho: offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT),
        jung: (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT,
        jong: offset % JONGSEONG_COUNT,
    })
}

/// Build a syllable from indices. `None` if any index is out of range.
pub fn compose(cho: u32, jung: u32, jong: u32) -> Option<char> {
    if cho >= CHOSEONG_COUNT || jung >= JUNGSEONG_COUNT || jong >= JONGSEONG_COUNT {
        return None;
    }
    char::from_u32(SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong)
}

/// Replace the final consonant of `c`, keeping its initial and vowel.
///
/// Index 0 clears the final. Non-syllables and out-of-range indices return
/// `c` unchanged.
pub fn add_jongseong(c: char, jong: u32) -> char {
    match decompose(c) {
        Some(j) => compose(j.cho, j.jung, jong).unwrap_or(c),
        None => c,
    }
}

/// True if `c` is a syllable with an empty final slot.
pub fn has_no_final_consonant(c: char) -> bool {
    decompose(c).is_some_and(|j| j.jong == 0)
}

/// True if `curr` continues the vowel of `prev` as a long sound:
/// `curr` starts with ㅇ and either shares `prev`'s vowel or forms one of the
/// merged pairs (ㅗ→ㅜ, ㅑ→ㅏ, ㅕ→ㅓ, ㅛ→ㅗ, ㅛ→ㅜ, ㅠ→ㅜ).
pub fn is_long_sound(prev: char, curr: char) -> bool {
    let (Some(p), Some(c)) = (decompose(prev), decompose(curr)) else {
        return false;
    };
    c.cho == CHO_IEUNG
        && (p.jung == c.jung || LONG_SOUND_VOWEL_PAIRS.contains(&(p.jung, c.jung)))
}

/// The syllable that spells out `prev`'s vowel again: ㅇ + vowel, no final.
pub fn long_sound_char(prev: char) -> char {
    match decompose(prev) {
        Some(j) => compose(CHO_IEUNG, j.jung, 0).unwrap_or(prev),
        None => prev,
    }
}
