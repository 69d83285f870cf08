//! Character-level Unicode classification and kana case folding for Japanese text.

/// Katakana that have a hiragana counterpart 0x60 below (ー and later are excluded).
const KATAKANA_SHIFTABLE: std::ops::RangeInclusive<char> = '\u{30A0}'..='\u{30FA}';
const HIRAGANA_BLOCK: std::ops::RangeInclusive<char> = '\u{3040}'..='\u{309F}';
const KANA_SHIFT: u32 = 0x60;

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA_BLOCK.contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs only; extension blocks are not treated as kanji.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// True if any character of `s` is a kanji.
pub fn has_kanji(s: &str) -> bool {
    s.chars().any(is_kanji)
}

/// True if `s` is non-empty and consists of hiragana and katakana only.
pub fn is_kana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || is_katakana(c))
}

/// Shift katakana down to the hiragana block. Everything else passes through.
pub fn to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if KATAKANA_SHIFTABLE.contains(&c) {
                char::from_u32(c as u32 - KANA_SHIFT).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Shift hiragana up to the katakana block. Everything else passes through.
pub fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if HIRAGANA_BLOCK.contains(&c) {
                char::from_u32(c as u32 + KANA_SHIFT).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
