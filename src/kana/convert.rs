use crate::hangul::{self, hyphen_to_long_sound, JONG_NIEUN, JONG_SIOT, LONG_SOUND_MARK};

use super::dict::KanaDictionary;

/// Katakana prolonged sound mark.
const CHOONPU: char = 'ー';

/// Stand-alone glyphs used when a geminate or nasal has no syllable to attach to.
const BARE_SIOT: char = 'ㅅ';
const BARE_NIEUN: char = 'ㄴ';

/// Kana that turn into the final consonant of the preceding syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coda {
    Geminate,
    Nasal,
}

impl Coda {
    fn of(c: char) -> Option<Coda> {
        match c {
            'っ' | 'ッ' => Some(Coda::Geminate),
            'ん' | 'ン' => Some(Coda::Nasal),
            _ => None,
        }
    }

    fn jongseong(self) -> u32 {
        match self {
            Coda::Geminate => JONG_SIOT,
            Coda::Nasal => JONG_NIEUN,
        }
    }

    fn bare(self) -> char {
        match self {
            Coda::Geminate => BARE_SIOT,
            Coda::Nasal => BARE_NIEUN,
        }
    }
}

/// Transliterate kana into Hangul.
///
/// With `use_hyphen` a long vowel (ー) stays as `-`; otherwise it is spelled
/// out by repeating the previous vowel (`ラーメン` → `라아멘`). Characters
/// without a mapping pass through unchanged, so this never fails.
pub fn kana_to_hangul(text: &str, use_hyphen: bool) -> String {
    let tokens = tokenize(text);
    let coalesced: String = coalesce(tokens).into_iter().collect();
    if use_hyphen {
        coalesced
    } else {
        hyphen_to_long_sound(&coalesced)
    }
}

/// Longest-match lookup: digraphs first, then single kana, then ー.
fn tokenize(text: &str) -> Vec<char> {
    let dict = KanaDictionary::global();
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            if let Some(h) = dict.lookup_digraph(chars[i], next) {
                out.push(h);
                i += 2;
                continue;
            }
        }

        let c = chars[i];
        match dict.lookup_single(c) {
            Some(h) => out.push(h),
            None if c == CHOONPU => out.push(LONG_SOUND_MARK),
            None => out.push(c),
        }
        i += 1;
    }

    out
}

/// Fold っ/ん into the final slot of the preceding syllable.
///
/// Without a preceding syllable (start of text, or after a non-Hangul
/// character) they become a bare ㅅ/ㄴ.
fn coalesce(tokens: Vec<char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(tokens.len());

    for c in tokens {
        let Some(coda) = Coda::of(c) else {
            out.push(c);
            continue;
        };
        match out.last_mut() {
            Some(prev) if hangul::is_syllable(*prev) => {
                *prev = hangul::add_jongseong(*prev, coda.jongseong());
            }
            _ => out.push(coda.bare()),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_prefers_digraph() {
        assert_eq!(tokenize("きょう"), vec!['쿄', '우']);
        assert_eq!(tokenize("きよう"), vec!['키', '요', '우']);
    }

    #[test]
    fn test_tokenize_marks_and_passthrough() {
        assert_eq!(tokenize("ラー"), vec!['라', '-']);
        assert_eq!(tokenize("A、ん"), vec!['A', '、', 'ん']);
    }

    #[test]
    fn test_coalesce_attaches() {
        assert_eq!(coalesce(vec!['가', 'っ', '코']), vec!['갓', '코']);
        assert_eq!(coalesce(vec!['세', 'ん', '세']), vec!['센', '세']);
    }

    #[test]
    fn test_coalesce_bare() {
        assert_eq!(coalesce(vec!['ん']), vec!['ㄴ']);
        assert_eq!(coalesce(vec!['っ', '카']), vec!['ㅅ', '카']);
        assert_eq!(coalesce(vec!['A', 'ン']), vec!['A', 'ㄴ']);
        assert_eq!(coalesce(vec!['-', 'ッ']), vec!['-', 'ㅅ']);
        assert_eq!(coalesce(vec!['っ', 'っ']), vec!['ㅅ', 'ㅅ']);
    }

    #[test]
    fn test_coalesce_consecutive() {
        // Each coda lands on the syllable currently last in the output.
        assert_eq!(coalesce(vec!['카', 'ん', 'っ']), vec!['캇']);
        assert_eq!(coalesce(vec!['하', 'ん', '나', 'ん']), vec!['한', '난']);
    }
}
