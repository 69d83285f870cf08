use proptest::prelude::*;

use super::kana_to_hangul;
use crate::hangul::{hyphen_to_long_sound, is_long_sound, long_sound_to_hyphen};

#[test]
fn test_plain_kana() {
    assert_eq!(kana_to_hangul("こえ", true), "코에");
    assert_eq!(kana_to_hangul("せい", true), "세이");
    assert_eq!(kana_to_hangul("ありがとう", true), "아리가토우");
}

#[test]
fn test_youon_digraph() {
    assert_eq!(kana_to_hangul("きょう", true), "쿄우");
    assert_eq!(kana_to_hangul("キョウ", false), "쿄우");
    assert_eq!(kana_to_hangul("しゃしん", true), "샤신");
}

#[test]
fn test_geminate_attaches_to_previous() {
    assert_eq!(kana_to_hangul("がっこう", true), "갓코우");
    assert_eq!(kana_to_hangul("ガッコウ", true), "갓코우");
    assert!(!kana_to_hangul("がっこう", true).contains('ㅅ'));
}

#[test]
fn test_nasal_attaches_to_previous() {
    assert_eq!(kana_to_hangul("せんせい", true), "센세이");
    assert_eq!(kana_to_hangul("こんにちは", true), "콘니치하");
    assert!(!kana_to_hangul("せんせい", true).contains('ㄴ'));
}

#[test]
fn test_leading_coda_is_bare() {
    assert_eq!(kana_to_hangul("ん", true), "ㄴ");
    assert_eq!(kana_to_hangul("っと", true), "ㅅ토");
}

#[test]
fn test_choonpu_representations() {
    assert_eq!(kana_to_hangul("ラーメン", true), "라-멘");
    assert_eq!(kana_to_hangul("ラーメン", false), "라아멘");
    assert_eq!(kana_to_hangul("サイコー", true), "사이코-");
    assert_eq!(kana_to_hangul("サイコー", false), "사이코오");
    assert_eq!(kana_to_hangul("キョー", false), "쿄요");
}

#[test]
fn test_leading_choonpu_stays_hyphen() {
    assert_eq!(kana_to_hangul("ーア", false), "-아");
}

#[test]
fn test_choonpu_after_untranslatable_repeats_it() {
    assert_eq!(kana_to_hangul("ゐー", false), "ゐゐ");
    assert_eq!(kana_to_hangul("ゐー", true), "ゐ-");
}

#[test]
fn test_loanword_extensions() {
    assert_eq!(kana_to_hangul("ファイト", true), "파이토");
    assert_eq!(kana_to_hangul("ヴァイオリン", true), "바이오린");
    assert_eq!(kana_to_hangul("ヴ", true), "부");
}

#[test]
fn test_untranslatable_passes_through() {
    assert_eq!(kana_to_hangul("愛してる", true), "愛시테루");
    assert_eq!(kana_to_hangul("LOVE!", false), "LOVE!");
    assert_eq!(kana_to_hangul("", true), "");
}

/// Kana whose Hangul has a non-ㅇ initial, so a spelled-out long vowel is
/// the only source of ㅇ-initial syllables.
const CONSONANT_KANA: &[&str] = &[
    "カ", "キ", "ク", "ケ", "コ", "サ", "シ", "ス", "セ", "ソ", "タ", "テ", "ト", "ナ", "ニ",
    "ネ", "ハ", "ヒ", "フ", "ヘ", "ホ", "マ", "ミ", "メ", "モ", "ラ", "リ", "ル", "レ", "ロ",
    "ガ", "ギ", "ゴ", "パ", "ポ", "キョ", "シュ", "チャ",
];

fn has_repetition(chars: &[char]) -> bool {
    (2..chars.len().saturating_sub(1)).any(|i| {
        chars[i - 2] == chars[i]
            && chars[i + 1] == chars[i - 1]
            && is_long_sound(chars[i - 1], chars[i])
    })
}

proptest! {
    #[test]
    fn long_vowel_representations_round_trip(
        parts in prop::collection::vec(
            (prop::sample::select(CONSONANT_KANA), any::<bool>()),
            1..12,
        )
    ) {
        let kana: String = parts
            .iter()
            .map(|(k, long)| if *long { format!("{k}ー") } else { k.to_string() })
            .collect();
        let hyphenated = kana_to_hangul(&kana, true);
        let composed = kana_to_hangul(&kana, false);
        prop_assert_eq!(&composed, &hyphen_to_long_sound(&hyphenated));

        let composed_chars: Vec<char> = composed.chars().collect();
        prop_assume!(!has_repetition(&composed_chars));
        prop_assert_eq!(long_sound_to_hyphen(&composed), hyphenated);
    }

    #[test]
    fn transducer_is_total(s in "\\PC{0,24}") {
        let _ = kana_to_hangul(&s, true);
        let _ = kana_to_hangul(&s, false);
    }
}
