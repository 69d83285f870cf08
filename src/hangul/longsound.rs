use super::{is_long_sound, long_sound_char};

/// Marker for a lengthened vowel in the hyphen representation (from ー).
pub const LONG_SOUND_MARK: char = '-';

/// Replace each `-` with a syllable repeating the previous vowel.
///
/// A leading `-` has nothing to inherit from and stays literal. After a
/// non-syllable the `-` repeats that character as is, so `a-` becomes `aa`
/// and `--` becomes `--`.
pub fn hyphen_to_long_sound(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c == LONG_SOUND_MARK && i > 0 {
                long_sound_char(chars[i - 1])
            } else {
                c
            }
        })
        .collect()
}

/// Replace syllables that lengthen the previous vowel with `-`.
///
/// Alternating two-syllable repetitions (`a b a b`) keep their inner
/// syllable, so "우오우오" is not read as "우오-오".
pub fn long_sound_to_hyphen(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &curr) in chars.iter().enumerate() {
        if i == 0 {
            out.push(curr);
            continue;
        }
        let prev = chars[i - 1];
        let repetition =
            i > 1 && i + 1 < chars.len() && chars[i - 2] == curr && chars[i + 1] == prev;

        if is_long_sound(prev, curr) && !repetition {
            out.push(LONG_SOUND_MARK);
        } else {
            out.push(curr);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_to_long_sound() {
        assert_eq!(hyphen_to_long_sound("라-멘"), "라아멘");
        assert_eq!(hyphen_to_long_sound("쿄-"), "쿄요");
        assert_eq!(hyphen_to_long_sound("-아"), "-아");
        assert_eq!(hyphen_to_long_sound("a-"), "aa");
        assert_eq!(hyphen_to_long_sound("카--"), "카아-");
        assert_eq!(hyphen_to_long_sound(""), "");
    }

    #[test]
    fn test_long_sound_to_hyphen() {
        assert_eq!(long_sound_to_hyphen("라아멘"), "라-멘");
        assert_eq!(long_sound_to_hyphen("코우"), "코-");
        assert_eq!(long_sound_to_hyphen("쿄오"), "쿄-");
        assert_eq!(long_sound_to_hyphen("코에"), "코에");
        assert_eq!(long_sound_to_hyphen(""), "");
        assert_eq!(long_sound_to_hyphen("아"), "아");
        assert_eq!(long_sound_to_hyphen("캬아"), "캬-");
        assert_eq!(long_sound_to_hyphen("켜어"), "켜-");
        assert_eq!(long_sound_to_hyphen("켜아"), "켜아");
    }

    #[test]
    fn test_repetition_keeps_syllable() {
        // Without the exception the third syllable would collapse: "우오-오".
        assert_eq!(long_sound_to_hyphen("우오우오"), "우오우오");
        // The exception needs a successor, so the last syllable still collapses.
        assert_eq!(long_sound_to_hyphen("아아아아"), "아-아-");
    }

    #[test]
    fn test_round_trip_without_repetition() {
        for hyphenated in ["라-멘", "코-히-", "스-파-", "센세-"] {
            let composed = hyphen_to_long_sound(hyphenated);
            assert_eq!(long_sound_to_hyphen(&composed), hyphenated, "{composed}");
        }
    }
}
