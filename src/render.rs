//! Line rendering: joins the selected reading of each word into one line
//! of Hangul.
//!
//! Three passes, in order:
//!
//! 1. per word, optionally assimilate finals against the following
//!    syllable (skipped for proper nouns);
//! 2. join words, inserting a space unless the part of speech marks the
//!    word as bound to its predecessor;
//! 3. attach stray `ㅅ`/`ㄴ` (a word that started with っ or ん) to the
//!    syllable before them.
//!
//! Assimilation rewrites the final consonant so it reads the way the kana
//! sounds before the next syllable: ん before ㅁ/ㅂ/ㅍ is ㅁ, before
//! ㄱ/ㅋ/ㅇ or a pause is ㅇ, otherwise ㄴ; っ takes the place of the
//! following initial.

use serde::{Deserialize, Serialize};

use crate::extract::WordInfo;
use crate::hangul::{compose, decompose, CHO_IEUNG, JONG_NIEUN, JONG_SIOT, LONG_SOUND_MARK};
use crate::settings::settings;
use crate::sheet::LyricSheet;

const PROPER_NOUN: &str = "固有名詞";

// Initial (choseong) indices.
const CHO_GIYEOK: u32 = 0;
const CHO_RIEUL: u32 = 5;
const CHO_MIEUM: u32 = 6;
const CHO_BIEUP: u32 = 7;
const CHO_KIEUK: u32 = 15;
const CHO_TIEUT: u32 = 16;
const CHO_PIEUP: u32 = 17;

// Final (jongseong) indices.
const JONG_GIYEOK: u32 = 1;
const JONG_DIGEUT: u32 = 7;
const JONG_RIEUL: u32 = 8;
const JONG_MIEUM: u32 = 16;
const JONG_BIEUP: u32 = 17;
const JONG_IEUNG: u32 = 21;

const NASAL_FINALS: [u32; 3] = [JONG_NIEUN, JONG_IEUNG, JONG_MIEUM];
const GEMINATE_FINALS: [u32; 5] = [JONG_SIOT, JONG_GIYEOK, JONG_DIGEUT, JONG_BIEUP, JONG_RIEUL];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Long vowels as `-` (pronunciation form) instead of spelled out.
    pub use_hyphen: bool,
    /// Put spaces between independent words.
    pub add_space: bool,
    /// Resolve ん to ㄴ/ㅁ/ㅇ by context.
    pub clarify_nasal: bool,
    /// Resolve っ to ㅅ/ㄱ/ㄷ/ㅂ/ㄹ by context.
    pub clarify_geminate: bool,
    /// Print the original line above each rendered line.
    pub show_original: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        settings().render.clone()
    }
}

/// Part of speech of a word's selected reading; empty when nothing is selected.
#[derive(Clone, Copy, Default)]
struct WordPos<'a> {
    pos1: &'a str,
    pos2: &'a str,
    pos3: &'a str,
}

impl<'a> WordPos<'a> {
    fn of(word: &'a WordInfo) -> Self {
        word.selected()
            .map(|a| WordPos {
                pos1: &a.pos1,
                pos2: &a.pos2,
                pos3: &a.pos3,
            })
            .unwrap_or_default()
    }

    /// Whether a space goes between `prev` and this word.
    fn separated_from(&self, prev: &WordPos<'_>) -> bool {
        let bound = matches!(self.pos1, "助詞" | "助動詞" | "接尾辞")
            || self.pos2 == "非自立"
            || (prev.pos1 != "助詞" && self.pos2 == "非自立可能")
            || (prev.pos2 == "接続助詞" && self.pos1 == "動詞")
            || prev.pos1 == "接頭辞"
            || (prev.pos2 == "数詞" && (self.pos2 == "数詞" || self.pos3 == "助数詞可能"));
        !bound
    }
}

/// Rewrite a ㄴ/ㅇ/ㅁ final for what follows. `None` and a space are a
/// pause; a following non-syllable leaves `c` alone.
fn clarify_nasal(c: char, next: Option<char>) -> char {
    let Some(jamo) = decompose(c) else {
        return c;
    };
    if !NASAL_FINALS.contains(&jamo.jong) {
        return c;
    }
    let jong = match next.filter(|&n| n != ' ') {
        None => JONG_IEUNG,
        Some(n) => match decompose(n) {
            Some(following) => match following.cho {
                CHO_GIYEOK | CHO_KIEUK | CHO_IEUNG => JONG_IEUNG,
                CHO_MIEUM | CHO_BIEUP | CHO_PIEUP => JONG_MIEUM,
                _ => JONG_NIEUN,
            },
            None => return c,
        },
    };
    compose(jamo.cho, jamo.jung, jong).unwrap_or(c)
}

/// Rewrite a ㅅ/ㄱ/ㄷ/ㅂ/ㄹ final for what follows. Unchanged before a pause.
fn clarify_geminate(c: char, next: Option<char>) -> char {
    let Some(jamo) = decompose(c) else {
        return c;
    };
    if !GEMINATE_FINALS.contains(&jamo.jong) {
        return c;
    }
    let Some(following) = next.filter(|&n| n != ' ').and_then(decompose) else {
        return c;
    };
    let jong = match following.cho {
        CHO_KIEUK => JONG_GIYEOK,
        CHO_TIEUT => JONG_DIGEUT,
        CHO_PIEUP => JONG_BIEUP,
        CHO_RIEUL => JONG_RIEUL,
        _ => JONG_SIOT,
    };
    compose(jamo.cho, jamo.jung, jong).unwrap_or(c)
}

fn assimilate(c: char, next: Option<char>, opts: &RenderOptions) -> char {
    let mut c = c;
    if opts.clarify_nasal {
        c = clarify_nasal(c, next);
    }
    if opts.clarify_geminate {
        c = clarify_geminate(c, next);
    }
    c
}

fn assimilate_within(text: &mut [char], opts: &RenderOptions) {
    if text.len() <= 1 {
        return;
    }
    for i in 0..text.len() {
        let next = text.get(i + 1).copied();
        text[i] = assimilate(text[i], next, opts);
    }
}

/// Fold bare ㅅ/ㄴ into the preceding syllable as its final. One space may
/// sit between them; after a long-vowel `-` the mark itself becomes the
/// ㅇ-initial syllable that takes the final.
fn attach_dangling(chars: &[char], opts: &RenderOptions) -> Vec<char> {
    if chars.len() <= 1 {
        return chars.to_vec();
    }
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && (c == 'ㅅ' || c == 'ㄴ') {
            if let Some(joined) = attach_at(chars, i, opts) {
                if chars[i - 1] == ' ' && i > 1 {
                    out.pop();
                }
                out.pop();
                out.push(joined);
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn attach_at(chars: &[char], i: usize, opts: &RenderOptions) -> Option<char> {
    let mut host = i - 1;
    if chars[host] == ' ' && i > 1 {
        host -= 1;
    }
    let after_mark = chars[host] == LONG_SOUND_MARK && host > 0;
    let base = decompose(if after_mark { chars[host - 1] } else { chars[host] })?;
    let cho = if after_mark { CHO_IEUNG } else { base.cho };
    let jong = if chars[i] == 'ㅅ' { JONG_SIOT } else { JONG_NIEUN };
    let joined = compose(cho, base.jung, jong)?;
    Some(match chars.get(i + 1) {
        Some(&next) => assimilate(joined, Some(next), opts),
        None => joined,
    })
}

/// Render one line of words with their current selections.
pub fn render_line(words: &[WordInfo], opts: &RenderOptions) -> String {
    let mut out: Vec<char> = Vec::new();
    let mut prev: Option<WordPos<'_>> = None;

    for word in words {
        let pos = WordPos::of(word);
        let mut text: Vec<char> = match word.selected() {
            Some(alt) if opts.use_hyphen => alt.hangul_pron.chars().collect(),
            Some(alt) => alt.hangul_kana.chars().collect(),
            None => word.surface.chars().collect(),
        };
        if pos.pos2 != PROPER_NOUN {
            assimilate_within(&mut text, opts);
        }

        if let (Some(prev_pos), Some(&first)) = (prev, text.first()) {
            if let Some(last) = out.last_mut() {
                if opts.add_space && pos.separated_from(&prev_pos) {
                    *last = assimilate(*last, None, opts);
                    out.push(' ');
                } else {
                    *last = assimilate(*last, Some(first), opts);
                }
            }
        }

        out.extend(text);
        prev = Some(pos);
    }

    if out.first() == Some(&' ') {
        let start = out.iter().take_while(|c| c.is_whitespace()).count();
        out.drain(..start);
    }
    attach_dangling(&out, opts).into_iter().collect()
}

/// Render every line of a sheet. Blank lines stay blank; with
/// `show_original` the source line precedes its rendering.
pub fn render_sheet(sheet: &LyricSheet, opts: &RenderOptions) -> String {
    let mut out: Vec<String> = Vec::new();
    for line in &sheet.lines {
        if line.words.is_empty() {
            out.push(String::new());
            continue;
        }
        if opts.show_original {
            out.push(line.original_text.clone());
        }
        out.push(render_line(&line.words, opts));
    }
    out.join("\n")
}
