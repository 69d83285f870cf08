use std::collections::HashMap;
use std::sync::OnceLock;

use super::table::{DIGRAPH_KANA, SINGLE_KANA};

/// Immutable kana → Hangul syllable lookup, shared process-wide.
pub struct KanaDictionary {
    singles: HashMap<char, char>,
    digraphs: HashMap<(char, char), char>,
}

impl KanaDictionary {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaDictionary {
        static INSTANCE: OnceLock<KanaDictionary> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut singles = HashMap::with_capacity(SINGLE_KANA.len());
            for &(kana, hangul) in SINGLE_KANA {
                if let (Some(k), Some(h)) = (single_char(kana), single_char(hangul)) {
                    singles.insert(k, h);
                }
            }
            let mut digraphs = HashMap::with_capacity(DIGRAPH_KANA.len());
            for &(kana, hangul) in DIGRAPH_KANA {
                let mut it = kana.chars();
                if let (Some(a), Some(b), None, Some(h)) =
                    (it.next(), it.next(), it.next(), single_char(hangul))
                {
                    digraphs.insert((a, b), h);
                }
            }
            KanaDictionary { singles, digraphs }
        })
    }

    pub fn lookup_single(&self, kana: char) -> Option<char> {
        self.singles.get(&kana).copied()
    }

    pub fn lookup_digraph(&self, first: char, second: char) -> Option<char> {
        self.digraphs.get(&(first, second)).copied()
    }

    pub fn len(&self) -> usize {
        self.singles.len() + self.digraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_is_loaded() {
        let dict = KanaDictionary::global();
        assert_eq!(dict.len(), SINGLE_KANA.len() + DIGRAPH_KANA.len());
    }

    #[test]
    fn test_lookup() {
        let dict = KanaDictionary::global();
        assert_eq!(dict.lookup_single('こ'), Some('코'));
        assert_eq!(dict.lookup_single('ヴ'), Some('부'));
        assert_eq!(dict.lookup_single('っ'), None);
        assert_eq!(dict.lookup_single('ん'), None);
        assert_eq!(dict.lookup_digraph('き', 'ょ'), Some('쿄'));
        assert_eq!(dict.lookup_digraph('フ', 'ァ'), Some('파'));
        assert_eq!(dict.lookup_digraph('か', 'き'), None);
    }
}
