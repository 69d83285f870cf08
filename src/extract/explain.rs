use super::types::SentenceAnalysis;

const SURFACE_PAD: usize = 12;

fn pad(label: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let display_width = UnicodeWidthStr::width(label);
    if display_width < width {
        format!("{}{}", label, " ".repeat(width - display_width))
    } else {
        label.to_string()
    }
}

/// Format a SentenceAnalysis as a human-readable table, one row per
/// alternative. The selected alternative is marked with `*`.
pub fn format_text(analysis: &SentenceAnalysis) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== \"{}\" ({} words) ===\n",
        analysis.original_text, analysis.word_count,
    ));

    for (i, word) in analysis.words.iter().enumerate() {
        if word.alternative_pronunciations.is_empty() {
            out.push_str(&format!(
                "  #{:<2} {} (no reading)\n",
                i,
                pad(&word.surface, SURFACE_PAD)
            ));
            continue;
        }
        for (j, alt) in word.alternative_pronunciations.iter().enumerate() {
            let label = if j == 0 { word.surface.as_str() } else { "" };
            let mark = if j == word.selected_id { '*' } else { ' ' };
            let index = if j == 0 { format!("#{:<2}", i) } else { "   ".to_string() };
            out.push_str(&format!(
                "  {} {} {}[{}] {} / {}  {}  {},{},{}\n",
                index,
                pad(label, SURFACE_PAD),
                mark,
                j,
                pad(&alt.hangul_pron, 10),
                pad(&alt.hangul_kana, 10),
                pad(&alt.hiragana_pron, 12),
                alt.pos1,
                alt.pos2,
                alt.pos3,
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{AlternativePronunciation, WordInfo};

    fn alt(pron: &str, kana: &str) -> AlternativePronunciation {
        AlternativePronunciation {
            hangul_pron: pron.to_string(),
            hangul_kana: kana.to_string(),
            pos1: "名詞".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_text_marks_selection() {
        let analysis = SentenceAnalysis::new(
            "今日",
            vec![WordInfo {
                surface: "今日".to_string(),
                selected_id: 1,
                alternative_pronunciations: vec![alt("쿄-", "쿄우"), alt("콘니치", "콘니치")],
            }],
        );
        let text = format_text(&analysis);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("(1 words)"));
        assert!(lines[1].contains(" [0] 쿄-"));
        assert!(lines[2].contains("*[1] 콘니치"));
        // Wide surfaces are padded by display width, so columns line up.
        let col = |l: &str| unicode_width::UnicodeWidthStr::width(&l[..l.find('[').unwrap()]);
        assert_eq!(col(lines[1]), col(lines[2]));
    }

    #[test]
    fn test_format_text_unread_word() {
        let analysis = SentenceAnalysis::new(
            "猫",
            vec![WordInfo {
                surface: "猫".to_string(),
                ..Default::default()
            }],
        );
        assert!(format_text(&analysis).contains("(no reading)"));
    }
}
