use std::collections::HashSet;

use crate::scan::Candidate;

/// Collapse whitespace runs to single spaces, stripping newlines and tabs.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized candidates with exact duplicates removed. The first-seen
/// candidate keeps its heuristic; later duplicates are discarded.
pub fn dedupe(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();
    for candidate in candidates {
        let normalized = normalize(&candidate.text);
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            deduped.push(Candidate {
                text: normalized,
                heuristic: candidate.heuristic,
            });
        }
    }
    deduped
}

/// The longest deduplicated candidate, measured in characters. Ties keep
/// the first-seen candidate; an empty set selects the empty string. Pure
/// and deterministic.
pub fn select(candidates: &[Candidate]) -> String {
    let mut winner = String::new();
    let mut winner_chars = 0;
    for candidate in dedupe(candidates) {
        let chars = candidate.text.chars().count();
        if chars > winner_chars {
            winner_chars = chars;
            winner = candidate.text;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{scan, Heuristic};

    fn candidate(text: &str, heuristic: Heuristic) -> Candidate {
        Candidate {
            text: text.to_string(),
            heuristic,
        }
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("a\n\nb\tc   d"), "a b c d");
        assert_eq!(normalize("  padded  "), "padded");
        assert_eq!(normalize("\n\t "), "");
    }

    #[test]
    fn test_dedupe_keeps_first_seen_heuristic() {
        let candidates = vec![
            candidate("same  text", Heuristic::ClassMatch),
            candidate("same\ntext", Heuristic::LongBlock),
            candidate("other text", Heuristic::IdMatch),
        ];
        let deduped = dedupe(&candidates);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].text, "same text");
        assert_eq!(deduped[0].heuristic, Heuristic::ClassMatch);
    }

    #[test]
    fn test_select_returns_longest() {
        let candidates = vec![
            candidate("short", Heuristic::ParagraphBlock),
            candidate("a noticeably longer candidate", Heuristic::LongBlock),
        ];
        assert_eq!(select(&candidates), "a noticeably longer candidate");
    }

    #[test]
    fn test_select_breaks_ties_by_first_seen() {
        let candidates = vec![
            candidate("aaaa", Heuristic::ClassMatch),
            candidate("bbbb", Heuristic::IdMatch),
        ];
        assert_eq!(select(&candidates), "aaaa");
    }

    #[test]
    fn test_select_is_idempotent() {
        let candidates = vec![
            candidate("one candidate body", Heuristic::SemanticTag),
            candidate("another candidate body", Heuristic::LongBlock),
        ];
        assert_eq!(select(&candidates), select(&candidates));
    }

    #[test]
    fn test_select_empty_set_is_empty_string() {
        assert_eq!(select(&[]), "");
        let blank = vec![candidate("  \n\t ", Heuristic::ClassMatch)];
        assert_eq!(select(&blank), "");
    }

    #[test]
    fn test_length_is_measured_in_characters() {
        // Three CJK chars out-count two ASCII chars despite more bytes.
        let candidates = vec![
            candidate("ab", Heuristic::ClassMatch),
            candidate("新闻稿", Heuristic::LongBlock),
        ];
        assert_eq!(select(&candidates), "新闻稿");
    }

    #[test]
    fn test_article_region_beats_short_paragraphs() {
        let body = "w".repeat(600);
        let markup = format!(
            "<article>{}</article>\
             <p>first paragraph, 25 chars!</p>\
             <p>second paragraph of 25 ch</p>\
             <p>third paragraph, also 25s</p>",
            body
        );
        let selected = select(&scan(&markup));
        assert_eq!(selected, body);
    }

    #[test]
    fn test_any_long_paragraph_selects_non_empty() {
        let markup = "<p>one paragraph comfortably over twenty characters</p>";
        assert!(!select(&scan(markup)).is_empty());
    }
}
