use std::collections::HashMap;

use lazy_static::lazy_static;

/// Weight for terms absent from the table. High relative to the table
/// entries, so rare terms outrank everyday news vocabulary at equal
/// frequency.
pub const DEFAULT_IDF: f64 = 10.0;

lazy_static! {
    // Document frequencies precomputed over general news copy, in the
    // manner of a segmenter shipping a frozen IDF file.
    static ref IDF: HashMap<&'static str, f64> = [
        ("people", 2.1),
        ("government", 2.4),
        ("country", 2.2),
        ("world", 2.3),
        ("time", 1.8),
        ("year", 1.7),
        ("years", 1.8),
        ("day", 1.9),
        ("week", 2.0),
        ("month", 2.0),
        ("today", 1.9),
        ("market", 2.8),
        ("markets", 2.8),
        ("company", 2.6),
        ("report", 2.4),
        ("reports", 2.5),
        ("news", 1.6),
        ("percent", 2.3),
        ("million", 2.4),
        ("billion", 2.5),
        ("city", 2.3),
        ("state", 2.3),
        ("president", 2.7),
        ("minister", 2.7),
        ("police", 2.6),
        ("official", 2.4),
        ("officials", 2.4),
        ("group", 2.2),
        ("party", 2.5),
        ("system", 2.4),
        ("service", 2.3),
        ("program", 2.4),
        ("plan", 2.4),
        ("plans", 2.4),
        ("statement", 2.3),
        ("meeting", 2.4),
        ("decision", 2.5),
        ("economy", 2.9),
        ("policy", 2.8),
        ("新闻", 1.6),
        ("记者", 2.0),
        ("报道", 2.0),
        ("表示", 1.9),
        ("政府", 2.4),
        ("经济", 2.9),
        ("市场", 2.8),
        ("公司", 2.6),
        ("问题", 2.2),
        ("发展", 2.3),
    ]
    .into_iter()
    .collect();
}

/// Inverse document frequency for a term; case-insensitive lookup.
pub fn idf(term: &str) -> f64 {
    IDF.get(term.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_IDF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_terms_score_below_default() {
        assert!(idf("people") < DEFAULT_IDF);
        assert!(idf("Economy") < DEFAULT_IDF);
        assert!(idf("经济") < DEFAULT_IDF);
    }

    #[test]
    fn test_unseen_terms_get_default() {
        assert_eq!(idf("blockchain"), DEFAULT_IDF);
    }
}
