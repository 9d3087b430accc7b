use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use nc_core::Language;
use tracing::warn;

use crate::idf;
use crate::stopwords;
use crate::tagger::{HeuristicTagger, Tagger};

/// Keyword-tag and named-entity extraction over (title, body) pairs.
///
/// Ranking is tf × idf over tokens in the allowed lexical categories,
/// with the title counted twice so its tokens carry roughly double
/// weight. A failing tagger degrades to empty output.
pub struct TagExtractor {
    language: Language,
    tagger: Box<dyn Tagger>,
}

impl TagExtractor {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            tagger: Box::new(HeuristicTagger::new()),
        }
    }

    pub fn with_tagger(language: Language, tagger: Box<dyn Tagger>) -> Self {
        Self { language, tagger }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Top `top_k` keyword tags in rank order, deduplicated, each at least
    /// two characters after punctuation stripping.
    pub fn extract_tags(&self, text: &str, title: &str, top_k: usize) -> Vec<String> {
        let combined = format!("{} {} {}", title, title, text);
        let words = match self.tagger.tag(&combined) {
            Ok(words) => words,
            Err(e) => {
                warn!("tagger unavailable, returning no tags: {}", e);
                return Vec::new();
            }
        };

        // (count, first occurrence index) per surviving term.
        let mut frequencies: HashMap<String, (usize, usize)> = HashMap::new();
        for (index, word) in words.into_iter().enumerate() {
            if !word.pos.keyword_eligible() {
                continue;
            }
            if word.text.chars().count() < 2 {
                continue;
            }
            if stopwords::is_stopword(self.language, &word.text) {
                continue;
            }
            frequencies.entry(word.text).or_insert((0, index)).0 += 1;
        }

        let mut ranked: Vec<(String, f64, usize)> = frequencies
            .into_iter()
            .map(|(term, (count, first))| {
                let score = count as f64 * idf::idf(&term);
                (term, score, first)
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.2.cmp(&b.2))
        });

        let mut tags = Vec::new();
        for (term, _, _) in ranked.into_iter().take(top_k) {
            let cleaned = strip_symbols(&term);
            if cleaned.chars().count() >= 2 && !tags.contains(&cleaned) {
                tags.push(cleaned);
            }
        }
        tags
    }

    /// Every token tagged as a proper-noun subtype, as an unordered set.
    pub fn extract_entities(&self, text: &str) -> HashSet<String> {
        let words = match self.tagger.tag(text) {
            Ok(words) => words,
            Err(e) => {
                warn!("tagger unavailable, returning no entities: {}", e);
                return HashSet::new();
            }
        };

        words
            .into_iter()
            .filter(|word| word.pos.is_proper_noun())
            .map(|word| word.text)
            .collect()
    }
}

/// Strip punctuation and symbols, keeping letters, digits and underscores.
fn strip_symbols(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}
