use std::collections::HashSet;

use lazy_static::lazy_static;
use nc_core::Result;

/// Lexical category assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    PersonName,
    Place,
    Organization,
    OtherProper,
    Noun,
    VerbalNoun,
    Verb,
    Other,
}

impl PosTag {
    /// Categories eligible for keyword-tag ranking: places, common nouns,
    /// verbal nouns and verbs.
    pub fn keyword_eligible(&self) -> bool {
        matches!(
            self,
            PosTag::Place | PosTag::Noun | PosTag::VerbalNoun | PosTag::Verb
        )
    }

    /// Proper-noun subtypes collected as named entities.
    pub fn is_proper_noun(&self) -> bool {
        matches!(
            self,
            PosTag::PersonName | PosTag::Place | PosTag::Organization | PosTag::OtherProper
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub text: String,
    pub pos: PosTag,
}

/// Part-of-speech tagging seam. The built-in implementation is heuristic;
/// a dictionary-backed tagger can be swapped in behind this trait.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>>;
}

lazy_static! {
    static ref PLACES: HashSet<&'static str> = [
        "China", "Beijing", "Shanghai", "America", "Washington", "Europe", "London",
        "Paris", "Tokyo", "Japan", "India", "Russia", "Moscow", "Germany", "Berlin",
        "France", "Thailand", "Bangkok", "Vietnam", "Hanoi", "Indonesia", "Jakarta",
        "Malaysia", "Singapore", "Taiwan", "Korea", "Seoul", "Australia", "Sydney",
        "Canada", "Brazil", "Mexico", "Ukraine", "Israel", "Africa", "Asia",
        "中国", "北京", "上海", "美国", "日本", "东京", "欧洲", "德国", "法国",
        "英国", "伦敦", "印度", "泰国", "越南", "韩国", "首尔", "台湾", "香港",
        "新加坡",
    ]
    .into_iter()
    .collect();
    static ref ORGANIZATION_WORDS: HashSet<&'static str> = [
        "Inc", "Corp", "Ltd", "Co", "Company", "University", "Institute", "Ministry",
        "Bank", "Council", "Commission", "Agency", "Parliament", "Congress", "Senate",
        "UN", "EU", "NATO", "WHO", "IMF",
    ]
    .into_iter()
    .collect();
    static ref PERSON_TITLES: HashSet<&'static str> = [
        "Mr", "Mrs", "Ms", "Dr", "President", "Minister", "Senator", "Governor",
        "Professor", "Chairman", "CEO",
    ]
    .into_iter()
    .collect();
    static ref COMMON_VERBS: HashSet<&'static str> = [
        "said", "says", "announced", "reported", "told", "launched", "released",
        "signed", "warned", "urged", "plans", "expects", "found", "showed", "rose",
        "fell", "grew",
    ]
    .into_iter()
    .collect();
}

const VERBAL_NOUN_SUFFIXES: &[&str] = &["ing", "ment", "tion", "sion", "ance", "ence"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate", "ed"];

/// Heuristic tagger: Unicode word tokenization with CJK runs split into
/// character bigrams, and category assignment from capitalization, a small
/// gazetteer, and suffix shape.
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\n' | '。' | '！' | '？')
}

fn classify_common(token: &str) -> PosTag {
    if COMMON_VERBS.contains(token) {
        return PosTag::Verb;
    }
    for suffix in VERBAL_NOUN_SUFFIXES {
        if token.len() > suffix.len() && token.ends_with(suffix) {
            return PosTag::VerbalNoun;
        }
    }
    for suffix in VERB_SUFFIXES {
        if token.len() > suffix.len() && token.ends_with(suffix) {
            return PosTag::Verb;
        }
    }
    PosTag::Noun
}

fn classify_word(token: &str, sentence_start: bool, previous: Option<&str>) -> PosTag {
    if token.chars().all(|c| c.is_numeric()) {
        return PosTag::Other;
    }

    let capitalized = token.chars().next().map_or(false, |c| c.is_uppercase());
    if capitalized {
        if PLACES.contains(token) {
            return PosTag::Place;
        }
        if ORGANIZATION_WORDS.contains(token) {
            return PosTag::Organization;
        }
        if previous.map_or(false, |p| PERSON_TITLES.contains(p)) {
            return PosTag::PersonName;
        }
        if !sentence_start {
            return PosTag::OtherProper;
        }
        // A sentence-initial capital is usually just an ordinary word.
        return classify_common(&token.to_lowercase());
    }

    classify_common(token)
}

fn classify_cjk(token: &str) -> PosTag {
    if PLACES.contains(token) {
        return PosTag::Place;
    }
    PosTag::Noun
}

#[derive(Default)]
struct TokenState {
    word: String,
    cjk_run: String,
    sentence_start: bool,
    previous: Option<String>,
}

impl TokenState {
    fn new() -> Self {
        Self {
            sentence_start: true,
            ..Self::default()
        }
    }

    fn flush_word(&mut self, words: &mut Vec<TaggedWord>) {
        if self.word.is_empty() {
            return;
        }
        let pos = classify_word(&self.word, self.sentence_start, self.previous.as_deref());
        words.push(TaggedWord {
            text: self.word.clone(),
            pos,
        });
        self.previous = Some(std::mem::take(&mut self.word));
        self.sentence_start = false;
    }

    fn flush_cjk(&mut self, words: &mut Vec<TaggedWord>) {
        if self.cjk_run.is_empty() {
            return;
        }
        let chars: Vec<char> = self.cjk_run.chars().collect();
        if chars.len() == 1 {
            words.push(TaggedWord {
                text: self.cjk_run.clone(),
                pos: PosTag::Other,
            });
        } else {
            for pair in chars.windows(2) {
                let bigram: String = pair.iter().collect();
                let pos = classify_cjk(&bigram);
                words.push(TaggedWord { text: bigram, pos });
            }
        }
        self.previous = None;
        self.sentence_start = false;
        self.cjk_run.clear();
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>> {
        let mut words = Vec::new();
        let mut state = TokenState::new();

        for c in text.chars() {
            if is_cjk(c) {
                state.flush_word(&mut words);
                state.cjk_run.push(c);
            } else if c.is_alphanumeric() || c == '_' {
                state.flush_cjk(&mut words);
                state.word.push(c);
            } else {
                state.flush_word(&mut words);
                state.flush_cjk(&mut words);
                if is_sentence_end(c) {
                    state.sentence_start = true;
                    state.previous = None;
                }
            }
        }
        state.flush_word(&mut words);
        state.flush_cjk(&mut words);

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(text: &str) -> Vec<TaggedWord> {
        HeuristicTagger::new().tag(text).unwrap()
    }

    fn pos_of(words: &[TaggedWord], text: &str) -> Option<PosTag> {
        words.iter().find(|w| w.text == text).map(|w| w.pos)
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper() {
        let words = tags_of("the talks with Huawei continued");
        assert_eq!(pos_of(&words, "Huawei"), Some(PosTag::OtherProper));
    }

    #[test]
    fn test_sentence_initial_capital_is_not_proper() {
        let words = tags_of("Markets rallied today.");
        assert_eq!(pos_of(&words, "Markets"), Some(PosTag::Noun));
    }

    #[test]
    fn test_gazetteer_place() {
        let words = tags_of("officials met in Beijing yesterday");
        assert_eq!(pos_of(&words, "Beijing"), Some(PosTag::Place));
    }

    #[test]
    fn test_person_after_title() {
        let words = tags_of("a statement from Mr Tanaka followed");
        assert_eq!(pos_of(&words, "Tanaka"), Some(PosTag::PersonName));
    }

    #[test]
    fn test_suffix_categories() {
        let words = tags_of("the funding agreement should stabilize prices");
        assert_eq!(pos_of(&words, "funding"), Some(PosTag::VerbalNoun));
        assert_eq!(pos_of(&words, "agreement"), Some(PosTag::VerbalNoun));
        assert_eq!(pos_of(&words, "stabilize"), Some(PosTag::Verb));
        assert_eq!(pos_of(&words, "prices"), Some(PosTag::Noun));
    }

    #[test]
    fn test_cjk_bigrams() {
        let words = tags_of("中国经济");
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["中国", "国经", "经济"]);
        assert_eq!(pos_of(&words, "中国"), Some(PosTag::Place));
        assert_eq!(pos_of(&words, "经济"), Some(PosTag::Noun));
    }

    #[test]
    fn test_numbers_are_other() {
        let words = tags_of("over 2024 the index rose");
        assert_eq!(pos_of(&words, "2024"), Some(PosTag::Other));
    }
}
