use scraper::{ElementRef, Html, Selector};

/// Heuristic that proposed a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    ClassMatch,
    IdMatch,
    SemanticTag,
    ParagraphBlock,
    LongBlock,
}

/// A text span proposed by one heuristic as possibly being the article
/// body. Overlap between candidates is expected and resolved by the
/// selector.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub text: String,
    pub heuristic: Heuristic,
}

/// Class names commonly carrying the article body.
const ARTICLE_CLASSES: &[&str] = &[
    "article-content",
    "post-content",
    "entry-content",
    "content-article",
    "article-body",
    "story-body",
    "main-content",
    "article__content",
    "post-body",
    "story-content",
    "article-text",
    "content-body",
];

const ARTICLE_IDS: &[&str] = &[
    "article-content",
    "post-content",
    "main-content",
    "content",
    "article-body",
    "story-body",
    "entry-content",
];

/// Elements whose text is never article content.
const NON_CONTENT_TAGS: &[&str] = &[
    "script", "style", "iframe", "nav", "footer", "header", "aside", "form", "button", "meta",
    "link", "noscript",
];

/// Upper bound on candidates collected from one document, so pathological
/// markup cannot produce unbounded work downstream.
pub const MAX_CANDIDATES: usize = 64;

const MIN_PARAGRAPH_CHARS: usize = 20;
const MIN_BLOCK_CHARS: usize = 500;

/// Scan markup with five independent, non-exclusive heuristics and union
/// their outputs. Returns an empty vec when nothing matches; never panics
/// past this boundary.
pub fn scan(markup: &str) -> Vec<Candidate> {
    let document = Html::parse_document(markup);
    let mut candidates = Vec::new();

    for class_name in ARTICLE_CLASSES {
        let selector = Selector::parse(&format!(".{}", class_name)).unwrap();
        for element in document.select(&selector) {
            if is_excluded(element) {
                continue;
            }
            push_candidate(&mut candidates, element_text(element), Heuristic::ClassMatch);
        }
    }

    for id_name in ARTICLE_IDS {
        let selector = Selector::parse(&format!("#{}", id_name)).unwrap();
        if let Some(element) = document.select(&selector).find(|el| !is_excluded(*el)) {
            push_candidate(&mut candidates, element_text(element), Heuristic::IdMatch);
        }
    }

    let selector = Selector::parse("article, main").unwrap();
    for element in document.select(&selector) {
        if is_excluded(element) {
            continue;
        }
        push_candidate(&mut candidates, element_text(element), Heuristic::SemanticTag);
    }

    let selector = Selector::parse("p, h1, h2, h3, h4, h5, h6").unwrap();
    let mut paragraphs = Vec::new();
    for element in document.select(&selector) {
        if is_excluded(element) {
            continue;
        }
        let text = element_text(element).trim().to_string();
        if text.chars().count() > MIN_PARAGRAPH_CHARS {
            paragraphs.push(text);
        }
    }
    if !paragraphs.is_empty() {
        push_candidate(
            &mut candidates,
            paragraphs.join("\n"),
            Heuristic::ParagraphBlock,
        );
    }

    let selector = Selector::parse("div, section").unwrap();
    for element in document.select(&selector) {
        if is_excluded(element) {
            continue;
        }
        let text = element_text(element).trim().to_string();
        if text.chars().count() > MIN_BLOCK_CHARS {
            push_candidate(&mut candidates, text, Heuristic::LongBlock);
        }
    }

    candidates
}

fn push_candidate(candidates: &mut Vec<Candidate>, text: String, heuristic: Heuristic) {
    if candidates.len() < MAX_CANDIDATES {
        candidates.push(Candidate { text, heuristic });
    }
}

/// True when the element sits inside a non-content region.
fn is_excluded(element: ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| NON_CONTENT_TAGS.contains(&ancestor.value().name()))
}

/// Text of the element and its descendants, skipping non-content subtrees.
pub(crate) fn element_text(element: ElementRef) -> String {
    let mut text = String::new();
    collect_text(element, &mut text);
    text
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(fragment) = child.value().as_text() {
            out.push_str(fragment);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !NON_CONTENT_TAGS.contains(&child_element.value().name()) {
                collect_text(child_element, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts_for(candidates: &[Candidate], heuristic: Heuristic) -> Vec<&str> {
        candidates
            .iter()
            .filter(|c| c.heuristic == heuristic)
            .map(|c| c.text.trim())
            .collect()
    }

    #[test]
    fn test_class_match() {
        let markup = r#"<div class="article-body">Body text here</div>"#;
        let candidates = scan(markup);
        assert_eq!(
            texts_for(&candidates, Heuristic::ClassMatch),
            ["Body text here"]
        );
    }

    #[test]
    fn test_id_match_takes_first_element_only() {
        let markup = r#"
            <div id="content">first content block</div>
            <p>another paragraph entirely, long enough to count</p>
        "#;
        let candidates = scan(markup);
        assert_eq!(
            texts_for(&candidates, Heuristic::IdMatch),
            ["first content block"]
        );
    }

    #[test]
    fn test_semantic_tags() {
        let markup = "<article>from the article tag</article><main>from the main tag</main>";
        let candidates = scan(markup);
        assert_eq!(
            texts_for(&candidates, Heuristic::SemanticTag),
            ["from the article tag", "from the main tag"]
        );
    }

    #[test]
    fn test_paragraphs_joined_in_document_order() {
        let markup = "<h1>A headline that is long enough</h1>\
                      <p>short</p>\
                      <p>A paragraph that clearly exceeds twenty characters</p>";
        let candidates = scan(markup);
        let blocks = texts_for(&candidates, Heuristic::ParagraphBlock);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            "A headline that is long enough\nA paragraph that clearly exceeds twenty characters"
        );
    }

    #[test]
    fn test_long_blocks_need_500_chars() {
        let long = "x".repeat(600);
        let markup = format!("<section>{}</section><div>too short</div>", long);
        let candidates = scan(&markup);
        let blocks = texts_for(&candidates, Heuristic::LongBlock);
        assert_eq!(blocks, [long.as_str()]);
    }

    #[test]
    fn test_non_content_subtrees_are_skipped() {
        let markup = r#"
            <article>visible text<script>var hidden = 1;</script></article>
            <nav><p>navigation paragraph that is long enough to pass</p></nav>
        "#;
        let candidates = scan(markup);
        assert_eq!(
            texts_for(&candidates, Heuristic::SemanticTag),
            ["visible text"]
        );
        assert!(texts_for(&candidates, Heuristic::ParagraphBlock).is_empty());
    }

    #[test]
    fn test_overlapping_heuristics_all_fire() {
        let markup = r#"<article class="article-body">Shared region of text, long enough to matter</article>"#;
        let candidates = scan(markup);
        assert!(!texts_for(&candidates, Heuristic::ClassMatch).is_empty());
        assert!(!texts_for(&candidates, Heuristic::SemanticTag).is_empty());
    }

    #[test]
    fn test_scan_is_bounded() {
        let block = "y".repeat(600);
        let markup: String = (0..100).map(|_| format!("<div>{}</div>", block)).collect();
        let candidates = scan(&markup);
        assert_eq!(candidates.len(), MAX_CANDIDATES);
    }

    #[test]
    fn test_empty_markup_yields_no_candidates() {
        assert!(scan("").is_empty());
        assert!(scan("<html><body></body></html>").is_empty());
    }
}
