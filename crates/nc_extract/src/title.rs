use scraper::{Html, Selector};

/// Best-guess page title: the first h1, then the og:title meta tag, then
/// the document title. Empty when none are present.
pub fn extract_title(markup: &str) -> String {
    let document = Html::parse_document(markup);

    if let Some(element) = document.select(&Selector::parse("h1").unwrap()).next() {
        let text = element.text().collect::<String>().trim().to_string();
        if !text.is_empty() {
            return text;
        }
    }

    if let Some(content) = document
        .select(&Selector::parse("meta[property='og:title']").unwrap())
        .next()
        .and_then(|element| element.value().attr("content"))
    {
        let content = content.trim();
        if !content.is_empty() {
            return content.to_string();
        }
    }

    document
        .select(&Selector::parse("title").unwrap())
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
