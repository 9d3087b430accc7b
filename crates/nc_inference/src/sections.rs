use nc_core::Language;

/// The three canonical parts of every formatted summary, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    SectionSummaries,
    KeyPoints,
    InDepthAnalysis,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::SectionSummaries,
        SectionKind::KeyPoints,
        SectionKind::InDepthAnalysis,
    ];

    fn index(self) -> usize {
        match self {
            SectionKind::SectionSummaries => 0,
            SectionKind::KeyPoints => 1,
            SectionKind::InDepthAnalysis => 2,
        }
    }
}

/// Marker literal identifying a section's start in generated text.
pub fn marker(language: Language, kind: SectionKind) -> &'static str {
    match (language, kind) {
        (Language::Zh, SectionKind::SectionSummaries) => "【分段摘要】",
        (Language::Zh, SectionKind::KeyPoints) => "【核心要点】",
        (Language::Zh, SectionKind::InDepthAnalysis) => "【深度分析】",
        (Language::En, SectionKind::SectionSummaries) => "[Section Summaries]",
        (Language::En, SectionKind::KeyPoints) => "[Key Points]",
        (Language::En, SectionKind::InDepthAnalysis) => "[In-depth Analysis]",
        (Language::Th, SectionKind::SectionSummaries) => "[สรุปตามส่วน]",
        (Language::Th, SectionKind::KeyPoints) => "[ประเด็นสำคัญ]",
        (Language::Th, SectionKind::InDepthAnalysis) => "[การวิเคราะห์เชิงลึก]",
        (Language::Vi, SectionKind::SectionSummaries) => "[Tóm tắt theo phần]",
        (Language::Vi, SectionKind::KeyPoints) => "[Điểm chính]",
        (Language::Vi, SectionKind::InDepthAnalysis) => "[Phân tích chuyên sâu]",
        (Language::Id, SectionKind::SectionSummaries) => "[Ringkasan Bagian]",
        (Language::Id, SectionKind::KeyPoints) => "[Poin Utama]",
        (Language::Id, SectionKind::InDepthAnalysis) => "[Analisis Mendalam]",
        (Language::Ms, SectionKind::SectionSummaries) => "[Ringkasan Bahagian]",
        (Language::Ms, SectionKind::KeyPoints) => "[Perkara Utama]",
        (Language::Ms, SectionKind::InDepthAnalysis) => "[Analisis Mendalam]",
    }
}

/// Body used when the generated text had nothing for a section.
pub fn placeholder(language: Language, kind: SectionKind) -> &'static str {
    match (language, kind) {
        (Language::Zh, SectionKind::SectionSummaries) => "暂无分段摘要",
        (Language::Zh, SectionKind::KeyPoints) => "暂无核心要点",
        (Language::Zh, SectionKind::InDepthAnalysis) => "暂无深度分析",
        (Language::En, SectionKind::SectionSummaries) => "No section summaries available",
        (Language::En, SectionKind::KeyPoints) => "No key points available",
        (Language::En, SectionKind::InDepthAnalysis) => "No in-depth analysis available",
        (Language::Th, SectionKind::SectionSummaries) => "ไม่มีสรุปตามส่วน",
        (Language::Th, SectionKind::KeyPoints) => "ไม่มีประเด็นสำคัญ",
        (Language::Th, SectionKind::InDepthAnalysis) => "ไม่มีการวิเคราะห์เชิงลึก",
        (Language::Vi, SectionKind::SectionSummaries) => "Không có tóm tắt theo phần",
        (Language::Vi, SectionKind::KeyPoints) => "Không có điểm chính",
        (Language::Vi, SectionKind::InDepthAnalysis) => "Không có phân tích chuyên sâu",
        (Language::Id, SectionKind::SectionSummaries) => "Tidak ada ringkasan bagian",
        (Language::Id, SectionKind::KeyPoints) => "Tidak ada poin utama",
        (Language::Id, SectionKind::InDepthAnalysis) => "Tidak ada analisis mendalam",
        (Language::Ms, SectionKind::SectionSummaries) => "Tiada ringkasan bahagian",
        (Language::Ms, SectionKind::KeyPoints) => "Tiada perkara utama",
        (Language::Ms, SectionKind::InDepthAnalysis) => "Tiada analisis mendalam",
    }
}

/// Heading text for rendering: the marker with its enclosing brackets
/// stripped.
pub fn heading(language: Language, kind: SectionKind) -> &'static str {
    marker(language, kind).trim_matches(&['[', ']', '【', '】'][..])
}

/// Per-section line buffers produced by `parse`.
#[derive(Debug, Default, Clone)]
pub struct SectionContent {
    buffers: [Vec<String>; 3],
}

impl SectionContent {
    pub fn lines(&self, kind: SectionKind) -> &[String] {
        &self.buffers[kind.index()]
    }

    fn push(&mut self, kind: SectionKind, line: String) {
        self.buffers[kind.index()].push(line);
    }
}

/// Line-by-line state machine over the three markers. A line containing a
/// marker switches the active section and is consumed; other lines join the
/// active section's buffer, or are dropped while no section is active.
pub fn parse(text: &str, language: Language) -> SectionContent {
    let mut content = SectionContent::default();
    let mut current: Option<SectionKind> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(kind) = SectionKind::ALL
            .into_iter()
            .find(|kind| line.contains(marker(language, *kind)))
        {
            current = Some(kind);
            continue;
        }

        if let Some(kind) = current {
            content.push(kind, line.to_string());
        }
    }

    content
}

fn ordinal_prefixed(line: &str) -> bool {
    (1..10).any(|i| line.starts_with(&format!("{}. ", i)))
}

/// Lines already numbered pass through unchanged; everything else becomes
/// a quoted block.
fn render_summaries(lines: &[String]) -> String {
    let mut formatted = String::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if ordinal_prefixed(line) {
            formatted.push_str(&format!("{}\n\n", line));
        } else {
            formatted.push_str(&format!("> {}\n\n", line));
        }
    }
    formatted
}

/// Original bullets and numbering are stripped and the points renumbered
/// sequentially from 1.
fn render_key_points(lines: &[String]) -> String {
    let mut formatted = String::new();
    let mut point = 1;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line = line.trim_start_matches(&['-', '•', ' '][..]).trim();
        let line = if ordinal_prefixed(line) {
            line.split_once(". ").map(|(_, rest)| rest).unwrap_or(line)
        } else {
            line
        };
        formatted.push_str(&format!("{}. {}\n\n", point, line));
        point += 1;
    }
    formatted
}

/// Consecutive lines accumulate into a paragraph; a blank line flushes it.
/// A line with a colon becomes a subheading with the rest as its body.
fn render_analysis(lines: &[String]) -> String {
    let mut formatted = String::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            if !paragraph.is_empty() {
                formatted.push_str(&format!("{}\n\n", paragraph.join(" ")));
                paragraph.clear();
            }
            continue;
        }

        if line.contains('：') || line.contains(':') {
            if !paragraph.is_empty() {
                formatted.push_str(&format!("{}\n\n", paragraph.join(" ")));
                paragraph.clear();
            }
            let normalized = line.replace('：', ":");
            let (title, body) = normalized
                .split_once(':')
                .unwrap_or((normalized.as_str(), ""));
            formatted.push_str(&format!("### {}\n\n{}\n\n", title.trim(), body.trim()));
        } else {
            paragraph.push(line);
        }
    }

    if !paragraph.is_empty() {
        formatted.push_str(&format!("{}\n\n", paragraph.join(" ")));
    }

    formatted
}

pub fn render(kind: SectionKind, lines: &[String]) -> String {
    match kind {
        SectionKind::SectionSummaries => render_summaries(lines),
        SectionKind::KeyPoints => render_key_points(lines),
        SectionKind::InDepthAnalysis => render_analysis(lines),
    }
}

/// Render all three sections in fixed order. A section with no content gets
/// its per-language placeholder, so the output always has three headed,
/// non-empty sections.
pub fn format_sections(content: &SectionContent, language: Language) -> String {
    let mut formatted = String::new();
    for kind in SectionKind::ALL {
        formatted.push_str(&format!("\n## {}\n\n", heading(language, kind)));
        let lines = content.lines(kind);
        if lines.is_empty() {
            formatted.push_str(&format!("_{}_\n", placeholder(language, kind)));
        } else {
            formatted.push_str(&render(kind, lines));
        }
    }
    formatted.trim().to_string()
}

/// Parse generated text and render the canonical three-section document.
/// Total: any input, including one with no recognized markers, yields a
/// complete output.
pub fn parse_and_format(text: &str, language: Language) -> String {
    format_sections(&parse(text, language), language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_complete_for_all_languages() {
        for language in Language::ALL {
            for kind in SectionKind::ALL {
                assert!(!marker(language, kind).is_empty());
                assert!(!placeholder(language, kind).is_empty());
                let heading = heading(language, kind);
                assert!(!heading.is_empty());
                assert!(!heading.contains('[') && !heading.contains('【'));
            }
        }
    }

    #[test]
    fn test_heading_strips_brackets() {
        assert_eq!(heading(Language::En, SectionKind::KeyPoints), "Key Points");
        assert_eq!(heading(Language::Zh, SectionKind::KeyPoints), "核心要点");
    }

    #[test]
    fn test_parse_routes_lines_to_sections() {
        let text = "[Section Summaries]\none\n[Key Points]\ntwo\nthree\n[In-depth Analysis]\nfour";
        let content = parse(text, Language::En);
        assert_eq!(content.lines(SectionKind::SectionSummaries), ["one"]);
        assert_eq!(content.lines(SectionKind::KeyPoints), ["two", "three"]);
        assert_eq!(content.lines(SectionKind::InDepthAnalysis), ["four"]);
    }

    #[test]
    fn test_marker_matches_by_containment() {
        let text = "Here are the [Key Points] for you\nfirst point";
        let content = parse(text, Language::En);
        assert_eq!(content.lines(SectionKind::KeyPoints), ["first point"]);
    }

    #[test]
    fn test_lines_before_first_marker_are_dropped() {
        let text = "preamble that belongs nowhere\n[Key Points]\nkept";
        let content = parse(text, Language::En);
        assert!(content.lines(SectionKind::SectionSummaries).is_empty());
        assert_eq!(content.lines(SectionKind::KeyPoints), ["kept"]);
    }

    #[test]
    fn test_single_section_input_fills_other_placeholders() {
        let output = parse_and_format("[In-depth Analysis]\nfoo", Language::En);
        assert_eq!(output.matches("## ").count(), 3);
        assert!(output.contains("_No section summaries available_"));
        assert!(output.contains("_No key points available_"));
        assert!(output.contains("## In-depth Analysis\n\nfoo"));
    }

    #[test]
    fn test_no_markers_yields_all_placeholders() {
        let output = parse_and_format("free text with no structure at all", Language::En);
        assert_eq!(output.matches("## ").count(), 3);
        assert!(output.contains("_No section summaries available_"));
        assert!(output.contains("_No key points available_"));
        assert!(output.contains("_No in-depth analysis available_"));
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        // Input order reversed; output order stays canonical.
        let text = "[In-depth Analysis]\ndeep\n[Key Points]\npoint\n[Section Summaries]\nsummary";
        let output = parse_and_format(text, Language::En);
        let summaries = output.find("## Section Summaries").unwrap();
        let points = output.find("## Key Points").unwrap();
        let analysis = output.find("## In-depth Analysis").unwrap();
        assert!(summaries < points && points < analysis);
    }

    #[test]
    fn test_key_points_renumbered() {
        let lines = vec!["- foo".to_string(), "2. bar".to_string()];
        let rendered = render_key_points(&lines);
        assert!(rendered.contains("1. foo"));
        assert!(rendered.contains("2. bar"));
        assert!(!rendered.contains("- foo"));
    }

    #[test]
    fn test_key_points_bullet_variants() {
        let lines = vec![
            "• first".to_string(),
            "-- second".to_string(),
            "9. third".to_string(),
        ];
        let rendered = render_key_points(&lines);
        assert!(rendered.contains("1. first"));
        assert!(rendered.contains("2. second"));
        assert!(rendered.contains("3. third"));
    }

    #[test]
    fn test_summaries_keep_numbering_and_quote_the_rest() {
        let lines = vec!["1. kept as is".to_string(), "plain line".to_string()];
        let rendered = render_summaries(&lines);
        assert!(rendered.contains("1. kept as is\n\n"));
        assert!(rendered.contains("> plain line\n\n"));
    }

    #[test]
    fn test_analysis_colon_becomes_subheading() {
        let lines = vec![
            "lead-in sentence".to_string(),
            "Background: context here".to_string(),
        ];
        let rendered = render_analysis(&lines);
        assert!(rendered.contains("lead-in sentence\n\n"));
        assert!(rendered.contains("### Background\n\ncontext here"));
    }

    #[test]
    fn test_analysis_full_width_colon() {
        let lines = vec!["影响：深远".to_string()];
        let rendered = render_analysis(&lines);
        assert!(rendered.contains("### 影响\n\n深远"));
    }

    #[test]
    fn test_analysis_joins_consecutive_lines() {
        let lines = vec!["one".to_string(), "two".to_string()];
        let rendered = render_analysis(&lines);
        assert!(rendered.contains("one two\n\n"));
    }

    #[test]
    fn test_zh_markers_parse() {
        let text = "【核心要点】\n- 要点一\n【深度分析】\n分析内容";
        let output = parse_and_format(text, Language::Zh);
        assert!(output.contains("## 核心要点"));
        assert!(output.contains("1. 要点一"));
        assert!(output.contains("分析内容"));
        assert!(output.contains("_暂无分段摘要_"));
    }
}
