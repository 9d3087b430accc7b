use serde::{Deserialize, Serialize};

/// Output languages the companion can produce summaries in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
    Th,
    Vi,
    Id,
    Ms,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Zh,
        Language::En,
        Language::Th,
        Language::Vi,
        Language::Id,
        Language::Ms,
    ];

    pub const DEFAULT: Language = Language::En;

    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Th => "th",
            Language::Vi => "vi",
            Language::Id => "id",
            Language::Ms => "ms",
        }
    }

    pub fn parse(code: &str) -> Option<Language> {
        match code.trim().to_lowercase().as_str() {
            "zh" => Some(Language::Zh),
            "en" => Some(Language::En),
            "th" => Some(Language::Th),
            "vi" => Some(Language::Vi),
            "id" => Some(Language::Id),
            "ms" => Some(Language::Ms),
            _ => None,
        }
    }

    /// Parse a language code, falling back to the default language for
    /// anything unrecognized. The fallback happens here, at the boundary,
    /// never inside the per-language tables.
    pub fn from_code(code: &str) -> Language {
        Self::parse(code).unwrap_or(Self::DEFAULT)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
