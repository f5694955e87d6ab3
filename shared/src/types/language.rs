//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language a response message can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "ko")]
    Korean,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// Extract language from an Accept-Language header value.
    ///
    /// Only the primary tag of each entry is inspected; the first supported
    /// one wins. Unknown or empty headers resolve to English.
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .filter_map(|tag| tag.trim().split('-').next())
            .find_map(|primary| primary.parse().ok())
            .unwrap_or_default()
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Vietnamese => "vi",
            Language::Korean => "ko",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "vi" | "vie" | "vietnamese" => Ok(Language::Vietnamese),
            "ko" | "kor" | "korean" => Ok(Language::Korean),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

/// Language preference with fallback support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePreference {
    /// Primary language
    pub primary: Language,

    /// Fallback language if translation not available
    #[serde(default)]
    pub fallback: Option<Language>,
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self {
            primary: Language::English,
            fallback: None,
        }
    }
}

impl LanguagePreference {
    /// Create a new language preference falling back to English
    pub fn new(primary: Language) -> Self {
        Self {
            primary,
            fallback: if primary != Language::English {
                Some(Language::English)
            } else {
                None
            },
        }
    }

    /// Languages to try, primary first
    pub fn candidates(&self) -> impl Iterator<Item = Language> {
        let primary = self.primary;
        std::iter::once(primary).chain(self.fallback.filter(move |f| *f != primary))
    }
}

impl From<Language> for LanguagePreference {
    fn from(primary: Language) -> Self {
        Self::new(primary)
    }
}
