//! Localized message tables.
//!
//! The builder never consults these on its own. A caller that wants a
//! translated message looks it up here and passes it through
//! [`ResponseBuilder::localize`](crate::response::ResponseBuilder::localize)
//! or `set_message` before `build`. Loading tables from disk is left to the
//! caller; [`LocalizedMessages::merge_json`] only parses text it is handed.

use crate::errors::LocalizationError;
use crate::status::{self, StatusCode};
use rb_shared::{Language, LanguagePreference};
use std::collections::HashMap;

/// Per-language overrides of canonical status messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedMessages {
    tables: HashMap<Language, HashMap<StatusCode, String>>,
}

impl LocalizedMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one translation, returning the previous one
    pub fn insert(
        &mut self,
        language: Language,
        code: StatusCode,
        message: impl Into<String>,
    ) -> Option<String> {
        self.tables
            .entry(language)
            .or_default()
            .insert(code, message.into())
    }

    /// Chainable form of [`insert`](Self::insert)
    pub fn with(mut self, language: Language, code: StatusCode, message: impl Into<String>) -> Self {
        self.insert(language, code, message);
        self
    }

    /// Translation for `code` in exactly `language`
    pub fn get(&self, language: Language, code: StatusCode) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(&code))
            .map(String::as_str)
    }

    /// Translation in the first language of `preference` that has one
    pub fn get_preferred(&self, preference: &LanguagePreference, code: StatusCode) -> Option<&str> {
        preference
            .candidates()
            .find_map(|language| self.get(language, code))
    }

    /// Preferred translation, else the canonical catalog message
    pub fn resolve(&self, preference: &LanguagePreference, code: StatusCode) -> Option<&str> {
        self.get_preferred(preference, code)
            .or_else(|| status::message_for(code))
    }

    /// Merge a `{"<code>": "<message>"}` JSON object into `language`'s table.
    ///
    /// The whole object is validated before anything is inserted. Returns the
    /// number of entries merged.
    pub fn merge_json(&mut self, language: Language, json: &str) -> Result<usize, LocalizationError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|source| LocalizationError::Malformed { language, source })?;

        let mut parsed = Vec::with_capacity(raw.len());
        for (key, message) in raw {
            let code: i64 = key
                .trim()
                .parse()
                .map_err(|_| LocalizationError::InvalidCode {
                    language,
                    key: key.clone(),
                })?;
            if message.trim().is_empty() {
                return Err(LocalizationError::EmptyMessage { language, code });
            }
            parsed.push((StatusCode::new(code), message));
        }

        let merged = parsed.len();
        let table = self.tables.entry(language).or_default();
        for (code, message) in parsed {
            if !status::is_registered(code) {
                tracing::debug!(%language, status = %code, "Translation for unregistered status");
            }
            table.insert(code, message);
        }
        tracing::debug!(%language, merged, "Merged localized messages");
        Ok(merged)
    }

    /// Languages with at least one translation
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.tables
            .iter()
            .filter(|(_, table)| !table.is_empty())
            .map(|(language, _)| *language)
    }

    /// Number of translations held for `language`
    pub fn len(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}
