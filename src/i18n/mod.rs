// src/i18n/mod.rs
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod preference;

pub use preference::{detect_system_language, LanguagePreference, PreferenceError};

const EN_CATALOG: &str = include_str!("../../locales/en.json");
const ES_CATALOG: &str = include_str!("../../locales/es.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];
    /// Used when a key is missing from the active language.
    pub const FALLBACK: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    fn catalog_source(self) -> &'static str {
        match self {
            Language::En => EN_CATALOG,
            Language::Es => ES_CATALOG,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "es" | "spanish" | "español" => Ok(Language::Es),
            other => Err(format!("Unsupported language '{}'", other)),
        }
    }
}

/// Resolves message keys such as `strength.levels.fair` to display text.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
    fn language(&self) -> Language;
}

pub struct Catalog {
    current: Language,
    messages: HashMap<Language, Value>,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        let messages = Language::ALL
            .into_iter()
            .map(|lang| {
                let value = serde_json::from_str(lang.catalog_source()).unwrap_or_else(|e| {
                    log::error!("Failed to parse '{}' message catalog: {}", lang, e);
                    Value::Null
                });
                (lang, value)
            })
            .collect();

        Self { current: language, messages }
    }

    pub fn set_language(&mut self, language: Language) {
        log::info!("Switching language from {} to {}", self.current, language);
        self.current = language;
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&Value> {
        let mut current = self.messages.get(&language)?;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        let value = self
            .lookup(self.current, key)
            .or_else(|| self.lookup(Language::FALLBACK, key));

        match value {
            Some(Value::String(text)) => text.clone(),
            Some(_) => key.to_string(),
            None => {
                log::debug!("Missing translation for '{}'", key);
                key.rsplit('.').next().unwrap_or(key).to_string()
            }
        }
    }

    fn language(&self) -> Language {
        self.current
    }
}
