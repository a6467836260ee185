// src/i18n/preference.rs
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Language;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PreferenceError>;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    language: Language,
}

/// Language choice persisted between runs.
pub struct LanguagePreference {
    path: PathBuf,
}

impl LanguagePreference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved language, else the one detected from the environment.
    pub fn load(&self) -> Language {
        match self.read() {
            Ok(Some(language)) => language,
            Ok(None) => detect_system_language(),
            Err(e) => {
                log::error!("Error loading language preference from {}: {}", self.path.display(), e);
                detect_system_language()
            }
        }
    }

    fn read(&self) -> Result<Option<Language>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let stored: StoredPreferences = serde_json::from_str(&content)?;
        Ok(Some(stored.language))
    }

    pub fn save(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&StoredPreferences { language })?;
        fs::write(&self.path, content)?;
        log::debug!("Saved language preference '{}' to {}", language, self.path.display());
        Ok(())
    }
}

/// English when the locale says so, Spanish otherwise.
pub fn detect_system_language() -> Language {
    let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty());

    match locale {
        Some(value) => language_from_locale(&value),
        None => Language::default(),
    }
}

fn language_from_locale(locale: &str) -> Language {
    let code = locale
        .split(|c: char| c == '_' || c == '-' || c == '.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if code == "en" {
        Language::En
    } else {
        Language::Es
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let preference = LanguagePreference::new(dir.path().join("nested").join("preferences.json"));

        preference.save(Language::En).unwrap();
        assert_eq!(preference.load(), Language::En);

        preference.save(Language::Es).unwrap();
        assert_eq!(preference.load(), Language::Es);

        let raw = fs::read_to_string(preference.path()).unwrap();
        assert!(raw.contains("\"es\""));
    }

    #[test]
    fn test_corrupt_file_is_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        let preference = LanguagePreference::new(&path);
        assert!(preference.read().is_err());
        assert_eq!(preference.load(), detect_system_language());
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("en_US.UTF-8"), Language::En);
        assert_eq!(language_from_locale("en-GB"), Language::En);
        assert_eq!(language_from_locale("es_ES.UTF-8"), Language::Es);
        assert_eq!(language_from_locale("de_DE"), Language::Es);
        assert_eq!(language_from_locale("C"), Language::Es);
    }
}
