// src/core/app.rs
use thiserror::Error;

use crate::core::config::Config;
use crate::generators::{PasswordGenerator, RandomSource};
use crate::history::{HistoryBackend, HistoryError, JsonFileBackend, PasswordHistory};
use crate::i18n::{Catalog, Language, LanguagePreference, PreferenceError, Translator};
use crate::models::{HistoryEntry, OptionsError, PasswordGenerationOptions};
use crate::strength::{self, LocalizedStrength};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone)]
pub struct GeneratedRecord {
    pub password: String,
    pub strength: LocalizedStrength,
    /// False when the history store could not be written.
    pub saved_to_history: bool,
}

/// Everything the user interface needs, wired once at startup.
pub struct App {
    config: Config,
    generator: PasswordGenerator<Box<dyn RandomSource>>,
    history: PasswordHistory<Box<dyn HistoryBackend>>,
    catalog: Catalog,
    preference: LanguagePreference,
}

impl App {
    pub fn new(
        config: Config,
        backend: Box<dyn HistoryBackend>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let preference = LanguagePreference::new(config.preferences_file.clone());
        let language = config.language.unwrap_or_else(|| preference.load());

        Self {
            generator: PasswordGenerator::with_random(random),
            history: PasswordHistory::open(backend),
            catalog: Catalog::new(language),
            preference,
            config,
        }
    }

    /// JSON history file and the configured random source.
    pub fn from_config(config: Config) -> Self {
        let backend = Box::new(JsonFileBackend::new(config.history_file.clone()));
        let random = config.random_source.build();
        Self::new(config, backend, random)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn default_options(&self) -> PasswordGenerationOptions {
        self.config.default_options()
    }

    pub fn translator(&self) -> &dyn Translator {
        &self.catalog
    }

    pub fn t(&self, key: &str) -> String {
        self.catalog.translate(key)
    }

    pub fn language(&self) -> Language {
        self.catalog.language()
    }

    /// Generates, scores and records a password.
    ///
    /// `Ok(None)` means generation was declined because no character class
    /// was selected; nothing is recorded in that case.
    pub fn generate(&mut self, options: &PasswordGenerationOptions) -> Result<Option<GeneratedRecord>> {
        options.validate()?;

        let password = self.generator.generate_password(options);
        if password.is_empty() {
            log::info!("Generation declined: no character class selected");
            return Ok(None);
        }

        let result = strength::evaluate(&password);
        log::info!(
            "Generated {}-character password with score {}",
            password.chars().count(),
            result.score
        );

        let saved_to_history = match self.history.add(&password, result.score) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Password was not added to history: {}", e);
                false
            }
        };

        Ok(Some(GeneratedRecord {
            strength: result.localize(&self.catalog),
            password,
            saved_to_history,
        }))
    }

    pub fn evaluate(&self, candidate: &str) -> LocalizedStrength {
        strength::evaluate(candidate).localize(&self.catalog)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) -> Result<()> {
        Ok(self.history.clear()?)
    }

    /// Switches the display language and remembers it for the next run.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.catalog.set_language(language);
        self.preference.save(language)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::SeededRandom;
    use crate::history::{MemoryBackend, HISTORY_CAPACITY};
    use tempfile::{tempdir, TempDir};

    fn test_app(language: Option<Language>) -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let config = Config {
            history_file: dir.path().join("history.json"),
            preferences_file: dir.path().join("preferences.json"),
            language,
            ..Config::default()
        };
        let app = App::new(config, Box::new(MemoryBackend::new()), Box::new(SeededRandom::new(1)));
        (app, dir)
    }

    #[test]
    fn test_generate_records_history() {
        let (mut app, _dir) = test_app(Some(Language::En));
        let options = PasswordGenerationOptions { length: 16, ..Default::default() };

        let record = app.generate(&options).unwrap().unwrap();
        assert_eq!(record.password.len(), 16);
        assert_eq!(record.strength.score, 7);
        assert_eq!(record.strength.label, "Excellent");
        assert!(record.saved_to_history);

        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history()[0].password, record.password);
        assert_eq!(app.history()[0].strength, 7);
    }

    #[test]
    fn test_eleven_generations_keep_ten() {
        let (mut app, _dir) = test_app(Some(Language::En));
        let options = PasswordGenerationOptions::default();

        let mut generated = Vec::new();
        for _ in 0..11 {
            generated.push(app.generate(&options).unwrap().unwrap().password);
        }

        let kept: Vec<&str> = app.history().iter().map(|e| e.password.as_str()).collect();
        assert_eq!(kept.len(), HISTORY_CAPACITY);
        assert_eq!(kept[0], generated[10]);
        assert_eq!(kept[9], generated[1]);
    }

    #[test]
    fn test_declined_generation_is_not_recorded() {
        let (mut app, _dir) = test_app(Some(Language::En));
        let options = PasswordGenerationOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };

        assert!(app.generate(&options).unwrap().is_none());
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_invalid_length_is_rejected() {
        let (mut app, _dir) = test_app(Some(Language::En));
        let options = PasswordGenerationOptions { length: 51, ..Default::default() };

        assert!(matches!(app.generate(&options), Err(AppError::Options(_))));
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_error_message_is_not_repeated() {
        let (mut app, _dir) = test_app(Some(Language::En));
        let options = PasswordGenerationOptions { length: 51, ..Default::default() };

        let err = app.generate(&options).unwrap_err();
        assert_eq!(err.to_string(), "Password length must be between 4 and 50 characters, got 51");

        let report = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(report.matches("Password length").count(), 1);
    }

    #[test]
    fn test_evaluate_uses_active_language() {
        let (mut app, _dir) = test_app(Some(Language::Es));
        let result = app.evaluate("abcdefgh");
        assert_eq!(result.label, "Regular");
        assert_eq!(result.suggestions[0], "Se recomiendan 12 o más caracteres");

        app.set_language(Language::En).unwrap();
        assert_eq!(app.evaluate("abcdefgh").label, "Fair");
    }

    #[test]
    fn test_language_choice_survives_restart() {
        let (mut app, dir) = test_app(None);
        app.set_language(Language::En).unwrap();

        let config = Config {
            history_file: dir.path().join("history.json"),
            preferences_file: dir.path().join("preferences.json"),
            ..Config::default()
        };
        let restarted = App::new(config, Box::new(MemoryBackend::new()), Box::new(SeededRandom::new(2)));
        assert_eq!(restarted.language(), Language::En);
    }

    #[test]
    fn test_clear_history() {
        let (mut app, _dir) = test_app(Some(Language::En));
        app.generate(&PasswordGenerationOptions::default()).unwrap();
        app.clear_history().unwrap();
        assert!(app.history().is_empty());
    }
}
