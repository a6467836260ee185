// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::RandomKind;
use crate::logging::LogSettings;
use crate::i18n::Language;
use crate::models::PasswordGenerationOptions;

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub random_source: RandomKind,

    // Storage
    pub history_file: PathBuf,
    pub preferences_file: PathBuf,

    // Interface
    pub language: Option<Language>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Environment keys whose values could not be used.
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = crate::utils::get_app_config_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            // Password Generation
            default_password_length: 12,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: true,
            random_source: RandomKind::Fast,

            // Storage
            history_file: data_dir.join("history.json"),
            preferences_file: data_dir.join("preferences.json"),

            // Interface
            language: None,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            rejected: Vec::new(),
        }
    }
}

fn reject(rejected: &mut Vec<String>, key: &str, message: String) {
    log::warn!("{}", message);
    rejected.push(key.to_string());
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut rejected = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => reject(
                    &mut rejected,
                    "DEFAULT_PASSWORD_LENGTH",
                    format!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using default", val),
                ),
            }
        }

        for (key, flag) in [
            ("DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase),
            ("DEFAULT_INCLUDE_LOWERCASE", &mut config.default_include_lowercase),
            ("DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers),
            ("DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols),
        ] {
            if let Some(val) = lookup(key) {
                match val.parse() {
                    Ok(include) => *flag = include,
                    Err(_) => reject(
                        &mut rejected,
                        key,
                        format!("Invalid {} '{}', using default", key, val),
                    ),
                }
            }
        }

        if let Some(val) = lookup("RANDOM_SOURCE") {
            match val.parse() {
                Ok(kind) => config.random_source = kind,
                Err(e) => reject(
                    &mut rejected,
                    "RANDOM_SOURCE",
                    format!("{}, using {}", e, config.random_source),
                ),
            }
        }

        // Storage
        if let Some(file) = lookup("HISTORY_FILE") {
            config.history_file = PathBuf::from(file);
        }

        if let Some(file) = lookup("PREFERENCES_FILE") {
            config.preferences_file = PathBuf::from(file);
        }

        // Interface
        if let Some(val) = lookup("LANGUAGE") {
            match val.parse() {
                Ok(language) => config.language = Some(language),
                Err(e) => reject(&mut rejected, "LANGUAGE", format!("{}, using saved preference", e)),
            }
        }

        // Logging
        let log_settings = LogSettings::from_lookup(&lookup);
        if log_settings.invalid_level {
            let level = lookup("LOG_LEVEL").unwrap_or_default();
            reject(&mut rejected, "LOG_LEVEL", format!("Unknown log level '{}'", level));
        }
        config.log_level = log_settings.level;
        config.log_file = log_settings.file;

        config.rejected = rejected;
        config
    }

    pub fn default_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }
}
