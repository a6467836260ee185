// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger initialization error: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Logger settings read ahead of the full configuration so that warnings
/// about the remaining keys reach the installed logger. An unknown
/// `LOG_LEVEL` is only flagged here; `Config` reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
    pub invalid_level: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            file: None,
            invalid_level: false,
        }
    }
}

impl LogSettings {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = LogSettings::default();

        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => settings.level = filter,
                None => settings.invalid_level = true,
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            settings.file = Some(PathBuf::from(file));
        }

        settings
    }
}

/// Installs the global logger.
///
/// With a `log_file` every record is appended there so that log lines never
/// interleave with interactive prompts; otherwise records go to stderr.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" warning "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_log_settings_from_lookup() {
        let settings = LogSettings::from_lookup(|key| match key {
            "LOG_LEVEL" => Some("info".to_string()),
            "LOG_FILE" => Some("/tmp/pf/app.log".to_string()),
            _ => None,
        });
        assert_eq!(settings.level, LevelFilter::Info);
        assert_eq!(settings.file, Some(PathBuf::from("/tmp/pf/app.log")));
        assert!(!settings.invalid_level);

        let settings = LogSettings::from_lookup(|key| (key == "LOG_LEVEL").then(|| "loud".to_string()));
        assert_eq!(settings.level, LevelFilter::Warn);
        assert!(settings.invalid_level);

        assert_eq!(LogSettings::from_lookup(|_| None), LogSettings::default());
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("passforge.log");

        init(LevelFilter::Info, Some(&path)).unwrap();
        assert!(path.exists());

        // Global logger can only be installed once per process
        assert!(matches!(init(LevelFilter::Info, None), Err(LoggingError::InitError(_))));
    }
}
