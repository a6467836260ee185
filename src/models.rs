// src/models.rs
use uuid::Uuid;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Password length must be between {min} and {max} characters, got {length}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
}

/// One of the four fixed character sets a password can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digits => b"0123456789",
            CharacterClass::Symbols => b"!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Selected classes, always in uppercase, lowercase, digits, symbols order.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            return Err(OptionsError::LengthOutOfRange {
                length: self.length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }
        Ok(())
    }
}

/// A generated password as it is kept in the local history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub password: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub strength: u8,
}

impl HistoryEntry {
    pub fn new(password: &str, strength: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            password: password.to_string(),
            created_at: Utc::now(),
            strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_classes_keep_fixed_order() {
        let options = PasswordGenerationOptions {
            include_uppercase: false,
            ..Default::default()
        };
        assert_eq!(
            options.selected_classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Digits, CharacterClass::Symbols]
        );
    }

    #[test]
    fn test_validate_length_bounds() {
        let mut options = PasswordGenerationOptions::default();
        for ok in [4, 12, 50] {
            options.length = ok;
            assert!(options.validate().is_ok(), "length {} should be accepted", ok);
        }
        for bad in [0, 3, 51] {
            options.length = bad;
            assert_eq!(
                options.validate(),
                Err(OptionsError::LengthOutOfRange { length: bad, min: 4, max: 50 })
            );
        }
    }

    #[test]
    fn test_character_class_membership() {
        assert!(CharacterClass::Symbols.contains('?'));
        assert!(!CharacterClass::Symbols.contains('~'));
        assert!(CharacterClass::Digits.contains('7'));
        assert!(!CharacterClass::Uppercase.contains('é'));
        assert_eq!(CharacterClass::Symbols.chars().len(), 26);
    }

    #[test]
    fn test_history_entry_uses_timestamp_field() {
        let entry = HistoryEntry::new("Abc123!x", 5);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("timestamp").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["strength"], 5);
    }
}
