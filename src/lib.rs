//! Password generation and strength evaluation.
//!
//! [`generators`] builds passwords that contain every selected character
//! class, [`strength`] scores any candidate on a seven-tier scale, and
//! [`core::App`] ties both to the local history and language preference.

pub mod cli;
pub mod clipboard;
pub mod core;
pub mod generators;
pub mod history;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use crate::core::{App, AppError, Config};
pub use crate::generators::{generate_password, PasswordGenerator, RandomSource};
pub use crate::models::{CharacterClass, HistoryEntry, PasswordGenerationOptions};
pub use crate::strength::{evaluate, LocalizedStrength, StrengthResult, StrengthTier};
