// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::i18n::Language;
use crate::models::PasswordGenerationOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and add it to the history
    Generate(GenerateArgs),

    /// Evaluate the strength of a password
    Check {
        /// Password to evaluate; prompted for when omitted
        password: Option<String>,
    },

    /// Show recently generated passwords
    History {
        /// Remove every entry
        #[arg(long)]
        clear: bool,

        /// Print passwords unmasked
        #[arg(long)]
        reveal: bool,
    },

    /// Change and remember the display language
    Language {
        #[arg(required = true)]
        language: Language,
    },
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Password length (4-50)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Draw from the operating system RNG
    #[arg(long, conflicts_with = "seed")]
    pub secure: bool,

    /// Seed for a reproducible password
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// Applies the flags on top of the configured defaults.
    pub fn options(&self, defaults: PasswordGenerationOptions) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: defaults.include_uppercase && !self.no_uppercase,
            include_lowercase: defaults.include_lowercase && !self.no_lowercase,
            include_numbers: defaults.include_numbers && !self.no_numbers,
            include_symbols: defaults.include_symbols && !self.no_symbols,
        }
    }
}
