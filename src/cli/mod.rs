// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

use crate::i18n::Language;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Display language (en, es)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// History file location
    #[arg(long, global = true, env = "HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Command to execute; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
