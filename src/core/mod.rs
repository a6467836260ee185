// src/core/mod.rs
pub mod app;
pub mod config;

pub use app::{App, AppError, GeneratedRecord};
pub use config::Config;
