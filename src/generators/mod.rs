// src/generators/mod.rs
pub mod password;
pub mod random;

pub use password::{generate_password, PasswordGenerator};
pub use random::{FastRandom, RandomKind, RandomSource, SecureRandom, SeededRandom};
