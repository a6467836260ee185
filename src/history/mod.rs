// src/history/mod.rs
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::HistoryEntry;

/// Number of generated passwords kept, newest first.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Where the history list lives between runs.
pub trait HistoryBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>>;
    fn save(&self, entries: &[HistoryEntry]) -> Result<()>;
}

impl<B: HistoryBackend + ?Sized> HistoryBackend for Box<B> {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        (**self).load()
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        (**self).save(entries)
    }
}

pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Keeps entries in memory only.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RefCell<Vec<HistoryEntry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries: RefCell::new(entries) }
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

pub struct PasswordHistory<B> {
    backend: B,
    entries: Vec<HistoryEntry>,
}

impl<B: HistoryBackend> PasswordHistory<B> {
    /// Loads the saved list. An unreadable store starts the history empty.
    pub fn open(backend: B) -> Self {
        let mut entries = match backend.load() {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Error loading history: {}", e);
                Vec::new()
            }
        };
        entries.truncate(HISTORY_CAPACITY);
        log::debug!("Loaded {} history entries", entries.len());

        Self { backend, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a password at the front and evicts the oldest past capacity.
    ///
    /// The in-memory list is updated even when persisting fails.
    pub fn add(&mut self, password: &str, strength: u8) -> Result<&HistoryEntry> {
        self.entries.insert(0, HistoryEntry::new(password, strength));
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist()?;
        Ok(&self.entries[0])
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        log::info!("History cleared");
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.backend.save(&self.entries).map_err(|e| {
            log::warn!("Error saving history: {}", e);
            e
        })
    }
}
