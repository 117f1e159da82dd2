//! Byte store port backing the catalog.
//!
//! The durable medium is abstracted as a flat key-value byte store so the
//! catalog can run against memory in tests and files in the CLI.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Result, ScansheetError};

/// Flat key-value byte store.
pub trait ByteStore {
    /// Read the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `bytes` under `key`, replacing any previous value.
    fn set(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// All keys currently stored.
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ScansheetError::Persistence("Store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ScansheetError::Persistence("Store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ScansheetError::Persistence("Store lock poisoned".to_string()))?;
        Ok(entries.keys().cloned().collect())
    }
}

/// File-backed store: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_key(key))
    }
}

impl ByteStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&path).map_err(|e| {
            ScansheetError::Persistence(format!("Failed to open '{}': {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ScansheetError::Persistence(format!("Failed to read '{}': {}", path.display(), e))
        })?;

        Ok(Some(bytes))
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                ScansheetError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    self.root.display(),
                    e
                ))
            })?;
        }

        let path = self.path_for(key);
        let file = File::create(&path).map_err(|e| {
            ScansheetError::Persistence(format!("Failed to create '{}': {}", path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        writer.write_all(bytes).map_err(|e| {
            ScansheetError::Persistence(format!("Failed to write '{}': {}", path.display(), e))
        })?;
        writer.flush().map_err(|e| {
            ScansheetError::Persistence(format!("Failed to flush '{}': {}", path.display(), e))
        })?;

        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            ScansheetError::Persistence(format!(
                "Failed to read directory '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        Ok(entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect())
    }
}

/// Keep keys filesystem-safe without leaking path semantics into the port.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}
