//! Durable client-side storage slots.
//!
//! The cart persists to a single string-keyed slot, read at startup and
//! written after every mutation. Storage is synchronous but fallible
//! (blocked slot, quota, corruption); callers degrade to an empty or
//! in-memory cart instead of failing.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Error reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// The slot is locked by a crashed writer.
    #[error("storage slot poisoned")]
    Poisoned,
}

/// A single string slot of durable storage.
///
/// Object-safe so stores can hold `Box<dyn CartStorage>` and tests can swap
/// in doubles.
pub trait CartStorage: Send {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot.
    fn save(&self, payload: &str) -> Result<(), StorageError>;
}

/// A shared slot: several sessions reading and writing the same storage,
/// the way browser tabs share one localStorage key.
impl<S: CartStorage + Sync> CartStorage for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        S::load(self)
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        S::save(self, payload)
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with an existing payload.
    #[must_use]
    pub fn with_payload(payload: &str) -> Self {
        Self {
            slot: Mutex::new(Some(payload.to_string())),
        }
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = Some(payload.to_string());
        Ok(())
    }
}

/// File-backed slot: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}
