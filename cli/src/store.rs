use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use specdoc::SpecDocument;

/// On-disk caller state: the current document and when it was last
/// written. The engine itself is stateless; this file is the canonical
/// snapshot between instructions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedState {
    pub document: SpecDocument,
    pub last_saved: DateTime<Utc>,
}

#[derive(Debug)]
pub enum StoreError {
    /// No store exists at the given path.
    Missing(String),
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Missing(path) => {
                write!(f, "no document at '{}' (run 'new' or 'import' first)", path)
            }
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
            StoreError::Format(e) => write!(f, "store format error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Format(e)
    }
}

/// Load the saved state from disk.
pub fn load(path: &Path) -> Result<SavedState, StoreError> {
    if !path.exists() {
        return Err(StoreError::Missing(path.display().to_string()));
    }
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Write the document to disk with a fresh last-saved timestamp.
pub fn save(path: &Path, document: &SpecDocument) -> Result<DateTime<Utc>, StoreError> {
    let state = SavedState {
        document: document.clone(),
        last_saved: Utc::now(),
    };
    let data = serde_json::to_string_pretty(&state)?;
    std::fs::write(path, data)?;
    Ok(state.last_saved)
}
