//! JSON-file world-state backend.
//!
//! Persists the whole key-value map as one JSON object so registry state
//! survives between CLI invocations. Like the state database it stands in
//! for, this backend holds JSON documents only — `put_state` rejects bytes
//! that do not parse as JSON.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use assetledger_core::{LedgerError, Selector, StateIter, TransactionContext};

use crate::memory::query_rows;

/// World state persisted as a single JSON file.
///
/// The file maps each key to its stored document. Every mutation rewrites
/// the file; the in-process map is only a mirror of what was last loaded or
/// written, never a cross-invocation cache of anything else.
pub struct FileState {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
    creator: Vec<u8>,
}

impl FileState {
    /// Open (or create) the state file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        Self::open_with_creator(path, b"dev-identity".to_vec())
    }

    /// Open the state file at `path`, reporting `creator` as the invoker
    /// identity.
    pub fn open_with_creator(
        path: impl AsRef<Path>,
        creator: Vec<u8>,
    ) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            load(&path)?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
            creator,
        })
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, entries: &BTreeMap<String, Vec<u8>>) -> Result<(), LedgerError> {
        let mut doc = serde_json::Map::new();
        for (key, value) in entries {
            let parsed: serde_json::Value = serde_json::from_slice(value)
                .map_err(|e| LedgerError::State(format!("value at '{key}' is not JSON: {e}")))?;
            doc.insert(key.clone(), parsed);
        }
        let json = serde_json::to_vec_pretty(&serde_json::Value::Object(doc))
            .map_err(|e| LedgerError::State(format!("failed to encode state file: {e}")))?;
        std::fs::write(&self.path, json)
            .map_err(|e| LedgerError::State(format!("failed to write {}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), entries = entries.len(), "state file written");
        Ok(())
    }
}

fn load(path: &Path) -> Result<BTreeMap<String, Vec<u8>>, LedgerError> {
    let raw = std::fs::read(path)
        .map_err(|e| LedgerError::State(format!("failed to read {}: {e}", path.display())))?;
    if raw.is_empty() {
        return Ok(BTreeMap::new());
    }
    let doc: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&raw)
        .map_err(|e| LedgerError::State(format!("corrupt state file {}: {e}", path.display())))?;
    let mut entries = BTreeMap::new();
    for (key, value) in doc {
        let bytes = serde_json::to_vec(&value)
            .map_err(|e| LedgerError::State(format!("failed to re-encode '{key}': {e}")))?;
        entries.insert(key, bytes);
    }
    Ok(entries)
}

#[async_trait]
impl TransactionContext for FileState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        // Validate before mutating so a rejected put leaves the map intact.
        serde_json::from_slice::<serde_json::Value>(&value)
            .map_err(|e| LedgerError::State(format!("value at '{key}' is not JSON: {e}")))?;
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    async fn delete_state(&self, key: &str) -> Result<(), LedgerError> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.persist(&entries)
    }

    async fn query_state(&self, selector: &Selector) -> Result<StateIter, LedgerError> {
        let rows = query_rows(&self.entries.lock().unwrap(), selector);
        Ok(Box::new(rows.into_iter().map(Ok)))
    }

    fn creator(&self) -> Result<Vec<u8>, LedgerError> {
        Ok(self.creator.clone())
    }
}
