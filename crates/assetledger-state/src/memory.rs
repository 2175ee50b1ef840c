//! In-memory world-state backend.
//!
//! Stores entries in RAM and evaluates rich queries by matching the
//! selector against each stored JSON document. All data is lost when the
//! process exits.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use assetledger_core::{LedgerError, Selector, StateEntry, StateIter, TransactionContext};

/// In-memory world state.
///
/// Entries iterate in key order, so rich-query results are deterministic.
/// A per-key version counter is bumped on every put/delete — the hook a
/// platform's commit-time validation would key on, exposed here so tests
/// can observe write ordering.
pub struct InMemoryState {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
    versions: Mutex<BTreeMap<String, u64>>,
    creator: Vec<u8>,
}

impl InMemoryState {
    /// Create an empty state with a fixed default creator identity.
    pub fn new() -> Self {
        Self::with_creator(b"dev-identity".to_vec())
    }

    /// Create an empty state reporting `creator` as the invoker identity.
    pub fn with_creator(creator: Vec<u8>) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            versions: Mutex::new(BTreeMap::new()),
            creator,
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The write version of `key`: 0 if never written, bumped on every
    /// put/delete.
    pub fn version_of(&self, key: &str) -> u64 {
        self.versions.lock().unwrap().get(key).copied().unwrap_or(0)
    }

    fn bump_version(&self, key: &str) {
        *self
            .versions
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_insert(0) += 1;
    }
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionContext for InMemoryState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        self.bump_version(key);
        Ok(())
    }

    async fn delete_state(&self, key: &str) -> Result<(), LedgerError> {
        self.entries.lock().unwrap().remove(key);
        self.bump_version(key);
        Ok(())
    }

    async fn query_state(&self, selector: &Selector) -> Result<StateIter, LedgerError> {
        let rows = query_rows(&self.entries.lock().unwrap(), selector);
        Ok(Box::new(rows.into_iter().map(Ok)))
    }

    fn creator(&self) -> Result<Vec<u8>, LedgerError> {
        Ok(self.creator.clone())
    }
}

/// Evaluate `selector` against every stored document, in key order.
///
/// A match-all selector returns every entry as-is. A conditional selector
/// only matches entries whose value parses as JSON; non-JSON values cannot
/// satisfy a field condition.
pub(crate) fn query_rows(entries: &BTreeMap<String, Vec<u8>>, selector: &Selector) -> Vec<StateEntry> {
    entries
        .iter()
        .filter(|(_, value)| {
            if selector.is_match_all() {
                return true;
            }
            serde_json::from_slice::<serde_json::Value>(value)
                .map(|doc| selector.matches(&doc))
                .unwrap_or(false)
        })
        .map(|(key, value)| StateEntry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}
