//! Error taxonomy for registry operations.

use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// Every error becomes the transaction's outcome as-is: there is no local
/// recovery, retry, or partial commit. The hosting platform discards all
/// writes of a failed transaction, so a failing operation leaves world
/// state untouched.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No entry exists at the given key.
    #[error("asset '{id}' does not exist")]
    NotFound { id: String },

    /// An entry already exists at the given key.
    /// Raised only when strict create mode is enabled.
    #[error("asset '{id}' already exists")]
    AlreadyExists { id: String },

    /// Encoding an asset for storage failed.
    #[error("failed to serialize asset '{key}': {reason}")]
    Serialization { key: String, reason: String },

    /// Decoding a stored value failed (corrupt or foreign data at the key).
    #[error("failed to deserialize asset '{key}': {reason}")]
    Deserialization { key: String, reason: String },

    /// The world-state accessor failed on a get/put/delete.
    #[error("state error: {0}")]
    State(String),

    /// Rich-query result traversal failed.
    #[error("query iteration failed: {0}")]
    Iterator(String),
}

impl LedgerError {
    /// Returns `true` if the error is an absent-key lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn serialization(key: &str, err: serde_json::Error) -> Self {
        Self::Serialization {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }
}
