//! The transaction-context boundary between the registry and its host.
//!
//! The hosting platform hands every registry operation one atomic,
//! replay-deterministic transaction context. This module models that handle
//! as an explicit trait object passed into each operation — never global or
//! thread-local state — so operations stay testable against an in-memory
//! substitute store.

use async_trait::async_trait;

use crate::error::LedgerError;
use crate::selector::Selector;

/// One key/value row returned by a rich query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    /// World-state key the row was stored under.
    pub key: String,
    /// Raw stored value.
    pub value: Vec<u8>,
}

/// A one-shot, finite traversal of rich-query results.
///
/// Per-row failures surface as [`LedgerError::Iterator`] items; consumers
/// abort on the first error rather than returning partial results.
pub type StateIter = Box<dyn Iterator<Item = Result<StateEntry, LedgerError>> + Send>;

/// World-state accessor supplied by the hosting platform.
///
/// All reads and writes issued through one context belong to one atomic
/// transaction: either every change commits or none do. The registry never
/// caches state across invocations; the replicated world state reached
/// through this trait is the single source of truth.
///
/// Within one invocation, operations are sequenced exactly as issued —
/// read-modify-write sequences rely on this. Isolation *across* invocations
/// (e.g. two concurrent transfers of the same asset) is the platform's
/// responsibility via its commit-time version check.
#[async_trait]
pub trait TransactionContext: Send + Sync {
    /// Fetch the value stored at `key`, or `None` if absent.
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` at `key`, replacing any existing value.
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Erase the entry at `key`. Deleting an absent key is not an error.
    async fn delete_state(&self, key: &str) -> Result<(), LedgerError>;

    /// Run a selector-based rich query against the state database and
    /// return the matching rows.
    async fn query_state(&self, selector: &Selector) -> Result<StateIter, LedgerError>;

    /// The raw invoker identity — an opaque, platform-defined byte blob
    /// (e.g. a certificate-derived credential).
    fn creator(&self) -> Result<Vec<u8>, LedgerError>;
}
