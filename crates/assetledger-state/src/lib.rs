//! assetledger-state — world-state backends for AssetLedger.
//!
//! These backends stand in for the hosting platform's replicated world
//! state. None of them provide the platform's cross-transaction isolation;
//! they exist for tests, embedding, and the dev CLI.
//!
//! Backends:
//! - [`memory`] — in-memory (tests/embedding, no persistence)
//! - [`file`] — single JSON file (dev CLI, survives between invocations)

pub mod file;
pub mod memory;

pub use file::FileState;
pub use memory::InMemoryState;
