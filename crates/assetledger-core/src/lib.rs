//! assetledger-core — foundation for the AssetLedger registry contract.
//!
//! # Architecture
//!
//! ```text
//! AssetRegistry (assetledger-contract)
//!      ├── Asset              (the persisted entity)
//!      ├── Selector           (typed rich-query builder)
//!      ├── LedgerError        (error taxonomy)
//!      └── TransactionContext (world-state accessor boundary)
//!               ├── InMemoryState  (assetledger-state, tests/embedding)
//!               └── FileState      (assetledger-state, dev CLI)
//! ```
//!
//! The registry itself never holds state: every operation receives a
//! [`TransactionContext`] bound to the hosting platform's world state and
//! reads/writes exclusively through it.

pub mod asset;
pub mod context;
pub mod error;
pub mod selector;

pub use asset::Asset;
pub use context::{StateEntry, StateIter, TransactionContext};
pub use error::LedgerError;
pub use selector::Selector;
