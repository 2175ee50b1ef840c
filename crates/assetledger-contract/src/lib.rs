//! assetledger-contract — the registry operations.
//!
//! Each public method on [`AssetRegistry`] is one externally invocable unit
//! of transaction logic: the hosting platform calls exactly one per
//! transaction, passing a [`TransactionContext`] bound to the world state,
//! and the method's result (or error) becomes the transaction's outcome.
//!
//! ```no_run
//! use assetledger_contract::AssetRegistry;
//! use assetledger_state::InMemoryState;
//!
//! # async fn demo() -> Result<(), assetledger_core::LedgerError> {
//! let registry = AssetRegistry::new();
//! let ctx = InMemoryState::new();
//!
//! registry.init_ledger(&ctx).await?;
//! registry.create_asset(&ctx, "asset3", "owner3", "available").await?;
//! let asset = registry.query_asset(&ctx, "asset3").await?;
//! assert_eq!(asset.owner, "owner3");
//! # Ok(())
//! # }
//! ```

pub mod registry;

pub use registry::{AssetRegistry, RegistryConfig};
