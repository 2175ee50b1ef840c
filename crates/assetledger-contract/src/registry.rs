//! Registry operations over the world state.
//!
//! The registry is stateless: it holds configuration only, never ledger
//! data. Everything it reads or writes goes through the
//! [`TransactionContext`] handed to each operation, so the same registry
//! value can serve any number of transactions on any number of peers.

use tracing::{debug, info};

use assetledger_core::{Asset, LedgerError, Selector, TransactionContext};

/// Behavioral switches for the registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// When `true`, `create_asset` rejects an id that is already stored
    /// with [`LedgerError::AlreadyExists`] instead of silently overwriting.
    ///
    /// Off by default: existing ledgers were written with upsert-style
    /// create, and re-executing peers must observe identical behavior.
    pub strict_create: bool,
}

/// The asset registry contract.
///
/// Each method is one atomic registry operation; the platform invokes one
/// per transaction. A failing operation leaves world state untouched — the
/// platform discards the transaction's writes as a unit.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    config: RegistryConfig,
}

/// Assets seeded by [`AssetRegistry::init_ledger`].
fn seed_assets() -> [Asset; 2] {
    [
        Asset::new("asset1", "owner1", "available"),
        Asset::new("asset2", "owner2", "checked out"),
    ]
}

impl AssetRegistry {
    /// A registry with default (backward-compatible) behavior.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self { config }
    }

    /// Seed the ledger with the fixed bootstrap assets.
    ///
    /// One-time bootstrap only: re-running against a non-empty store
    /// silently overwrites entries with the same ids. Aborts on the first
    /// serialization or write failure.
    pub async fn init_ledger(&self, ctx: &impl TransactionContext) -> Result<(), LedgerError> {
        let assets = seed_assets();
        for asset in &assets {
            put_asset(ctx, asset).await?;
        }
        info!(count = assets.len(), "ledger initialized");
        Ok(())
    }

    /// Store a new asset under `id`.
    ///
    /// No input validation — empty strings are accepted. By default an
    /// existing entry at `id` is silently overwritten; with
    /// [`RegistryConfig::strict_create`] the collision is rejected instead.
    pub async fn create_asset(
        &self,
        ctx: &impl TransactionContext,
        id: &str,
        owner: &str,
        status: &str,
    ) -> Result<(), LedgerError> {
        if self.config.strict_create && self.asset_exists(ctx, id).await? {
            return Err(LedgerError::AlreadyExists { id: id.to_string() });
        }
        put_asset(ctx, &Asset::new(id, owner, status)).await
    }

    /// Fetch the asset stored under `id`.
    ///
    /// The building block every mutating operation uses to load current
    /// state before acting. No side effects.
    pub async fn query_asset(
        &self,
        ctx: &impl TransactionContext,
        id: &str,
    ) -> Result<Asset, LedgerError> {
        match ctx.get_state(id).await? {
            Some(value) if !value.is_empty() => decode_asset(id, &value),
            _ => Err(LedgerError::NotFound { id: id.to_string() }),
        }
    }

    /// Returns `true` iff a non-empty value is stored at `id`.
    ///
    /// Absence is a valid, non-error outcome here; only accessor failures
    /// surface as errors.
    pub async fn asset_exists(
        &self,
        ctx: &impl TransactionContext,
        id: &str,
    ) -> Result<bool, LedgerError> {
        Ok(ctx
            .get_state(id)
            .await?
            .is_some_and(|value| !value.is_empty()))
    }

    /// Reassign the asset at `id` to `new_owner`.
    ///
    /// Read-modify-write over the whole document: only `owner` changes,
    /// `id` and `status` are preserved. Safe without locking because the
    /// surrounding transaction is atomic end-to-end.
    pub async fn update_owner(
        &self,
        ctx: &impl TransactionContext,
        id: &str,
        new_owner: &str,
    ) -> Result<(), LedgerError> {
        let mut asset = self.query_asset(ctx, id).await?;
        asset.owner = new_owner.to_string();
        put_asset(ctx, &asset).await
    }

    /// Transfer the asset at `id` to `new_owner`.
    ///
    /// Pure delegation to [`Self::update_owner`] — no eligibility or
    /// current-owner check.
    pub async fn transfer_asset(
        &self,
        ctx: &impl TransactionContext,
        id: &str,
        new_owner: &str,
    ) -> Result<(), LedgerError> {
        self.update_owner(ctx, id, new_owner).await
    }

    /// Remove the asset at `id`, returning what was deleted.
    ///
    /// Reads first, so a missing asset fails with
    /// [`LedgerError::NotFound`] and corrupt data with
    /// [`LedgerError::Deserialization`]. On success the key is erased
    /// entirely — no tombstone.
    pub async fn delete_asset(
        &self,
        ctx: &impl TransactionContext,
        id: &str,
    ) -> Result<Asset, LedgerError> {
        let asset = self.query_asset(ctx, id).await?;
        ctx.delete_state(id).await?;
        debug!(id = %id, "asset deleted");
        Ok(asset)
    }

    /// Fetch every stored asset via a match-all rich query.
    ///
    /// Any traversal or per-row decode failure aborts the whole query; no
    /// partial result is returned.
    pub async fn query_all_assets(
        &self,
        ctx: &impl TransactionContext,
    ) -> Result<Vec<Asset>, LedgerError> {
        let rows = ctx.query_state(&Selector::all()).await?;
        let mut assets = Vec::new();
        for row in rows {
            let entry = row?;
            assets.push(decode_asset(&entry.key, &entry.value)?);
        }
        Ok(assets)
    }

    /// Render the invoker's identity as a diagnostic string.
    ///
    /// Informational only — no operation consults it for authorization.
    pub fn caller_identity(&self, ctx: &impl TransactionContext) -> Result<String, LedgerError> {
        let creator = ctx.creator()?;
        Ok(format!("Identity: {}", hex::encode(creator)))
    }
}

/// Serialize `asset` and write it under its id.
async fn put_asset(ctx: &impl TransactionContext, asset: &Asset) -> Result<(), LedgerError> {
    let value = serde_json::to_vec(asset).map_err(|e| LedgerError::Serialization {
        key: asset.id.clone(),
        reason: e.to_string(),
    })?;
    ctx.put_state(&asset.id, value).await?;
    debug!(id = %asset.id, owner = %asset.owner, "asset stored");
    Ok(())
}

/// Decode the value stored at `key` into an [`Asset`].
fn decode_asset(key: &str, value: &[u8]) -> Result<Asset, LedgerError> {
    serde_json::from_slice(value).map_err(|e| LedgerError::Deserialization {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetledger_state::InMemoryState;

    #[tokio::test]
    async fn strict_create_rejects_duplicate_id() {
        let registry = AssetRegistry::with_config(RegistryConfig { strict_create: true });
        let ctx = InMemoryState::new();

        registry.create_asset(&ctx, "a1", "o1", "s1").await.unwrap();
        let err = registry.create_asset(&ctx, "a1", "o2", "s2").await.unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyExists { .. }));

        // The first write is untouched.
        let asset = registry.query_asset(&ctx, "a1").await.unwrap();
        assert_eq!(asset, Asset::new("a1", "o1", "s1"));
    }

    #[tokio::test]
    async fn corrupt_value_yields_deserialization_error() {
        let registry = AssetRegistry::new();
        let ctx = InMemoryState::new();
        ctx.put_state("bad", b"{not json".to_vec()).await.unwrap();

        let err = registry.query_asset(&ctx, "bad").await.unwrap_err();
        assert!(matches!(err, LedgerError::Deserialization { .. }));
    }

    #[tokio::test]
    async fn caller_identity_is_hex_rendered() {
        let registry = AssetRegistry::new();
        let ctx = InMemoryState::with_creator(vec![0xab, 0xcd]);
        assert_eq!(registry.caller_identity(&ctx).unwrap(), "Identity: abcd");
    }

    #[tokio::test]
    async fn empty_stored_value_counts_as_absent() {
        let registry = AssetRegistry::new();
        let ctx = InMemoryState::new();
        ctx.put_state("hollow", Vec::new()).await.unwrap();

        assert!(!registry.asset_exists(&ctx, "hollow").await.unwrap());
        let err = registry.query_asset(&ctx, "hollow").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
