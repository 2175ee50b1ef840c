//! The asset entity — the sole value stored in world state.

use serde::{Deserialize, Serialize};

/// A registered asset.
///
/// One world-state entry exists per asset, keyed by [`Asset::id`]; the value
/// is the complete JSON serialization of this struct. There is no
/// partial-field update — every write replaces the whole document.
///
/// The JSON field names (`id`, `owner`, `status`) are the wire format for
/// already-stored ledger data and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Globally unique identifier; doubles as the world-state key.
    /// Immutable once created.
    pub id: String,
    /// Current holder. Mutable only via the transfer/update-owner operation.
    pub owner: String,
    /// Free-form lifecycle label (e.g. `"available"`, `"checked out"`).
    pub status: String,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            status: status.into(),
        }
    }
}
