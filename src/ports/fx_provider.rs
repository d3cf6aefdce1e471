//! FX snapshot provider port.

use async_trait::async_trait;

use crate::domain::foundation::{CurrencyCode, EngineError};
use crate::domain::fx::FxSnapshot;

/// Provider port for point-in-time exchange-rate snapshots.
#[async_trait]
pub trait FxSnapshotProvider: Send + Sync {
    /// The most recent snapshot for the requested base currency, or
    /// `None` when no snapshot exists.
    async fn latest_snapshot(
        &self,
        base: &CurrencyCode,
    ) -> Result<Option<FxSnapshot>, EngineError>;
}
