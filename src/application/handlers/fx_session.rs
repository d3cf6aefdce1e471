//! FxSession - one snapshot fetch per assembly pass, conversions on top.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::warn;

use crate::domain::foundation::CurrencyCode;
use crate::domain::fx::{convert_using_snapshot, FxSnapshot};
use crate::ports::FxSnapshotProvider;

/// A per-request conversion session over a single rate snapshot.
///
/// The snapshot is fetched lazily on the first conversion and reused for
/// the session's lifetime, so every figure in one response is priced off
/// the same table. A provider failure is logged once and cached as
/// "no snapshot": later conversions return `None` without retrying.
pub struct FxSession {
    provider: Arc<dyn FxSnapshotProvider>,
    base: CurrencyCode,
    snapshot: OnceCell<Option<FxSnapshot>>,
}

impl FxSession {
    pub fn new(provider: Arc<dyn FxSnapshotProvider>, base: CurrencyCode) -> Self {
        Self {
            provider,
            base,
            snapshot: OnceCell::new(),
        }
    }

    /// The session's snapshot, fetching it on first use.
    pub async fn snapshot(&self) -> Option<&FxSnapshot> {
        self.snapshot
            .get_or_init(|| async {
                match self.provider.latest_snapshot(&self.base).await {
                    Ok(snapshot) => snapshot,
                    Err(err) => {
                        warn!(base = %self.base, error = %err, "fx snapshot fetch failed, conversions disabled");
                        None
                    }
                }
            })
            .await
            .as_ref()
    }

    /// Convert `amount` between currency codes using the session snapshot.
    ///
    /// Inherits [`convert_using_snapshot`]'s contract: identity pairs and
    /// unpriceable inputs come back as `None`, never an error.
    pub async fn convert(&self, amount: Option<f64>, from: &str, to: &str) -> Option<f64> {
        let snapshot = self.snapshot().await;
        convert_using_snapshot(snapshot, amount, from, to)
    }
}
