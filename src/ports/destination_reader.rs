//! Destination-history lookup port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{EngineError, TripId};

/// The raw destination-history row for a trip's destination.
///
/// `payload` is the untyped blob column (narrative plus nested `kbyg`);
/// it is only interpreted through
/// [`HistoryPayload::coerce`](crate::domain::destination::HistoryPayload::coerce).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub payload: Option<Value>,
    pub backdrop_image_url: Option<String>,
    pub country_code: Option<String>,
}

/// Reader port for destination history.
#[async_trait]
pub trait DestinationReader: Send + Sync {
    /// Get the current history record for the trip's destination.
    /// Returns `None` when the trip has no destination or no history.
    async fn fetch_history(&self, trip_id: &TripId) -> Result<Option<HistoryRecord>, EngineError>;
}
