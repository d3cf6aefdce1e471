//! Row-fetch port for trips, items, places, and day routes.

use async_trait::async_trait;

use crate::domain::foundation::{EngineError, PlaceId, TripId};
use crate::domain::itinerary::{ItineraryItem, Place};
use crate::domain::preview::DayRoute;
use crate::domain::trip::TripRecord;

/// Reader port for persisted itinerary data.
#[async_trait]
pub trait ItineraryReader: Send + Sync {
    /// Get the trip row. Returns `None` if not found.
    async fn fetch_trip(&self, id: &TripId) -> Result<Option<TripRecord>, EngineError>;

    /// List the trip's item rows, sorted by
    /// `(date ascending nulls-first, order_index ascending)` — the order
    /// the grouper relies on.
    async fn fetch_items(&self, trip_id: &TripId) -> Result<Vec<ItineraryItem>, EngineError>;

    /// Look up place rows for the given ids; unknown ids are simply
    /// absent from the result, never an error.
    async fn fetch_places(&self, ids: &[PlaceId]) -> Result<Vec<Place>, EngineError>;

    /// List the trip's day-route side-table rows. An absent side table is
    /// an empty list.
    async fn fetch_day_routes(&self, trip_id: &TripId) -> Result<Vec<DayRoute>, EngineError>;
}
