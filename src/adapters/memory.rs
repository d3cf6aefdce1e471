//! In-memory port implementations backed by plain collections.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::foundation::{CurrencyCode, EngineError, PlaceId, TripId};
use crate::domain::fx::FxSnapshot;
use crate::domain::itinerary::{ItineraryItem, Place};
use crate::domain::preview::DayRoute;
use crate::domain::trip::TripRecord;
use crate::ports::{DestinationReader, FxSnapshotProvider, HistoryRecord, ItineraryReader};

/// An [`ItineraryReader`] over in-memory rows.
///
/// `fetch_items` honors the port contract by sorting with the documented
/// persistence key before returning.
#[derive(Debug, Default)]
pub struct InMemoryItineraryReader {
    trips: HashMap<TripId, TripRecord>,
    items: Vec<ItineraryItem>,
    places: HashMap<PlaceId, Place>,
    routes: HashMap<TripId, Vec<DayRoute>>,
}

impl InMemoryItineraryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trip(mut self, trip: TripRecord) -> Self {
        self.trips.insert(trip.id, trip);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = ItineraryItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_place(mut self, place: Place) -> Self {
        self.places.insert(place.id, place);
        self
    }

    pub fn with_routes(mut self, trip_id: TripId, routes: Vec<DayRoute>) -> Self {
        self.routes.insert(trip_id, routes);
        self
    }
}

#[async_trait]
impl ItineraryReader for InMemoryItineraryReader {
    async fn fetch_trip(&self, id: &TripId) -> Result<Option<TripRecord>, EngineError> {
        Ok(self.trips.get(id).cloned())
    }

    async fn fetch_items(&self, trip_id: &TripId) -> Result<Vec<ItineraryItem>, EngineError> {
        let mut rows: Vec<ItineraryItem> = self
            .items
            .iter()
            .filter(|i| i.trip_id == *trip_id)
            .cloned()
            .collect();
        rows.sort_by(ItineraryItem::persistence_order);
        Ok(rows)
    }

    async fn fetch_places(&self, ids: &[PlaceId]) -> Result<Vec<Place>, EngineError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.places.get(id).cloned())
            .collect())
    }

    async fn fetch_day_routes(&self, trip_id: &TripId) -> Result<Vec<DayRoute>, EngineError> {
        Ok(self.routes.get(trip_id).cloned().unwrap_or_default())
    }
}

/// A [`DestinationReader`] over in-memory history records.
#[derive(Debug, Default)]
pub struct InMemoryDestinationReader {
    histories: HashMap<TripId, HistoryRecord>,
}

impl InMemoryDestinationReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, trip_id: TripId, record: HistoryRecord) -> Self {
        self.histories.insert(trip_id, record);
        self
    }
}

#[async_trait]
impl DestinationReader for InMemoryDestinationReader {
    async fn fetch_history(&self, trip_id: &TripId) -> Result<Option<HistoryRecord>, EngineError> {
        Ok(self.histories.get(trip_id).cloned())
    }
}

/// An [`FxSnapshotProvider`] over in-memory snapshots.
///
/// Counts fetches so tests can assert the once-per-session caching, and
/// can be flipped into a failing mode to exercise degradation.
#[derive(Debug, Default)]
pub struct InMemoryFxProvider {
    snapshots: HashMap<CurrencyCode, FxSnapshot>,
    fail: bool,
    fetches: AtomicUsize,
}

impl InMemoryFxProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, snapshot: FxSnapshot) -> Self {
        self.snapshots.insert(snapshot.base.clone(), snapshot);
        self
    }

    /// A provider whose every fetch fails upstream.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// How many snapshot fetches have been served.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FxSnapshotProvider for InMemoryFxProvider {
    async fn latest_snapshot(
        &self,
        base: &CurrencyCode,
    ) -> Result<Option<FxSnapshot>, EngineError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(EngineError::upstream("fx snapshot store unavailable"));
        }
        Ok(self.snapshots.get(base).cloned())
    }
}
