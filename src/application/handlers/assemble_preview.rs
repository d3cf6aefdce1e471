//! AssemblePreviewHandler - builds the preview view model for one trip.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{EngineError, PlaceId, TripId};
use crate::domain::preview::{PreviewAssembler, PreviewLike};
use crate::ports::ItineraryReader;

/// Query to assemble the preview for a trip.
#[derive(Debug, Clone)]
pub struct AssemblePreviewQuery {
    pub trip_id: TripId,
}

/// Handler that fetches one consistent snapshot of rows and assembles it.
///
/// Trip, items, and day routes are fetched concurrently; places are
/// fetched afterwards because their id set depends on the items. The
/// assembly itself is pure, so re-running the handler against unchanged
/// rows yields deep-equal output.
pub struct AssemblePreviewHandler {
    reader: Arc<dyn ItineraryReader>,
}

impl AssemblePreviewHandler {
    pub fn new(reader: Arc<dyn ItineraryReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: AssemblePreviewQuery) -> Result<PreviewLike, EngineError> {
        let (trip, items, routes) = futures::try_join!(
            self.reader.fetch_trip(&query.trip_id),
            self.reader.fetch_items(&query.trip_id),
            self.reader.fetch_day_routes(&query.trip_id),
        )?;
        let trip = trip.ok_or(EngineError::TripNotFound(query.trip_id))?;

        let place_ids: Vec<PlaceId> = items
            .iter()
            .filter_map(|i| i.place_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let places = if place_ids.is_empty() {
            Vec::new()
        } else {
            self.reader.fetch_places(&place_ids).await?
        };

        debug!(
            trip_id = %query.trip_id,
            items = items.len(),
            places = places.len(),
            routes = routes.len(),
            "assembling trip preview"
        );

        Ok(PreviewAssembler::assemble(&trip, &items, places, &routes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryItineraryReader;
    use crate::domain::foundation::ItemId;
    use crate::domain::itinerary::{ItineraryItem, Place, TimeOfDay};
    use crate::domain::trip::TripRecord;
    use chrono::NaiveDate;

    fn item(trip_id: TripId, day_index: i32, order_index: i32, place_id: Option<PlaceId>) -> ItineraryItem {
        ItineraryItem {
            id: ItemId::new(),
            trip_id,
            day_index,
            date: NaiveDate::from_ymd_opt(2025, 3, 10 + day_index as u32),
            order_index,
            when: TimeOfDay::Afternoon,
            place_id,
            title: "stop".to_string(),
            est_cost: Some(15.0),
            duration_min: Some(60),
            travel_min_from_prev: Some(10),
            notes: None,
        }
    }

    #[tokio::test]
    async fn assembles_a_stored_trip() {
        let trip_id = TripId::new();
        let place_id = PlaceId::new();
        let reader = InMemoryItineraryReader::new()
            .with_trip(TripRecord::empty(trip_id))
            .with_items(vec![
                item(trip_id, 0, 0, Some(place_id)),
                item(trip_id, 1, 0, None),
            ])
            .with_place(Place::named(place_id, "Mercado"));

        let handler = AssemblePreviewHandler::new(Arc::new(reader));
        let preview = handler
            .handle(AssemblePreviewQuery { trip_id })
            .await
            .unwrap();

        assert_eq!(preview.trip_summary.total_days, 2);
        assert_eq!(preview.places.len(), 1);
        assert_eq!(preview.places[0].name, "Mercado");
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let handler = AssemblePreviewHandler::new(Arc::new(InMemoryItineraryReader::new()));
        let err = handler
            .handle(AssemblePreviewQuery {
                trip_id: TripId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::TripNotFound(_)));
    }

    #[tokio::test]
    async fn items_from_other_trips_are_ignored() {
        let trip_id = TripId::new();
        let other = TripId::new();
        let reader = InMemoryItineraryReader::new()
            .with_trip(TripRecord::empty(trip_id))
            .with_items(vec![item(other, 0, 0, None)]);

        let handler = AssemblePreviewHandler::new(Arc::new(reader));
        let preview = handler
            .handle(AssemblePreviewQuery { trip_id })
            .await
            .unwrap();
        assert!(preview.days.is_empty());
    }
}
