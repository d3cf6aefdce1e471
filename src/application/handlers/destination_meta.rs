//! DestinationMetaHandler - merged practical info for a trip's destination.

use std::sync::Arc;

use tracing::debug;

use crate::domain::destination::{DestinationMeta, HistoryPayload, MetaMerger};
use crate::domain::foundation::{EngineError, TripId};
use crate::domain::trip::TripInputs;
use crate::ports::{DestinationReader, ItineraryReader};

/// Query for a trip's merged destination meta.
#[derive(Debug, Clone)]
pub struct DestinationMetaQuery {
    pub trip_id: TripId,
}

/// Handler that merges the destination-history payload with the
/// trip-level `inputs.destination_meta` overrides.
///
/// The history row also contributes the hero image URL and the
/// destination's country code; both only fill fields the merge left
/// empty, since an override there wins like everywhere else.
pub struct DestinationMetaHandler {
    itinerary: Arc<dyn ItineraryReader>,
    destinations: Arc<dyn DestinationReader>,
}

impl DestinationMetaHandler {
    pub fn new(
        itinerary: Arc<dyn ItineraryReader>,
        destinations: Arc<dyn DestinationReader>,
    ) -> Self {
        Self {
            itinerary,
            destinations,
        }
    }

    pub async fn handle(&self, query: DestinationMetaQuery) -> Result<DestinationMeta, EngineError> {
        let (trip, history) = futures::try_join!(
            self.itinerary.fetch_trip(&query.trip_id),
            self.destinations.fetch_history(&query.trip_id),
        )?;
        let trip = trip.ok_or(EngineError::TripNotFound(query.trip_id))?;

        let overrides = TripInputs::parse(trip.inputs.as_ref()).and_then(|i| i.destination_meta);
        let payload = history
            .as_ref()
            .map(|h| HistoryPayload::coerce(h.payload.as_ref()));

        let mut merged = MetaMerger::merge(payload.as_ref(), overrides.as_ref());

        if let Some(record) = history {
            if merged.image.is_none() {
                merged.image = record.backdrop_image_url;
            }
            if merged.country_code.is_none() {
                merged.country_code = record.country_code;
            }
        }

        debug!(trip_id = %query.trip_id, has_content = merged.has_content(), "merged destination meta");
        Ok(merged)
    }
}
