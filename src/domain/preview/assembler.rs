//! Composing rows, groups, totals, and metadata into one view model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::DayRoute;
use crate::domain::foundation::{CurrencyCode, PlaceId};
use crate::domain::itinerary::{Block, Day, DayGrouper, ItineraryItem, Place};
use crate::domain::trip::{TripInputs, TripRecord, TripSummary};

/// The single structure consumed by every itinerary-rendering surface
/// (day view, calendar view, story view, map view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewLike {
    pub trip_summary: TripSummary,
    pub days: Vec<Day>,
    pub places: Vec<Place>,
}

impl PreviewLike {
    /// Places keyed by id, for marker lookups.
    pub fn place_index(&self) -> HashMap<PlaceId, &Place> {
        self.places.iter().map(|p| (p.id, p)).collect()
    }
}

/// Pure assembly of the preview view model. No I/O, no side effects:
/// running it twice on the same inputs yields deep-equal output.
pub struct PreviewAssembler;

impl PreviewAssembler {
    /// Builds the view model from one fetched snapshot of rows.
    ///
    /// - Day dates fall back to the trip's start date when the rows carry
    ///   none.
    /// - Each day gets its route polyline looked up from the side table by
    ///   the rows' own date; a dateless group never binds a route, even
    ///   when its display date falls back to the trip start. The
    ///   trip-scoped lodging is copied onto every day.
    /// - The summary currency defaults to USD when the row has none.
    pub fn assemble(
        trip: &TripRecord,
        items: &[ItineraryItem],
        places: Vec<Place>,
        routes: &[DayRoute],
    ) -> PreviewLike {
        let poly_by_date = DayRoute::index_by_date(routes);
        let inputs = TripInputs::parse(trip.inputs.as_ref());
        let lodging = inputs.as_ref().and_then(|i| i.lodging.clone());

        let days: Vec<Day> = DayGrouper::group(items)
            .into_iter()
            .map(|group| Day {
                date: group.date.or(trip.start_date),
                blocks: group.items.iter().map(Block::from).collect(),
                map_polyline: group.date.and_then(|d| poly_by_date.get(&d).cloned()),
                lodging: lodging.clone(),
                est_day_cost: None,
            })
            .collect();

        let trip_summary = TripSummary {
            total_days: days.len() as u32,
            est_total_cost: trip.est_total_cost.unwrap_or(0.0),
            currency: trip
                .currency
                .as_deref()
                .and_then(CurrencyCode::parse)
                .unwrap_or_default(),
            inputs,
            start_date: trip.start_date,
            end_date: trip.end_date,
            trip_title: trip.title.clone(),
        };

        PreviewLike {
            trip_summary,
            days,
            places,
        }
    }

    /// Spread count for an assembled itinerary.
    ///
    /// One convention, used everywhere: one overview spread plus one
    /// spread per day.
    pub fn total_spreads(day_count: u32) -> u32 {
        day_count + 1
    }
}
