//! Derived day and block structures.
//!
//! A `Day` is a pure projection of itinerary item rows for one trip,
//! rebuilt on every fetch/render pass and never mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ItineraryItem, TimeOfDay};
use crate::domain::foundation::{ItemId, PlaceId};
use crate::domain::trip::Lodging;

/// One scheduled activity within a day.
///
/// Cost and time fields are coerced to `0` when the source row holds null;
/// negative source costs are carried as-is and only clamped at the
/// aggregate (see [`CostAggregator`](super::CostAggregator)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: ItemId,
    pub order_index: i32,
    pub when: TimeOfDay,
    pub place_id: Option<PlaceId>,
    pub title: String,
    pub est_cost: f64,
    pub duration_min: i64,
    pub travel_min_from_prev: i64,
    pub notes: Option<String>,
}

impl From<&ItineraryItem> for Block {
    fn from(item: &ItineraryItem) -> Self {
        Self {
            id: item.id,
            order_index: item.order_index,
            when: item.when,
            place_id: item.place_id,
            title: item.title.clone(),
            est_cost: item.est_cost.unwrap_or(0.0),
            duration_min: item.duration_min.unwrap_or(0),
            travel_min_from_prev: item.travel_min_from_prev.unwrap_or(0),
            notes: item.notes.clone(),
        }
    }
}

/// One day of the assembled itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// The day's date; `None` when neither the rows nor the trip know it.
    pub date: Option<NaiveDate>,
    pub blocks: Vec<Block>,
    /// Encoded route polyline for the day's map, when one exists.
    pub map_polyline: Option<String>,
    /// Trip-scoped lodging, copied identically onto every day because the
    /// consuming views expect it per-day.
    pub lodging: Option<Lodging>,
    /// Per-day cost override, when a planning step produced one.
    pub est_day_cost: Option<i64>,
}
