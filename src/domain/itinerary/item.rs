//! The persisted itinerary item row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{ItemId, PlaceId, TripId};

/// The scheduled slot of an item within its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// An itinerary item row exactly as persisted.
///
/// Within one `(trip, day_index)` group, `order_index` values are unique
/// but not required to be contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: ItemId,
    pub trip_id: TripId,
    pub day_index: i32,
    pub date: Option<NaiveDate>,
    pub order_index: i32,
    pub when: TimeOfDay,
    pub place_id: Option<PlaceId>,
    pub title: String,
    pub est_cost: Option<f64>,
    pub duration_min: Option<i64>,
    pub travel_min_from_prev: Option<i64>,
    pub notes: Option<String>,
}

impl ItineraryItem {
    /// The persistence sort key: `(date ascending nulls-first,
    /// order_index ascending)`.
    ///
    /// The row-fetch collaborator returns rows in this order already;
    /// adapters that hold rows in memory use this to honor the contract.
    pub fn persistence_order(a: &Self, b: &Self) -> Ordering {
        let by_date = match (a.date, b.date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.cmp(&y),
        };
        by_date.then(a.order_index.cmp(&b.order_index))
    }
}
