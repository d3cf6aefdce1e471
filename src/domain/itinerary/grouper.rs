//! Bucketing flat item rows into ordered per-day groups.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::ItineraryItem;

/// One `day_index` bucket of item rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day_index: i32,
    /// First-seen date within the group; rows of one group are assumed
    /// date-consistent by the persistence layer.
    pub date: Option<NaiveDate>,
    pub items: Vec<ItineraryItem>,
}

/// Groups flat itinerary rows by `day_index`.
pub struct DayGrouper;

impl DayGrouper {
    /// Buckets rows by `day_index` and emits groups sorted ascending by
    /// that index regardless of input bucket order. Rows within a group
    /// keep their incoming relative order, which the row-fetch collaborator
    /// guarantees to be `(date asc nulls-first, order_index asc)`.
    ///
    /// # Edge Cases
    /// - Empty input: empty output.
    /// - Days with no rows are not synthesized; padding to a trip's nominal
    ///   day count is a presentation concern.
    pub fn group(items: &[ItineraryItem]) -> Vec<DayGroup> {
        let mut buckets: BTreeMap<i32, DayGroup> = BTreeMap::new();
        for item in items {
            buckets
                .entry(item.day_index)
                .or_insert_with(|| DayGroup {
                    day_index: item.day_index,
                    date: item.date,
                    items: Vec::new(),
                })
                .items
                .push(item.clone());
        }
        buckets.into_values().collect()
    }
}
