//! Per-day and trip-total monetary and time aggregation.

use serde::{Deserialize, Serialize};

use super::{Block, Day};

/// Trip-level totals across all days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripTotals {
    pub est_cost: i64,
    pub duration_min: i64,
    pub travel_min: i64,
}

/// Aggregates block costs and times.
///
/// Rounding happens only at the aggregate, never per block, to avoid
/// compounding rounding error; the zero floor likewise applies only to the
/// aggregate, so negative blocks may offset positive ones within a day.
pub struct CostAggregator;

impl CostAggregator {
    /// `max(0, round(sum of est_cost))` over the given blocks.
    ///
    /// # Edge Cases
    /// - Empty slice: 0
    /// - All-negative blocks: clamped to 0
    pub fn day_cost(blocks: &[Block]) -> i64 {
        let total: f64 = blocks.iter().map(|b| b.est_cost).sum();
        (total.round() as i64).max(0)
    }

    /// Cost, activity, and travel totals across all days.
    pub fn trip_totals(days: &[Day]) -> TripTotals {
        let blocks = days.iter().flat_map(|d| d.blocks.iter());
        let mut cost = 0.0;
        let mut duration_min = 0;
        let mut travel_min = 0;
        for block in blocks {
            cost += block.est_cost;
            duration_min += block.duration_min;
            travel_min += block.travel_min_from_prev;
        }
        TripTotals {
            est_cost: (cost.round() as i64).max(0),
            duration_min,
            travel_min,
        }
    }
}
