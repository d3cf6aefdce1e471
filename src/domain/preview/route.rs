//! Per-day route polylines, looked up by date from a side table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A row of the optional per-trip day-route side table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRoute {
    pub date: Option<NaiveDate>,
    /// Precision-6 encoded polyline, preferred when present.
    pub polyline6: Option<String>,
    pub polyline: Option<String>,
}

impl DayRoute {
    /// The usable polyline for this row: precision-6 wins over the plain
    /// encoding; empty strings count as absent.
    pub fn effective_polyline(&self) -> Option<&str> {
        self.polyline6
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.polyline.as_deref().filter(|p| !p.is_empty()))
    }

    /// Indexes rows by date; rows without a date or without any polyline
    /// are skipped.
    pub fn index_by_date(routes: &[DayRoute]) -> HashMap<NaiveDate, String> {
        routes
            .iter()
            .filter_map(|r| {
                let date = r.date?;
                let poly = r.effective_polyline()?;
                Some((date, poly.to_string()))
            })
            .collect()
    }
}
