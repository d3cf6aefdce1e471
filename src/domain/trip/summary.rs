//! The trip summary block of the assembled view model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TripInputs;
use crate::domain::foundation::CurrencyCode;

/// Summary fields handed to every rendering surface alongside the days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub total_days: u32,
    pub est_total_cost: f64,
    /// Trip currency; defaults to USD when the row carries none.
    pub currency: CurrencyCode,
    pub inputs: Option<TripInputs>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub trip_title: Option<String>,
}

impl TripSummary {
    /// Effective start date: the inputs blob wins over the row column,
    /// matching how date ranges are displayed.
    pub fn effective_start(&self) -> Option<NaiveDate> {
        self.inputs
            .as_ref()
            .and_then(|i| i.start_date)
            .or(self.start_date)
    }

    /// Effective end date, with the same precedence as [`effective_start`].
    ///
    /// [`effective_start`]: Self::effective_start
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.inputs
            .as_ref()
            .and_then(|i| i.end_date)
            .or(self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn effective_dates_prefer_inputs() {
        let summary = TripSummary {
            total_days: 3,
            est_total_cost: 0.0,
            currency: CurrencyCode::usd(),
            inputs: Some(TripInputs {
                start_date: Some(date(2025, 6, 2)),
                ..Default::default()
            }),
            start_date: Some(date(2025, 6, 1)),
            end_date: Some(date(2025, 6, 4)),
            trip_title: None,
        };
        assert_eq!(summary.effective_start(), Some(date(2025, 6, 2)));
        assert_eq!(summary.effective_end(), Some(date(2025, 6, 4)));
    }
}
