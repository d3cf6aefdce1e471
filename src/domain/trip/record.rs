//! The persisted trip row, as returned by the row-fetch collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::TripId;

/// A trip row exactly as persisted.
///
/// `inputs` is the raw blob column — it may hold an object, a JSON string,
/// or garbage, and is only interpreted through
/// [`TripInputs::parse`](super::TripInputs::parse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: TripId,
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub est_total_cost: Option<f64>,
    pub currency: Option<String>,
    pub inputs: Option<Value>,
}

impl TripRecord {
    /// A minimal record for the given id, useful as a fixture base.
    pub fn empty(id: TripId) -> Self {
        Self {
            id,
            title: None,
            start_date: None,
            end_date: None,
            est_total_cost: None,
            currency: None,
            inputs: None,
        }
    }
}
