//! Place reference data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlaceId;

/// An immutable place row, looked up by id for map markers and cost hints.
/// The engine never writes to places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub popularity: Option<f64>,
    pub cost_typical: Option<f64>,
    pub cost_currency: Option<String>,
}

impl Place {
    /// A named place with no optional data, useful as a fixture base.
    pub fn named(id: PlaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lat: None,
            lng: None,
            category: None,
            tags: None,
            popularity: None,
            cost_typical: None,
            cost_currency: None,
        }
    }
}
