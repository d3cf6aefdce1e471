//! Parse-or-default boundary for the trip `inputs` blob.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::destination::DestinationMeta;
use crate::domain::foundation::{
    f64_field, parse_json_blob, str_field, string_array_field,
};

/// A destination entry inside the trip inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRef {
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Trip-scoped lodging, valid only when name and both coordinates are
/// present and well-typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lodging {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// The typed view of the trip `inputs` blob.
///
/// Each field survives only when its raw shape matches; wrong-shaped
/// fields are dropped, never coerced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripInputs {
    pub destinations: Vec<DestinationRef>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub pace: Option<String>,
    pub mode: Option<String>,
    pub lodging: Option<Lodging>,
    pub destination_meta: Option<DestinationMeta>,
}

impl TripInputs {
    /// Parses the blob (object or JSON string), returning `None` when the
    /// stored value is absent or malformed. Callers treat `None` as
    /// "no inputs", never as an error.
    pub fn parse(raw: Option<&Value>) -> Option<Self> {
        let map = parse_json_blob(raw)?;

        let destinations = map
            .get("destinations")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(parse_destination).collect())
            .unwrap_or_default();

        Some(Self {
            destinations,
            start_date: str_field(&map, "start_date").and_then(|s| parse_iso_date(&s)),
            end_date: str_field(&map, "end_date").and_then(|s| parse_iso_date(&s)),
            interests: string_array_field(&map, "interests").unwrap_or_default(),
            pace: str_field(&map, "pace"),
            mode: str_field(&map, "mode"),
            lodging: map.get("lodging").and_then(parse_lodging),
            destination_meta: map
                .get("destination_meta")
                .and_then(DestinationMeta::coerce_override),
        })
    }

    /// The first destination entry, when one exists.
    pub fn primary_destination(&self) -> Option<&DestinationRef> {
        self.destinations.first()
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_destination(value: &Value) -> Option<DestinationRef> {
    let obj = value.as_object()?;
    Some(DestinationRef {
        name: str_field(obj, "name")?,
        lat: f64_field(obj, "lat"),
        lng: f64_field(obj, "lng"),
    })
}

fn parse_lodging(value: &Value) -> Option<Lodging> {
    let obj = value.as_object()?;
    Some(Lodging {
        name: str_field(obj, "name")?,
        lat: f64_field(obj, "lat")?,
        lng: f64_field(obj, "lng")?,
    })
}
