//! Shared domain primitives.
//!
//! Value objects and helpers used across the aggregation engine:
//! strongly-typed identifiers, normalized currency codes, the JSON
//! guard/coercion boundary for persisted blobs, and the error types
//! surfaced at the port boundary.

mod currency;
mod errors;
mod ids;
mod json;

pub use currency::CurrencyCode;
pub use errors::{EngineError, ValidationError};
pub use ids::{ItemId, PlaceId, TripId};
pub use json::{
    f64_field, parse_json_blob, str_field, string_array_field, string_list, string_list_field,
};
