//! Destination-history payload coercion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Kbyg;
use crate::domain::foundation::parse_json_blob;

/// The coerced destination-history payload.
///
/// Top-level `about` feeds the merged description, `history` feeds the
/// merged history narrative, and the nested `kbyg` object carries the
/// practical-info bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPayload {
    pub about: Option<String>,
    pub history: Option<String>,
    pub kbyg: Option<Kbyg>,
}

impl HistoryPayload {
    /// Coerces a raw payload blob (object or JSON string).
    ///
    /// # Edge Cases
    /// - Absent, malformed, or non-object payload: returns the empty
    ///   default rather than failing — callers must not crash on bad
    ///   stored JSON.
    pub fn coerce(raw: Option<&Value>) -> Self {
        let Some(map) = parse_json_blob(raw) else {
            return Self::default();
        };

        Self {
            about: map.get("about").and_then(Value::as_str).map(str::to_string),
            history: map.get("history").and_then(Value::as_str).map(str::to_string),
            kbyg: map.get("kbyg").and_then(Value::as_object).map(Kbyg::coerce),
        }
    }

    /// True when no field survived coercion.
    pub fn is_empty(&self) -> bool {
        self.about.is_none() && self.history.is_none() && self.kbyg.is_none()
    }
}
