//! Know Before You Go - the nested practical-info object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{f64_field, str_field, string_list_field};

/// The coerced `kbyg` object from a destination-history payload.
///
/// Every field is optional; a field survives coercion only when its raw
/// shape matches. List-ish fields (`plugs`, `languages`, `getting_around`)
/// accept both a string array and a comma-separated string and are
/// normalized to arrays here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kbyg {
    pub currency: Option<String>,
    pub plugs: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub weather_desc: Option<String>,
    pub weather_temp_c: Option<f64>,
    pub getting_around: Option<Vec<String>>,
    pub esim: Option<String>,
    pub primary_city: Option<String>,
    pub tipping: Option<String>,
    pub payment: Option<String>,
    pub photography: Option<String>,
    pub gestures: Option<String>,
    pub dress_code: Option<String>,
    pub cost_coffee: Option<String>,
    pub cost_meal: Option<String>,
    pub cost_beer: Option<String>,
    pub etiquette_dos: Option<String>,
    pub etiquette_donts: Option<String>,
    pub packing_tips: Option<String>,
    pub emergency_police: Option<String>,
    pub emergency_medical: Option<String>,
    pub hidden_gem_title: Option<String>,
    pub hidden_gem_desc: Option<String>,
}

impl Kbyg {
    /// Coerces a raw `kbyg` object, dropping wrong-shaped fields.
    ///
    /// `weather` is accepted either as a plain string (becomes
    /// `weather_desc`) or as an object carrying `summary` and `temperature`.
    pub fn coerce(raw: &Map<String, Value>) -> Self {
        let (weather_desc, weather_temp_c) = match raw.get("weather") {
            Some(Value::String(s)) => (Some(s.clone()), None),
            Some(Value::Object(w)) => (str_field(w, "summary"), f64_field(w, "temperature")),
            _ => (None, None),
        };

        Self {
            currency: str_field(raw, "currency"),
            plugs: string_list_field(raw, "plugs"),
            languages: string_list_field(raw, "languages"),
            weather_desc,
            weather_temp_c,
            getting_around: string_list_field(raw, "getting_around"),
            esim: str_field(raw, "esim"),
            primary_city: str_field(raw, "primary_city"),
            tipping: str_field(raw, "tipping"),
            payment: str_field(raw, "payment"),
            photography: str_field(raw, "photography"),
            gestures: str_field(raw, "gestures"),
            dress_code: str_field(raw, "dress_code"),
            cost_coffee: str_field(raw, "cost_coffee"),
            cost_meal: str_field(raw, "cost_meal"),
            cost_beer: str_field(raw, "cost_beer"),
            etiquette_dos: str_field(raw, "etiquette_dos"),
            etiquette_donts: str_field(raw, "etiquette_donts"),
            packing_tips: str_field(raw, "packing_tips"),
            emergency_police: str_field(raw, "emergency_police"),
            emergency_medical: str_field(raw, "emergency_medical"),
            hidden_gem_title: str_field(raw, "hidden_gem_title"),
            hidden_gem_desc: str_field(raw, "hidden_gem_desc"),
        }
    }
}
