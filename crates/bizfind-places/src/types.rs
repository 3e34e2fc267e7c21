//! Places Web Service response types.
//!
//! Both endpoints wrap their payload in a `{"status": "OK", ...}` envelope
//! with an optional `error_message`. The text search carries a `results`
//! list, the detail endpoint a single `result` object.

use serde::Deserialize;

/// Field selector sent to the detail endpoint. Limits billing to the
/// fields [`PlaceDetail`] reads.
pub const DETAIL_FIELDS: &str =
    "name,formatted_address,rating,user_ratings_total,types,website,formatted_phone_number,price_level";

// ---------------------------------------------------------------------------
// textsearch
// ---------------------------------------------------------------------------

/// Envelope for `textsearch/json`.
///
/// `results` is kept as raw JSON so a single odd entry can be skipped
/// without failing the whole search.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One coarse hit from the text search. Only `place_id` drives the
/// pipeline; `name` is kept for log context.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Envelope for `details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetail>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Full attributes of a single place. Every field may be missing upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    /// Upstream taxonomy, e.g. `["cafe", "food", "point_of_interest"]`.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    /// 0 (free) to 4 (very expensive).
    #[serde(default)]
    pub price_level: Option<u8>,
}
