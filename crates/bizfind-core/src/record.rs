use serde::{Deserialize, Serialize};

/// One business listing after detail enrichment, normalization and
/// filtering.
///
/// Every optional field is `None` when the upstream detail response did not
/// carry it. Rendering `None` (e.g. as `N/A`) is left to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBusinessRecord {
    pub place_id: String,
    pub name: Option<String>,
    /// Upstream place types minus the generic ones, joined with `", "`.
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    /// Raw price tier, 0-4.
    pub price_level: Option<u8>,
}
