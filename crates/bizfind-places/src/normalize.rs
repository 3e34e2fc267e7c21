//! Normalization of Places detail payloads into [`NormalizedBusinessRecord`]s.

use bizfind_core::NormalizedBusinessRecord;

use crate::types::PlaceDetail;

/// Place types too generic to describe a business; dropped from categories.
pub const GENERIC_PLACE_TYPES: [&str; 3] = ["point_of_interest", "establishment", "store"];

/// Joins the informative place types with `", "`.
///
/// Returns `None` when nothing is left after dropping
/// [`GENERIC_PLACE_TYPES`].
#[must_use]
pub fn category_label(types: &[String]) -> Option<String> {
    let kept: Vec<&str> = types
        .iter()
        .map(String::as_str)
        .filter(|t| !GENERIC_PLACE_TYPES.contains(t))
        .collect();
    (!kept.is_empty()).then(|| kept.join(", "))
}

/// Converts a detail payload into a record. Consumes the detail so strings
/// move instead of being cloned.
#[must_use]
pub fn normalize_detail(place_id: &str, detail: PlaceDetail) -> NormalizedBusinessRecord {
    NormalizedBusinessRecord {
        place_id: place_id.to_owned(),
        category: category_label(&detail.types),
        name: detail.name,
        rating: detail.rating,
        rating_count: detail.user_ratings_total,
        address: detail.formatted_address,
        website: detail.website,
        phone: detail.formatted_phone_number,
        price_level: detail.price_level,
    }
}
