//! Rating and price predicates applied after normalization.
//!
//! Absent values never error. An unrated record always fails the rating
//! check; a record without a price level always passes the price check.

use bizfind_core::{NormalizedBusinessRecord, SearchCriteria};

/// `true` if the record has a rating of at least `min_rating`.
#[must_use]
pub fn meets_min_rating(record: &NormalizedBusinessRecord, min_rating: f64) -> bool {
    match record.rating {
        Some(rating) => rating >= min_rating,
        None => false,
    }
}

/// `true` if the record has no price level or one at most `max_price_level`.
#[must_use]
pub fn within_max_price(record: &NormalizedBusinessRecord, max_price_level: u8) -> bool {
    match record.price_level {
        Some(level) => level <= max_price_level,
        None => true,
    }
}

/// Both predicates against the criteria thresholds.
#[must_use]
pub fn passes(record: &NormalizedBusinessRecord, criteria: &SearchCriteria) -> bool {
    meets_min_rating(record, criteria.min_rating)
        && within_max_price(record, criteria.max_price_level)
}

/// Keeps the records that pass both predicates, preserving order.
#[must_use]
pub fn apply(
    records: Vec<NormalizedBusinessRecord>,
    criteria: &SearchCriteria,
) -> Vec<NormalizedBusinessRecord> {
    records
        .into_iter()
        .filter(|record| passes(record, criteria))
        .collect()
}
