/// Parameters for one business search.
///
/// Immutable for the duration of a pipeline run. `api_key` is carried with
/// the criteria because the credential is chosen per search by the caller.
#[derive(Clone, PartialEq)]
pub struct SearchCriteria {
    pub business_type: String,
    pub location: String,
    pub radius_meters: u32,
    pub min_rating: f64,
    pub open_now: bool,
    pub max_price_level: u8,
    /// Extra filter term; empty means none.
    pub keyword: String,
    pub api_key: String,
}

impl SearchCriteria {
    /// Lowest accepted search radius, in meters.
    pub const MIN_RADIUS_METERS: u32 = 1_000;
    /// Highest accepted search radius, in meters.
    pub const MAX_RADIUS_METERS: u32 = 50_000;

    /// Builds criteria with the default thresholds and the given query terms.
    #[must_use]
    pub fn new(business_type: &str, location: &str, api_key: &str) -> Self {
        Self {
            business_type: business_type.to_owned(),
            location: location.to_owned(),
            api_key: api_key.to_owned(),
            ..Self::default()
        }
    }

    /// The free-text query sent to the text-search endpoint:
    /// `"<business type> in <location>"`.
    #[must_use]
    pub fn query_text(&self) -> String {
        format!("{} in {}", self.business_type, self.location)
    }

    /// The keyword parameter, if one should be sent. Sent as typed; only a
    /// blank keyword is dropped.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        (!self.keyword.trim().is_empty()).then_some(self.keyword.as_str())
    }

    /// `true` when the credential is present and not blank.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            business_type: "restaurant".to_owned(),
            location: "New York".to_owned(),
            radius_meters: 5_000,
            min_rating: 4.0,
            open_now: false,
            max_price_level: 3,
            keyword: String::new(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for SearchCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCriteria")
            .field("business_type", &self.business_type)
            .field("location", &self.location)
            .field("radius_meters", &self.radius_meters)
            .field("min_rating", &self.min_rating)
            .field("open_now", &self.open_now)
            .field("max_price_level", &self.max_price_level)
            .field("keyword", &self.keyword)
            .field("api_key", &"[redacted]")
            .finish()
    }
}
