//! HTTP client for the Places Web Service JSON endpoints.
//!
//! Wraps `reqwest` with envelope/status checking and typed response
//! deserialization. The API key is passed per call and only ever appears in
//! the request URL; it is stripped from transport errors before they leave
//! this module.

use std::time::Duration;

use bizfind_core::SearchCriteria;
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{
    DetailsResponse, PlaceDetail, PlaceSummary, TextSearchResponse, DETAIL_FIELDS,
};

pub(crate) const TEXT_SEARCH_ENDPOINT: &str = "textsearch";
pub(crate) const DETAILS_ENDPOINT: &str = "details";

/// Client for the Places text-search and detail endpoints.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    text_search_url: Url,
    details_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(
            timeout_secs,
            user_agent,
            bizfind_core::config::DEFAULT_PLACES_BASE_URL,
        )
    }

    /// Creates a new client with a custom base URL.
    ///
    /// The endpoints are resolved as `<base>/textsearch/json` and
    /// `<base>/details/json`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, otherwise `join` replaces the last
        // path segment instead of appending to it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let text_search_url = base
            .join(&format!("{TEXT_SEARCH_ENDPOINT}/json"))
            .map_err(|e| invalid(e.to_string()))?;
        let details_url = base
            .join(&format!("{DETAILS_ENDPOINT}/json"))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            text_search_url,
            details_url,
        })
    }

    /// Runs one text search for the given criteria and returns the hits in
    /// upstream order.
    ///
    /// Only the first results page is read. Entries without a usable
    /// `place_id` are skipped with a warning. `ZERO_RESULTS` yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`PlacesError::Api`] if the envelope status reports an error.
    /// - [`PlacesError::MalformedResponse`] if `results` is missing.
    /// - [`PlacesError::Deserialize`] if the body is not the expected JSON.
    pub async fn text_search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<PlaceSummary>, PlacesError> {
        let params = text_search_params(criteria);
        let borrowed: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let url = build_url(&self.text_search_url, &borrowed);

        tracing::debug!(
            query = %criteria.query_text(),
            radius = criteria.radius_meters,
            open_now = criteria.open_now,
            "places text search"
        );
        let body = self.request_json(TEXT_SEARCH_ENDPOINT, url).await?;
        let envelope: TextSearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("{TEXT_SEARCH_ENDPOINT}(query={})", criteria.query_text()),
                source: e,
            })?;

        let status = check_status(
            TEXT_SEARCH_ENDPOINT,
            envelope.status.as_deref(),
            envelope.error_message,
        )?;

        let Some(raw) = envelope.results else {
            if status == Some("ZERO_RESULTS") {
                return Ok(Vec::new());
            }
            return Err(PlacesError::MalformedResponse {
                endpoint: TEXT_SEARCH_ENDPOINT.to_owned(),
                reason: "missing `results` list".to_owned(),
            });
        };

        let summaries = raw
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, value)| match serde_json::from_value::<PlaceSummary>(value) {
                    Ok(summary) => Some(summary),
                    Err(e) => {
                        tracing::warn!(index, error = %e, "skipping text search hit without place_id");
                        None
                    }
                },
            )
            .collect();

        Ok(summaries)
    }

    /// Fetches the detail record for one place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`PlacesError::Api`] if the envelope status reports an error.
    /// - [`PlacesError::MalformedResponse`] if `result` is missing.
    /// - [`PlacesError::Deserialize`] if the body is not the expected JSON.
    pub async fn place_details(
        &self,
        api_key: &str,
        place_id: &str,
    ) -> Result<PlaceDetail, PlacesError> {
        let url = build_url(
            &self.details_url,
            &[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("key", api_key),
            ],
        );

        tracing::debug!(place_id, "places detail fetch");
        let body = self.request_json(DETAILS_ENDPOINT, url).await?;
        let envelope: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("{DETAILS_ENDPOINT}(place_id={place_id})"),
                source: e,
            })?;

        check_status(
            DETAILS_ENDPOINT,
            envelope.status.as_deref(),
            envelope.error_message,
        )?;

        envelope
            .result
            .ok_or_else(|| PlacesError::MalformedResponse {
                endpoint: DETAILS_ENDPOINT.to_owned(),
                reason: format!("missing `result` object for place {place_id}"),
            })
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(
        &self,
        endpoint: &str,
        url: Url,
    ) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PlacesError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::Http(e.without_url()))?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }
}

/// Query parameters for the text search, in the order they are sent.
///
/// `opennow` is always sent as the literal `"true"`/`"false"`; `keyword` is
/// only sent when the criteria carry a non-blank keyword.
pub(crate) fn text_search_params(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("query", criteria.query_text()),
        ("radius", criteria.radius_meters.to_string()),
        ("key", criteria.api_key.clone()),
        ("opennow", criteria.open_now.to_string()),
    ];
    if let Some(keyword) = criteria.keyword() {
        params.push(("keyword", keyword.to_owned()));
    }
    params
}

/// Appends percent-encoded query parameters to an endpoint URL.
fn build_url(endpoint: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in params {
            pairs.append_pair(k, v);
        }
    }
    url
}

/// Checks the envelope `status` field. A missing status is accepted and left
/// to the envelope checks that follow.
fn check_status<'a>(
    endpoint: &str,
    status: Option<&'a str>,
    error_message: Option<String>,
) -> Result<Option<&'a str>, PlacesError> {
    match status {
        None | Some("OK" | "ZERO_RESULTS") => Ok(status),
        Some(other) => Err(PlacesError::Api {
            endpoint: endpoint.to_owned(),
            status: other.to_owned(),
            message: error_message,
        }),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
