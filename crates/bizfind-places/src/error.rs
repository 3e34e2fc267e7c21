use thiserror::Error;

/// Errors returned by the Places client and the search pipeline.
///
/// Messages never contain the API key: transport errors are stored with
/// their URL stripped, and status errors name the endpoint, not the URL.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The caller supplied no usable API key. No request was sent.
    #[error("missing or empty Google Maps API key")]
    InvalidCredential,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The JSON envelope carried a `status` other than `OK`/`ZERO_RESULTS`.
    #[error("Places API error from {endpoint}: {status}{}", detail_suffix(.message.as_deref()))]
    Api {
        endpoint: String,
        status: String,
        message: Option<String>,
    },

    /// The response parsed as JSON but lacked the expected envelope.
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn detail_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}

impl PlacesError {
    /// `true` for failures that came from talking to the upstream API,
    /// including responses that could not be understood.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            PlacesError::Http(_)
                | PlacesError::UnexpectedStatus { .. }
                | PlacesError::Api { .. }
                | PlacesError::MalformedResponse { .. }
                | PlacesError::Deserialize { .. }
        )
    }
}
