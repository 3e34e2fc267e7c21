//! Two-stage business search: text search, per-hit detail fetch,
//! normalization, then rating/price filtering.

use bizfind_core::{AppConfig, NormalizedBusinessRecord, SearchCriteria};
use futures::stream::{self, StreamExt};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::filter;
use crate::normalize::normalize_detail;
use crate::types::PlaceSummary;

/// What to do when a single detail fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailFailurePolicy {
    /// Abort the whole search and return the error.
    #[default]
    Abort,
    /// Log the failure and leave that place out of the results.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Maximum detail requests in flight. `1` fetches strictly one after
    /// another; `0` is treated as `1`.
    pub detail_concurrency: usize,
    pub detail_failure: DetailFailurePolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            detail_concurrency: 1,
            detail_failure: DetailFailurePolicy::Abort,
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            detail_concurrency: config.detail_concurrency.max(1),
            detail_failure: if config.skip_failed_details {
                DetailFailurePolicy::Skip
            } else {
                DetailFailurePolicy::Abort
            },
        }
    }
}

/// Stateless search pipeline. Each [`SearchPipeline::execute`] call is
/// independent; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    client: PlacesClient,
    options: PipelineOptions,
}

impl SearchPipeline {
    #[must_use]
    pub fn new(client: PlacesClient, options: PipelineOptions) -> Self {
        Self { client, options }
    }

    /// Builds the client and options from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the HTTP client cannot be built, or
    /// [`PlacesError::InvalidBaseUrl`] for an unusable base URL.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let client = PlacesClient::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.places_base_url,
        )?;
        Ok(Self::new(client, PipelineOptions::from_app_config(config)))
    }

    #[must_use]
    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    /// Runs the search and returns the matching businesses in text-search
    /// order.
    ///
    /// Every returned record has a rating of at least
    /// `criteria.min_rating` and either no price level or one at most
    /// `criteria.max_price_level`. An empty vector is a successful search
    /// with no matches.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::InvalidCredential`] if `criteria.api_key` is blank;
    ///   no request is sent.
    /// - Any remote error from the text search.
    /// - Any remote error from a detail fetch, unless the options select
    ///   [`DetailFailurePolicy::Skip`].
    ///
    /// No partial result set is returned on error.
    pub async fn execute(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<NormalizedBusinessRecord>, PlacesError> {
        if !criteria.has_credential() {
            return Err(PlacesError::InvalidCredential);
        }

        let hits = self.client.text_search(criteria).await?;
        let fetched = self.fetch_details(&criteria.api_key, &hits).await?;
        let fetched_count = fetched.len();
        let kept = filter::apply(fetched, criteria);

        tracing::info!(
            query = %criteria.query_text(),
            hits = hits.len(),
            fetched = fetched_count,
            kept = kept.len(),
            "business search complete"
        );
        Ok(kept)
    }

    /// Fetches and normalizes the detail record for every hit.
    ///
    /// Requests run through a bounded buffer; each one is tagged with its
    /// position in `hits` and the output is re-sorted on that tag, so
    /// completion order never leaks into the result.
    async fn fetch_details(
        &self,
        api_key: &str,
        hits: &[PlaceSummary],
    ) -> Result<Vec<NormalizedBusinessRecord>, PlacesError> {
        let client = &self.client;
        let concurrency = self.options.detail_concurrency.max(1);

        let mut pending = std::pin::pin!(stream::iter(hits.iter().enumerate())
            .map(move |(index, hit)| async move {
                let result = client
                    .place_details(api_key, &hit.place_id)
                    .await
                    .map(|detail| normalize_detail(&hit.place_id, detail));
                (index, result)
            })
            .buffer_unordered(concurrency));

        let mut tagged = Vec::with_capacity(hits.len());
        while let Some((index, result)) = pending.next().await {
            match result {
                Ok(record) => tagged.push((index, record)),
                Err(err) => match self.options.detail_failure {
                    DetailFailurePolicy::Abort => return Err(err),
                    DetailFailurePolicy::Skip => {
                        let hit = &hits[index];
                        tracing::warn!(
                            place_id = %hit.place_id,
                            name = hit.name.as_deref().unwrap_or("unknown"),
                            error = %err,
                            "skipping place after failed detail fetch"
                        );
                    }
                },
            }
        }

        tagged.sort_unstable_by_key(|(index, _)| *index);
        Ok(tagged.into_iter().map(|(_, record)| record).collect())
    }
}
