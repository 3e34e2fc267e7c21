#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: Option<String>,
    pub log_level: String,
    pub places_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub detail_concurrency: usize,
    pub skip_failed_details: bool,
    pub saved_searches_path: std::path::PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "google_maps_api_key",
                &self.google_maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("places_base_url", &self.places_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("detail_concurrency", &self.detail_concurrency)
            .field("skip_failed_details", &self.skip_failed_details)
            .field("saved_searches_path", &self.saved_searches_path)
            .finish()
    }
}
