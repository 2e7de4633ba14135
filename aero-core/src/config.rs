//! Dashboard configuration
//!
//! All timing and fallback knobs live here. The binary fills this from its
//! command line; tests shorten or keep the defaults.

use std::time::Duration;

pub const DEFAULT_CITY: &str = "San Francisco";
/// Place name used when reverse geocoding yields nothing usable
pub const FALLBACK_PLACE: &str = "Local Area";
pub const SEARCH_DEBOUNCE_MS: u64 = 800;
pub const FETCH_LATENCY_MS: u64 = 1000;
/// Queries must be longer than two characters after trimming
pub const MIN_QUERY_CHARS: usize = 3;
pub const TICK_MS: u64 = 50;
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const IP_LOCATOR_URL: &str = "http://ip-api.com/json";
pub const USER_AGENT: &str = concat!("aero-dashboard/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the dashboard controller
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// City shown when geolocation is unavailable or the search is cleared
    pub default_city: String,
    /// Quiet period before a typed query is dispatched
    pub search_debounce: Duration,
    /// Simulated network latency of a by-name fetch
    pub fetch_latency: Duration,
    /// Minimum trimmed query length (in characters) that triggers a fetch
    pub min_query_chars: usize,
    /// Animation and spinner tick
    pub tick: Duration,
    /// Base URL of the Nominatim-compatible reverse geocoder
    pub geocoder_url: String,
    /// Endpoint of the IP geolocation service
    pub ip_locator_url: String,
    pub user_agent: String,
    pub http_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.into(),
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            fetch_latency: Duration::from_millis(FETCH_LATENCY_MS),
            min_query_chars: MIN_QUERY_CHARS,
            tick: Duration::from_millis(TICK_MS),
            geocoder_url: NOMINATIM_URL.into(),
            ip_locator_url: IP_LOCATOR_URL.into(),
            user_agent: USER_AGENT.into(),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    /// Build the HTTP client shared by the network collaborators
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.http_timeout)
            .user_agent(self.user_agent.clone())
            .build()
    }
}
