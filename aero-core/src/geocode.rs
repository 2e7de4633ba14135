//! Reverse geocoding: coordinates to a human-readable place name.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::FALLBACK_PLACE;
use crate::error::GeocodeError;
use crate::snapshot::Coordinates;

/// Address parts the dashboard cares about. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub suburb: Option<String>,
}

impl Address {
    /// First non-empty of city, town, village, suburb; otherwise `Local Area`
    pub fn place_name(&self) -> &str {
        [&self.city, &self.town, &self.village, &self.suburb]
            .into_iter()
            .flatten()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or(FALLBACK_PLACE)
    }
}

/// Converts coordinates into an address
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coords: Coordinates) -> Result<Address, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<Address>,
    error: Option<String>,
}

/// Nominatim `/reverse` client
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// `base_url` without the `/reverse` path, e.g. `https://nominatim.openstreetmap.org`.
    /// The client should carry a user agent; Nominatim rejects anonymous requests.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, coords: Coordinates) -> Result<Address, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coords.lat.to_string()),
                ("lon", coords.lon.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let body: NominatimResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Malformed(e.to_string()))?;

        match (body.address, body.error) {
            (Some(address), _) => {
                tracing::info!(place = %address.place_name(), "Reverse geocoded");
                Ok(address)
            }
            (None, Some(error)) => Err(GeocodeError::Malformed(error)),
            (None, None) => Err(GeocodeError::Malformed("missing address".into())),
        }
    }
}
