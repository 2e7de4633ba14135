//! Geolocation capability
//!
//! A terminal has no browser geolocation API, so the position comes from
//! one of:
//! - [`FixedLocator`]: coordinates given on the command line
//! - [`IpLocator`]: an IP geolocation endpoint
//! - [`NoLocator`]: no capability at all

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::LocationError;
use crate::snapshot::Coordinates;

/// Asynchronous source of the current position
#[async_trait]
pub trait Locator: Send + Sync {
    /// Whether this host can determine a position at all.
    ///
    /// When false the controller reports `Unsupported` without calling
    /// [`locate`](Locator::locate).
    fn is_supported(&self) -> bool {
        true
    }

    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

/// Host without geolocation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocator;

#[async_trait]
impl Locator for NoLocator {
    fn is_supported(&self) -> bool {
        false
    }

    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Always reports the same outcome
#[derive(Debug, Clone)]
pub struct FixedLocator(Result<Coordinates, LocationError>);

impl FixedLocator {
    pub fn at(coords: Coordinates) -> Self {
        Self(Ok(coords))
    }

    pub fn failing(error: LocationError) -> Self {
        Self(Err(error))
    }
}

#[async_trait]
impl Locator for FixedLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        self.0.clone()
    }
}

#[derive(Debug, Deserialize)]
struct IpLocation {
    status: Option<String>,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Locates the host by its public IP (ip-api.com response format)
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: Client,
    url: String,
}

impl IpLocator {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Locator for IpLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::Failed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN || status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LocationError::Denied(status.to_string()));
        }
        if !status.is_success() {
            return Err(LocationError::Failed(format!("status {}", status)));
        }

        let body: IpLocation = response
            .json()
            .await
            .map_err(|e| LocationError::Failed(e.to_string()))?;

        if body.status.as_deref().is_some_and(|s| s != "success") {
            let reason = body.message.unwrap_or_else(|| "lookup failed".into());
            return Err(LocationError::Failed(reason));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                tracing::info!(lat, lon, "Located by IP");
                Ok(Coordinates::new(lat, lon))
            }
            _ => Err(LocationError::Failed("response without coordinates".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_locator_is_unsupported() {
        let locator = NoLocator;
        assert!(!locator.is_supported());
        assert_eq!(locator.locate().await, Err(LocationError::Unsupported));
    }

    #[tokio::test]
    async fn test_fixed_locator() {
        let here = Coordinates::new(30.27, -97.74);
        assert_eq!(FixedLocator::at(here).locate().await, Ok(here));

        let denied = FixedLocator::failing(LocationError::Denied("no".into()));
        assert!(denied.is_supported());
        assert!(matches!(denied.locate().await, Err(LocationError::Denied(_))));
    }
}
