//! Error types for the location and geocoding collaborators
//!
//! None of these are fatal. Location errors become the banner message and
//! a fallback to the default city; geocode errors fall back to a generic
//! place name and are only logged.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the host has no way to determine a position
pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser";

/// Shown when a position lookup was refused or failed
pub const DENIED_MESSAGE: &str = "Permission denied. Showing default location.";

/// Why the current position could not be determined
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("geolocation is not available on this host")]
    Unsupported,

    #[error("geolocation permission denied: {0}")]
    Denied(String),

    #[error("geolocation failed: {0}")]
    Failed(String),
}

impl LocationError {
    /// Message for the inline banner
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::Unsupported => UNSUPPORTED_MESSAGE,
            LocationError::Denied(_) | LocationError::Failed(_) => DENIED_MESSAGE,
        }
    }
}

/// Reverse geocoding failure
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("reverse geocode request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("reverse geocode returned status {0}")]
    Status(StatusCode),

    #[error("malformed reverse geocode response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(LocationError::Unsupported.user_message(), UNSUPPORTED_MESSAGE);
        assert_eq!(
            LocationError::Denied("user refused".into()).user_message(),
            DENIED_MESSAGE
        );
        assert_eq!(
            LocationError::Failed("timeout".into()).user_message(),
            DENIED_MESSAGE
        );
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = LocationError::Failed("timed out".into());
        assert_eq!(err.to_string(), "geolocation failed: timed out");
    }
}
