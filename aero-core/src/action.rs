//! Dashboard actions
//!
//! Naming convention:
//! - prefix names the area: `Locate*`, `Search*`, `Weather*`, `Ui*`
//! - `Did` marks the result of async work (sent back by a task)

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::error::LocationError;
use crate::snapshot::{Coordinates, WeatherSnapshot};
use crate::state::RequestId;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Geolocation =====
    /// Intent: (re)run geolocation
    LocateStart,

    /// Result: the locator produced a position
    #[action(category = "locate")]
    LocateDidResolve {
        request: RequestId,
        coords: Coordinates,
    },

    /// Result: no position available
    #[action(category = "locate")]
    LocateDidFail {
        request: RequestId,
        error: LocationError,
    },

    // ===== Search =====
    /// The search box text changed
    #[action(category = "search")]
    SearchInput(String),

    /// Explicit clear: empty the box and show the default city
    SearchClear,

    SearchFocus,
    SearchBlur,

    /// Result: the debounce timer elapsed for this query
    #[action(category = "search")]
    SearchDidSettle(String),

    // ===== Weather =====
    /// Result: a snapshot is ready
    #[action(category = "weather")]
    WeatherDidLoad {
        request: RequestId,
        snapshot: Arc<WeatherSnapshot>,
        fetched_at: DateTime<Local>,
    },

    // ===== UI =====
    #[action(category = "ui")]
    UiTerminalResize(u16, u16),

    // ===== Global =====
    /// Animation tick
    Tick,

    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::Action as _;

    #[test]
    fn test_names() {
        assert_eq!(Action::LocateStart.name(), "LocateStart");
        assert_eq!(Action::SearchInput("x".into()).name(), "SearchInput");
        assert_eq!(Action::Tick.name(), "Tick");
    }

    #[test]
    fn test_inferred_categories() {
        let failed = Action::LocateDidFail {
            request: RequestId::new(1),
            error: LocationError::Unsupported,
        };
        assert_eq!(failed.category(), Some("locate"));
        assert_eq!(Action::LocateStart.category(), Some("locate"));
        assert_eq!(Action::SearchDidSettle("Oslo".into()).category(), Some("search"));
        assert!(Action::UiTerminalResize(80, 24).is_ui());
        assert_eq!(Action::Tick.category(), None);
    }
}
