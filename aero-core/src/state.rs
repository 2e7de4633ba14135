//! Dashboard state - single source of truth
//!
//! Only the reducer mutates this. The view layer reads it, and the search
//! text is the one value it feeds back (through `SearchInput` actions).

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::animate::{AnimatedReadings, COUNT_UP_TICKS};
use crate::config::DashboardConfig;
use crate::snapshot::WeatherSnapshot;

/// Identifies one fetch or geolocation attempt.
///
/// Ids increase monotonically; only results carrying the latest issued id
/// may touch the display state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse display lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet
    Initial,
    /// Showing a snapshot, nothing in flight
    Loaded,
    /// Showing the previous snapshot while a new one loads
    Refreshing,
}

/// What the view layer presents
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub loading: bool,
    /// Kept while `loading` so stale data stays visible
    pub weather: Option<Arc<WeatherSnapshot>>,
    /// Persistent banner; only a successful geolocation clears it
    pub location_error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            loading: true,
            weather: None,
            location_error: None,
            last_updated: None,
        }
    }
}

impl DisplayState {
    pub fn phase(&self) -> Phase {
        match (&self.weather, self.loading) {
            (None, _) => Phase::Initial,
            (Some(_), false) => Phase::Loaded,
            (Some(_), true) => Phase::Refreshing,
        }
    }
}

/// Raw search box contents
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    /// Whether keystrokes edit the query
    pub focused: bool,
}

impl SearchQuery {
    /// The trimmed query if it is long enough to dispatch
    pub fn dispatchable(&self, min_chars: usize) -> Option<&str> {
        let trimmed = self.text.trim();
        (trimmed.chars().count() >= min_chars).then_some(trimmed)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub display: DisplayState,
    pub search: SearchQuery,

    /// Most recently issued request (the authoritative one)
    pub latest_request: RequestId,

    pub default_city: String,
    pub min_query_chars: usize,

    /// Animation frame counter
    pub tick_count: u32,
    /// Tick at which the current snapshot arrived
    pub revealed_at: u32,

    pub terminal_size: (u16, u16),
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            display: DisplayState::default(),
            search: SearchQuery::default(),
            latest_request: RequestId::default(),
            default_city: config.default_city.clone(),
            min_query_chars: config.min_query_chars,
            tick_count: 0,
            revealed_at: 0,
            terminal_size: (80, 24),
        }
    }

    /// Issue a new request id, superseding every earlier one
    pub fn begin_request(&mut self) -> RequestId {
        self.latest_request = self.latest_request.next();
        self.latest_request
    }

    /// Whether `request` is still the authoritative one
    pub fn is_current(&self, request: RequestId) -> bool {
        request == self.latest_request
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.display.weather.as_deref()
    }

    /// Ticks since the current snapshot arrived
    pub fn ticks_since_reveal(&self) -> u32 {
        self.tick_count.wrapping_sub(self.revealed_at)
    }

    pub fn is_animating(&self) -> bool {
        self.display.weather.is_some() && self.ticks_since_reveal() < COUNT_UP_TICKS
    }

    /// Count-up values for the current snapshot
    pub fn readings(&self) -> Option<AnimatedReadings> {
        self.weather()
            .map(|weather| AnimatedReadings::project(weather, self.ticks_since_reveal()))
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
