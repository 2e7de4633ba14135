//! Effects the dashboard reducer can request
//!
//! The reducer never spawns work itself. It returns a
//! [`DispatchResult`](tui_dispatch::DispatchResult) naming the side effects
//! it wants, and the controller turns those into keyed tasks.

use crate::snapshot::Coordinates;
use crate::state::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the locator for the current position
    Locate { request: RequestId },
    /// Reverse geocode coordinates and load weather for the named place
    ResolvePlace {
        request: RequestId,
        coords: Coordinates,
    },
    /// Start (or restart) the search debounce timer
    ScheduleSearch { query: String },
    /// Drop any pending search debounce timer
    CancelSearch,
    /// Load weather for a city after the simulated latency
    FetchCity { request: RequestId, city: String },
}
