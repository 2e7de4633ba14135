//! Reducer: (state, action) -> effects
//!
//! All state transitions happen here. Async work is only requested, as
//! [`Effect`]s, and its results come back as `*Did*` actions tagged with
//! the [`RequestId`](crate::state::RequestId) they answer. Results for a
//! request that is no longer the latest are dropped, so the most recently
//! initiated fetch always wins.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::DashboardState;

/// While idle, re-render about once a second so clock-driven cards move
const CLOCK_REFRESH_TICKS: u32 = 20;

pub fn reducer(state: &mut DashboardState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Geolocation =====
        Action::LocateStart => {
            let request = state.begin_request();
            state.display.loading = true;
            DispatchResult::changed_with(Effect::Locate { request })
        }

        Action::LocateDidResolve { request, coords } => {
            let cleared = state.display.location_error.take().is_some();
            if !state.is_current(request) {
                tracing::debug!(%request, "Position arrived after a newer request");
                return DispatchResult {
                    changed: cleared,
                    effects: vec![],
                };
            }
            DispatchResult {
                changed: cleared,
                effects: vec![Effect::ResolvePlace { request, coords }],
            }
        }

        Action::LocateDidFail { request, error } => {
            tracing::info!(%request, %error, "Geolocation unavailable");
            state.display.location_error = Some(error.user_message().to_string());
            if !state.is_current(request) {
                // A search already took over; keep its result
                return DispatchResult::changed();
            }
            let city = state.default_city.clone();
            begin_fetch(state, city)
        }

        // ===== Search =====
        Action::SearchInput(text) => {
            state.search.text = text;
            let effect = match state.search.dispatchable(state.min_query_chars) {
                Some(query) => Effect::ScheduleSearch {
                    query: query.to_string(),
                },
                None => Effect::CancelSearch,
            };
            DispatchResult::changed_with(effect)
        }

        Action::SearchClear => {
            state.search.text.clear();
            let city = state.default_city.clone();
            let mut result = begin_fetch(state, city);
            result.effects.insert(0, Effect::CancelSearch);
            result
        }

        Action::SearchFocus => set_focus(state, true),
        Action::SearchBlur => set_focus(state, false),

        Action::SearchDidSettle(query) => {
            // The box may have changed after the timer fired but before we got here
            if state.search.dispatchable(state.min_query_chars) != Some(query.as_str()) {
                tracing::debug!(%query, "Ignoring settled query that no longer matches");
                return DispatchResult::unchanged();
            }
            begin_fetch(state, query)
        }

        // ===== Weather =====
        Action::WeatherDidLoad {
            request,
            snapshot,
            fetched_at,
        } => {
            if !state.is_current(request) {
                tracing::debug!(%request, city = %snapshot.city, "Discarding stale snapshot");
                return DispatchResult::unchanged();
            }
            state.display.weather = Some(snapshot);
            state.display.loading = false;
            state.display.last_updated = Some(fetched_at);
            state.revealed_at = state.tick_count;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            DispatchResult {
                changed: state.display.loading
                    || state.is_animating()
                    || state.tick_count % CLOCK_REFRESH_TICKS == 0,
                effects: vec![],
            }
        }

        // Handled by the runtime
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start an authoritative by-name fetch
fn begin_fetch(state: &mut DashboardState, city: String) -> DispatchResult<Effect> {
    let request = state.begin_request();
    state.display.loading = true;
    tracing::debug!(%request, %city, "Fetch dispatched");
    DispatchResult::changed_with(Effect::FetchCity { request, city })
}

fn set_focus(state: &mut DashboardState, focused: bool) -> DispatchResult<Effect> {
    if state.search.focused == focused {
        return DispatchResult::unchanged();
    }
    state.search.focused = focused;
    DispatchResult::changed()
}
