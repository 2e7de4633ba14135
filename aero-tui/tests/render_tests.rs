use std::sync::Arc;

use aero_core::error::DENIED_MESSAGE;
use aero_core::{Alert, DashboardState, SyntheticSource, WeatherSource};
use aero_tui::components::{Component, DashboardView, DashboardViewProps};
use tui_dispatch::testing::RenderHarness;
use chrono::{DateTime, Local, TimeZone};

fn two_pm() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 6, 1, 14, 0, 0).unwrap()
}

fn loaded(city: &str) -> DashboardState {
    let mut state = DashboardState::default();
    state.display.weather = Some(Arc::new(SyntheticSource.snapshot(city)));
    state.display.loading = false;
    state.display.last_updated = Some(two_pm());
    // Well past the count-up
    state.tick_count = 100;
    state
}

fn render(state: &DashboardState, width: u16, height: u16) -> String {
    let mut view = DashboardView::new();
    let mut harness = RenderHarness::new(width, height);
    harness.render_to_string_plain(|frame| {
        let area = frame.area();
        view.render(
            frame,
            area,
            DashboardViewProps {
                state,
                now: two_pm(),
            },
        );
    })
}

#[test]
fn test_skeleton_before_first_snapshot() {
    let output = render(&DashboardState::default(), 120, 40);

    assert!(output.contains("AERO"));
    assert!(output.contains("Locating…"));
    assert!(output.contains("Fetching weather"));
    assert!(output.contains("Search worldwide city..."));
    assert!(!output.contains("°C"));
}

#[test]
fn test_loaded_dashboard() {
    let output = render(&loaded("Austin"), 120, 40);

    // Hero
    assert!(output.contains("Austin, US"));
    assert!(output.contains("18°C"));
    assert!(output.contains("Cloudy"));
    // Metrics
    assert!(output.contains("FEELS LIKE"));
    assert!(output.contains("MODERATE"));
    assert!(output.contains("68%"));
    assert!(output.contains("13 km"));
    assert!(output.contains("1018 hPa"));
    // Wind, sun, map
    assert!(output.contains("18 km/h"));
    assert!(output.contains("06:45 AM"));
    assert!(output.contains("4h 12m left"));
    assert!(output.contains("LOCAL RADAR"));
    assert!(output.contains("LIVE MONITORING"));
    // Forecast: Mon is temp + 1 with a low five below
    assert!(output.contains("7-DAY FORECAST"));
    assert!(output.contains("19° / 14°"));
    assert!(output.contains("Sun"));
    // Header
    assert!(output.contains("UPDATED 14:00"));
    assert!(output.contains("ALERT ○"));
    assert!(!output.contains("REFRESHING"));
}

#[test]
fn test_alert_card_shown_only_with_alerts() {
    let quiet = render(&loaded("Austin"), 120, 40);
    assert!(!quiet.contains("Active Now"));

    let mut state = loaded("Austin");
    let mut snapshot = SyntheticSource.snapshot("Austin");
    snapshot.alerts.push(Alert {
        kind: "Heat Warning".into(),
        message: "Stay hydrated.".into(),
    });
    state.display.weather = Some(Arc::new(snapshot));

    let output = render(&state, 120, 40);
    assert!(output.contains("HEAT WARNING"));
    assert!(output.contains("Active Now"));
    assert!(output.contains("Stay hydrated."));
    assert!(output.contains("ALERT ●"));
}

#[test]
fn test_location_banner() {
    let mut state = loaded("San Francisco");
    state.display.location_error = Some(DENIED_MESSAGE.into());

    let output = render(&state, 120, 40);
    assert!(output.contains("Permission denied. Showing default location."));
    assert!(output.contains("San Francisco"));
}

#[test]
fn test_refreshing_keeps_stale_data() {
    let mut state = loaded("Austin");
    state.display.loading = true;
    state.search.text = "Rome".into();

    let output = render(&state, 120, 40);
    assert!(output.contains("REFRESHING"));
    assert!(output.contains("Austin, US"));
    assert!(!output.contains("UPDATED"));
    assert!(output.contains("Rome"));
}

#[test]
fn test_help_bar_follows_focus() {
    let mut state = loaded("Austin");
    let output = render(&state, 120, 40);
    assert!(output.contains("locate"));
    assert!(output.contains("quit"));

    state.search.focused = true;
    state.search.text = "Par".into();
    let output = render(&state, 120, 40);
    assert!(output.contains("ctrl+u"));
    assert!(output.contains("Par"));
    assert!(output.contains("CLEAR"));
}

#[test]
fn test_terminal_too_small() {
    let output = render(&loaded("Austin"), 40, 10);
    assert!(output.contains("Terminal too small"));
    assert!(!output.contains("Austin"));
}

#[test]
fn test_count_up_starts_from_zero() {
    let mut state = loaded("Austin");
    state.revealed_at = state.tick_count;

    let output = render(&state, 120, 40);
    assert!(output.contains(" 0°C"));
    assert!(!output.contains("18°C"));
}
