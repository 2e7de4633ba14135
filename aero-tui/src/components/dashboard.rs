//! Root view: lays out every card and routes keys
//!
//! Keys go to the search box while it is focused. Otherwise single letters
//! are commands (`/` search, `l` locate, `c` clear, `q` quit).

use aero_core::{Action, AnimatedReadings, DashboardState, Phase, WeatherSnapshot};
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;

use super::alerts::{AlertCard, AlertCardProps};
use super::banner::{Banner, BannerProps};
use super::card::{spinner, AMBER};
use super::forecast::{ForecastList, ForecastListProps};
use super::header::{Header, HeaderProps};
use super::help_bar::{HelpBar, HelpBarProps};
use super::hero::{HeroCard, HeroCardProps};
use super::metrics::{MetricGrid, MetricGridProps};
use super::radar_map::{RadarMap, RadarMapProps};
use super::search_box::{SearchBox, SearchBoxProps};
use super::skeleton::{Skeleton, SkeletonProps};
use super::sun_cycle::{SunCycle, SunCycleProps};
use super::wind_gauge::{WindGauge, WindGaugeProps};
use super::Component;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

const BADGE_WIDTH: u16 = 16;

#[derive(Default)]
pub struct DashboardView {
    search: SearchBox,
}

pub struct DashboardViewProps<'a> {
    pub state: &'a DashboardState,
    /// Wall clock for the sun cycle
    pub now: DateTime<Local>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_body(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        weather: &WeatherSnapshot,
        readings: AnimatedReadings,
        props: &DashboardViewProps<'_>,
    ) {
        let [top, middle, bottom] = Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Min(9),
        ])
        .areas(area);

        let [hero, metrics] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(top);
        HeroCard.render(
            frame,
            hero,
            HeroCardProps {
                weather,
                temperature: readings.temperature,
            },
        );
        MetricGrid.render(frame, metrics, MetricGridProps { weather, readings });

        let [map, wind, sun] = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .areas(middle);
        RadarMap.render(
            frame,
            map,
            RadarMapProps {
                coords: weather.coords,
                tick: props.state.tick_count,
            },
        );
        WindGauge.render(
            frame,
            wind,
            WindGaugeProps {
                speed: readings.wind_speed,
                direction: weather.wind_direction,
            },
        );
        SunCycle.render(
            frame,
            sun,
            SunCycleProps {
                sunrise: &weather.sunrise,
                sunset: &weather.sunset,
                now: props.now.time(),
            },
        );

        if weather.alerts.is_empty() {
            ForecastList.render(frame, bottom, ForecastListProps { days: &weather.forecast });
        } else {
            let [forecast, alerts] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(bottom);
            ForecastList.render(frame, forecast, ForecastListProps { days: &weather.forecast });
            AlertCard.render(frame, alerts, AlertCardProps { alerts: &weather.alerts });
        }
    }

    fn render_refreshing(frame: &mut Frame, area: Rect, tick: u32) {
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));

        let badge = Rect {
            x: area.right().saturating_sub(BADGE_WIDTH + 1),
            y: area.y,
            width: BADGE_WIDTH.min(area.width),
            height: 1.min(area.height),
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", spinner(tick)),
                Style::default().fg(Color::Black).bg(AMBER),
            ),
            Span::styled("REFRESHING ", Style::default().fg(Color::Black).bg(AMBER).bold()),
        ]);
        frame.render_widget(Clear, badge);
        frame.render_widget(Paragraph::new(line), badge);
    }
}

impl Component<Action> for DashboardView {
    type Props<'a> = DashboardViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let key = match event {
            EventKind::Resize(width, height) => {
                return vec![Action::UiTerminalResize(*width, *height)];
            }
            EventKind::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => return Vec::new(),
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }

        let search = &props.state.search;
        if search.focused {
            return self
                .search
                .handle_event(
                    event,
                    SearchBoxProps {
                        value: &search.text,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect();
        }

        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Vec::new();
        }

        let action = match key.code {
            KeyCode::Char('/') => Action::SearchFocus,
            KeyCode::Char('l') => Action::LocateStart,
            KeyCode::Char('c') if !search.text.is_empty() => Action::SearchClear,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => return Vec::new(),
        };
        vec![action]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let msg = Paragraph::new(vec![
                Line::from("Terminal too small"),
                Line::from(format!("need {}x{}", MIN_WIDTH, MIN_HEIGHT)),
            ])
            .centered()
            .style(Style::default().fg(AMBER));
            frame.render_widget(msg, area);
            return;
        }

        let banner_height = u16::from(state.display.location_error.is_some());
        let [header, banner, body, help] = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let weather = state.weather();
        Header.render(
            frame,
            header,
            HeaderProps {
                city: weather.map(|w| w.city.as_str()),
                loading: state.display.loading,
                last_updated: state.display.last_updated,
                has_alerts: weather.is_some_and(|w| !w.alerts.is_empty()),
                tick: state.tick_count,
            },
        );
        self.search.render(
            frame,
            Header::search_area(header),
            SearchBoxProps {
                value: &state.search.text,
                is_focused: state.search.focused,
            },
        );

        if let Some(message) = &state.display.location_error {
            Banner.render(frame, banner, BannerProps { message });
        }

        match (weather, state.readings()) {
            (Some(weather), Some(readings)) => {
                self.render_body(frame, body, weather, readings, &props);
                if state.display.phase() == Phase::Refreshing {
                    Self::render_refreshing(frame, body, state.tick_count);
                }
            }
            _ => Skeleton.render(frame, body, SkeletonProps { tick: state.tick_count }),
        }

        HelpBar.render(
            frame,
            help,
            HelpBarProps {
                search_focused: state.search.focused,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::{char_key, key, ActionAssertions, ActionAssertionsEq};

    fn key_event(k: &str) -> EventKind {
        EventKind::Key(key(k))
    }

    fn handle(view: &mut DashboardView, state: &DashboardState, event: &EventKind) -> Vec<Action> {
        view.handle_event(
            event,
            DashboardViewProps {
                state,
                now: Local::now(),
            },
        )
        .into_iter()
        .collect()
    }

    #[test]
    fn test_unfocused_commands() {
        let mut view = DashboardView::new();
        let mut state = DashboardState::default();
        state.search.text = "Austin".into();

        handle(&mut view, &state, &key_event("/")).assert_first(Action::SearchFocus);
        handle(&mut view, &state, &key_event("l")).assert_first(Action::LocateStart);
        handle(&mut view, &state, &key_event("c")).assert_first(Action::SearchClear);
        handle(&mut view, &state, &key_event("q")).assert_first(Action::Quit);
        handle(&mut view, &state, &key_event("esc")).assert_first(Action::Quit);
        handle(&mut view, &state, &key_event("x")).assert_empty();
    }

    #[test]
    fn test_clear_with_empty_query_is_ignored() {
        let mut view = DashboardView::new();
        let state = DashboardState::default();
        assert!(state.search.text.is_empty());

        handle(&mut view, &state, &key_event("c")).assert_empty();
    }

    #[test]
    fn test_key_release_ignored() {
        let mut view = DashboardView::new();
        let state = DashboardState::default();
        let mut release = key("q");
        release.kind = KeyEventKind::Release;

        handle(&mut view, &state, &EventKind::Key(release)).assert_empty();
    }

    #[test]
    fn test_focused_keys_edit_query() {
        let mut view = DashboardView::new();
        let mut state = DashboardState::default();
        state.search.focused = true;

        let mut actions = Vec::new();
        for ch in "Rom".chars() {
            let emitted = handle(&mut view, &state, &EventKind::Key(char_key(ch)));
            if let Some(Action::SearchInput(text)) = emitted.first() {
                state.search.text = text.clone();
            }
            actions.extend(emitted);
        }

        actions.assert_count(3);
        actions.assert_contains(Action::SearchInput("Rom".into()));
        // 'q' types rather than quits while focused
        handle(&mut view, &state, &key_event("q")).assert_first(Action::SearchInput("Romq".into()));
        handle(&mut view, &state, &key_event("esc")).assert_first(Action::SearchBlur);
        handle(&mut view, &state, &key_event("ctrl+u")).assert_first(Action::SearchClear);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut view = DashboardView::new();
        let mut state = DashboardState::default();
        handle(&mut view, &state, &key_event("ctrl+c")).assert_first(Action::Quit);

        state.search.focused = true;
        handle(&mut view, &state, &key_event("ctrl+c")).assert_first(Action::Quit);
    }

    #[test]
    fn test_resize_maps_to_action() {
        let mut view = DashboardView::new();
        let state = DashboardState::default();
        handle(&mut view, &state, &EventKind::Resize(120, 40))
            .assert_first(Action::UiTerminalResize(120, 40));
    }
}
