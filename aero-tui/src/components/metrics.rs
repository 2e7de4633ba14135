//! Small metric cards: feels like, air quality, humidity, UV, visibility,
//! pressure

use aero_core::{Action, AnimatedReadings, WeatherSnapshot};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

use super::card::{card, ACCENT, AMBER, BORDER, GREEN, LABEL};
use super::Component;

/// Air quality label; the index is good below 50
pub fn air_quality_label(aqi: u32) -> (&'static str, Color) {
    if aqi < 50 {
        ("FAIR", GREEN)
    } else {
        ("MODERATE", AMBER)
    }
}

pub struct MetricGrid;

pub struct MetricGridProps<'a> {
    pub weather: &'a WeatherSnapshot,
    pub readings: AnimatedReadings,
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White).bold())
}

fn note(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(LABEL)))
}

impl Component<Action> for MetricGrid {
    type Props<'a> = MetricGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let r = props.readings;
        let rows: [Rect; 2] = Layout::vertical([Constraint::Ratio(1, 2); 2]).areas(area);
        let top: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(rows[0]);
        let bottom: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(rows[1]);

        render_text_card(
            frame,
            top[0],
            "Feels Like",
            vec![Line::from(value(format!("{}°", r.feels_like))), note("Standard Scale")],
        );

        let (aqi_label, aqi_color) = air_quality_label(props.weather.air_quality);
        render_text_card(
            frame,
            top[1],
            "Air Quality",
            vec![
                Line::from(value(r.air_quality.to_string())),
                Line::from(Span::styled(aqi_label, Style::default().fg(aqi_color).bold())),
            ],
        );

        render_humidity(frame, top[2], r.humidity);

        render_text_card(
            frame,
            bottom[0],
            "UV Index",
            vec![Line::from(value(r.uv_index.to_string())), note("Moderate for today")],
        );
        render_text_card(
            frame,
            bottom[1],
            "Visibility",
            vec![
                Line::from(value(format!("{} km", r.visibility))),
                Line::from(Span::styled("EXCELLENT", Style::default().fg(GREEN).bold())),
            ],
        );
        render_text_card(
            frame,
            bottom[2],
            "Pressure",
            vec![Line::from(value(format!("{} hPa", r.pressure))), note("Stable conditions")],
        );
    }
}

fn render_text_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = card(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_humidity(frame: &mut Frame, area: Rect, humidity: u32) {
    let block = card("Humidity");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows: [Rect; 2] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(value(format!("{}%", humidity))), rows[0]);
    frame.render_widget(
        LineGauge::default()
            .filled_style(Style::default().fg(ACCENT))
            .unfilled_style(Style::default().fg(BORDER))
            .line_set(symbols::line::THICK)
            .label("")
            .ratio((f64::from(humidity) / 100.0).clamp(0.0, 1.0)),
        rows[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_quality_threshold() {
        assert_eq!(air_quality_label(20).0, "FAIR");
        assert_eq!(air_quality_label(49).0, "FAIR");
        assert_eq!(air_quality_label(50).0, "MODERATE");
        assert_eq!(air_quality_label(99).0, "MODERATE");
    }
}
