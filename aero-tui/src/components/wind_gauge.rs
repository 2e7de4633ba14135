use aero_core::Action;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use super::card::{card, ACCENT, BORDER, LABEL};
use super::Component;

/// Speed at which the gauge is full
pub const FULL_SCALE_KMH: f64 = 50.0;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const ARROWS: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];

/// 16-point compass label for a bearing in degrees
pub fn compass_point(degrees: u32) -> &'static str {
    let index = (f64::from(degrees % 360) / 22.5).round() as usize % COMPASS.len();
    COMPASS[index]
}

fn arrow(degrees: u32) -> &'static str {
    let index = (f64::from(degrees % 360) / 45.0).round() as usize % ARROWS.len();
    ARROWS[index]
}

/// Gauge fill for a speed, saturating at full scale
pub fn gauge_ratio(speed: f64) -> f64 {
    (speed / FULL_SCALE_KMH).clamp(0.0, 1.0)
}

pub struct WindGauge;

pub struct WindGaugeProps {
    /// km/h, possibly mid count-up
    pub speed: f64,
    pub direction: u32,
}

impl Component<Action> for WindGauge {
    type Props<'a> = WindGaugeProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = card("Wind");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [speed_row, gauge_row, _, direction_row, label_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let speed = Line::from(vec![
            Span::styled(
                format!("{}", props.speed.round() as i64),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(" km/h", Style::default().fg(LABEL)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(speed), speed_row);

        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(ACCENT).bg(BORDER))
                .label("")
                .use_unicode(true)
                .ratio(gauge_ratio(props.speed)),
            gauge_row,
        );

        let direction = Line::from(vec![
            Span::styled(arrow(props.direction), Style::default().fg(ACCENT).bold()),
            Span::raw(" "),
            Span::styled(
                compass_point(props.direction),
                Style::default().fg(Color::White).bold(),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(direction), direction_row);
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled("Direction", Style::default().fg(LABEL))).centered(),
            ),
            label_row,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_points() {
        assert_eq!(compass_point(0), "N");
        assert_eq!(compass_point(22), "NNE");
        assert_eq!(compass_point(90), "E");
        assert_eq!(compass_point(180), "S");
        assert_eq!(compass_point(248), "WSW");
        assert_eq!(compass_point(350), "N");
        assert_eq!(compass_point(360), "N");
    }

    #[test]
    fn test_gauge_ratio_saturates() {
        assert_eq!(gauge_ratio(0.0), 0.0);
        assert_eq!(gauge_ratio(25.0), 0.5);
        assert_eq!(gauge_ratio(80.0), 1.0);
    }
}
