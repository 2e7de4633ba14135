//! Sunrise to sunset progress

use aero_core::Action;
use chrono::NaiveTime;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card::{card, BORDER, LABEL};
use super::Component;

/// Parse a clock string like `06:45 AM`
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%I:%M %p").ok()
}

/// Fraction of daylight elapsed at `now`, clamped to `0.0..=1.0`.
/// `None` if either time is unparseable or sunset is not after sunrise.
pub fn day_progress(sunrise: &str, sunset: &str, now: NaiveTime) -> Option<f64> {
    let rise = parse_clock(sunrise)?;
    let set = parse_clock(sunset)?;
    let day = (set - rise).num_seconds();
    if day <= 0 {
        return None;
    }
    let elapsed = (now - rise).num_seconds();
    Some((elapsed as f64 / day as f64).clamp(0.0, 1.0))
}

/// `"4h 12m left"` until sunset, or a note once the sun is down
pub fn time_left(sunset: &str, now: NaiveTime) -> String {
    let Some(set) = parse_clock(sunset) else {
        return String::from("--");
    };
    let minutes = (set - now).num_minutes();
    if minutes <= 0 {
        return String::from("Sun has set");
    }
    format!("{}h {}m left", minutes / 60, minutes % 60)
}

pub struct SunCycle;

pub struct SunCycleProps<'a> {
    pub sunrise: &'a str,
    pub sunset: &'a str,
    pub now: NaiveTime,
}

impl Component<Action> for SunCycle {
    type Props<'a> = SunCycleProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = card("Sun Cycle");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [arc_row, _, times_row, _, left_row] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let progress = day_progress(props.sunrise, props.sunset, props.now).unwrap_or(0.0);
        frame.render_widget(Paragraph::new(arc_lines(arc_row.width, progress)), arc_row);

        let times = Line::from(vec![
            Span::styled("↑ ", Style::default().fg(Color::Yellow)),
            Span::styled(props.sunrise, Style::default().fg(Color::White).bold()),
            Span::raw("  "),
            Span::styled("↓ ", Style::default().fg(Color::LightRed)),
            Span::styled(props.sunset, Style::default().fg(Color::White).bold()),
        ])
        .centered();
        frame.render_widget(Paragraph::new(times), times_row);

        let left = Line::from(Span::styled(
            time_left(props.sunset, props.now),
            Style::default().fg(LABEL),
        ))
        .centered();
        frame.render_widget(Paragraph::new(left), left_row);
    }
}

/// Two-row dotted arc with the sun placed along it
fn arc_lines(width: u16, progress: f64) -> Vec<Line<'static>> {
    let width = usize::from(width);
    if width < 3 {
        return Vec::new();
    }
    let sun = ((width - 1) as f64 * progress).round() as usize;
    // Outer quarters form the low part of the arc
    let is_high = |x: usize| x >= width / 4 && x < width - width / 4;

    let row = |high: bool| {
        let spans: Vec<Span<'static>> = (0..width)
            .map(|x| {
                if is_high(x) != high {
                    Span::raw(" ")
                } else if x == sun {
                    Span::styled("☀", Style::default().fg(Color::Yellow).bold())
                } else {
                    Span::styled("·", Style::default().fg(BORDER))
                }
            })
            .collect();
        Line::from(spans)
    };
    vec![row(true), row(false)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("06:45 AM"), Some(at(6, 45)));
        assert_eq!(parse_clock("06:12 PM"), Some(at(18, 12)));
        assert_eq!(parse_clock("soon"), None);
    }

    #[test]
    fn test_day_progress() {
        assert_eq!(day_progress("06:00 AM", "06:00 PM", at(12, 0)), Some(0.5));
        assert_eq!(day_progress("06:00 AM", "06:00 PM", at(3, 0)), Some(0.0));
        assert_eq!(day_progress("06:00 AM", "06:00 PM", at(21, 0)), Some(1.0));
        assert_eq!(day_progress("06:00 PM", "06:00 AM", at(12, 0)), None);
    }

    #[test]
    fn test_time_left() {
        assert_eq!(time_left("06:12 PM", at(14, 0)), "4h 12m left");
        assert_eq!(time_left("06:12 PM", at(18, 11)), "0h 1m left");
        assert_eq!(time_left("06:12 PM", at(19, 0)), "Sun has set");
    }

    #[test]
    fn test_arc_places_sun() {
        let lines = arc_lines(20, 0.5);
        let text: String = lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert_eq!(text.matches('☀').count(), 1);
    }
}
