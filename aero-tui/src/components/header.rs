use aero_core::Action;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card::{spinner, ACCENT, AMBER, BORDER, GREEN, LABEL, RED};
use super::Component;

/// Brand, status and alert indicator. The search box sits in the gap
/// returned by [`Header::search_area`].
pub struct Header;

pub struct HeaderProps<'a> {
    pub city: Option<&'a str>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Local>>,
    pub has_alerts: bool,
    pub tick: u32,
}

impl Header {
    pub const HEIGHT: u16 = 3;

    fn columns(area: Rect) -> [Rect; 4] {
        Layout::horizontal([
            Constraint::Length(10),
            Constraint::Length(30),
            Constraint::Min(20),
            Constraint::Length(10),
        ])
        .areas(area)
    }

    pub fn search_area(area: Rect) -> Rect {
        Self::columns(area)[2]
    }
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [brand, status, _search, alerts] = Self::columns(area);
        let middle = |r: Rect| Rect {
            y: r.y + r.height.saturating_sub(1) / 2,
            height: 1.min(r.height),
            ..r
        };

        let logo = Line::from(vec![
            Span::styled(" ≋ ", Style::default().fg(Color::White).bg(ACCENT).bold()),
            Span::styled(" AERO", Style::default().fg(Color::White).bold()),
        ]);
        frame.render_widget(Paragraph::new(logo), middle(brand));

        let mut label = vec![Span::styled(
            "│ STATUS",
            Style::default().fg(LABEL).bold(),
        )];
        if let (Some(updated), false) = (props.last_updated, props.loading) {
            label.push(Span::styled(
                format!("  ↻ UPDATED {}", updated.format("%H:%M")),
                Style::default().fg(LABEL),
            ));
        }

        let (dot, dot_color) = if props.loading {
            (spinner(props.tick), AMBER)
        } else {
            ("●", GREEN)
        };
        let city = Line::from(vec![
            Span::styled("│ ", Style::default().fg(BORDER)),
            Span::styled(
                props.city.unwrap_or("Locating…").to_string(),
                Style::default().fg(Color::White).bold(),
            ),
            Span::raw(" "),
            Span::styled(dot, Style::default().fg(dot_color)),
        ]);

        let status_rows: [Rect; 2] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(status);
        frame.render_widget(Paragraph::new(Line::from(label)), status_rows[0]);
        frame.render_widget(Paragraph::new(city), status_rows[1]);

        let bell = if props.has_alerts {
            Line::from(vec![
                Span::styled("ALERT ", Style::default().fg(LABEL)),
                Span::styled("●", Style::default().fg(RED).bold()),
            ])
        } else {
            Line::from(Span::styled("ALERT ○", Style::default().fg(BORDER)))
        };
        frame.render_widget(Paragraph::new(bell.right_aligned()), middle(alerts));
    }
}
