use aero_core::Action;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card::LABEL;
use super::Component;

const FOCUSED: &[(&str, &str)] = &[
    ("type", "search"),
    ("ctrl+u", "clear"),
    ("enter/esc", "done"),
];

const UNFOCUSED: &[(&str, &str)] = &[
    ("/", "search"),
    ("l", "locate"),
    ("c", "clear"),
    ("q", "quit"),
];

/// Key hints for the current input mode
pub struct HelpBar;

pub struct HelpBarProps {
    pub search_focused: bool,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let hints = if props.search_focused {
            FOCUSED
        } else {
            UNFOCUSED
        };
        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, what)| {
                [
                    Span::styled(format!(" {} ", key), Style::default().fg(Color::White).bold()),
                    Span::styled(format!("{}  ", what), Style::default().fg(LABEL)),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
