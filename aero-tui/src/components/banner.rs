use aero_core::Action;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card::AMBER;
use super::Component;

/// One-line location warning under the header
pub struct Banner;

pub struct BannerProps<'a> {
    pub message: &'a str,
}

impl Component<Action> for Banner {
    type Props<'a> = BannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let line = Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(AMBER).bold()),
            Span::styled(props.message, Style::default().fg(AMBER)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
