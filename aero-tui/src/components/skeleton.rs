use aero_core::Action;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::card::{spinner, ACCENT, BORDER, LABEL};
use super::Component;

/// Placeholder cards shown until the first snapshot arrives
pub struct Skeleton;

pub struct SkeletonProps {
    pub tick: u32,
}

const SHADES: [&str; 3] = ["░", "▒", "░"];

impl Component<Action> for Skeleton {
    type Props<'a> = SkeletonProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [top, middle, bottom] = Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Min(5),
        ])
        .areas(area);
        let top: [Rect; 2] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(top);
        let middle: [Rect; 3] = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .areas(middle);

        let shade = SHADES[(props.tick as usize / 4) % SHADES.len()];
        for slot in top.into_iter().chain(middle).chain([bottom]) {
            placeholder(frame, slot, shade);
        }

        let status = Line::from(vec![
            Span::styled(spinner(props.tick), Style::default().fg(ACCENT)),
            Span::styled(" Fetching weather…", Style::default().fg(LABEL).italic()),
        ])
        .centered();
        let [_, status_row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(status), status_row);
    }
}

fn placeholder(frame: &mut Frame, area: Rect, shade: &str) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar = |len: u16| {
        Line::from(Span::styled(
            shade.repeat(usize::from(len)),
            Style::default().fg(BORDER),
        ))
    };
    let lines = vec![
        Line::default(),
        bar(inner.width.min(10)),
        Line::default(),
        bar(inner.width.saturating_sub(2)),
        bar(inner.width * 3 / 4),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
