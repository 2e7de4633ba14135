use aero_core::{Action, Alert};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use super::card::RED;
use super::Component;

/// First active alert; draws nothing when there are none
pub struct AlertCard;

pub struct AlertCardProps<'a> {
    pub alerts: &'a [Alert],
}

impl Component<Action> for AlertCard {
    type Props<'a> = AlertCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(alert) = props.alerts.first() else {
            return;
        };

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(RED))
            .title(Span::styled(
                format!(" ⚠ {} ", alert.kind.to_uppercase()),
                Style::default().fg(RED).bold(),
            ))
            .title(
                Line::from(Span::styled(
                    " Active Now ",
                    Style::default().fg(Color::White).bg(RED).bold(),
                ))
                .right_aligned(),
            );

        let mut lines = vec![Line::from(Span::styled(
            alert.message.as_str(),
            Style::default().fg(Color::White),
        ))];
        if props.alerts.len() > 1 {
            lines.push(Line::from(Span::styled(
                format!("+{} more", props.alerts.len() - 1),
                Style::default().fg(RED),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
