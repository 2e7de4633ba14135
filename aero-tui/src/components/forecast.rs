use aero_core::{Action, ForecastDay};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card::{card, condition_glyph, LABEL};
use super::Component;

pub struct ForecastList;

pub struct ForecastListProps<'a> {
    pub days: &'a [ForecastDay],
}

impl Component<Action> for ForecastList {
    type Props<'a> = ForecastListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = card("7-Day Forecast");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = props
            .days
            .iter()
            .map(|day| {
                let (glyph, color) = condition_glyph(day.condition);
                Line::from(vec![
                    Span::styled(
                        format!(" {:<4}", day.day),
                        Style::default().fg(Color::White).bold(),
                    ),
                    Span::styled(format!("{} ", glyph), Style::default().fg(color)),
                    Span::styled(
                        format!("{:<14}", day.condition.label()),
                        Style::default().fg(LABEL),
                    ),
                    Span::styled(
                        format!("{:>3}°", day.temp),
                        Style::default().fg(Color::White).bold(),
                    ),
                    Span::styled(format!(" / {}°", day.low()), Style::default().fg(LABEL)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
