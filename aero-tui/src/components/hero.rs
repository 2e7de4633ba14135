use aero_core::{Action, WeatherSnapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card::{card, condition_glyph, LABEL};
use super::Component;

/// City, condition and the big temperature reading
pub struct HeroCard;

pub struct HeroCardProps<'a> {
    pub weather: &'a WeatherSnapshot,
    /// Count-up value currently on screen
    pub temperature: i32,
}

impl Component<Action> for HeroCard {
    type Props<'a> = HeroCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let weather = props.weather;
        let (glyph, glyph_color) = condition_glyph(weather.condition);

        let block = card("Now");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {}", weather.city),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::styled(format!(", {}", weather.country), Style::default().fg(LABEL)),
            ]),
            Line::from(vec![
                Span::styled(format!(" {} ", glyph), Style::default().fg(glyph_color)),
                Span::styled(weather.condition.label(), Style::default().fg(LABEL)),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!(" {}", props.temperature),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::styled("°C", Style::default().fg(LABEL)),
            ]),
            Line::from(Span::styled(
                format!(" H:{}°  L:{}°", weather.high, weather.low),
                Style::default().fg(LABEL),
            )),
            Line::from(Span::styled(
                format!(" {}", weather.description),
                Style::default().fg(LABEL).italic(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
