//! Shared card chrome and palette

use aero_core::Condition;
use ratatui::{
    style::{Color, Style, Stylize},
    text::Span,
    widgets::{Block, BorderType},
};

pub const BORDER: Color = Color::Rgb(80, 80, 100);
pub const LABEL: Color = Color::Rgb(120, 130, 150);
pub const ACCENT: Color = Color::Rgb(59, 130, 246);
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const GREEN: Color = Color::Rgb(34, 197, 94);
pub const RED: Color = Color::Rgb(239, 68, 68);

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn spinner(tick: u32) -> &'static str {
    SPINNERS[(tick as usize / 2) % SPINNERS.len()]
}

/// Rounded card with an upper-case label
pub fn card(title: &str) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            format!(" {} ", title.to_uppercase()),
            Style::default().fg(LABEL).bold(),
        ))
}

pub fn condition_glyph(condition: Condition) -> (&'static str, Color) {
    match condition {
        Condition::Sunny => ("☀", Color::Yellow),
        Condition::Rain => ("☂", ACCENT),
        Condition::Cloudy => ("☁", Color::Gray),
        Condition::PartlyCloudy => ("☁", Color::LightYellow),
    }
}
