//! City search box
//!
//! The query text lives in dashboard state. Editing and the cursor are
//! handled by `TextInput`; this wrapper draws the card chrome and maps
//! ctrl+u, esc and enter onto search actions.

use aero_core::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{TextInput, TextInputProps, TextInputStyle};

use super::card::{ACCENT, BORDER, LABEL};
use super::Component;

pub const PLACEHOLDER: &str = "Search worldwide city...";
const CLEAR_HINT: &str = "CLEAR";
const PREFIX: &str = "⌕ ";
const PREFIX_WIDTH: u16 = 2;

#[derive(Clone, Copy)]
pub struct SearchBoxProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct SearchBox {
    input: TextInput,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }
}

fn input_props(props: SearchBoxProps<'_>) -> TextInputProps<'_, Action> {
    let mut style = TextInputStyle::minimal();
    style.base.fg = Some(Color::White);
    style.placeholder_style = Some(Style::default().fg(LABEL));

    TextInputProps {
        value: props.value,
        placeholder: PLACEHOLDER,
        is_focused: props.is_focused,
        style,
        on_change: Action::SearchInput,
        on_submit: |_| Action::SearchBlur,
        on_cursor_move: None,
    }
}

impl Component<Action> for SearchBox {
    type Props<'a> = SearchBoxProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('u') if ctrl => return vec![Action::SearchClear],
                KeyCode::Esc => return vec![Action::SearchBlur],
                _ => {}
            }
        }

        self.input
            .handle_event(event, input_props(props))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused { ACCENT } else { BORDER };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [prefix, field] = [
            Rect {
                width: PREFIX_WIDTH.min(inner.width),
                ..inner
            },
            Rect {
                x: inner.x + PREFIX_WIDTH.min(inner.width),
                width: inner.width.saturating_sub(PREFIX_WIDTH),
                ..inner
            },
        ];
        frame.render_widget(
            Paragraph::new(Span::styled(PREFIX, Style::default().fg(border))),
            prefix,
        );
        self.input.render(frame, field, input_props(props));

        if !props.value.is_empty() && inner.width > CLEAR_HINT.len() as u16 + 2 {
            let hint = Line::from(Span::styled(CLEAR_HINT, Style::default().fg(LABEL).bold()))
                .right_aligned();
            frame.render_widget(Paragraph::new(hint), inner);
        }
    }
}
