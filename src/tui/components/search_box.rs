//! # SearchBox Component
//!
//! The autocomplete widget: a one-line text input with the suggestion
//! dropdown underneath.
//!
//! ## Responsibilities
//!
//! - Translate keys into edits of the input text (`Action::TextChanged`)
//! - Translate Tab and mouse clicks into focus, blur and picks
//! - Draw the input, and the `SuggestionList` while suggestions are visible
//!
//! ## State Management
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchLayout` (hit-test areas, list scroll) lives in `TuiState`
//! - `SearchBox` is created per frame / per event with borrowed state
//!
//! Business state (`Autocomplete`) stays in the core `App`. The wrapper only
//! reads it when handling events; `update()` is what changes it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::autocomplete::Autocomplete;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::suggestion_list::{SuggestionList, required_height};
use crate::tui::event::TuiEvent;

/// Height of the bordered input line.
pub const INPUT_HEIGHT: u16 = 3;

/// Where the search box was drawn last frame.
#[derive(Debug, Default)]
pub struct SearchLayout {
    pub input_area: Rect,
    /// `None` while the dropdown is hidden.
    pub list_area: Option<Rect>,
    pub list_state: ListState,
}

pub struct SearchBox<'a> {
    search: &'a mut Autocomplete,
    layout: &'a mut SearchLayout,
}

impl<'a> SearchBox<'a> {
    pub fn new(search: &'a mut Autocomplete, layout: &'a mut SearchLayout) -> Self {
        Self { search, layout }
    }

    /// Map a click to focus (input), pick (suggestion row) or blur (anything else).
    fn hit_test(&mut self, column: u16, row: u16) -> Action {
        let position = Position::new(column, row);

        if self.layout.input_area.contains(position) {
            return Action::Focus;
        }

        if let Some(list_area) = self.layout.list_area
            && self.search.suggestions_visible()
        {
            let rows = list_area.inner(Margin::new(1, 1));
            if rows.contains(position) {
                let offset = self.layout.list_state.offset() + (row - rows.y) as usize;
                if let Some(&index) = self.search.suggestions().get(offset) {
                    return Action::Pick(index);
                }
            }
        }

        Action::Blur
    }
}

impl Component for SearchBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, dropdown_area] =
            Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)]).areas(area);

        let focused = self.search.is_focused();
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let input = Paragraph::new(self.search.raw_text()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(" Search people "),
        );
        frame.render_widget(input, input_area);
        self.layout.input_area = input_area;

        if focused {
            let text_width = self.search.raw_text().width() as u16;
            let max_x = input_area.right().saturating_sub(2);
            let cursor_x = (input_area.x + 1).saturating_add(text_width).min(max_x);
            frame.set_cursor_position((cursor_x, input_area.y + 1));
        }

        if !self.search.suggestions_visible() {
            self.layout.list_area = None;
            return;
        }

        let suggestions = self.search.suggestions();
        let height = required_height(suggestions.len()).min(dropdown_area.height);
        let list_area = Rect {
            height,
            ..dropdown_area
        };

        SuggestionList {
            dataset: self.search.dataset(),
            suggestions: &suggestions,
            highlighted: self.search.highlighted(),
            list_state: &mut self.layout.list_state,
        }
        .render(frame, list_area);
        self.layout.list_area = Some(list_area);
    }
}

impl EventHandler for SearchBox<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if self.search.is_focused() => {
                let mut text = self.search.raw_text().to_string();
                text.push(*c);
                Some(Action::TextChanged(text))
            }
            TuiEvent::Paste(pasted) if self.search.is_focused() => {
                let line: String = pasted.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                let mut text = self.search.raw_text().to_string();
                text.push_str(&line);
                Some(Action::TextChanged(text))
            }
            TuiEvent::Backspace if self.search.is_focused() => {
                let mut text = self.search.raw_text().to_string();
                text.pop()?;
                Some(Action::TextChanged(text))
            }
            TuiEvent::CursorUp => Some(Action::HighlightPrev),
            TuiEvent::CursorDown => Some(Action::HighlightNext),
            TuiEvent::Submit => Some(Action::PickHighlighted),
            TuiEvent::ToggleFocus => Some(if self.search.is_focused() {
                Action::Blur
            } else {
                Action::Focus
            }),
            TuiEvent::MouseClick(column, row) => Some(self.hit_test(*column, *row)),
            TuiEvent::Quit => Some(Action::Quit),
            _ => None,
        }
    }
}
