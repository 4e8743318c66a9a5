//! # Suggestion List Component
//!
//! The dropdown under the search input. One row per matching person, in
//! dataset order, or a "No matches" line when the filter came back empty.
//!
//! Visibility is decided by the parent (`SearchBox`); this component always
//! draws when asked to.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::dataset::Dataset;
use crate::tui::component::Component;

/// Shown instead of an empty list.
pub const NO_MATCHES_LABEL: &str = "No matches";

/// Rows needed to draw `count` suggestions, borders included.
pub fn required_height(count: usize) -> u16 {
    let rows = count.max(1).min(u16::MAX as usize - 2) as u16;
    rows + 2
}

/// # Props
///
/// - `dataset`: records the indices point into
/// - `suggestions`: dataset indices to show, already filtered
/// - `highlighted`: keyboard cursor position within `suggestions`
///
/// # State
///
/// - `list_state`: scroll offset, kept by the parent between frames for hit testing
pub struct SuggestionList<'a> {
    pub dataset: &'a Dataset,
    pub suggestions: &'a [usize],
    pub highlighted: Option<usize>,
    pub list_state: &'a mut ListState,
}

impl Component for SuggestionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.suggestions.is_empty() {
            self.list_state.select(None);
            let empty = Paragraph::new(NO_MATCHES_LABEL)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Left)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .filter_map(|&index| self.dataset.get(index))
            .map(|person| {
                ListItem::new(Line::from(vec![
                    Span::raw(person.name.as_str()),
                    Span::styled(
                        format!("  {} - {}", person.born, person.died),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        self.list_state.select(self.highlighted);
        frame.render_stateful_widget(list, area, &mut *self.list_state);
    }
}
