//! # SelectedPerson Component
//!
//! The container's heading: either the "No selected person" placeholder or
//! `"{name} ({born} - {died})"` for the current pick.
//!
//! Stateless. The heading text is computed by `Selection::heading` and passed
//! in as a prop; `None` draws an empty region.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;

pub struct SelectedPerson<'a> {
    pub heading: Option<&'a str>,
}

impl Component for SelectedPerson<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(heading) = self.heading else {
            frame.render_widget(block, area);
            return;
        };

        let paragraph = Paragraph::new(heading)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(heading: Option<&str>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                SelectedPerson { heading }.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_heading() {
        let text = render(Some("Isaac Newton (1643 - 1727)"));
        assert!(text.contains("Isaac Newton (1643 - 1727)"));
    }

    #[test]
    fn test_none_renders_blank_line() {
        let text = render(None);
        assert!(text.chars().take(40).all(|c| c == ' '));
    }
}
