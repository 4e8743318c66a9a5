use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SearchBox, SelectedPerson};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding};

const HELP_TEXT: &str = " Tab Focus  ↑↓ Highlight  Enter Pick  Esc Quit ";

/// Container layout: heading on top, search box below.
pub fn draw_ui(frame: &mut Frame, app: &mut App, tui: &mut TuiState) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" People ")
        .title_alignment(Alignment::Left)
        .title_bottom(Line::from(HELP_TEXT).centered())
        .padding(Padding::horizontal(1));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    use Constraint::{Length, Min};
    let [heading_area, _, search_area] = Layout::vertical([Length(2), Length(1), Min(0)]).areas(inner);

    let heading = app.heading();
    SelectedPerson {
        heading: heading.as_deref(),
    }
    .render(frame, heading_area);

    SearchBox::new(&mut app.search, &mut tui.search_layout).render(frame, search_area);
}
