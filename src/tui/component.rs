use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Data comes in as props (struct fields, usually borrowed from `App`).
/// `render` takes `&mut self` so a component can refresh its caches while
/// drawing, such as the memoized suggestions or the areas it needs later for
/// mouse hit testing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns terminal events into something the app understands.
pub trait EventHandler {
    /// What the component emits; for the search box this is a core `Action`.
    type Event;

    /// `None` when the event means nothing to this component.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
