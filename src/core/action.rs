//! # Actions
//!
//! Everything that can happen in the picker becomes an `Action`.
//! User types a letter? That's `Action::TextChanged(text)`.
//! The query debounce settles? That's `Action::ApplyQuery(text)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any timer the caller must arm.
//! No side effects here. Timers live in `crate::timer`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::autocomplete::SearchEvent;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // From the terminal
    TextChanged(String),
    Focus,
    Blur,
    HighlightNext,
    HighlightPrev,
    /// Pick the record at this dataset index.
    Pick(usize),
    PickHighlighted,
    Quit,

    // From timers
    ApplyQuery(String),
    SettleVisibility(bool),
    BlurElapsed,
}

/// What the caller has to do after `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Re-arm both debouncers with the new input text.
    Settle(String),
    /// Arm the one-shot blur grace timer.
    HideAfterBlur,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::TextChanged(text) => {
            app.search.set_text(text.clone());
            Effect::Settle(text)
        }
        Action::ApplyQuery(text) => {
            app.search.apply_query(text);
            Effect::None
        }
        Action::SettleVisibility(visible) => {
            app.search.settle_visibility(visible);
            Effect::None
        }
        Action::Focus => {
            app.search.focus();
            Effect::None
        }
        Action::Blur => {
            if app.search.blur() {
                Effect::HideAfterBlur
            } else {
                Effect::None
            }
        }
        Action::BlurElapsed => {
            app.search.hide_suggestions();
            Effect::None
        }
        Action::HighlightNext => {
            app.search.move_highlight(1);
            Effect::None
        }
        Action::HighlightPrev => {
            app.search.move_highlight(-1);
            Effect::None
        }
        Action::Pick(index) => {
            let event = app.search.pick(index);
            handle_search_event(app, event);
            Effect::None
        }
        Action::PickHighlighted => {
            let event = app.search.pick_highlighted();
            handle_search_event(app, event);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// The container's side of the widget's selection callback.
fn handle_search_event(app: &mut App, event: Option<SearchEvent>) {
    if let Some(SearchEvent::Selected(name)) = event {
        info!("Selected {:?}", name);
        app.selection.select(name);
    }
}
