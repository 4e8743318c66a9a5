//! # Autocomplete Widget State
//!
//! The search box's business state, free of any terminal types.
//!
//! ```text
//! Autocomplete
//! ├── raw_text             // echoes every keystroke immediately
//! ├── applied_text         // raw_text after the query debounce settles
//! ├── suggestions_visible  // dropdown shown?
//! ├── focused              // input has focus
//! ├── highlighted          // keyboard cursor within the suggestions
//! └── cache                // SuggestionCache keyed on applied_text
//! ```
//!
//! Nothing here schedules timers. Callers (see `core::action`) turn the
//! return values into `Effect`s and the timer layer feeds the settled values
//! back through `apply_query` and `settle_visibility`.

use std::sync::Arc;

use log::debug;

use crate::core::dataset::Dataset;
use crate::core::filter::SuggestionCache;

/// Events the widget reports to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A suggestion was picked by the user. Emitted once per pick.
    Selected(String),
}

pub struct Autocomplete {
    dataset: Dataset,
    raw_text: String,
    applied_text: String,
    suggestions_visible: bool,
    focused: bool,
    highlighted: Option<usize>,
    cache: SuggestionCache,
}

impl Autocomplete {
    /// A fresh, focused widget with empty text and a hidden list.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            raw_text: String::new(),
            applied_text: String::new(),
            suggestions_visible: false,
            focused: true,
            highlighted: None,
            cache: SuggestionCache::new(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn applied_text(&self) -> &str {
        &self.applied_text
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Dataset indices matching the applied query, memoized.
    pub fn suggestions(&mut self) -> Arc<[usize]> {
        self.cache.get(&self.dataset, &self.applied_text)
    }

    /// Replace the input text. Filtering is untouched until the debounced
    /// `apply_query` arrives.
    pub fn set_text(&mut self, text: String) {
        self.raw_text = text;
    }

    /// Debounced: make `text` the query the list is filtered by.
    pub fn apply_query(&mut self, text: String) {
        if self.applied_text != text {
            debug!("Applied query {:?}", text);
            self.applied_text = text;
            self.highlighted = None;
        }
    }

    /// Debounced: set visibility to what the text looked like when it settled.
    pub fn settle_visibility(&mut self, visible: bool) {
        self.suggestions_visible = visible;
    }

    /// Show the list right away if there is text. No-op when already focused.
    pub fn focus(&mut self) -> bool {
        if self.focused {
            return false;
        }
        self.focused = true;
        self.suggestions_visible = !self.raw_text.is_empty();
        true
    }

    /// Drop focus. Returns true if focus was held, in which case the caller
    /// must hide the list after the blur grace period.
    pub fn blur(&mut self) -> bool {
        if !self.focused {
            return false;
        }
        self.focused = false;
        true
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
        self.highlighted = None;
    }

    /// Move the keyboard highlight by `delta`, clamped to the list.
    pub fn move_highlight(&mut self, delta: isize) {
        if !self.suggestions_visible {
            return;
        }
        let len = self.suggestions().len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        let next = match self.highlighted {
            None if delta < 0 => len - 1,
            None => 0,
            Some(current) => current.saturating_add_signed(delta).min(len - 1),
        };
        self.highlighted = Some(next);
    }

    /// Pick the record at `index` in the dataset.
    ///
    /// Puts the name in the input, hides the list and reports the selection.
    /// `applied_text` stays as it was.
    pub fn pick(&mut self, index: usize) -> Option<SearchEvent> {
        let name = self.dataset.get(index)?.name.clone();
        debug!("Picked suggestion {:?}", name);
        self.raw_text = name.clone();
        self.hide_suggestions();
        Some(SearchEvent::Selected(name))
    }

    /// Pick whatever row the keyboard highlight is on.
    pub fn pick_highlighted(&mut self) -> Option<SearchEvent> {
        if !self.suggestions_visible {
            return None;
        }
        let position = self.highlighted?;
        let index = *self.suggestions().get(position)?;
        self.pick(index)
    }
}
