//! # Application State
//!
//! Everything the picker knows, in one place. No terminal types live here;
//! presentation state (layout caches, list scroll) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── dataset: Dataset          // shared, read-only people list
//! ├── search: Autocomplete      // the search widget
//! └── selection: Selection      // the container's selected person
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::autocomplete::Autocomplete;
use crate::core::dataset::Dataset;
use crate::core::selection::Selection;

pub struct App {
    pub dataset: Dataset,
    pub search: Autocomplete,
    pub selection: Selection,
}

impl App {
    /// Mount the container and its widget over `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            search: Autocomplete::new(dataset.clone()),
            selection: Selection::default(),
            dataset,
        }
    }

    /// Text for the heading region, or `None` to render nothing.
    pub fn heading(&self) -> Option<String> {
        self.selection.heading(&self.dataset)
    }
}
