//! # Selection
//!
//! The container's "selected person" state. Two states, one transition:
//!
//! ```text
//! NoSelection ──select(name)──► Selected(name) ──select(name)──► Selected(name)
//! ```
//!
//! There is no way back to `NoSelection`.

use log::warn;

use crate::core::dataset::Dataset;

/// Heading shown before anything has been picked.
pub const NO_SELECTION_LABEL: &str = "No selected person";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(String),
}

impl Selection {
    pub fn select(&mut self, name: String) {
        *self = Selection::Selected(name);
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(name) => Some(name),
        }
    }

    /// Heading text for the current state.
    ///
    /// `None` only when the selected name is missing from `dataset`, which
    /// the widget never produces.
    pub fn heading(&self, dataset: &Dataset) -> Option<String> {
        match self {
            Selection::NoSelection => Some(NO_SELECTION_LABEL.to_string()),
            Selection::Selected(name) => match dataset.find_by_name(name) {
                Some(record) => Some(record.lifespan_label()),
                None => {
                    warn!("Selected name {:?} is not in the dataset", name);
                    None
                }
            },
        }
    }
}
