//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `SelectedPerson`: Heading with the picked person or a placeholder
//! - `SuggestionList`: The dropdown rows (or "No matches")
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: Text input that emits `Action`s and owns the dropdown's
//!   layout cache
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into global
//! state. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! SelectedPerson { heading: app.heading().as_deref() }.render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── search_box.rs       (Input + dropdown, event handling)
//! ├── suggestion_list.rs  (Dropdown rows)
//! └── selected_person.rs  (Heading)
//! ```

pub mod search_box;
pub mod selected_person;
pub mod suggestion_list;

pub use search_box::{SearchBox, SearchLayout};
pub use selected_person::SelectedPerson;
