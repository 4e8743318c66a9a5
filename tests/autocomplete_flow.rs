//! End-to-end flows through the reducer and real tokio timers, on a paused
//! clock so delays are exact.

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use people_picker::core::action::{Action, update};
use people_picker::core::config::Timing;
use people_picker::core::dataset::Dataset;
use people_picker::core::selection::Selection;
use people_picker::core::state::App;
use people_picker::timer::WidgetTimers;
use tokio::time::sleep;

// ============================================================================
// Helper Functions
// ============================================================================

/// The event loop minus the terminal.
struct Harness {
    app: App,
    timers: WidgetTimers,
    rx: Receiver<Action>,
    applied_queries: Vec<String>,
}

impl Harness {
    fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            app: App::new(Dataset::bundled().unwrap()),
            timers: WidgetTimers::new(&Timing::default(), tx),
            rx,
            applied_queries: Vec::new(),
        }
    }

    fn dispatch(&mut self, action: Action) {
        let effect = update(&mut self.app, action);
        self.timers.schedule(&effect);
    }

    fn type_text(&mut self, text: &str) {
        self.dispatch(Action::TextChanged(text.to_string()));
    }

    /// Let `ms` pass, applying whatever timers fired meanwhile.
    async fn wait(&mut self, ms: u64) {
        sleep(Duration::from_millis(ms)).await;
        while let Ok(action) = self.rx.try_recv() {
            if let Action::ApplyQuery(query) = &action {
                self.applied_queries.push(query.clone());
            }
            self.dispatch(action);
        }
    }

    fn suggestion_names(&mut self) -> Vec<String> {
        let suggestions = self.app.search.suggestions();
        suggestions
            .iter()
            .map(|&i| self.app.dataset.get(i).unwrap().name.clone())
            .collect()
    }

    fn index_of(&self, name: &str) -> usize {
        self.app.dataset.iter().position(|p| p.name == name).unwrap()
    }
}

// ============================================================================
// Flows
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_type_wait_pick_updates_heading() {
    let mut h = Harness::new();
    assert_eq!(h.app.heading().as_deref(), Some("No selected person"));

    h.type_text("N");
    h.wait(50).await;
    h.type_text("Ne");
    h.wait(50).await;
    h.type_text("New");
    assert_eq!(h.app.search.raw_text(), "New");
    assert!(!h.app.search.suggestions_visible());

    h.wait(1200).await;
    assert!(h.app.search.suggestions_visible());
    let names = h.suggestion_names();
    assert!(names.contains(&"Isaac Newton".to_string()));
    assert!(names.iter().all(|n| n.to_lowercase().contains("new")));

    let newton = h.index_of("Isaac Newton");
    h.dispatch(Action::Pick(newton));
    assert_eq!(h.app.heading().as_deref(), Some("Isaac Newton (1643 - 1727)"));
    assert!(!h.app.search.suggestions_visible());
    assert_eq!(h.app.search.raw_text(), "Isaac Newton");
}

#[tokio::test(start_paused = true)]
async fn test_burst_applies_query_once() {
    let mut h = Harness::new();

    h.type_text("A");
    h.wait(200).await;
    h.type_text("Al");
    h.wait(200).await;
    h.type_text("Ali");

    h.wait(990).await; // t=1390
    assert!(h.applied_queries.is_empty());
    assert_eq!(h.app.search.applied_text(), "");

    h.wait(20).await; // t=1410
    assert_eq!(h.applied_queries, vec!["Ali".to_string()]);
    assert_eq!(h.app.search.applied_text(), "Ali");
    // Visibility has not settled yet; it trails the query by 100ms.
    assert!(!h.app.search.suggestions_visible());

    h.wait(100).await;
    assert!(h.app.search.suggestions_visible());
}

#[tokio::test(start_paused = true)]
async fn test_filtered_list_matches_brute_force() {
    let mut h = Harness::new();
    h.type_text("AN");
    h.wait(1200).await;

    let expected: Vec<String> = h
        .app
        .dataset
        .iter()
        .filter(|p| p.name.to_lowercase().contains("an"))
        .map(|p| p.name.clone())
        .collect();
    assert!(!expected.is_empty());
    assert_eq!(h.suggestion_names(), expected);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_text_hides_list_but_keeps_full_suggestions() {
    let mut h = Harness::new();
    h.type_text("a");
    h.wait(1200).await;
    assert!(h.app.search.suggestions_visible());

    h.type_text("");
    h.wait(1200).await;
    assert!(!h.app.search.suggestions_visible());
    assert_eq!(h.app.search.suggestions().len(), h.app.dataset.len());
}

#[tokio::test(start_paused = true)]
async fn test_blur_hides_after_grace_and_keeps_selection() {
    let mut h = Harness::new();
    h.type_text("al");
    h.wait(1200).await;
    assert!(h.app.search.suggestions_visible());

    h.dispatch(Action::Blur);
    h.wait(190).await;
    assert!(h.app.search.suggestions_visible());

    h.wait(20).await;
    assert!(!h.app.search.suggestions_visible());
    assert_eq!(h.app.selection, Selection::NoSelection);
}

#[tokio::test(start_paused = true)]
async fn test_pick_inside_blur_grace_wins() {
    let mut h = Harness::new();
    h.type_text("curie");
    h.wait(1200).await;

    h.dispatch(Action::Blur);
    h.wait(50).await;
    let curie = h.index_of("Marie Curie");
    h.dispatch(Action::Pick(curie));
    h.wait(500).await;

    assert_eq!(h.app.selection.name(), Some("Marie Curie"));
    assert!(!h.app.search.suggestions_visible());
}

#[tokio::test(start_paused = true)]
async fn test_pending_visibility_overrides_focus() {
    let mut h = Harness::new();
    h.type_text("n");
    h.wait(10).await;
    h.type_text(""); // visibility(false) now pending for t=1110

    h.wait(90).await;
    let newton = h.index_of("Isaac Newton");
    h.dispatch(Action::Pick(newton)); // raw text is non-empty again
    h.dispatch(Action::Blur);
    h.wait(250).await;
    assert!(!h.app.search.suggestions_visible());

    h.dispatch(Action::Focus);
    assert!(h.app.search.suggestions_visible());

    // The stale debounce fires later and wins.
    h.wait(800).await;
    assert!(!h.app.search.suggestions_visible());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_drops_pending_updates() {
    let mut h = Harness::new();
    h.type_text("Tur");
    h.dispatch(Action::Blur);
    h.timers.cancel_all();

    h.wait(5000).await;
    assert!(h.applied_queries.is_empty());
    assert_eq!(h.app.search.applied_text(), "");
}
