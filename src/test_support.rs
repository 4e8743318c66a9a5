//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::dataset::{Dataset, PersonRecord};
use crate::core::state::App;

pub fn person(name: &str, born: i32, died: i32, slug: &str) -> PersonRecord {
    PersonRecord {
        name: name.to_string(),
        born,
        died,
        slug: slug.to_string(),
    }
}

/// Five well-known people, small enough to reason about in assertions.
pub fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![
        person("Isaac Newton", 1643, 1727, "isaac-newton"),
        person("Albert Einstein", 1879, 1955, "albert-einstein"),
        person("Marie Curie", 1867, 1934, "marie-curie"),
        person("Alan Turing", 1912, 1954, "alan-turing"),
        person("Ada Lovelace", 1815, 1852, "ada-lovelace"),
    ])
}

/// Creates a test App over `sample_dataset()`.
pub fn test_app() -> App {
    App::new(sample_dataset())
}
