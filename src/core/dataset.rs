//! # Dataset
//!
//! The fixed, ordered list of people the picker searches. The list ships
//! inside the binary (`data/people.json`) and is parsed once at startup.
//!
//! ```text
//! Dataset (Arc<[PersonRecord]>)
//! ├── shared by the search widget (filtering)
//! └── shared by the selection heading (lookup by name)
//! ```
//!
//! Cloning a `Dataset` clones the `Arc`, never the records. Nothing mutates or
//! re-orders the records after construction.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

const BUNDLED_PEOPLE: &str = include_str!("../../data/people.json");

/// A single person. `name` is the match key, `slug` the row identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub born: i32,
    pub died: i32,
    pub slug: String,
}

impl PersonRecord {
    /// Heading text, e.g. `Isaac Newton (1643 - 1727)`.
    pub fn lifespan_label(&self) -> String {
        format!("{} ({} - {})", self.name, self.born, self.died)
    }
}

#[derive(Debug)]
pub enum DatasetError {
    Parse(serde_json::Error),
    DuplicateSlug(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Parse(e) => write!(f, "dataset parse error: {e}"),
            DatasetError::DuplicateSlug(slug) => write!(f, "duplicate slug in dataset: {slug}"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Immutable, shareable sequence of people in their original order.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[PersonRecord]>,
}

impl Dataset {
    /// Parse the list compiled into the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_PEOPLE)
    }

    /// Parse a JSON array of people. Slugs must be unique.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<PersonRecord> = serde_json::from_str(json).map_err(DatasetError::Parse)?;

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.slug.as_str()) {
                return Err(DatasetError::DuplicateSlug(record.slug.clone()));
            }
        }

        Ok(Self::from_records(records))
    }

    /// Wrap an explicit list. Order is preserved; slugs are not checked.
    pub fn from_records(records: Vec<PersonRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&PersonRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonRecord> {
        self.records.iter()
    }

    /// Linear scan; the first record with an exactly equal name wins.
    pub fn find_by_name(&self, name: &str) -> Option<&PersonRecord> {
        self.records.iter().find(|record| record.name == name)
    }
}
