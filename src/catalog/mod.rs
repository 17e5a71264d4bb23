//! Resource catalog store.
//!
//! The catalog is an ordered, immutable sequence of [`Resource`] records
//! loaded once from a JSON document with a top-level `resources` array.
//! Loading validates every record and rejects the whole batch on the first
//! violation, naming the offending record; a server that cannot load its
//! catalog refuses to start.

mod filter;

pub use filter::{FilterState, Selection};

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Difficulty, Resource, ResourceType};

/// Catalog document bundled into the binary at compile time.
const BUNDLED_CATALOG: &str = include_str!("../../data/resources.json");

/// Why a catalog document was rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("resource at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("resource at index {index} (id {id:?}) duplicates an earlier id")]
    DuplicateId { index: usize, id: String },

    #[error("resource at index {index} (id {id:?}) has rating {rating}, expected 0-5")]
    RatingOutOfRange { index: usize, id: String, rating: u8 },
}

#[derive(Deserialize)]
struct CatalogDocument {
    resources: Vec<Resource>,
}

/// The full, unfiltered ordered set of resource records.
#[derive(Debug, Clone)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        validate(&doc.resources)?;
        Ok(Self {
            resources: doc.resources,
        })
    }

    /// Load a catalog from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary.
    ///
    /// The bundled document is validated in tests, so a failure here means
    /// the build itself shipped bad data.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All records, in document order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Featured records, in catalog order. This subset is always visible and
    /// unaffected by filter state.
    pub fn featured(&self) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.featured).collect()
    }

    /// Distinct category labels in order of first appearance. Derived from
    /// the live catalog, so option lists follow the data.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.resources
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.as_str())
            .collect()
    }

    /// Distinct resource types in order of first appearance.
    pub fn types(&self) -> Vec<ResourceType> {
        let mut seen = HashSet::new();
        self.resources
            .iter()
            .filter(|r| seen.insert(r.kind.as_str()))
            .map(|r| r.kind)
            .collect()
    }

    /// The difficulty option list is fixed regardless of catalog content.
    pub fn difficulties(&self) -> [Difficulty; 3] {
        Difficulty::ALL
    }

    /// Apply a filter state, preserving catalog order.
    ///
    /// Pure and synchronous: no internal state, no I/O. An empty result is an
    /// ordinary empty vector; "not yet loaded" cannot occur because no
    /// `Catalog` value exists before `from_json` succeeds.
    pub fn filter(&self, state: &FilterState) -> Vec<&Resource> {
        self.resources.iter().filter(|r| state.matches(r)).collect()
    }
}

fn validate(resources: &[Resource]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, resource) in resources.iter().enumerate() {
        if resource.id.is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !seen.insert(resource.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                index,
                id: resource.id.clone(),
            });
        }
        if resource.rating > 5 {
            return Err(CatalogError::RatingOutOfRange {
                index,
                id: resource.id.clone(),
                rating: resource.rating,
            });
        }
    }
    Ok(())
}
