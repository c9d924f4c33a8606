//! Persistence for dashboard documents. The [`DocumentStore`] trait keeps
//! the rest of the library independent of where the document lives:
//! [`fs::FileStore`] holds the working JSON file in production,
//! [`memory::InMemoryStore`] backs tests.
//!
//! The wire format is the one the dashboard renderer reads: a single JSON
//! object `{ "cards": [...] }`, pretty-printed with 2-space indentation and
//! key order fixed by the struct declarations.

use std::path::Path;

use crate::error::{Result, TabdeckError};
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving the working document.
pub trait DocumentStore {
    /// Load the current document.
    fn load(&self) -> Result<Document>;

    /// Persist the document (the working state, not the gated export).
    fn save(&mut self, document: &Document) -> Result<()>;

    /// Where the document lives, for file-based stores.
    fn path(&self) -> Option<&Path> {
        None
    }
}

/// Parse a raw JSON document, rejecting anything whose top-level `cards`
/// field is missing or not an array. Nothing is adopted on failure.
pub fn parse_document(raw: &str) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value.get("cards") {
        Some(cards) if cards.is_array() => {}
        _ => {
            return Err(TabdeckError::InvalidDocument(
                "missing or invalid 'cards' array".to_string(),
            ))
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Serialize a document in the wire format.
pub fn to_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
