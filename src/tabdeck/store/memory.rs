use super::DocumentStore;
use crate::error::Result;
use crate::model::Document;

/// In-memory store for tests: no filesystem, no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Document,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        self.document = document.clone();
        Ok(())
    }
}
