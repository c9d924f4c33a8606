use std::fs;
use std::path::{Path, PathBuf};

use super::{parse_document, to_json, DocumentStore};
use crate::error::{Result, TabdeckError};
use crate::model::Document;

/// File-backed store holding the working dashboard document as JSON.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Err(TabdeckError::Store(format!(
                "No document found at {} (run 'tabdeck init' to create one)",
                self.path.display()
            )));
        }
        let raw = fs::read_to_string(&self.path)?;
        parse_document(&raw)
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut json = to_json(document)?;
        json.push('\n');
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("bookmarks.json"));

        let mut doc = Document::default();
        add::card(&mut doc);
        let ids = doc.id_set();
        add::bookmark(&mut doc.cards[0], &ids);

        store.save(&doc).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.collect_ids(), doc.collect_ids());
        assert_eq!(loaded.cards[0].order, 1);
    }

    #[test]
    fn missing_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, TabdeckError::Store(_)));
    }

    #[test]
    fn corrupt_file_does_not_yield_a_partial_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        fs::write(&path, r#"{"cards": "oops"}"#).unwrap();

        let store = FileStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deck/bookmarks.json"));
        store.save(&Document::default()).unwrap();
        assert!(store.exists());
    }
}
