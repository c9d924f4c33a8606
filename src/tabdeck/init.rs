//! Locating and seeding the working document.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Bookmark, Card, Document, IconType};
use crate::store::fs::FileStore;
use crate::store::DocumentStore;

pub const DOCUMENT_FILENAME: &str = "bookmarks.json";
pub const FILE_ENV_VAR: &str = "TABDECK_FILE";

/// Resolve where the working document lives, in priority order:
/// an explicit --file flag, the TABDECK_FILE environment variable, a
/// bookmarks.json in the current directory, then the per-user data dir.
pub fn document_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(path) = env::var(FILE_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    let local = PathBuf::from(DOCUMENT_FILENAME);
    if local.exists() {
        return local;
    }

    match ProjectDirs::from("com", "tabdeck", "tabdeck") {
        Some(dirs) => dirs.data_dir().join(DOCUMENT_FILENAME),
        None => local,
    }
}

/// Directory for config.json, next to the document.
pub fn config_dir(document_path: &std::path::Path) -> PathBuf {
    document_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Create the working document if it does not exist yet.
pub fn run(store: &mut FileStore) -> Result<CmdResult> {
    if store.exists() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "Document already exists, leaving it untouched".to_string(),
        )));
    }

    store.save(&starter_document())?;
    let location = store
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created starter document at {}",
        location
    ))))
}

/// The document a fresh install starts from: one card showing off a plain
/// bookmark and an expandable parent with sub-bookmarks.
pub fn starter_document() -> Document {
    Document {
        cards: vec![Card {
            id: "getting-started".to_string(),
            title: "Getting Started".to_string(),
            description: "Your first card. Rename it, or add more.".to_string(),
            pattern: "sky".to_string(),
            enabled: true,
            order: 1,
            bookmarks: vec![
                Bookmark {
                    id: "example".to_string(),
                    label: "Example".to_string(),
                    url: "https://example.com".to_string(),
                    icon_type: IconType::Emoji,
                    icon: "🔗".to_string(),
                    tags: Vec::new(),
                    children: Vec::new(),
                },
                Bookmark {
                    id: "more-links".to_string(),
                    label: "More Links".to_string(),
                    url: "#".to_string(),
                    icon_type: IconType::Emoji,
                    icon: "📁".to_string(),
                    tags: Vec::new(),
                    children: vec![Bookmark {
                        id: "nested-example".to_string(),
                        label: "Nested Example".to_string(),
                        url: "https://example.org".to_string(),
                        icon_type: IconType::Emoji,
                        icon: "🔖".to_string(),
                        tags: Vec::new(),
                        children: Vec::new(),
                    }],
                },
            ],
        }],
    }
}
