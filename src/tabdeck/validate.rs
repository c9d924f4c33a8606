//! Full-document validation. The validator never mutates and never fails: it
//! walks the tree in document order and accumulates one issue per violated
//! rule. Issues are data for the presentation layer; the export path refuses
//! to run while any exist.

use std::collections::HashSet;
use std::fmt;

use crate::model::{Bookmark, Document, IconType, VALID_PATTERNS};

/// One violated rule at one entity, addressed by a human-readable path like
/// `Card 'Dev' > Bookmark 2 > Sub-bookmark 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Walk the whole document and report every violation. Duplicate detection
/// uses a single accumulator for the entire pass: cards, bookmarks, and
/// sub-bookmarks share one identifier namespace.
pub fn validate(document: &Document) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (card_index, card) in document.cards.iter().enumerate() {
        let position = format!("Card {}", card_index + 1);
        if card.id.trim().is_empty() {
            issues.push(ValidationIssue::new(&position, "Missing required field 'id'"));
        }
        if card.title.trim().is_empty() {
            issues.push(ValidationIssue::new(
                &position,
                "Missing required field 'title'",
            ));
        }

        let named = format!("Card '{}'", card.title);
        if !card.id.is_empty() && !seen.insert(card.id.clone()) {
            issues.push(ValidationIssue::new(
                &named,
                format!("Duplicate ID '{}'", card.id),
            ));
        }

        if !card.pattern.is_empty() && !VALID_PATTERNS.contains(&card.pattern.as_str()) {
            issues.push(ValidationIssue::new(
                &named,
                format!("Invalid pattern '{}'", card.pattern),
            ));
        }

        for (bookmark_index, bookmark) in card.bookmarks.iter().enumerate() {
            let path = format!("{} > Bookmark {}", named, bookmark_index + 1);
            validate_bookmark(bookmark, &path, &mut seen, &mut issues);
        }
    }

    issues
}

fn validate_bookmark(
    bookmark: &Bookmark,
    path: &str,
    seen: &mut HashSet<String>,
    issues: &mut Vec<ValidationIssue>,
) {
    if bookmark.id.trim().is_empty() {
        issues.push(ValidationIssue::new(path, "Missing required field 'id'"));
    }
    if bookmark.label.trim().is_empty() {
        issues.push(ValidationIssue::new(path, "Missing required field 'label'"));
    }
    if bookmark.url.trim().is_empty() {
        issues.push(ValidationIssue::new(path, "Missing required field 'url'"));
    }

    if !bookmark.id.is_empty() && !seen.insert(bookmark.id.clone()) {
        issues.push(ValidationIssue::new(
            path,
            format!("Duplicate ID '{}'", bookmark.id),
        ));
    }

    if let IconType::Unknown(value) = &bookmark.icon_type {
        issues.push(ValidationIssue::new(
            path,
            format!("Invalid icon type '{}'", value),
        ));
    }

    // "#" is the sentinel for parent bookmarks that only expand. The exactly
    // empty url was already reported as missing and is not reported twice.
    if !bookmark.url.is_empty()
        && bookmark.url != "#"
        && !bookmark.url.starts_with("http://")
        && !bookmark.url.starts_with("https://")
    {
        issues.push(ValidationIssue::new(
            path,
            "URL must start with http:// or https:// (or use # for parent bookmarks)",
        ));
    }

    for (child_index, child) in bookmark.children.iter().enumerate() {
        let child_path = format!("{} > Sub-bookmark {}", path, child_index + 1);
        validate_bookmark(child, &child_path, seen, issues);
    }
}
