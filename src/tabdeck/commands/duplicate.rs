//! Deep-cloning duplication. Every entity in a clone receives a freshly
//! generated identifier; each generated id immediately extends the exclusion
//! set so later generations within the same operation cannot collide with
//! earlier ones.

use std::collections::HashSet;

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Card, Document};
use crate::slug::generate_unique_id;

const COPY_SUFFIX: &str = " (Copy)";

/// Deep-clone the card at `index` and insert the clone right after the
/// original. The clone's id derives from the original title; the title then
/// gets the " (Copy)" suffix. Bookmark and sub-bookmark labels are kept but
/// all of their ids are regenerated.
pub fn card(document: &mut Document, index: usize) -> CmdResult {
    let Some(original) = document.cards.get(index) else {
        return CmdResult::default();
    };

    let mut ids = document.id_set();
    let mut clone = original.clone();

    clone.id = generate_unique_id(&clone.title, &ids);
    ids.insert(clone.id.clone());
    clone.title.push_str(COPY_SUFFIX);

    for bookmark in &mut clone.bookmarks {
        bookmark.id = generate_unique_id(&bookmark.label, &ids);
        ids.insert(bookmark.id.clone());
        for child in &mut bookmark.children {
            child.id = generate_unique_id(&child.label, &ids);
            ids.insert(child.id.clone());
        }
    }

    let message = CmdMessage::success(format!("Card duplicated: {}", clone.id));
    document.cards.insert(index + 1, clone);
    CmdResult::default().with_message(message)
}

/// Deep-clone the bookmark at `index` (children included) and insert it
/// right after the original. `existing` must cover the whole document.
pub fn bookmark(card: &mut Card, index: usize, existing: &HashSet<String>) -> CmdResult {
    let Some(original) = card.bookmarks.get(index) else {
        return CmdResult::default();
    };

    let mut ids = existing.clone();
    let mut clone = original.clone();

    clone.id = generate_unique_id(&clone.label, &ids);
    ids.insert(clone.id.clone());
    clone.label.push_str(COPY_SUFFIX);

    for child in &mut clone.children {
        child.id = generate_unique_id(&child.label, &ids);
        ids.insert(child.id.clone());
    }

    let message = CmdMessage::success(format!("Bookmark duplicated: {}", clone.id));
    card.bookmarks.insert(index + 1, clone);
    CmdResult::default().with_message(message)
}

/// Clone the sub-bookmark at `sub_index` and insert it after the original
/// within the same parent.
pub fn sub_bookmark(
    card: &mut Card,
    bookmark_index: usize,
    sub_index: usize,
    existing: &HashSet<String>,
) -> CmdResult {
    let Some(parent) = card.bookmarks.get_mut(bookmark_index) else {
        return CmdResult::default();
    };
    let Some(original) = parent.children.get(sub_index) else {
        return CmdResult::default();
    };

    let mut clone = original.clone();
    clone.id = generate_unique_id(&clone.label, existing);
    clone.label.push_str(COPY_SUFFIX);

    let message = CmdMessage::success(format!("Sub-bookmark duplicated: {}", clone.id));
    parent.children.insert(sub_index + 1, clone);
    CmdResult::default().with_message(message)
}
