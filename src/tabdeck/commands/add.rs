use std::collections::HashSet;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TabdeckError};
use crate::model::{Bookmark, Card, Document};
use crate::slug::generate_unique_id;

/// Append a new card with placeholder defaults. The id is generated from the
/// seed "new-card" against every identifier in the document; order is one
/// past the current card count.
pub fn card(document: &mut Document) -> CmdResult {
    let id = generate_unique_id("new-card", &document.id_set());
    let order = document.cards.len() as i64 + 1;
    let card = Card::placeholder(id.clone(), order);
    document.cards.push(card);

    CmdResult::default().with_message(CmdMessage::success(format!("Card added: {}", id)))
}

/// Append a new bookmark to `card`. `existing` must cover the whole
/// document, not just this card, so the generated id stays globally unique.
pub fn bookmark(card: &mut Card, existing: &HashSet<String>) -> CmdResult {
    let id = generate_unique_id("new-bookmark", existing);
    card.bookmarks.push(Bookmark::placeholder(id.clone()));

    CmdResult::default().with_message(CmdMessage::success(format!("Bookmark added: {}", id)))
}

/// Append a new sub-bookmark to the bookmark at `bookmark_index`.
pub fn sub_bookmark(
    card: &mut Card,
    bookmark_index: usize,
    existing: &HashSet<String>,
) -> Result<CmdResult> {
    let parent = card.bookmarks.get_mut(bookmark_index).ok_or_else(|| {
        TabdeckError::Api(format!("Bookmark {} not found", bookmark_index + 1))
    })?;

    let id = generate_unique_id("new-sub-bookmark", existing);
    parent.children.push(Bookmark::sub_placeholder(id.clone()));

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Sub-bookmark added: {}", id))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn adds_card_with_generated_id_and_order() {
        let mut doc = Document::default();
        card(&mut doc);
        card(&mut doc);

        assert_eq!(doc.cards.len(), 2);
        assert_eq!(doc.cards[0].id, "new-card");
        assert_eq!(doc.cards[1].id, "new-card-2");
        assert_eq!(doc.cards[1].order, 2);
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn adds_bookmark_against_document_wide_ids() {
        let mut doc = Document::default();
        card(&mut doc);
        let ids = doc.id_set();
        bookmark(&mut doc.cards[0], &ids);
        let ids = doc.id_set();
        bookmark(&mut doc.cards[0], &ids);

        let bookmarks = &doc.cards[0].bookmarks;
        assert_eq!(bookmarks[0].id, "new-bookmark");
        assert_eq!(bookmarks[1].id, "new-bookmark-2");
        assert_eq!(bookmarks[0].label, "New Bookmark");
    }

    #[test]
    fn adds_sub_bookmark_under_parent() {
        let mut doc = Document::default();
        card(&mut doc);
        let ids = doc.id_set();
        bookmark(&mut doc.cards[0], &ids);
        let ids = doc.id_set();
        sub_bookmark(&mut doc.cards[0], 0, &ids).unwrap();

        assert_eq!(doc.cards[0].bookmarks[0].children.len(), 1);
        assert_eq!(doc.cards[0].bookmarks[0].children[0].id, "new-sub-bookmark");
    }

    #[test]
    fn sub_bookmark_under_missing_parent_is_an_error() {
        let mut doc = Document::default();
        card(&mut doc);
        let ids = doc.id_set();
        assert!(sub_bookmark(&mut doc.cards[0], 3, &ids).is_err());
    }
}
