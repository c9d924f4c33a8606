use crate::commands::{CmdMessage, CmdResult, Confirmation};
use crate::model::{Card, Document};

/// Remove the card at `index`. Out-of-range indices are a no-op.
pub fn card(document: &mut Document, index: usize, confirm: Confirmation) -> CmdResult {
    let Some(target) = document.cards.get(index) else {
        return CmdResult::default();
    };

    if confirm == Confirmation::Ask {
        return CmdResult::needs_confirmation(format!(
            "Delete card '{}' and its {} bookmark(s)?",
            target.title,
            target.bookmarks.len()
        ));
    }

    let removed = document.cards.remove(index);
    CmdResult::default().with_message(CmdMessage::success(format!(
        "Card deleted: {}",
        removed.title
    )))
}

/// Remove the bookmark at `index`, including its children.
pub fn bookmark(card: &mut Card, index: usize, confirm: Confirmation) -> CmdResult {
    let Some(target) = card.bookmarks.get(index) else {
        return CmdResult::default();
    };

    if confirm == Confirmation::Ask {
        let prompt = if target.children.is_empty() {
            format!("Delete bookmark '{}'?", target.label)
        } else {
            format!(
                "Delete bookmark '{}' and its {} sub-bookmark(s)?",
                target.label,
                target.children.len()
            )
        };
        return CmdResult::needs_confirmation(prompt);
    }

    let removed = card.bookmarks.remove(index);
    CmdResult::default().with_message(CmdMessage::success(format!(
        "Bookmark deleted: {}",
        removed.label
    )))
}

/// Remove the sub-bookmark at `sub_index` under the bookmark at
/// `bookmark_index`.
pub fn sub_bookmark(
    card: &mut Card,
    bookmark_index: usize,
    sub_index: usize,
    confirm: Confirmation,
) -> CmdResult {
    let Some(parent) = card.bookmarks.get_mut(bookmark_index) else {
        return CmdResult::default();
    };
    let Some(target) = parent.children.get(sub_index) else {
        return CmdResult::default();
    };

    if confirm == Confirmation::Ask {
        return CmdResult::needs_confirmation(format!(
            "Delete sub-bookmark '{}'?",
            target.label
        ));
    }

    let removed = parent.children.remove(sub_index);
    CmdResult::default().with_message(CmdMessage::success(format!(
        "Sub-bookmark deleted: {}",
        removed.label
    )))
}
