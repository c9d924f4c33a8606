use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TabdeckError};
use crate::model::{Bookmark, Card};

/// Append a tag to a bookmark (or, with `sub_index`, a sub-bookmark). The
/// tag is trimmed first; an empty result is rejected. Duplicate tags are not
/// prevented, matching the editor.
pub fn add(
    card: &mut Card,
    bookmark_index: usize,
    sub_index: Option<usize>,
    tag: &str,
) -> Result<CmdResult> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(TabdeckError::Api("Tag cannot be empty".to_string()));
    }

    let entry = resolve(card, bookmark_index, sub_index)?;
    entry.tags.push(tag.to_string());

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Tag added to '{}': {}",
        entry.label, tag
    ))))
}

/// Remove the tag at `tag_index`. An out-of-range tag index is a no-op.
pub fn remove(
    card: &mut Card,
    bookmark_index: usize,
    sub_index: Option<usize>,
    tag_index: usize,
) -> Result<CmdResult> {
    let entry = resolve(card, bookmark_index, sub_index)?;
    if tag_index >= entry.tags.len() {
        return Ok(CmdResult::default());
    }

    let removed = entry.tags.remove(tag_index);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Tag removed from '{}': {}",
        entry.label, removed
    ))))
}

fn resolve<'a>(
    card: &'a mut Card,
    bookmark_index: usize,
    sub_index: Option<usize>,
) -> Result<&'a mut Bookmark> {
    let bookmark = card.bookmarks.get_mut(bookmark_index).ok_or_else(|| {
        TabdeckError::Api(format!("Bookmark {} not found", bookmark_index + 1))
    })?;

    match sub_index {
        None => Ok(bookmark),
        Some(sub) => bookmark.children.get_mut(sub).ok_or_else(|| {
            TabdeckError::Api(format!("Sub-bookmark {} not found", sub + 1))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add as add_cmd;
    use crate::model::Document;

    fn doc() -> Document {
        let mut doc = Document::default();
        add_cmd::card(&mut doc);
        let ids = doc.id_set();
        add_cmd::bookmark(&mut doc.cards[0], &ids);
        let ids = doc.id_set();
        add_cmd::sub_bookmark(&mut doc.cards[0], 0, &ids).unwrap();
        doc
    }

    #[test]
    fn adds_trimmed_tags_in_insertion_order() {
        let mut doc = doc();
        add(&mut doc.cards[0], 0, None, "  work ").unwrap();
        add(&mut doc.cards[0], 0, None, "daily").unwrap();
        assert_eq!(doc.cards[0].bookmarks[0].tags, vec!["work", "daily"]);
    }

    #[test]
    fn duplicate_tags_are_allowed() {
        let mut doc = doc();
        add(&mut doc.cards[0], 0, None, "work").unwrap();
        add(&mut doc.cards[0], 0, None, "work").unwrap();
        assert_eq!(doc.cards[0].bookmarks[0].tags.len(), 2);
    }

    #[test]
    fn rejects_empty_tags() {
        let mut doc = doc();
        assert!(add(&mut doc.cards[0], 0, None, "   ").is_err());
        assert!(doc.cards[0].bookmarks[0].tags.is_empty());
    }

    #[test]
    fn removes_by_index_and_ignores_out_of_range() {
        let mut doc = doc();
        add(&mut doc.cards[0], 0, None, "a").unwrap();
        add(&mut doc.cards[0], 0, None, "b").unwrap();

        remove(&mut doc.cards[0], 0, None, 0).unwrap();
        assert_eq!(doc.cards[0].bookmarks[0].tags, vec!["b"]);

        let result = remove(&mut doc.cards[0], 0, None, 9).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(doc.cards[0].bookmarks[0].tags, vec!["b"]);
    }

    #[test]
    fn tags_sub_bookmarks_through_the_same_path() {
        let mut doc = doc();
        add(&mut doc.cards[0], 0, Some(0), "nested").unwrap();
        assert_eq!(
            doc.cards[0].bookmarks[0].children[0].tags,
            vec!["nested"]
        );
    }
}
