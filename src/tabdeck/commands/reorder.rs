use crate::commands::{CmdMessage, CmdResult};
use crate::model::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Swap the bookmark at `index` with its neighbor in `direction`. Boundary
/// moves and bad indices are silent no-ops.
pub fn bookmark(card: &mut Card, index: usize, direction: Direction) -> CmdResult {
    match swap(&mut card.bookmarks, index, direction) {
        Some(label) => CmdResult::default()
            .with_message(CmdMessage::success(format!("Bookmark moved: {}", label))),
        None => CmdResult::default(),
    }
}

/// Swap the sub-bookmark at `sub_index` with its neighbor within the same
/// parent bookmark.
pub fn sub_bookmark(
    card: &mut Card,
    bookmark_index: usize,
    sub_index: usize,
    direction: Direction,
) -> CmdResult {
    let Some(parent) = card.bookmarks.get_mut(bookmark_index) else {
        return CmdResult::default();
    };
    match swap(&mut parent.children, sub_index, direction) {
        Some(label) => CmdResult::default()
            .with_message(CmdMessage::success(format!("Sub-bookmark moved: {}", label))),
        None => CmdResult::default(),
    }
}

fn swap(
    entries: &mut [crate::model::Bookmark],
    index: usize,
    direction: Direction,
) -> Option<String> {
    if index >= entries.len() {
        return None;
    }
    let neighbor = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index.checked_add(1)?,
    };
    if neighbor >= entries.len() {
        return None;
    }
    entries.swap(index, neighbor);
    Some(entries[neighbor].label.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bookmark, Document};

    fn card_with_bookmarks(labels: &[&str]) -> Card {
        Card {
            id: "c".into(),
            title: "C".into(),
            description: String::new(),
            pattern: "slate".into(),
            enabled: true,
            order: 1,
            bookmarks: labels
                .iter()
                .map(|l| {
                    let mut b = Bookmark::placeholder(l.to_lowercase());
                    b.label = l.to_string();
                    b
                })
                .collect(),
        }
    }

    fn labels(card: &Card) -> Vec<&str> {
        card.bookmarks.iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn moves_bookmark_up_and_down() {
        let mut card = card_with_bookmarks(&["A", "B", "C"]);
        bookmark(&mut card, 2, Direction::Up);
        assert_eq!(labels(&card), vec!["A", "C", "B"]);
        bookmark(&mut card, 0, Direction::Down);
        assert_eq!(labels(&card), vec!["C", "A", "B"]);
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let mut card = card_with_bookmarks(&["A", "B"]);
        let result = bookmark(&mut card, 0, Direction::Up);
        assert!(result.messages.is_empty());
        assert_eq!(labels(&card), vec!["A", "B"]);

        let result = bookmark(&mut card, 1, Direction::Down);
        assert!(result.messages.is_empty());
        assert_eq!(labels(&card), vec!["A", "B"]);
    }

    #[test]
    fn moves_sub_bookmarks_within_parent() {
        let mut card = card_with_bookmarks(&["Parent"]);
        card.bookmarks[0].children = vec![
            Bookmark::sub_placeholder("one".into()),
            Bookmark::sub_placeholder("two".into()),
        ];
        sub_bookmark(&mut card, 0, 1, Direction::Up);
        assert_eq!(card.bookmarks[0].children[0].id, "two");

        // Identifiers elsewhere in the document are untouched by moves.
        let doc = Document { cards: vec![card] };
        assert_eq!(doc.collect_ids().len(), 3);
    }

    #[test]
    fn bad_indices_are_no_ops() {
        let mut card = card_with_bookmarks(&["A"]);
        let result = bookmark(&mut card, 4, Direction::Down);
        assert!(result.messages.is_empty());
        let result = sub_bookmark(&mut card, 9, 0, Direction::Up);
        assert!(result.messages.is_empty());

        // Even the extreme index must not overflow while deriving the
        // neighbor position.
        let result = bookmark(&mut card, usize::MAX, Direction::Down);
        assert!(result.messages.is_empty());
        assert_eq!(labels(&card), vec!["A"]);
    }
}
