//! Literal field updates. Values are applied exactly as supplied; identifier
//! edits are never auto-regenerated, so a manual edit can introduce a
//! duplicate for the validator to report. Parsing raw strings into these
//! typed fields is the caller's job.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TabdeckError};
use crate::model::{Bookmark, Card, IconType};

#[derive(Debug, Clone)]
pub enum CardField {
    Id(String),
    Title(String),
    Description(String),
    Pattern(String),
    Enabled(bool),
    Order(i64),
}

#[derive(Debug, Clone)]
pub enum BookmarkField {
    Id(String),
    Label(String),
    Url(String),
    IconType(IconType),
    Icon(String),
}

pub fn card_field(card: &mut Card, field: CardField) -> CmdResult {
    let name = match field {
        CardField::Id(value) => {
            card.id = value;
            "id"
        }
        CardField::Title(value) => {
            card.title = value;
            "title"
        }
        CardField::Description(value) => {
            card.description = value;
            "description"
        }
        CardField::Pattern(value) => {
            card.pattern = value;
            "pattern"
        }
        CardField::Enabled(value) => {
            card.enabled = value;
            "enabled"
        }
        CardField::Order(value) => {
            card.order = value;
            "order"
        }
    };

    CmdResult::default().with_message(CmdMessage::success(format!(
        "Card '{}' updated: {}",
        card.title, name
    )))
}

pub fn bookmark_field(card: &mut Card, index: usize, field: BookmarkField) -> Result<CmdResult> {
    let bookmark = card
        .bookmarks
        .get_mut(index)
        .ok_or_else(|| TabdeckError::Api(format!("Bookmark {} not found", index + 1)))?;
    Ok(apply(bookmark, field, "Bookmark"))
}

pub fn sub_bookmark_field(
    card: &mut Card,
    bookmark_index: usize,
    sub_index: usize,
    field: BookmarkField,
) -> Result<CmdResult> {
    let parent = card.bookmarks.get_mut(bookmark_index).ok_or_else(|| {
        TabdeckError::Api(format!("Bookmark {} not found", bookmark_index + 1))
    })?;
    let child = parent
        .children
        .get_mut(sub_index)
        .ok_or_else(|| TabdeckError::Api(format!("Sub-bookmark {} not found", sub_index + 1)))?;
    Ok(apply(child, field, "Sub-bookmark"))
}

fn apply(bookmark: &mut Bookmark, field: BookmarkField, kind: &str) -> CmdResult {
    let name = match field {
        BookmarkField::Id(value) => {
            bookmark.id = value;
            "id"
        }
        BookmarkField::Label(value) => {
            bookmark.label = value;
            "label"
        }
        BookmarkField::Url(value) => {
            bookmark.url = value;
            "url"
        }
        BookmarkField::IconType(value) => {
            bookmark.icon_type = value;
            "iconType"
        }
        BookmarkField::Icon(value) => {
            bookmark.icon = value;
            "icon"
        }
    };

    CmdResult::default().with_message(CmdMessage::success(format!(
        "{} '{}' updated: {}",
        kind, bookmark.label, name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Document;
    use crate::validate::validate;

    fn doc() -> Document {
        let mut doc = Document::default();
        add::card(&mut doc);
        let ids = doc.id_set();
        add::bookmark(&mut doc.cards[0], &ids);
        doc
    }

    #[test]
    fn sets_card_fields_literally() {
        let mut doc = doc();
        card_field(&mut doc.cards[0], CardField::Title("Work".into()));
        card_field(&mut doc.cards[0], CardField::Pattern("indigo".into()));
        card_field(&mut doc.cards[0], CardField::Enabled(false));
        card_field(&mut doc.cards[0], CardField::Order(7));

        let card = &doc.cards[0];
        assert_eq!(card.title, "Work");
        assert_eq!(card.pattern, "indigo");
        assert!(!card.enabled);
        assert_eq!(card.order, 7);
    }

    #[test]
    fn manual_id_edit_can_introduce_a_duplicate() {
        let mut doc = doc();
        add::card(&mut doc);
        card_field(&mut doc.cards[1], CardField::Id("new-card".into()));

        let issues = validate(&doc);
        assert!(issues
            .iter()
            .any(|i| i.message == "Duplicate ID 'new-card'"));
    }

    #[test]
    fn updates_bookmark_and_sub_bookmark_fields() {
        let mut doc = doc();
        let ids = doc.id_set();
        add::sub_bookmark(&mut doc.cards[0], 0, &ids).unwrap();

        bookmark_field(&mut doc.cards[0], 0, BookmarkField::Url("#".into())).unwrap();
        sub_bookmark_field(
            &mut doc.cards[0],
            0,
            0,
            BookmarkField::IconType(IconType::Local),
        )
        .unwrap();

        assert_eq!(doc.cards[0].bookmarks[0].url, "#");
        assert_eq!(
            doc.cards[0].bookmarks[0].children[0].icon_type,
            IconType::Local
        );
    }

    #[test]
    fn unknown_bookmark_index_is_an_error() {
        let mut doc = doc();
        let result = bookmark_field(&mut doc.cards[0], 5, BookmarkField::Icon("⭐".into()));
        assert!(result.is_err());
    }
}
