//! Clone-then-commit editing. An [`EditSession`] takes a deep copy of one
//! card; mutations go to the copy and reach the document only on commit.
//! Dropping the session discards every pending change.

use std::collections::HashSet;

use crate::error::{Result, TabdeckError};
use crate::model::{card_ids, Card, Document};

pub struct EditSession {
    card_index: usize,
    working: Card,
    /// Every id in the document that does not belong to the card under
    /// edit. Ids generated inside the session must avoid these too, or the
    /// commit would introduce duplicates elsewhere in the tree.
    foreign_ids: HashSet<String>,
}

impl EditSession {
    pub fn begin(document: &Document, card_index: usize) -> Result<Self> {
        let working = document
            .cards
            .get(card_index)
            .cloned()
            .ok_or_else(|| TabdeckError::Api(format!("No card at position {}", card_index + 1)))?;

        let own: HashSet<String> = card_ids(&working).into_iter().collect();
        let foreign_ids = document
            .id_set()
            .into_iter()
            .filter(|id| !own.contains(id))
            .collect();

        Ok(Self {
            card_index,
            working,
            foreign_ids,
        })
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn working(&self) -> &Card {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut Card {
        &mut self.working
    }

    /// Collision set for id generation inside the session: the rest of the
    /// document plus the working copy's current ids.
    pub fn existing_ids(&self) -> HashSet<String> {
        let mut ids = self.foreign_ids.clone();
        ids.extend(card_ids(&self.working));
        ids
    }

    /// Write the working copy back over the original card.
    pub fn commit(self, document: &mut Document) -> Result<()> {
        let slot = document.cards.get_mut(self.card_index).ok_or_else(|| {
            TabdeckError::Api(format!(
                "Card at position {} no longer exists",
                self.card_index + 1
            ))
        })?;
        *slot = self.working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn two_card_document() -> Document {
        let mut doc = Document::default();
        add::card(&mut doc);
        add::card(&mut doc);
        let ids = doc.id_set();
        add::bookmark(&mut doc.cards[0], &ids);
        doc
    }

    #[test]
    fn edits_stay_in_the_working_copy_until_commit() {
        let mut doc = two_card_document();
        let mut session = EditSession::begin(&doc, 0).unwrap();
        session.working_mut().title = "Renamed".to_string();

        assert_eq!(doc.cards[0].title, "New Card");
        session.commit(&mut doc).unwrap();
        assert_eq!(doc.cards[0].title, "Renamed");
    }

    #[test]
    fn dropping_the_session_discards_changes() {
        let doc = two_card_document();
        {
            let mut session = EditSession::begin(&doc, 0).unwrap();
            session.working_mut().bookmarks.clear();
        }
        assert_eq!(doc.cards[0].bookmarks.len(), 1);
    }

    #[test]
    fn existing_ids_cover_the_whole_document() {
        let doc = two_card_document();
        let session = EditSession::begin(&doc, 0).unwrap();
        let ids = session.existing_ids();
        assert!(ids.contains("new-card"));
        assert!(ids.contains("new-card-2"));
        assert!(ids.contains("new-bookmark"));
    }

    #[test]
    fn ids_generated_in_a_session_avoid_other_cards() {
        let mut doc = two_card_document();
        let mut session = EditSession::begin(&doc, 1).unwrap();
        let ids = session.existing_ids();
        add::bookmark(session.working_mut(), &ids);
        session.commit(&mut doc).unwrap();

        // The first card already owns "new-bookmark".
        assert_eq!(doc.cards[1].bookmarks[0].id, "new-bookmark-2");
    }

    #[test]
    fn begin_on_a_missing_card_is_an_error() {
        let doc = Document::default();
        assert!(EditSession::begin(&doc, 0).is_err());
    }
}
