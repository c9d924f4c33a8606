//! # API Facade
//!
//! Single entry point for every dashboard operation, regardless of the UI
//! driving it. The facade dispatches to the command layer, re-validates the
//! document after each mutation, and persists the working file. It does no
//! business logic of its own and never touches stdout.
//!
//! `DashboardApi<S: DocumentStore>` is generic over the storage backend:
//! production uses `DashboardApi<FileStore>`, tests use
//! `DashboardApi<InMemoryStore>`.
//!
//! ## Edit sessions
//!
//! Card-scoped operations normally mutate the live document directly. While
//! an edit session is open for a card ([`DashboardApi::begin_edit`]), the
//! same operations are buffered in the session's working copy instead and
//! reach the document only on [`DashboardApi::commit_edit`]. Validation
//! issues reported during a session describe the document as it would look
//! after the commit.

use std::collections::HashSet;

use crate::commands;
use crate::commands::export::ExportTarget;
use crate::commands::reorder::Direction;
use crate::commands::search::SearchMatch;
use crate::commands::update::{BookmarkField, CardField};
use crate::commands::{CmdResult, Confirmation};
use crate::error::{Result, TabdeckError};
use crate::model::{Card, Document};
use crate::session::EditSession;
use crate::store::DocumentStore;
use crate::validate::{validate, ValidationIssue};

pub struct DashboardApi<S: DocumentStore> {
    store: S,
    document: Document,
    session: Option<EditSession>,
}

impl<S: DocumentStore> DashboardApi<S> {
    /// Load the document from the store and wrap it.
    pub fn load(store: S) -> Result<Self> {
        let document = store.load()?;
        Ok(Self {
            store,
            document,
            session: None,
        })
    }

    /// Wrap an already-built document, e.g. right after `init`.
    pub fn with_document(store: S, document: Document) -> Self {
        Self {
            store,
            document,
            session: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current validation issues, without mutating anything.
    pub fn check(&self) -> Vec<ValidationIssue> {
        validate(&self.document)
    }

    // --- document-level operations ---

    pub fn add_card(&mut self) -> Result<CmdResult> {
        let result = commands::add::card(&mut self.document);
        self.finish(result)
    }

    pub fn delete_card(
        &mut self,
        card_index: usize,
        confirmation: Confirmation,
    ) -> Result<CmdResult> {
        let result = commands::delete::card(&mut self.document, card_index, confirmation);
        self.finish(result)
    }

    pub fn duplicate_card(&mut self, card_index: usize) -> Result<CmdResult> {
        let result = commands::duplicate::card(&mut self.document, card_index);
        self.finish(result)
    }

    pub fn search(&self, term: &str) -> Vec<SearchMatch> {
        commands::search::run(&self.document, term)
    }

    pub fn import(
        &mut self,
        raw: &str,
        source: &str,
        confirmation: Confirmation,
    ) -> Result<CmdResult> {
        if self.session.is_some() {
            return Err(TabdeckError::Api(
                "Cannot import while an edit session is open".to_string(),
            ));
        }
        let result = commands::import::run(&mut self.document, raw, source, confirmation)?;
        self.finish(result)
    }

    /// Export the document. Fails with `ValidationFailed` while the
    /// document has validation errors; the working file is never gated.
    pub fn export(&self, target: &ExportTarget) -> Result<CmdResult> {
        commands::export::run(&self.document, target)
    }

    // --- card-scoped operations ---

    pub fn set_card_field(&mut self, card_index: usize, field: CardField) -> Result<CmdResult> {
        self.with_card(card_index, |card, _| {
            Ok(commands::update::card_field(card, field))
        })
    }

    pub fn add_bookmark(&mut self, card_index: usize) -> Result<CmdResult> {
        self.with_card(card_index, |card, ids| Ok(commands::add::bookmark(card, ids)))
    }

    pub fn add_sub_bookmark(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, ids| {
            commands::add::sub_bookmark(card, bookmark_index, ids)
        })
    }

    pub fn delete_bookmark(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        confirmation: Confirmation,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, _| {
            Ok(commands::delete::bookmark(card, bookmark_index, confirmation))
        })
    }

    pub fn delete_sub_bookmark(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        sub_index: usize,
        confirmation: Confirmation,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, _| {
            Ok(commands::delete::sub_bookmark(
                card,
                bookmark_index,
                sub_index,
                confirmation,
            ))
        })
    }

    pub fn duplicate_bookmark(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, ids| {
            Ok(commands::duplicate::bookmark(card, bookmark_index, ids))
        })
    }

    pub fn duplicate_sub_bookmark(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        sub_index: usize,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, ids| {
            Ok(commands::duplicate::sub_bookmark(
                card,
                bookmark_index,
                sub_index,
                ids,
            ))
        })
    }

    pub fn move_bookmark(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        direction: Direction,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, _| {
            Ok(commands::reorder::bookmark(card, bookmark_index, direction))
        })
    }

    pub fn move_sub_bookmark(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        sub_index: usize,
        direction: Direction,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, _| {
            Ok(commands::reorder::sub_bookmark(
                card,
                bookmark_index,
                sub_index,
                direction,
            ))
        })
    }

    pub fn set_bookmark_field(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        field: BookmarkField,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, _| {
            commands::update::bookmark_field(card, bookmark_index, field)
        })
    }

    pub fn set_sub_bookmark_field(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        sub_index: usize,
        field: BookmarkField,
    ) -> Result<CmdResult> {
        self.with_card(card_index, |card, _| {
            commands::update::sub_bookmark_field(card, bookmark_index, sub_index, field)
        })
    }

    pub fn add_tag(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        sub_index: Option<usize>,
        tag: &str,
    ) -> Result<CmdResult> {
        let tag = tag.to_string();
        self.with_card(card_index, move |card, _| {
            commands::tags::add(card, bookmark_index, sub_index, &tag)
        })
    }

    pub fn remove_tag(
        &mut self,
        card_index: usize,
        bookmark_index: usize,
        sub_index: Option<usize>,
        tag_index: usize,
    ) -> Result<CmdResult> {
        self.with_card(card_index, move |card, _| {
            commands::tags::remove(card, bookmark_index, sub_index, tag_index)
        })
    }

    // --- edit sessions ---

    pub fn begin_edit(&mut self, card_index: usize) -> Result<()> {
        if self.session.is_some() {
            return Err(TabdeckError::Api(
                "An edit session is already open".to_string(),
            ));
        }
        self.session = Some(EditSession::begin(&self.document, card_index)?);
        Ok(())
    }

    /// The card currently under edit, if a session is open.
    pub fn editing(&self) -> Option<&Card> {
        self.session.as_ref().map(|s| s.working())
    }

    pub fn commit_edit(&mut self) -> Result<CmdResult> {
        let session = self
            .session
            .take()
            .ok_or_else(|| TabdeckError::Api("No edit session is open".to_string()))?;
        session.commit(&mut self.document)?;
        self.finish(CmdResult::default())
    }

    pub fn discard_edit(&mut self) -> Result<()> {
        if self.session.take().is_none() {
            return Err(TabdeckError::Api("No edit session is open".to_string()));
        }
        Ok(())
    }

    // --- plumbing ---

    fn with_card<F>(&mut self, card_index: usize, apply: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut Card, &HashSet<String>) -> Result<CmdResult>,
    {
        let buffered = self
            .session
            .as_ref()
            .is_some_and(|s| s.card_index() == card_index);

        let result = if buffered {
            if let Some(session) = self.session.as_mut() {
                let ids = session.existing_ids();
                apply(session.working_mut(), &ids)?
            } else {
                CmdResult::default()
            }
        } else {
            let ids = self.document.id_set();
            let card = self.document.cards.get_mut(card_index).ok_or_else(|| {
                TabdeckError::Api(format!("No card at position {}", card_index + 1))
            })?;
            apply(card, &ids)?
        };

        if buffered {
            self.finish_buffered(result)
        } else {
            self.finish(result)
        }
    }

    /// Attach current validation issues and persist the working document.
    /// Results that are still awaiting confirmation mutated nothing, so
    /// they skip the save.
    fn finish(&mut self, mut result: CmdResult) -> Result<CmdResult> {
        result.issues = validate(&self.document);
        if result.confirmation.is_none() {
            self.store.save(&self.document)?;
        }
        Ok(result)
    }

    /// Session variant of [`DashboardApi::finish`]: nothing is persisted,
    /// and issues are computed for the document as the commit would leave it.
    fn finish_buffered(&self, mut result: CmdResult) -> Result<CmdResult> {
        if let Some(session) = &self.session {
            let mut preview = self.document.clone();
            if let Some(slot) = preview.cards.get_mut(session.card_index()) {
                *slot = session.working().clone();
            }
            result.issues = validate(&preview);
        }
        Ok(result)
    }
}
