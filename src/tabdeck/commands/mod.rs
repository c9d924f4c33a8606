//! Mutation operations on the document tree. Each module implements one verb
//! and contains its unit tests; none of them touch the terminal or the
//! filesystem. Index guards follow the editor's behavior: deleting or moving
//! a non-existent entry is a silent no-op, not an error.

use crate::validate::ValidationIssue;

pub mod add;
pub mod delete;
pub mod duplicate;
pub mod export;
pub mod import;
pub mod reorder;
pub mod search;
pub mod tags;
pub mod update;

/// Whether a destructive operation has been confirmed by the caller.
///
/// Called with `Ask`, a destructive command mutates nothing and returns a
/// result whose `confirmation` field describes what would happen; the caller
/// decides and re-invokes with `Confirmed`. This replaces blocking
/// confirmation dialogs with an explicit outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Ask,
    Confirmed,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the presentation layer: messages to show,
/// the validation issues current after the mutation, and, for destructive
/// commands invoked with [`Confirmation::Ask`], the pending action.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub issues: Vec<ValidationIssue>,
    pub confirmation: Option<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn needs_confirmation(prompt: impl Into<String>) -> Self {
        Self {
            confirmation: Some(prompt.into()),
            ..Self::default()
        }
    }
}
