use super::{CmdMessage, CmdResult, Confirmation};
use crate::error::Result;
use crate::model::Document;
use crate::store::parse_document;

/// Replace the document with one parsed from `raw`. The current document is
/// untouched unless parsing succeeds and the caller has confirmed; a
/// malformed import never leaves a half-replaced state.
///
/// `source` names where the data came from, for the confirmation prompt.
pub fn run(
    document: &mut Document,
    raw: &str,
    source: &str,
    confirmation: Confirmation,
) -> Result<CmdResult> {
    let incoming = parse_document(raw)?;

    if confirmation == Confirmation::Ask {
        return Ok(CmdResult::needs_confirmation(format!(
            "Replace the current document with {} card(s) from '{}'?",
            incoming.cards.len(),
            source
        )));
    }

    let count = incoming.cards.len();
    *document = incoming;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Imported {} card(s) from '{}'",
        count, source
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::TabdeckError;

    #[test]
    fn malformed_input_leaves_the_document_untouched() {
        let mut doc = Document::default();
        add::card(&mut doc);

        let err = run(&mut doc, "{broken", "paste", Confirmation::Confirmed).unwrap_err();
        assert!(matches!(err, TabdeckError::Serialization(_)));
        assert_eq!(doc.cards.len(), 1);
    }

    #[test]
    fn missing_cards_array_is_rejected() {
        let mut doc = Document::default();
        let err = run(&mut doc, r#"{"cards": {}}"#, "paste", Confirmation::Confirmed).unwrap_err();
        assert!(matches!(err, TabdeckError::InvalidDocument(_)));
    }

    #[test]
    fn asks_before_replacing() {
        let mut doc = Document::default();
        add::card(&mut doc);

        let raw = r#"{"cards": []}"#;
        let result = run(&mut doc, raw, "backup.json", Confirmation::Ask).unwrap();
        assert!(result.confirmation.is_some());
        assert_eq!(doc.cards.len(), 1);
    }

    #[test]
    fn confirmed_import_replaces_the_document() {
        let mut doc = Document::default();
        add::card(&mut doc);

        let raw = r#"{"cards": [{"id": "a", "title": "A", "pattern": "sky", "enabled": true, "order": 1, "bookmarks": []}]}"#;
        let result = run(&mut doc, raw, "backup.json", Confirmation::Confirmed).unwrap();
        assert!(result.confirmation.is_none());
        assert_eq!(doc.cards.len(), 1);
        assert_eq!(doc.cards[0].id, "a");
    }
}
