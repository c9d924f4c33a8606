use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::{CmdMessage, CmdResult};
use crate::clipboard;
use crate::error::{Result, TabdeckError};
use crate::model::Document;
use crate::store::to_json;
use crate::validate::validate;

/// Where an export lands: a JSON file or the system clipboard.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    File(PathBuf),
    Clipboard,
}

/// Timestamped file name used when the caller does not pick one.
pub fn default_file_name(now: DateTime<Local>) -> String {
    now.format("bookmarks-%Y-%m-%d_%H-%M-%S.json").to_string()
}

/// Export the document. Refuses to produce output while the document has
/// validation errors; a broken document never leaves the editor.
pub fn run(document: &Document, target: &ExportTarget) -> Result<CmdResult> {
    let issues = validate(document);
    if !issues.is_empty() {
        return Err(TabdeckError::ValidationFailed(issues.len()));
    }

    let mut json = to_json(document)?;
    json.push('\n');

    let mut result = CmdResult::default();
    match target {
        ExportTarget::File(path) => {
            fs::write(path, json)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} card(s) to {}",
                document.cards.len(),
                path.display()
            )));
        }
        ExportTarget::Clipboard => {
            clipboard::copy_to_clipboard(&json)?;
            result.add_message(CmdMessage::success(format!(
                "Copied {} card(s) to the clipboard",
                document.cards.len()
            )));
        }
    }
    Ok(result)
}
