use chrono::Local;
use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tabdeck::api::DashboardApi;
use tabdeck::commands::export::{default_file_name, ExportTarget};
use tabdeck::commands::reorder::Direction;
use tabdeck::commands::search::SearchMatch;
use tabdeck::commands::update::{BookmarkField, CardField};
use tabdeck::commands::{CmdMessage, CmdResult, Confirmation, MessageLevel};
use tabdeck::config::DeckConfig;
use tabdeck::error::{Result, TabdeckError};
use tabdeck::init;
use tabdeck::model::{Bookmark, Card, IconType};
use tabdeck::store::fs::FileStore;
use tabdeck::validate::ValidationIssue;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = init::document_path(cli.file.clone());

    match cli.command {
        Some(Commands::Init) => handle_init(&path),
        Some(Commands::Config { key, value }) => handle_config(&path, key, value),
        command => {
            let store = FileStore::new(path.clone());
            let mut api = DashboardApi::load(store)?;
            dispatch(&mut api, &path, command)
        }
    }
}

fn dispatch(
    api: &mut DashboardApi<FileStore>,
    path: &Path,
    command: Option<Commands>,
) -> Result<()> {
    match command {
        Some(Commands::List) | None => handle_list(api),
        Some(Commands::Show { card }) => handle_show(api, path, card),
        Some(Commands::Check) => handle_check(api),
        Some(Commands::AddCard) => finish(api.add_card()?),
        Some(Commands::AddBookmark { card }) => {
            let card = zero_based(card)?;
            edit(api, card, |api| api.add_bookmark(card))
        }
        Some(Commands::AddSub { card, bookmark }) => {
            let (card, bookmark) = (zero_based(card)?, zero_based(bookmark)?);
            edit(api, card, |api| api.add_sub_bookmark(card, bookmark))
        }
        Some(Commands::RmCard { card, yes }) => {
            let card = zero_based(card)?;
            let result = api.delete_card(card, confirmation(yes))?;
            if let Some(prompt) = pending_prompt(&result) {
                if confirm(&prompt)? {
                    return finish(api.delete_card(card, Confirmation::Confirmed)?);
                }
                return Ok(());
            }
            finish(result)
        }
        Some(Commands::RmBookmark {
            card,
            bookmark,
            yes,
        }) => {
            let (card, bookmark) = (zero_based(card)?, zero_based(bookmark)?);
            edit_destructive(api, card, yes, |api, confirm| {
                api.delete_bookmark(card, bookmark, confirm)
            })
        }
        Some(Commands::RmSub {
            card,
            bookmark,
            sub,
            yes,
        }) => {
            let (card, bookmark, sub) = (zero_based(card)?, zero_based(bookmark)?, zero_based(sub)?);
            edit_destructive(api, card, yes, |api, confirm| {
                api.delete_sub_bookmark(card, bookmark, sub, confirm)
            })
        }
        Some(Commands::DupCard { card }) => finish(api.duplicate_card(zero_based(card)?)?),
        Some(Commands::DupBookmark { card, bookmark }) => {
            let (card, bookmark) = (zero_based(card)?, zero_based(bookmark)?);
            edit(api, card, |api| api.duplicate_bookmark(card, bookmark))
        }
        Some(Commands::DupSub {
            card,
            bookmark,
            sub,
        }) => {
            let (card, bookmark, sub) = (zero_based(card)?, zero_based(bookmark)?, zero_based(sub)?);
            edit(api, card, |api| api.duplicate_sub_bookmark(card, bookmark, sub))
        }
        Some(Commands::MoveBookmark {
            card,
            bookmark,
            direction,
        }) => {
            let (card, bookmark) = (zero_based(card)?, zero_based(bookmark)?);
            let direction = parse_direction(&direction)?;
            edit(api, card, |api| api.move_bookmark(card, bookmark, direction))
        }
        Some(Commands::MoveSub {
            card,
            bookmark,
            sub,
            direction,
        }) => {
            let (card, bookmark, sub) = (zero_based(card)?, zero_based(bookmark)?, zero_based(sub)?);
            let direction = parse_direction(&direction)?;
            edit(api, card, |api| {
                api.move_sub_bookmark(card, bookmark, sub, direction)
            })
        }
        Some(Commands::SetCard { card, field, value }) => {
            finish(api.set_card_field(zero_based(card)?, parse_card_field(&field, value)?)?)
        }
        Some(Commands::SetBookmark {
            card,
            bookmark,
            field,
            value,
        }) => {
            let (card, bookmark) = (zero_based(card)?, zero_based(bookmark)?);
            let field = parse_bookmark_field(&field, value)?;
            edit(api, card, |api| api.set_bookmark_field(card, bookmark, field))
        }
        Some(Commands::SetSub {
            card,
            bookmark,
            sub,
            field,
            value,
        }) => {
            let (card, bookmark, sub) = (zero_based(card)?, zero_based(bookmark)?, zero_based(sub)?);
            let field = parse_bookmark_field(&field, value)?;
            edit(api, card, |api| {
                api.set_sub_bookmark_field(card, bookmark, sub, field)
            })
        }
        Some(Commands::TagAdd {
            card,
            bookmark,
            tag,
            sub,
        }) => {
            let (card, bookmark) = (zero_based(card)?, zero_based(bookmark)?);
            let sub = sub.map(zero_based).transpose()?;
            edit(api, card, |api| api.add_tag(card, bookmark, sub, &tag))
        }
        Some(Commands::TagRm {
            card,
            bookmark,
            tag,
            sub,
        }) => {
            let (card, bookmark, tag) = (zero_based(card)?, zero_based(bookmark)?, zero_based(tag)?);
            let sub = sub.map(zero_based).transpose()?;
            edit(api, card, |api| api.remove_tag(card, bookmark, sub, tag))
        }
        Some(Commands::Search { term }) => handle_search(api, &term),
        Some(Commands::Export { path, clipboard }) => handle_export(api, path, clipboard),
        Some(Commands::Import { path, yes }) => handle_import(api, &path, yes),
        // Handled before the document is loaded.
        Some(Commands::Init) | Some(Commands::Config { .. }) => Ok(()),
    }
}

fn handle_init(path: &Path) -> Result<()> {
    let mut store = FileStore::new(path.to_path_buf());
    let result = init::run(&mut store)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &DashboardApi<FileStore>) -> Result<()> {
    print_cards(&api.document().cards);
    print_issue_summary(&api.check());
    Ok(())
}

fn handle_show(api: &DashboardApi<FileStore>, path: &Path, card: usize) -> Result<()> {
    let index = zero_based(card)?;
    let card = api
        .document()
        .cards
        .get(index)
        .ok_or_else(|| TabdeckError::Api(format!("No card at position {}", index + 1)))?;

    let config = DeckConfig::load(init::config_dir(path)).unwrap_or_default();
    print_full_card(card, &config, &init::config_dir(path));
    Ok(())
}

fn handle_check(api: &DashboardApi<FileStore>) -> Result<()> {
    let issues = api.check();
    if issues.is_empty() {
        println!("{}", "Document is valid.".green());
        return Ok(());
    }
    for issue in &issues {
        println!("{}", issue.to_string().red());
    }
    Err(TabdeckError::ValidationFailed(issues.len()))
}

fn handle_search(api: &DashboardApi<FileStore>, term: &str) -> Result<()> {
    let matches = api.search(term);
    if matches.is_empty() {
        println!("No matches.");
        return Ok(());
    }
    print_matches(&matches);
    Ok(())
}

fn handle_export(
    api: &DashboardApi<FileStore>,
    path: Option<PathBuf>,
    clipboard: bool,
) -> Result<()> {
    let target = if clipboard {
        ExportTarget::Clipboard
    } else {
        ExportTarget::File(path.unwrap_or_else(|| PathBuf::from(default_file_name(Local::now()))))
    };
    let result = api.export(&target)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(api: &mut DashboardApi<FileStore>, path: &Path, yes: bool) -> Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let source = path.display().to_string();

    let result = api.import(&raw, &source, confirmation(yes))?;
    if let Some(prompt) = pending_prompt(&result) {
        if confirm(&prompt)? {
            return finish(api.import(&raw, &source, Confirmation::Confirmed)?);
        }
        return Ok(());
    }
    finish(result)
}

fn handle_config(path: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = init::config_dir(path);
    let mut config = DeckConfig::load(&dir)?;

    match (key.as_deref(), value) {
        (None, _) | (Some("icon-dir"), None) => {
            println!("icon-dir = {}", config.icon_dir);
        }
        (Some("icon-dir"), Some(v)) => {
            config.icon_dir = v;
            config.save(&dir)?;
            println!("{}", "Configuration saved.".green());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

/// Run a bookmark-level mutation inside an edit session: clone the card,
/// apply the change to the working copy, commit on success, discard on error.
fn edit<F>(api: &mut DashboardApi<FileStore>, card: usize, apply: F) -> Result<()>
where
    F: FnOnce(&mut DashboardApi<FileStore>) -> Result<CmdResult>,
{
    api.begin_edit(card)?;
    match apply(api) {
        Ok(result) => {
            api.commit_edit()?;
            finish(result)
        }
        Err(e) => {
            let _ = api.discard_edit();
            Err(e)
        }
    }
}

/// Session wrapper for deletes: prompts when the first pass comes back
/// awaiting confirmation, and commits only if something was applied.
fn edit_destructive<F>(
    api: &mut DashboardApi<FileStore>,
    card: usize,
    yes: bool,
    apply: F,
) -> Result<()>
where
    F: Fn(&mut DashboardApi<FileStore>, Confirmation) -> Result<CmdResult>,
{
    api.begin_edit(card)?;
    match apply_with_prompt(api, yes, &apply) {
        Ok(Some(result)) => {
            api.commit_edit()?;
            finish(result)
        }
        Ok(None) => {
            api.discard_edit()?;
            Ok(())
        }
        Err(e) => {
            let _ = api.discard_edit();
            Err(e)
        }
    }
}

fn apply_with_prompt<F>(
    api: &mut DashboardApi<FileStore>,
    yes: bool,
    apply: &F,
) -> Result<Option<CmdResult>>
where
    F: Fn(&mut DashboardApi<FileStore>, Confirmation) -> Result<CmdResult>,
{
    let result = apply(api, confirmation(yes))?;
    if let Some(prompt) = pending_prompt(&result) {
        if confirm(&prompt)? {
            return Ok(Some(apply(api, Confirmation::Confirmed)?));
        }
        return Ok(None);
    }
    Ok(Some(result))
}

// --- output helpers ---

fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    print_issue_summary(&result.issues);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_issue_summary(issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }
    println!(
        "{}",
        format!("{} validation issue(s):", issues.len()).yellow()
    );
    for issue in issues {
        println!("  {}", issue.to_string().yellow());
    }
}

const LINE_WIDTH: usize = 100;
const COUNT_WIDTH: usize = 14;

fn print_cards(cards: &[Card]) {
    if cards.is_empty() {
        println!("No cards yet. Try 'tabdeck add-card'.");
        return;
    }

    for (i, card) in cards.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let marker = if card.enabled { "  " } else { "✗ " };

        let total: usize = card
            .bookmarks
            .iter()
            .map(|b| 1 + b.children.len())
            .sum();
        let count_str = format!("{:>width$}", format!("{} bookmark(s)", total), width = COUNT_WIDTH);

        let fixed = marker.width() + idx_str.width() + COUNT_WIDTH + card.pattern.width() + 3;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&card.title, available);
        let padding = available.saturating_sub(title.width());

        let title_colored = if card.enabled {
            title.normal()
        } else {
            title.dimmed()
        };

        println!(
            "{}{}{}{} [{}] {}",
            marker.red(),
            idx_str.normal(),
            title_colored,
            " ".repeat(padding),
            card.pattern.cyan(),
            count_str.dimmed()
        );
    }
}

fn print_full_card(card: &Card, config: &DeckConfig, document_dir: &Path) {
    println!("{}", card.title.bold());
    if !card.description.is_empty() {
        println!("{}", card.description.dimmed());
    }
    println!(
        "id: {}  pattern: {}  enabled: {}  order: {}",
        card.id,
        card.pattern.cyan(),
        card.enabled,
        card.order
    );

    for (i, bookmark) in card.bookmarks.iter().enumerate() {
        println!("--------------------------------");
        print_bookmark(bookmark, i + 1, "", config, document_dir);
        for (j, child) in bookmark.children.iter().enumerate() {
            print_bookmark(child, j + 1, "    ", config, document_dir);
        }
    }
}

fn print_bookmark(
    bookmark: &Bookmark,
    position: usize,
    indent: &str,
    config: &DeckConfig,
    document_dir: &Path,
) {
    let icon = match config.resolve_icon(document_dir, bookmark) {
        Some(path) => path.display().to_string(),
        None => bookmark.icon.clone(),
    };
    println!(
        "{}{} {} {} {}",
        indent,
        format!("{}.", position).yellow(),
        icon,
        bookmark.label.bold(),
        bookmark.url.underline()
    );
    if !bookmark.tags.is_empty() {
        println!("{}   tags: {}", indent, bookmark.tags.join(", ").dimmed());
    }
}

fn print_matches(matches: &[SearchMatch]) {
    for m in matches {
        println!(
            "{} {}",
            format!("{}.", m.card_index + 1).yellow(),
            m.card_title.bold()
        );
        for hit in &m.hits {
            println!("   {}", hit.dimmed());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

// --- input helpers ---

fn zero_based(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| TabdeckError::Api("Positions start at 1".to_string()))
}

fn confirmation(yes: bool) -> Confirmation {
    if yes {
        Confirmation::Confirmed
    } else {
        Confirmation::Ask
    }
}

fn pending_prompt(result: &CmdResult) -> Option<String> {
    result.confirmation.clone()
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}

fn parse_direction(s: &str) -> Result<Direction> {
    match s {
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        other => Err(TabdeckError::Api(format!(
            "Invalid direction '{}' (expected up or down)",
            other
        ))),
    }
}

fn parse_card_field(field: &str, value: String) -> Result<CardField> {
    match field {
        "id" => Ok(CardField::Id(value)),
        "title" => Ok(CardField::Title(value)),
        "description" => Ok(CardField::Description(value)),
        "pattern" => Ok(CardField::Pattern(value)),
        "enabled" => match value.as_str() {
            "true" => Ok(CardField::Enabled(true)),
            "false" => Ok(CardField::Enabled(false)),
            _ => Err(TabdeckError::Api(
                "enabled must be true or false".to_string(),
            )),
        },
        "order" => value
            .parse()
            .map(CardField::Order)
            .map_err(|_| TabdeckError::Api("order must be an integer".to_string())),
        other => Err(TabdeckError::Api(format!(
            "Unknown card field '{}' (expected id, title, description, pattern, enabled, order)",
            other
        ))),
    }
}

fn parse_bookmark_field(field: &str, value: String) -> Result<BookmarkField> {
    match field {
        "id" => Ok(BookmarkField::Id(value)),
        "label" => Ok(BookmarkField::Label(value)),
        "url" => Ok(BookmarkField::Url(value)),
        "icon-type" => IconType::from_str(&value).map(BookmarkField::IconType),
        "icon" => Ok(BookmarkField::Icon(value)),
        other => Err(TabdeckError::Api(format!(
            "Unknown bookmark field '{}' (expected id, label, url, icon-type, icon)",
            other
        ))),
    }
}
