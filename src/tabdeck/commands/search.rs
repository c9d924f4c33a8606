use crate::model::{Bookmark, Card, Document};

/// A card that matched a search, with a short description of each hit.
#[derive(Debug, Clone)]
pub struct SearchMatch {
    pub card_index: usize,
    pub card_title: String,
    pub hits: Vec<String>,
}

/// Case-insensitive substring search over card titles and descriptions,
/// bookmark and sub-bookmark labels, urls, and tags. An empty term matches
/// nothing.
pub fn run(document: &Document, term: &str) -> Vec<SearchMatch> {
    let term = term.to_lowercase();
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }

    document
        .cards
        .iter()
        .enumerate()
        .filter_map(|(index, card)| {
            let hits = card_hits(card, term);
            if hits.is_empty() {
                None
            } else {
                Some(SearchMatch {
                    card_index: index,
                    card_title: card.title.clone(),
                    hits,
                })
            }
        })
        .collect()
}

fn card_hits(card: &Card, term: &str) -> Vec<String> {
    let mut hits = Vec::new();

    if card.title.to_lowercase().contains(term) {
        hits.push(format!("title '{}'", card.title));
    }
    if card.description.to_lowercase().contains(term) {
        hits.push("description".to_string());
    }

    for bookmark in &card.bookmarks {
        bookmark_hits(bookmark, term, &mut hits);
        for child in &bookmark.children {
            bookmark_hits(child, term, &mut hits);
        }
    }

    hits
}

fn bookmark_hits(bookmark: &Bookmark, term: &str, hits: &mut Vec<String>) {
    if bookmark.label.to_lowercase().contains(term)
        || bookmark.url.to_lowercase().contains(term)
        || bookmark
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
    {
        hits.push(format!("bookmark '{}'", bookmark.label));
    }
}
