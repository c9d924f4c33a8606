use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::TabdeckError;

/// The nine tile background patterns the dashboard renderer understands.
pub const VALID_PATTERNS: [&str; 9] = [
    "sky", "pink", "purple", "indigo", "green", "slate", "orange", "zinc", "brown",
];

pub const DEFAULT_PATTERN: &str = "slate";

/// How a bookmark's `icon` value is interpreted: a literal emoji glyph, a
/// filename under the local icon directory, or an absolute image URL.
///
/// Loading is lenient: an unrecognized value is preserved as `Unknown` for
/// the validator to report instead of rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconType {
    Emoji,
    Local,
    Url,
    Unknown(String),
}

impl IconType {
    pub fn as_str(&self) -> &str {
        match self {
            IconType::Emoji => "emoji",
            IconType::Local => "local",
            IconType::Url => "url",
            IconType::Unknown(value) => value,
        }
    }
}

impl Default for IconType {
    fn default() -> Self {
        IconType::Emoji
    }
}

impl Serialize for IconType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "emoji" => IconType::Emoji,
            "local" => IconType::Local,
            "url" => IconType::Url,
            _ => IconType::Unknown(value),
        })
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconType {
    type Err = TabdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emoji" => Ok(IconType::Emoji),
            "local" => Ok(IconType::Local),
            "url" => Ok(IconType::Url),
            other => Err(TabdeckError::Api(format!(
                "Invalid icon type '{}' (expected emoji, local, or url)",
                other
            ))),
        }
    }
}

/// A link entry owned by a card. Bookmarks with children act as expandable
/// parents and may use the sentinel url "#" instead of a navigable address.
/// Sub-bookmarks reuse this type but never own children of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "iconType")]
    pub icon_type: IconType,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Bookmark>,
}

impl Bookmark {
    /// Placeholder bookmark as created by the "add bookmark" action.
    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            label: "New Bookmark".to_string(),
            url: "https://".to_string(),
            icon_type: IconType::Emoji,
            icon: "🔗".to_string(),
            tags: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Placeholder sub-bookmark, identical apart from the label.
    pub fn sub_placeholder(id: String) -> Self {
        Self {
            label: "New Sub-Bookmark".to_string(),
            ..Self::placeholder(id)
        }
    }
}

/// One flip-tile: the root of a two-level bookmark tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

// Cards without the field render; only an explicit false disables.
fn default_enabled() -> bool {
    true
}

impl Card {
    /// Placeholder card as created by the "add card" action. Disabled cards
    /// are excluded from rendering but stay in the document, so `enabled`
    /// defaults to true.
    pub fn placeholder(id: String, order: i64) -> Self {
        Self {
            id,
            title: "New Card".to_string(),
            description: String::new(),
            pattern: DEFAULT_PATTERN.to_string(),
            enabled: true,
            order,
            bookmarks: Vec::new(),
        }
    }
}

/// The root aggregate: an ordered sequence of cards. `order` is a
/// user-visible field and not necessarily the array position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub cards: Vec<Card>,
}

impl Document {
    /// Every identifier in the document, in traversal order: for each card
    /// its id, then each bookmark's id, then each of that bookmark's
    /// sub-bookmark ids.
    pub fn collect_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for card in &self.cards {
            ids.push(card.id.clone());
            for bookmark in &card.bookmarks {
                ids.push(bookmark.id.clone());
                for child in &bookmark.children {
                    ids.push(child.id.clone());
                }
            }
        }
        ids
    }

    /// The same identifiers as an unordered collision set for the generator.
    pub fn id_set(&self) -> HashSet<String> {
        self.collect_ids().into_iter().collect()
    }
}

/// Identifiers under a single card, used when an edit session needs the
/// working copy's contribution to the collision set.
pub fn card_ids(card: &Card) -> Vec<String> {
    let mut ids = vec![card.id.clone()];
    for bookmark in &card.bookmarks {
        ids.push(bookmark.id.clone());
        for child in &bookmark.children {
            ids.push(child.id.clone());
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            cards: vec![Card {
                id: "dev".into(),
                title: "Dev".into(),
                description: String::new(),
                pattern: "sky".into(),
                enabled: true,
                order: 1,
                bookmarks: vec![Bookmark {
                    id: "gh".into(),
                    label: "GitHub".into(),
                    url: "https://github.com".into(),
                    icon_type: IconType::Emoji,
                    icon: "🐙".into(),
                    tags: vec!["code".into()],
                    children: vec![Bookmark {
                        id: "gh-prs".into(),
                        label: "Pull Requests".into(),
                        url: "https://github.com/pulls".into(),
                        icon_type: IconType::Emoji,
                        icon: "🔀".into(),
                        tags: Vec::new(),
                        children: Vec::new(),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn collects_ids_in_traversal_order() {
        let doc = sample_document();
        assert_eq!(doc.collect_ids(), vec!["dev", "gh", "gh-prs"]);
    }

    #[test]
    fn sub_bookmarks_serialize_without_children_key() {
        let doc = sample_document();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let child = &value["cards"][0]["bookmarks"][0]["children"][0];
        assert!(child.get("children").is_none());
        assert_eq!(child["iconType"], "emoji");
    }

    #[test]
    fn round_trip_preserves_fields_and_ordering() {
        let doc = sample_document();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.cards.len(), doc.cards.len());
        assert_eq!(parsed.collect_ids(), doc.collect_ids());
        assert_eq!(parsed.cards[0].pattern, "sky");
        assert_eq!(parsed.cards[0].bookmarks[0].tags, vec!["code"]);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let doc: Document =
            serde_json::from_str(r#"{"cards": [{"title": "A", "bookmarks": [{}]}]}"#).unwrap();
        let card = &doc.cards[0];
        assert_eq!(card.id, "");
        assert!(card.enabled);
        assert_eq!(card.order, 0);
        assert_eq!(card.pattern, "");

        let bookmark = &card.bookmarks[0];
        assert_eq!(bookmark.url, "");
        assert_eq!(bookmark.icon_type, IconType::Emoji);
    }

    #[test]
    fn unknown_icon_type_is_preserved_through_a_round_trip() {
        let raw = r#"{"id": "b", "label": "B", "url": "https://b.example", "iconType": "sprite", "icon": "x"}"#;
        let bookmark: Bookmark = serde_json::from_str(raw).unwrap();
        assert_eq!(bookmark.icon_type, IconType::Unknown("sprite".into()));

        let json = serde_json::to_string(&bookmark).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["iconType"], "sprite");
    }

    #[test]
    fn placeholder_defaults_match_editor_behavior() {
        let card = Card::placeholder("new-card".into(), 3);
        assert_eq!(card.title, "New Card");
        assert_eq!(card.pattern, "slate");
        assert!(card.enabled);
        assert_eq!(card.order, 3);

        let bookmark = Bookmark::placeholder("new-bookmark".into());
        assert_eq!(bookmark.url, "https://");
        assert_eq!(bookmark.icon_type, IconType::Emoji);

        let sub = Bookmark::sub_placeholder("new-sub-bookmark".into());
        assert_eq!(sub.label, "New Sub-Bookmark");
        assert!(sub.children.is_empty());
    }
}
