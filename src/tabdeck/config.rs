use crate::error::{Result, TabdeckError};
use crate::model::{Bookmark, IconType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ICON_DIR: &str = "icons";

/// Configuration for tabdeck, stored as config.json next to the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckConfig {
    /// Directory holding local icon files, relative to the document unless
    /// absolute (e.g. "icons", "assets/icons")
    #[serde(default = "default_icon_dir")]
    pub icon_dir: String,
}

fn default_icon_dir() -> String {
    DEFAULT_ICON_DIR.to_string()
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            icon_dir: DEFAULT_ICON_DIR.to_string(),
        }
    }
}

impl DeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TabdeckError::Io)?;
        let config: DeckConfig =
            serde_json::from_str(&content).map_err(TabdeckError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TabdeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TabdeckError::Serialization)?;
        fs::write(config_path, content).map_err(TabdeckError::Io)?;
        Ok(())
    }

    /// Where a bookmark's icon actually lives. Emoji icons render as-is and
    /// url icons point elsewhere, so only local icons resolve to a path.
    pub fn resolve_icon(&self, document_dir: &Path, bookmark: &Bookmark) -> Option<PathBuf> {
        if bookmark.icon_type != IconType::Local || bookmark.icon.is_empty() {
            return None;
        }
        let icon_dir = Path::new(&self.icon_dir);
        if icon_dir.is_absolute() {
            Some(icon_dir.join(&bookmark.icon))
        } else {
            Some(document_dir.join(icon_dir).join(&bookmark.icon))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = DeckConfig::default();
        assert_eq!(config.icon_dir, "icons");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = env::temp_dir().join("tabdeck_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = DeckConfig::load(&temp_dir).unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = env::temp_dir().join("tabdeck_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let config = DeckConfig {
            icon_dir: "assets/icons".to_string(),
        };
        config.save(&temp_dir).unwrap();

        let loaded = DeckConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded.icon_dir, "assets/icons");

        // Cleanup
        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_resolve_icon_only_for_local() {
        let config = DeckConfig::default();
        let base = Path::new("/deck");

        let mut bookmark = Bookmark::placeholder("b".to_string());
        assert_eq!(config.resolve_icon(base, &bookmark), None);

        bookmark.icon_type = IconType::Local;
        bookmark.icon = "gh.png".to_string();
        assert_eq!(
            config.resolve_icon(base, &bookmark),
            Some(PathBuf::from("/deck/icons/gh.png"))
        );
    }
}
