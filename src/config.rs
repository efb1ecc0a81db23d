//! Configuration persistence for the board generator.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `words_file` when set.
pub const WORDS_ENV: &str = "CODENAMES_WORDS";

/// Application configuration that persists between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV word list to draw boards from.
    #[serde(default = "default_words_file")]
    pub words_file: PathBuf,

    /// The currently selected theme name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Title shown above the board.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_words_file() -> PathBuf {
    PathBuf::from("words.csv")
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_title() -> String {
    "Codenames".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_file: default_words_file(),
            theme: default_theme(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codenames")
            .join("config.toml")
    }

    /// Load config from disk, returning default if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Load config for a session. The returned path is where changes may be
    /// saved; it is `None` when an existing file could not be read, so a bad
    /// file is never overwritten with defaults.
    pub fn load_or_default(path: PathBuf) -> (Self, Option<PathBuf>) {
        match Self::load_from(&path) {
            Ok(config) => (config, Some(path)),
            Err(err) => {
                tracing::warn!("using default config, changes will not be saved: {err:#}");
                (Self::default(), None)
            }
        }
    }

    /// Save config to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Word list location, honouring the environment override.
    pub fn words_path(&self) -> PathBuf {
        Self::resolve_words_path(&self.words_file, std::env::var_os(WORDS_ENV))
    }

    fn resolve_words_path(configured: &Path, env: Option<std::ffi::OsString>) -> PathBuf {
        match env {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => configured.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.words_file, PathBuf::from("words.csv"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "words_file = \"/srv/samuel.csv\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.words_file, PathBuf::from("/srv/samuel.csv"));
        assert_eq!(config.theme, "default");
        assert_eq!(config.title, "Codenames");
    }

    #[test]
    fn save_creates_directories_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            theme: "kanagawa".to_string(),
            title: "Codenames 1–2 Samuel".to_string(),
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn unreadable_file_is_never_a_save_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = 3").unwrap();

        let (config, save_path) = Config::load_or_default(path.clone());
        assert_eq!(config, Config::default());
        assert_eq!(save_path, None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = 3");
    }

    #[test]
    fn readable_or_missing_file_can_be_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let (_, save_path) = Config::load_or_default(path.clone());
        assert_eq!(save_path.as_deref(), Some(path.as_path()));

        fs::write(&path, "theme = \"kanagawa\"\n").unwrap();
        let (config, save_path) = Config::load_or_default(path.clone());
        assert_eq!(config.theme, "kanagawa");
        assert_eq!(save_path, Some(path));
    }

    #[test]
    fn env_override_wins_unless_empty() {
        let configured = Path::new("words.csv");
        assert_eq!(
            Config::resolve_words_path(configured, Some("other.csv".into())),
            PathBuf::from("other.csv")
        );
        assert_eq!(
            Config::resolve_words_path(configured, Some("".into())),
            PathBuf::from("words.csv")
        );
        assert_eq!(
            Config::resolve_words_path(configured, None),
            PathBuf::from("words.csv")
        );
    }
}
