//! Runner configuration.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub track_completion: bool,
    #[serde(default)]
    pub show_completion: bool,
    #[serde(default)]
    pub require_complete_to_exit: bool,
    #[serde(default = "default_menus_dir")]
    pub menus_dir: PathBuf,
}

fn default_menus_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numenu")
        .join("menus")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track_completion: false,
            show_completion: false,
            require_complete_to_exit: false,
            menus_dir: default_menus_dir(),
        }
    }
}

impl Config {
    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default location (config/default.toml) or fall back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from("config/default.toml");
        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        Ok(Config::default())
    }

    /// Resolve a menu path given on the command line.
    ///
    /// Relative paths that do not exist in the working directory are looked
    /// up in `menus_dir`, with a `.json` extension added when missing.
    pub fn resolve_menu_path(&self, menu: &Path) -> PathBuf {
        if menu.is_absolute() || menu.exists() {
            return menu.to_path_buf();
        }

        let candidate = self.menus_dir.join(menu);
        if candidate.exists() {
            return candidate;
        }

        if candidate.extension().is_none() {
            let with_ext = candidate.with_extension("json");
            if with_ext.exists() {
                return with_ext;
            }
        }

        menu.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("track_completion = true").unwrap();

        assert!(config.track_completion);
        assert!(!config.show_completion);
        assert!(!config.require_complete_to_exit);
        assert_eq!(config.menus_dir, default_menus_dir());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numenu.toml");
        std::fs::write(
            &path,
            "show_completion = true\nrequire_complete_to_exit = true\nmenus_dir = \"/tmp/menus\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.show_completion);
        assert!(config.require_complete_to_exit);
        assert_eq!(config.menus_dir, PathBuf::from("/tmp/menus"));
    }

    #[test]
    fn test_resolve_falls_back_to_menus_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("main.json"), "{}").unwrap();
        let config = Config {
            menus_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        };

        assert_eq!(
            config.resolve_menu_path(Path::new("main")),
            temp_dir.path().join("main.json")
        );
        assert_eq!(
            config.resolve_menu_path(Path::new("main.json")),
            temp_dir.path().join("main.json")
        );
    }

    #[test]
    fn test_resolve_keeps_unknown_relative_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            menus_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        };

        assert_eq!(
            config.resolve_menu_path(Path::new("nowhere")),
            PathBuf::from("nowhere")
        );
    }
}
