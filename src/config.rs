//! Game configuration loaded from `assets/config/game.json`
//!
//! Every field has a default, so the file may list only what it changes.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "NetScape!".to_string(),
            width: 640,
            height: 480,
        }
    }
}

/// Files loaded when a new game starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player_sprite: PathBuf,
    pub tile_atlas: PathBuf,
    pub tile_map: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            player_sprite: PathBuf::from("assets/images/player.png"),
            tile_atlas: PathBuf::from("assets/images/PixelOffice.png"),
            tile_map: PathBuf::from("assets/maps/floors/floor1.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: f64,
    pub start_y: f64,
    /// Pixels moved per frame on each axis
    pub speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            start_x: 100.0,
            start_y: 100.0,
            speed: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetPaths,
    pub player: PlayerConfig,
    pub show_debug_overlay: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            assets: AssetPaths::default(),
            player: PlayerConfig::default(),
            show_debug_overlay: true,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| GameError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config, falling back to defaults when it is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config_loaded");
                config
            }
            Err(GameError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "config_missing_using_defaults");
                Self::default()
            }
            Err(err) => {
                tracing::error!(error = %err, "config_invalid_using_defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.player.speed, 2.0);
        assert_eq!((config.player.start_x, config.player.start_y), (100.0, 100.0));
        assert!(config.show_debug_overlay);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "player": {{ "speed": 3.5 }}, "show_debug_overlay": false }}"#
        )
        .unwrap();

        let config = GameConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.player.speed, 3.5);
        assert_eq!(config.player.start_x, 100.0);
        assert!(!config.show_debug_overlay);
        assert_eq!(config.assets, AssetPaths::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("game.json"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"window\": 12 }}").unwrap();

        assert!(matches!(
            GameConfig::load_from_file(file.path()),
            Err(GameError::Json { .. })
        ));
        assert_eq!(GameConfig::load_or_default(file.path()), GameConfig::default());
    }
}
