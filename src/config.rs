use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const APP_DIR_NAME: &str = "ToaTime";

/// Whose spot animations the classifier inspects when no marker decides the callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationScope {
    /// Only the local player (sight granted / sight removed).
    #[default]
    LocalPlayer,
    /// Every raid participant, including the double damage animation.
    AllParticipants,
}

fn default_volume() -> i32 {
    100
}

fn default_chat_echo() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Cue volume (0-100). Mapped to a gain offset of -100..0 dB.
    #[serde(default = "default_volume")]
    pub volume: i32,

    /// Animation inspection policy
    #[serde(default)]
    pub animation_scope: AnimationScope,

    /// Echo pillars/vents callouts to public chat
    #[serde(default = "default_chat_echo")]
    pub chat_echo: bool,

    /// Directory holding `<cue>.wav` files. Falls back to the app config dir.
    #[serde(default)]
    pub sound_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            animation_scope: AnimationScope::default(),
            chat_echo: default_chat_echo(),
            sound_dir: None,
        }
    }
}

impl Config {
    pub const MIN_VOLUME: i32 = 0;
    pub const MAX_VOLUME: i32 = 100;

    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path().ok_or_else(|| {
            ConfigError::Invalid("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, writing defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!("Created default config at: {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        if let Err(e) = config.validate() {
            // Out of range volume is clamped at playback time, keep going.
            tracing::warn!("{}", e);
        }

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to the platform-specific config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or_else(|| {
            ConfigError::Invalid("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(path, json).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_VOLUME..=Self::MAX_VOLUME).contains(&self.volume) {
            return Err(ConfigError::Invalid(format!(
                "volume {} outside {}-{}",
                self.volume,
                Self::MIN_VOLUME,
                Self::MAX_VOLUME
            )));
        }
        Ok(())
    }

    /// Base directory for config, logs and sounds
    pub fn app_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::app_dir().map(|dir| dir.join("config.json"))
    }

    /// Directory cue files are resolved from
    pub fn sound_dir(&self) -> PathBuf {
        self.sound_dir
            .clone()
            .or_else(|| Self::app_dir().map(|dir| dir.join("sounds")))
            .unwrap_or_else(|| PathBuf::from("sounds"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("toa-time-config-{}-{}", name, std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.volume, 100);
        assert_eq!(config.animation_scope, AnimationScope::LocalPlayer);
        assert!(config.chat_echo);
        assert!(config.sound_dir.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"volume": 40}"#).unwrap();
        assert_eq!(config.volume, 40);
        assert!(config.chat_echo);
        assert_eq!(config.animation_scope, AnimationScope::LocalPlayer);
    }

    #[test]
    fn test_scope_serializes_snake_case() {
        let json = serde_json::to_string(&AnimationScope::AllParticipants).unwrap();
        assert_eq!(json, "\"all_participants\"");
    }

    #[test]
    fn test_validate_volume_range() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.volume = 101;
        assert!(config.validate().is_err());

        config.volume = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let path = temp_config_path("create");
        let _ = fs::remove_file(&path);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_config_path("reload");
        let config = Config {
            volume: 25,
            animation_scope: AnimationScope::AllParticipants,
            chat_echo: false,
            sound_dir: Some(PathBuf::from("/tmp/cues")),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_explicit_sound_dir_wins() {
        let config = Config {
            sound_dir: Some(PathBuf::from("/opt/cues")),
            ..Config::default()
        };
        assert_eq!(config.sound_dir(), PathBuf::from("/opt/cues"));
    }
}
