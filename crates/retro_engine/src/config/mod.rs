//! Configuration system
//!
//! [`EngineConfig`] can be loaded from TOML or RON; every field has a
//! default so partial files are accepted.

pub use serde::{Serialize, Deserialize};

use crate::debug::DEFAULT_FALLBACK_MESSAGE;
use crate::foundation::math::{colors, Color};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Frame loop behaviour
    pub frame: FrameConfig,
    /// Debug overlay settings
    pub overlay: OverlayConfig,
    /// Ambient light colour at startup
    pub ambient_light: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            frame: FrameConfig::default(),
            overlay: OverlayConfig::default(),
            ambient_light: Color::zeros(),
        }
    }
}

impl Config for EngineConfig {}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Stop `Engine::run` after this many ticks (unbounded when `None`)
    pub max_frames: Option<u64>,
    /// Colour the backend clears to at the start of every draw phase
    pub clear_color: Color,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frames: None,
            clear_color: colors::black(),
        }
    }
}

/// Debug overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Font asset loaded once at startup
    pub font: String,
    /// Vertical distance between overlay lines, in pixels
    pub line_height: f32,
    /// Line shown for one frame when an overlay line fails to render
    pub fallback_message: String,
    /// Append the frame's elapsed milliseconds every frame
    pub show_frame_time: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            font: "bebas_neue".to_string(),
            line_height: 12.0,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            show_frame_time: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overlay_config() {
        let config = EngineConfig::default();
        assert_eq!(config.overlay.font, "bebas_neue");
        assert_eq!(config.overlay.line_height, 12.0);
        assert!(config.overlay.show_frame_time);
        assert_eq!(config.overlay.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert_eq!(config.frame.max_frames, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str(
            "[frame]\nmax_frames = 120\n\n[overlay]\nshow_frame_time = false\n",
        )
        .unwrap();
        assert_eq!(config.frame.max_frames, Some(120));
        assert!(!config.overlay.show_frame_time);
        assert_eq!(config.overlay.line_height, 12.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_ron_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("retro_engine_config_{}.ron", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let mut config = EngineConfig::default();
        config.logging.level = "debug".to_string();
        config.frame.max_frames = Some(3);
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.frame.max_frames, Some(3));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join(format!("retro_engine_config_{}.ini", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        std::fs::write(&path, "[frame]\nmax_frames = 3\n").unwrap();

        let result = EngineConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(p)) if p == path));
        assert!(matches!(
            EngineConfig::default().save_to_file("settings.ini"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
