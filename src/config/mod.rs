//! Configuration management module
//!
//! Handles loading, saving, and validation of the application settings:
//! frame rate, animation timing, theme, log location and mouse support.

use crate::animation::{Easing, Tween, DEFAULT_DURATION_MS};
use crate::ui::theme::ThemeKind;
use crate::{MyHardError, Result, APP_NAME, CONFIG_FILE, LOG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MAX_FRAME_INTERVAL: Duration = Duration::from_secs(1);
const MAX_ANIMATION_DURATION: Duration = Duration::from_secs(10);

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Time between rendered frames while something is animating
    #[serde(with = "human_duration")]
    pub frame_interval: Duration,
    /// Colour palette
    pub theme: ThemeKind,
    /// Capture mouse clicks
    pub mouse: bool,
    /// Log destination; the platform cache directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Tween settings for screen decorations
    pub animation: AnimationConfig,
}

/// Animation timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    #[serde(with = "human_duration")]
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            easing: Easing::default(),
        }
    }
}

impl AnimationConfig {
    pub fn tween(&self) -> Tween {
        Tween::new(self.duration, self.easing)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16), // ~60 FPS
            theme: ThemeKind::default(),
            mouse: true,
            log_file: None,
            animation: AnimationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.frame_interval.is_zero() {
            return Err(MyHardError::ConfigError(
                "Frame interval must be greater than 0".to_string(),
            ));
        }

        if self.frame_interval > MAX_FRAME_INTERVAL {
            return Err(MyHardError::ConfigError(format!(
                "Frame interval too long: {} (max: {})",
                humantime::format_duration(self.frame_interval),
                humantime::format_duration(MAX_FRAME_INTERVAL)
            )));
        }

        if self.animation.duration.is_zero() {
            return Err(MyHardError::ConfigError(
                "Animation duration must be greater than 0".to_string(),
            ));
        }

        if self.animation.duration > MAX_ANIMATION_DURATION {
            return Err(MyHardError::ConfigError(format!(
                "Animation duration too long: {} (max: {})",
                humantime::format_duration(self.animation.duration),
                humantime::format_duration(MAX_ANIMATION_DURATION)
            )));
        }

        Ok(())
    }

    /// Set the frame interval
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: ThemeKind) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable mouse capture
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Set the log file location
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Set the animation duration
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation.duration = duration;
        self
    }

    /// Set the animation easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animation.easing = easing;
        self
    }

    /// Load configuration from the standard config file location.
    /// On first launch the defaults are written there to be edited.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_or_init(&config_path)
    }

    /// Load from `config_path`, writing the defaults there if it is missing.
    /// A failed write is logged, not returned.
    pub fn load_or_init(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            match config.save_to(config_path) {
                Ok(()) => tracing::info!(path = %config_path.display(), "wrote default config"),
                Err(e) => {
                    tracing::warn!(path = %config_path.display(), "could not write default config: {}", e)
                }
            }
            return Ok(config);
        }
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file
    /// Returns default configuration if file doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            MyHardError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            MyHardError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Validate before saving
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MyHardError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            MyHardError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/myhard/myhard.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MyHardError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Where logs go: `log_file` if set, else $CACHE_HOME/myhard/myhard.log,
    /// else the temp directory
    pub fn log_file_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME)
                .join(LOG_FILE),
        }
    }
}

/// Durations as human-readable strings such as "500ms" or "1s 200ms"
mod human_duration {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(D::Error::custom)
    }
}
