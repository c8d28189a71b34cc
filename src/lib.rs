//! MyHard - a three-screen terminal app
//!
//! A start screen with an animated like icon, a static profile view and a
//! profile edit placeholder, wired together by a stack-based router.

use std::fmt;

pub mod animation;
pub mod app;
pub mod config;
pub mod logging;
pub mod ui;

// Common error types
#[derive(Debug)]
pub enum MyHardError {
    /// Terminal or filesystem I/O failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log sink could not be installed
    LoggingError(String),
}

impl fmt::Display for MyHardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MyHardError::IoError(err) => write!(f, "I/O error: {}", err),
            MyHardError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MyHardError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            MyHardError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for MyHardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MyHardError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MyHardError {
    fn from(err: std::io::Error) -> Self {
        MyHardError::IoError(err)
    }
}

impl From<toml::de::Error> for MyHardError {
    fn from(err: toml::de::Error) -> Self {
        MyHardError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MyHardError {
    fn from(err: toml::ser::Error) -> Self {
        MyHardError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for MyHard operations
pub type Result<T> = std::result::Result<T, MyHardError>;

/// Error reporting helpers
pub mod error {
    use super::MyHardError;

    /// Convert error to a one-line message with a hint, printed after the
    /// terminal has been restored
    pub fn user_friendly_message(error: &MyHardError) -> String {
        match error {
            MyHardError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check access to the config and log directories.".to_string()
            }
            MyHardError::IoError(_) => {
                "Terminal I/O failed. Make sure myhard runs in an interactive terminal."
                    .to_string()
            }
            MyHardError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your myhard.toml.", msg)
            }
            MyHardError::TuiError(msg) => format!("Display error: {}", msg),
            MyHardError::LoggingError(msg) => {
                format!("Could not open the log file: {}. Set log_file in myhard.toml.", msg)
            }
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "myhard";
pub const CONFIG_FILE: &str = "myhard.toml";
pub const LOG_FILE: &str = "myhard.log";
