//! Logging setup
//!
//! The terminal belongs to the UI, so tracing output goes to a file.
//! `RUST_LOG` picks the filter; the default is `info`.

use crate::{MyHardError, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to `path` (appending)
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MyHardError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            MyHardError::LoggingError(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .map_err(|e| MyHardError::LoggingError(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // One test only: the global subscriber can be installed once per process
    #[test]
    fn test_init_creates_log_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("logs").join("myhard.log");

        init(&path).expect("first init");
        assert!(path.exists());

        // A second global subscriber is refused
        assert!(matches!(init(&path), Err(MyHardError::LoggingError(_))));
    }
}
