//! File-backed `tracing` sink.
//!
//! The terminal UI owns stdout, so log output goes to a file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

const DEFAULT_FILTER: &str = "info";

/// Build the level filter from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber appending plain-text events to `path`.
pub fn init_logging(path: &Path) -> Result<(), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("game.log");
        assert!(matches!(
            init_logging(&path),
            Err(LoggingError::FileOpen { .. })
        ));
    }

    #[test]
    fn test_init_writes_events_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");

        init_logging(&path).unwrap();
        tracing::error!("logging test event");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging test event"));

        // A second global subscriber is refused
        assert!(matches!(
            init_logging(&path),
            Err(LoggingError::Install(_))
        ));
    }
}
