//! Log file setup.
//!
//! The terminal belongs to the TUI, so logs only ever go to a file. Logging
//! stays off unless a file is configured or `RUST_LOG` is set.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Paths;
use crate::error::PomoError;

/// Pick the log file: an explicit path wins, otherwise the default location
/// when `RUST_LOG` asks for logs.
///
/// # Errors
///
/// Returns `PomoError::Logging` if the default log directory cannot be created.
pub fn resolve_log_file(
    explicit: Option<&Path>,
    rust_log_set: bool,
) -> Result<Option<PathBuf>, PomoError> {
    match explicit {
        Some(path) => Ok(Some(path.to_path_buf())),
        None if rust_log_set => {
            let paths = Paths::default();
            paths
                .ensure_dirs()
                .map_err(|e| PomoError::Logging(e.to_string()))?;
            Ok(Some(paths.log_file))
        }
        None => Ok(None),
    }
}

/// Install the global subscriber writing to `path`.
///
/// # Errors
///
/// Returns `PomoError::Logging` if the file cannot be opened or a subscriber
/// is already set.
pub fn init(path: &Path) -> Result<(), PomoError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PomoError::Logging(format!("Failed to open log file {}: {e}", path.display()))
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| PomoError::Logging(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/pomotui-test.log");
        assert_eq!(
            resolve_log_file(Some(&path), true).unwrap(),
            Some(path.clone())
        );
        assert_eq!(resolve_log_file(Some(&path), false).unwrap(), Some(path));
    }

    #[test]
    fn test_no_path_no_rust_log_means_off() {
        assert_eq!(resolve_log_file(None, false).unwrap(), None);
    }

    #[test]
    fn test_init_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("pomotui.log");
        let err = init(&path).unwrap_err();
        assert!(matches!(err, PomoError::Logging(_)));
        assert!(!err.is_startup());
    }
}
