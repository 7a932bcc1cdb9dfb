//! File logging for the terminal UI.
//!
//! The UI owns stdout and stderr while it runs, so log events go to a file.
//! `RUST_LOG` selects the filter; the default is `info`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{TuiError, TuiResult};

/// Name of the log file inside the log directory.
pub const LOG_FILE: &str = "tenzies-tui.log";

/// Install a file subscriber writing into `dir`, or into
/// [`default_log_dir`] when no directory is given.
///
/// The returned guard flushes the writer when dropped; keep it alive for the
/// whole run.
pub fn init(dir: Option<&Path>) -> TuiResult<WorkerGuard> {
    let dir = resolve_log_dir(dir);
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))?;

    tracing::info!(file = %dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}

/// The directory logs go to: `dir` if given, otherwise the default.
pub fn resolve_log_dir(dir: Option<&Path>) -> PathBuf {
    dir.map_or_else(default_log_dir, Path::to_path_buf)
}

/// Platform cache directory for logs.
///
/// - Linux: `~/.cache/tenzies/logs` (or `$XDG_CACHE_HOME/tenzies/logs`)
/// - macOS: `~/Library/Caches/tenzies/logs`
/// - Windows: `%LOCALAPPDATA%\tenzies\cache\logs`
/// - Fallback: `<temp>/tenzies/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tenzies")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("tenzies"))
        .join("logs")
}
