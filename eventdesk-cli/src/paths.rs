//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "eventdesk";
const APPLICATION: &str = "eventdesk";

const LATEST_LOG: &str = "latest.log";
const PREVIOUS_LOG: &str = "previous.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/eventdesk` or `~/.cache/eventdesk`
/// - macOS: `~/Library/Caches/dev.eventdesk.eventdesk`
/// - Windows: `C:\Users\<User>\AppData\Local\eventdesk\eventdesk\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file, creating its directory.
pub fn log_file() -> Option<PathBuf> {
    let dir = cache_dir()?;
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join(LATEST_LOG))
}

/// Keeps one run of history: the last run's log becomes `previous.log`.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_in(&cache);
    }
}

fn rotate_in(dir: &Path) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(PREVIOUS_LOG));
    }
}
