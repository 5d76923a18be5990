//! Log file locations
//!
//! Logs are stored in the platform state directory when there is one
//! (`~/.local/state/abtree-viewer/logs/` on Linux) and in the cache
//! directory otherwise. Each process writes its own PID-named file so
//! concurrent viewers do not clobber each other.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR: &str = "abtree-viewer";

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// As a last resort, falls back to the system temp directory.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let fallback = std::env::temp_dir().join("abtree-viewer-logs");
        let dir = platform_log_dir().unwrap_or_else(|| fallback.clone());

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return fallback;
        }

        dir
    })
}

fn platform_log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|base| base.join(APP_DIR).join("logs"))
}

/// Get the path for the log file of this process.
///
/// Returns `{log_dir}/abtree-viewer-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(log_file_name(std::process::id()))
}

fn log_file_name(pid: u32) -> String {
    format!("{APP_DIR}-{pid}.log")
}

/// Print the directories the viewer reads from and writes to
pub fn print_all_paths() {
    match crate::config::Config::default_path() {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: (no config directory on this platform)"),
    }
    println!("Logs:   {}", log_dir().display());
}
