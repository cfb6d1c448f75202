//! Logging for unbiasctl
//!
//! The TUI owns the terminal, so interactive sessions log to a file; one-shot
//! commands log to stderr. RUST_LOG overrides the default level.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

/// Discover log file path with fallback chain
///
/// Priority:
/// 1. $UNBIASCTL_LOG_FILE environment variable (explicit override)
/// 2. $XDG_STATE_HOME/unbias/ctl.log (XDG standard)
/// 3. ~/.local/state/unbias/ctl.log (XDG fallback)
pub fn discover_log_path() -> Option<PathBuf> {
    discover_log_path_from(|key| std::env::var(key).ok())
}

pub fn discover_log_path_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("UNBIASCTL_LOG_FILE").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    if let Some(state) = lookup("XDG_STATE_HOME").filter(|p| !p.is_empty()) {
        return Some(Path::new(&state).join("unbias").join("ctl.log"));
    }

    lookup("HOME")
        .filter(|p| !p.is_empty())
        .map(|home| Path::new(&home).join(".local/state/unbias/ctl.log"))
}

fn default_filter(target: LogTarget, verbose: bool) -> &'static str {
    match (target, verbose) {
        (_, true) => "debug",
        (LogTarget::File, false) => "info",
        (LogTarget::Stderr, false) => "warn",
    }
}

/// Install the global subscriber; returns the log file when one is used
pub fn init(target: LogTarget, verbose: bool) -> Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(target, verbose)));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            Ok(None)
        }
        LogTarget::File => {
            let opened = discover_log_path().and_then(|path| open_log_file(&path).map(|f| (path, f)));

            match opened {
                Some((path, file)) => {
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .try_init()
                        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
                    Ok(Some(path))
                }
                None => {
                    // Nowhere safe to write; stderr would corrupt the TUI
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_writer(std::io::sink)
                        .try_init()
                        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
                    Ok(None)
                }
            }
        }
    }
}

fn open_log_file(path: &Path) -> Option<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
