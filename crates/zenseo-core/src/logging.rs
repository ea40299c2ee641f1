//! Structured logging for the `zenseo` binary.
//!
//! Events go to `~/.local/state/zenseo/zenseo.log` when the state dir is
//! writable and to stderr otherwise. `RUST_LOG` wins over the `-v` count.

use crate::error::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "zenseo.log";

/// Filter used when `RUST_LOG` is unset, by number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,zenseo=info,zenseo_core=info",
        1 => "info,zenseo=debug,zenseo_core=debug",
        _ => "debug,zenseo=trace,zenseo_core=trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `zenseo.log` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        LogTarget::File(dir.join(LOG_FILE_NAME))
    }

    /// `zenseo.log` in the XDG state dir, which is created if missing.
    pub fn xdg_state() -> Result<Self> {
        let dirs = xdg::BaseDirectories::with_prefix("zenseo")?;
        let path = dirs
            .place_state_file(LOG_FILE_NAME)
            .map_err(|e| Error::io(dirs.get_state_home(), e))?;
        Ok(LogTarget::File(path))
    }
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))
}

/// Installs the global subscriber writing to `target`.
///
/// Fails when the log file cannot be opened or a subscriber is already set.
pub fn init(target: &LogTarget, verbosity: u8) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(verbosity));
    let installed = match target {
        LogTarget::File(path) => {
            let file = open_append(path)?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| Error::LoggingInit(e.to_string()))?;

    tracing::debug!(?target, verbosity, "logging initialized");
    Ok(())
}

/// Logs to the XDG state file, or to stderr when that is unusable. Returns
/// the target actually in use.
pub fn init_with_fallback(verbosity: u8) -> LogTarget {
    match LogTarget::xdg_state().and_then(|target| init(&target, verbosity).map(|()| target)) {
        Ok(target) => target,
        Err(err) => {
            // a read-only state dir only costs the log file
            let _ = init(&LogTarget::Stderr, verbosity);
            tracing::warn!("log file unavailable, logging to stderr: {err}");
            LogTarget::Stderr
        }
    }
}
