//! File-only `tracing` setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so events never go to stdout or stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogConfig, LogFormat};

/// Install the global subscriber.
///
/// Returns `None` when no log path is configured. The returned guard must be
/// kept alive until exit so buffered events are flushed.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.path.as_deref() else {
        return Ok(None);
    };

    let (dir, file) = split_path(path)?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create log directory {}", dir.display()))?;

    // RUST_LOG wins over DOTS_LOG_LEVEL.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .try_init(),
    }
    .context("a global tracing subscriber is already installed")?;

    Ok(Some(guard))
}

fn split_path(path: &Path) -> Result<(&Path, &Path)> {
    let file = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Ok((dir, Path::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_path() {
        assert!(init(&LogConfig::default()).unwrap().is_none());
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let (dir, file) = split_path(Path::new("dots.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(file, Path::new("dots.log"));

        let (dir, _) = split_path(Path::new("/tmp/dots/game.log")).unwrap();
        assert_eq!(dir, Path::new("/tmp/dots"));
        assert!(split_path(Path::new("/")).is_err());
    }
}
