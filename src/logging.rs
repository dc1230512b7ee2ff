use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Overrides the file filter; falls back to `RUST_LOG`, then `depviz=info`.
const FILTER_ENV: &str = "DEPVIZ_LOG";
const DEFAULT_FILTER: &str = "depviz=info";
const LOG_FILE_PREFIX: &str = "depviz.log";

/// Keeps the file writer flushing until the binary exits.
pub struct LoggingGuard {
    _file: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Full trace to a daily file under the depviz cache dir; warnings and
/// errors (a store used outside its provider, unreadable settings) also go
/// to stderr so the headless run surfaces them.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;

    let (file_writer, file_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(file_filter());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "depviz panicked");
    }));

    tracing::info!(log_dir = %log_dir.display(), "logging to file");
    Some(LoggingGuard {
        _file: file_guard,
        log_dir,
    })
}

fn file_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Cache dir first; a temp dir when there is no cache dir or it is not
/// writable.
fn resolve_log_dir() -> Option<PathBuf> {
    depviz::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| {
            let dir = std::env::temp_dir().join("depviz").join("logs");
            std::fs::create_dir_all(&dir).map(|()| dir)
        })
        .ok()
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
