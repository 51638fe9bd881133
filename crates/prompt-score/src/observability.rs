//! Logging setup: human-readable stderr plus a JSONL log file.
//!
//! The console only shows warnings unless `-v` is given, so scoring output on
//! stdout stays clean. The file layer records everything the env filter allows.

use std::path::PathBuf;

use anyhow::Context;
use prompt_score_core::config::user_data_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "PROMPT_SCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "PROMPT_SCORE_LOG_DIR";
const LOG_FILE_NAME: &str = "prompt-score.jsonl";

/// Where JSONL logs are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file path (wins over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for the default log file name.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `PROMPT_SCORE_LOG_PATH` / `PROMPT_SCORE_LOG_DIR`, falling back to
    /// the configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Directory and file name for the log file, if any location is known.
    fn log_target(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let name = path.file_name()?.to_string_lossy().into_owned();
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            return Some((dir, name));
        }
        let dir = match self.log_dir {
            Some(ref dir) => dir.clone(),
            None => user_data_dir()?.join("logs").into_std_path_buf(),
        };
        Some((dir, LOG_FILE_NAME.to_string()))
    }
}

/// Keeps the background log writer alive; drop it last.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Build the filter for the log file.
///
/// `RUST_LOG` wins; otherwise `-q`/`-v`, then the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(flag_level(quiet, verbose, default_level)))
}

fn flag_level(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        _ => "trace",
    }
}

/// Level shown on stderr.
pub const fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// A log directory that cannot be created disables file logging rather than
/// failing the command.
pub fn init_observability(
    config: &ObservabilityConfig,
    file_filter: EnvFilter,
    console: LevelFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console);

    let (file_layer, guard) = match config.log_target() {
        Some((dir, name)) if std::fs::create_dir_all(&dir).is_ok() => {
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: guard })
}
