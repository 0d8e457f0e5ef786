//! Logging and tracing setup.
//!
//! Events go to two sinks:
//! - stderr, compact and human-readable
//! - a JSONL file written off-thread through `tracing-appender`
//!
//! The log file location is resolved in this order:
//! 1. `REVIEW_PULSE_LOG_PATH` (explicit file)
//! 2. `REVIEW_PULSE_LOG_DIR` (directory; file is `review-pulse.jsonl`)
//! 3. `log_dir` from the loaded configuration
//! 4. the platform local data directory, under `logs/`
//!
//! A log file that cannot be opened disables the file sink; stderr logging
//! still works.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "REVIEW_PULSE_LOG_PATH";
const LOG_DIR_ENV: &str = "REVIEW_PULSE_LOG_DIR";
const LOG_FILE_NAME: &str = "review-pulse.jsonl";

/// Where the JSONL log file goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Resolved log file, or `None` to log to stderr only.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, then `config_log_dir`,
    /// then the platform default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
            default_log_dir(),
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = env_path.filter(|p| !p.as_os_str().is_empty()).or_else(|| {
            env_dir
                .filter(|d| !d.as_os_str().is_empty())
                .or(config_dir)
                .or(default_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        });
        Self { log_file }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "review-pulse")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` means errors only, each
/// `-v` raises verbosity one step, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// events are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match config.log_file.as_deref().and_then(open_log_file) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn open_log_file(path: &Path) -> Option<RollingFileAppender> {
    let dir = path.parent().filter(|d| !d.as_os_str().is_empty())?;
    let name = path.file_name()?.to_str()?;
    std::fs::create_dir_all(dir).ok()?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/x.jsonl")),
            Some(PathBuf::from("/var/log")),
            Some(PathBuf::from("/etc")),
            None,
        );
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/x.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/var/log/rp")),
            Some(PathBuf::from("/etc/rp")),
            Some(PathBuf::from("/home/u/.local/share/rp/logs")),
        );
        assert_eq!(
            cfg.log_file,
            Some(PathBuf::from("/var/log/rp").join(LOG_FILE_NAME))
        );
    }

    #[test]
    fn falls_back_to_config_then_default() {
        let from_config =
            ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/etc/rp")), None);
        assert_eq!(
            from_config.log_file,
            Some(PathBuf::from("/etc/rp").join(LOG_FILE_NAME))
        );

        let none = ObservabilityConfig::resolve(None, Some(PathBuf::new()), None, None);
        assert!(none.log_file.is_none());
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_directive(true, 3, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "info"), "debug");
        assert_eq!(level_directive(false, 2, "info"), "trace");
    }
}
