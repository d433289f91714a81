//! Logging setup for the elastic tabstops tools.
//!
//! Logs always go to a file at `warn` level (or lower if a filter is set).
//! Stderr logging is enabled when `ELASTIC_LOG` or `RUST_LOG` is set, or in debug builds.
//!
//! ## Environment Variables
//!
//! 1. **`ELASTIC_LOG`** (highest priority) - level for the elastic crates, or a full filter
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for elastic crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/elastic/logs/elastic-<pid>.log`
//! - macOS: `~/Library/Application Support/elastic/logs/elastic-12345.log`
//! - Linux: `~/.local/share/elastic/logs/elastic-12345.log`
//!
//! Override with [`LogConfig::log_file_path`]: a path with an extension is used as the
//! file itself, anything else as the directory.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Crates whose events are raised to the requested level.
const ELASTIC_CRATES: &[&str] = &["elastic_tabstops", "elastic_bin", "elastic_log"];

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// Filters follow the priority described in the module docs:
/// `ELASTIC_LOG` > `RUST_LOG` > default settings.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, BoxError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_file_filter());

    let stderr_enabled =
        env::var("ELASTIC_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);

    let stderr_layer = if stderr_enabled {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(create_filter()),
        )
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize logging for tests.
///
/// Stderr only (no file output). Will not crash if called multiple times or if logging
/// is already initialized by another test.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("elastic-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("elastic")
        .join("logs");

    (dir, filename)
}

/// File filter: uses the user-specified filter if set, otherwise `warn`.
fn create_file_filter() -> EnvFilter {
    if env::var("ELASTIC_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    EnvFilter::new("warn")
}

/// Build the [`EnvFilter`] from `ELASTIC_LOG`, then `RUST_LOG`, then defaults.
fn create_filter() -> EnvFilter {
    if let Ok(elastic_log) = env::var("ELASTIC_LOG") {
        return expand_elastic_log(&elastic_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    expand_elastic_log("info")
}

/// Expand an `ELASTIC_LOG` value into a full filter string.
///
/// - `debug` becomes `warn,elastic_tabstops=debug,elastic_bin=debug,...`
/// - `elastic_tabstops=trace` (anything with `=`, `:` or `,`) is used as-is
fn expand_elastic_log(elastic_log: &str) -> EnvFilter {
    EnvFilter::new(filter_directives(elastic_log))
}

fn filter_directives(elastic_log: &str) -> String {
    if elastic_log.contains('=') || elastic_log.contains(':') || elastic_log.contains(',') {
        return elastic_log.to_string();
    }

    let mut directives = String::from("warn");
    for name in ELASTIC_CRATES {
        directives.push_str(&format!(",{name}={elastic_log}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn plain_level_expands_to_every_crate() {
        assert_eq!(
            filter_directives("debug"),
            "warn,elastic_tabstops=debug,elastic_bin=debug,elastic_log=debug"
        );
    }

    #[test]
    fn advanced_filters_pass_through() {
        assert_eq!(
            filter_directives("elastic_tabstops=trace"),
            "elastic_tabstops=trace"
        );
        assert_eq!(filter_directives("info,ropey=warn"), "info,ropey=warn");
    }

    #[test]
    fn file_override_with_extension() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("custom.log");
        let (dir, name) = resolve_log_path(Some(path));
        assert_eq!(dir, tmp.path());
        assert_eq!(name, "custom.log");
    }

    #[test]
    fn directory_override() {
        let tmp = tempdir().unwrap();
        let (dir, name) = resolve_log_path(Some(tmp.path().to_path_buf()));
        assert_eq!(dir, tmp.path());
        assert!(name.starts_with("elastic-"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn default_location() {
        let (dir, _) = resolve_log_path(None);
        assert!(dir.ends_with("elastic/logs"));
    }
}
