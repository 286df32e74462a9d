//! Logging configuration using the tracing framework
//!
//! Interactive mode writes to a rolling log file so the terminal screen is
//! never corrupted; `doing list` logs to stdout. Levels are controlled via
//! the RUST_LOG environment variable (default: "doing=info,warn").

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize console logging
///
/// Suitable for the non-interactive subcommands where stdout is ours.
///
/// # Examples
///
/// ```no_run
/// use doing::logging;
///
/// logging::init();
/// tracing::info!("catalog listed");
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doing=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();
}

/// Initialize logging with file output only
///
/// Used by the interactive UI: the alternate screen owns stdout, so logs go
/// to a daily-rotated file under the platform data directory.
///
/// # Arguments
///
/// * `log_file_name` - Name of the log file (e.g., "doing.log")
pub fn init_with_file(log_file_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let log_dir = if let Some(proj_dirs) = directories::ProjectDirs::from("com", "yourname", "doing")
    {
        let log_path = proj_dirs.data_dir().join("logs");
        std::fs::create_dir_all(&log_path)?;
        log_path
    } else {
        std::env::current_dir()?
    };

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_file_name);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doing=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .init();

    Ok(())
}

/// Initialize logging for tests
///
/// Only errors are shown by default; repeated initialization is tolerated.
#[allow(dead_code)]
pub fn init_test() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer())
        .try_init()
        .ok();
}
