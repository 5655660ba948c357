//! Tracing setup for the launcher binary.
//!
//! Two layers:
//! - stderr, `WARN` and above, for parse warnings the user should see
//!   (stdout is reserved for the launch plan)
//! - an optional log file, enabled by `PKGRUN_LOG`, filtered by `RUST_LOG`

use std::io::IsTerminal;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "PKGRUN_LOG";

/// Install the global subscriber.
pub fn init_tracing() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(file_layer())
        .with(stderr_layer)
        .init();
}

/// File layer, if `PKGRUN_LOG` is set and the file can be created.
///
/// Files get unique names so concurrent launches don't clobber each
/// other: `{path}.{timestamp}.{pid}`
fn file_layer<S>() -> Option<Box<dyn Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return None;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_filter(filter);

    Some(layer.boxed())
}

/// Report parse warnings unless the user asked for quiet output.
pub fn report_warnings(warnings: &[String], quiet: bool) {
    if quiet {
        for warning in warnings {
            tracing::debug!("suppressed warning: {}", warning);
        }
        return;
    }
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}
