//! Structured logging helpers shared by the binary and the library.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber on stderr. `RUST_LOG` wins over `default_level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn log_startup(component: &str, phase: &str, detail: Option<&str>) {
    match detail {
        Some(detail) => info!(component, phase, detail, "startup"),
        None => info!(component, phase, "startup"),
    }
}

pub fn log_info(message: &str, component: &str, event: &str) {
    info!(component, event, "{}", message);
}

pub fn log_performance_metric(name: &str, value: f64, unit: &str, component: &str) {
    info!(metric = name, value, unit, component, "performance metric");
}
