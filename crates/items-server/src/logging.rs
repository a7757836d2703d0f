use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Installs the global `fmt` subscriber.
///
/// Respects `RUST_LOG` when set, otherwise logs at `info`. Panics if a
/// global subscriber is already installed, so call it once from `main`.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt().with_env_filter(env_filter).with_target(false).init();
}
