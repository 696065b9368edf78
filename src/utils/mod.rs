pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FINANCE_CORE_LOG";

const DEFAULT_FILTER: &str = "finance_core=warn";

/// Installs a stderr `fmt` subscriber filtered by `FINANCE_CORE_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // Another subscriber may already be installed by an embedding application.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
