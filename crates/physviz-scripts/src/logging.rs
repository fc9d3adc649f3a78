// File: crates/physviz-scripts/src/logging.rs
// Summary: Tracing subscriber setup for the study binaries.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "physviz_core=info,physviz_scripts=info";

/// Install a stderr subscriber filtered by `RUST_LOG`. Stdout stays reserved
/// for the prediction summaries. Calling it twice is harmless.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();

    if installed.is_ok() {
        tracing::debug!(default = DEFAULT_FILTER, "logging initialized");
    }
}
