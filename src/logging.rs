// SPDX-License-Identifier: MPL-2.0

//! Tracing subscriber setup.

use crate::state::AppSettings;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr formatter filtered by `RUST_LOG`, falling back to the
/// `log_filter` setting. Later calls are no-ops.
pub fn init(settings: &AppSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
