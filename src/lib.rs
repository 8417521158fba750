#![doc(test(attr(deny(warnings))))]

//! Site Core offers the reporting and aggregation primitives behind a
//! construction-business management app: record filtering, summation,
//! group-by breakdowns, and per-domain report assembly over
//! already-fetched snapshots.

pub mod domain;
pub mod errors;
pub mod export;
pub mod format;
pub mod report;
pub mod source;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Site Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("site_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
