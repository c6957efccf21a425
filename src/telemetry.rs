//! Process-wide error reporting bootstrap.
//!
//! The frontend wraps its whole tree in an error boundary and initializes
//! its crash reporter once at startup; this module is the engine-side
//! equivalent. [`init`] installs formatted `tracing` output and a panic
//! hook that reports unhandled panics as error events carrying the
//! configured ingest context. Pure bootstrap, no core logic; failures to
//! initialize degrade to whatever subscriber the host already installed.

use std::panic;
use std::sync::Once;

use tracing::error;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Reporting configuration, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    /// Ingest endpoint the host forwards error events to.
    pub endpoint: String,
    /// Fraction of trace events to sample, 0.0-1.0.
    pub traces_sample_rate: f32,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ingest.glasscrafters.example/luminx".to_string(),
            traces_sample_rate: 1.0,
        }
    }
}

/// Initializes tracing output and the panic report hook.
///
/// Idempotent: the first call wins and later calls are no-ops, so any entry
/// point may call it unconditionally. If the host already installed a
/// global subscriber, its subscriber is kept and only the panic hook is
/// added.
pub fn init(config: TelemetryConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

        tracing::info!(
            endpoint = %config.endpoint,
            traces_sample_rate = config.traces_sample_rate,
            "telemetry initialized"
        );

        let endpoint = config.endpoint;
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            error!(endpoint = %endpoint, panic = %info, "unhandled panic");
            previous(info);
        }));
    });
}

/// Whether [`init`] has completed.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}
