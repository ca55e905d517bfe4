//! Telemetry helpers for applications embedding `chart-series`.
//!
//! The adapter only emits `tracing` events; installing a subscriber is left to
//! the host. `init_default_tracing` is an opt-in shortcut for binaries and
//! tests. Set `RUST_LOG=chart_series=debug` together with
//! `AdapterConfig::verbose` to see which conversion branch each call takes.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
