//! Tracing setup for hosts embedding `tiny-plot`.
//!
//! The library only emits `tracing` events. Hosts that already own a
//! subscriber can ignore this module entirely.

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "tiny_plot=info";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` when the
/// feature is disabled or another global subscriber is already installed.
#[must_use]
pub fn init_tracing_with_filter(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}

/// Same as [`init_tracing_with_filter`] with [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}
