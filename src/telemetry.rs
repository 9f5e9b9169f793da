//! Opt-in log output for hosts that embed gauges.
//!
//! The crate only emits `tracing` events (target `live_gauge`): config
//! fallbacks and NaN inputs at `warn`/`debug`, transition starts and ends at
//! `debug`, per-frame progress at `trace`. Hosts with their own subscriber
//! need nothing from this module.

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "live_gauge=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"live_gauge=trace"` to follow every animation frame.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_setup_is_inert_without_the_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_filter("live_gauge=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_subscriber_install_is_refused() {
        let _ = init_tracing_with_filter("live_gauge=debug");
        assert!(!init_default_tracing());
    }
}
