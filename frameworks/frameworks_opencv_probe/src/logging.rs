//! Logging Setup Module
//!
//! Installs the `tracing` subscriber for the probe binary. `RUST_LOG` takes
//! precedence over the `--log-level` filter. Output goes to stderr so that
//! stdout carries only the probe report.

use std::env;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used for a given `RUST_LOG` value and fallback filter
pub fn filter_directive(rust_log: Option<&str>, fallback: &str) -> String {
    match rust_log {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(fallback: &str) {
    let rust_log = env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), fallback);
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(env::var_os("NO_COLOR").is_none()),
        )
        .with(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        assert_eq!(filter_directive(Some("debug"), "info"), "debug");
    }

    #[test]
    fn test_fallback_when_unset_or_blank() {
        assert_eq!(filter_directive(None, "warn"), "warn");
        assert_eq!(filter_directive(Some("  "), "warn"), "warn");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging("info");
        init_logging("debug");
    }
}
