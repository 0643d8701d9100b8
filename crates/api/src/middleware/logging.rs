//! Logging initialization and configuration.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Output format for the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    /// Structured JSON lines for log aggregation.
    Json,
    /// Human-readable output for local development.
    Pretty,
}

impl LogFormat {
    /// Unrecognized values fall back to the readable format rather than
    /// failing startup.
    fn parse(value: &str) -> Self {
        match value {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initializes the logging subsystem based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level filter.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match LogFormat::parse(&config.format) {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .with_current_span(true)
                        .with_target(true),
                )
                .init();
        }
        LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true),
                )
                .init();
        }
    }
}
