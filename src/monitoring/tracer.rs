/*!
 * Structured Tracing
 * Subscriber setup and simulation spans using the tracing crate
 */

use std::time::Instant;
use tracing::{debug, info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable switching log output to JSON
pub const TRACE_JSON_ENV: &str = "SCHEDSIM_TRACE_JSON";

/// Initialize structured tracing
///
/// Logs go to stderr so simulation results on stdout stay machine-readable.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - SCHEDSIM_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        // JSON output for parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        // Human-readable output
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json = use_json, "Structured tracing initialized");
    }
}

/// Span covering one simulation, timed on drop
pub struct SimulationSpan {
    span: Span,
    start: Instant,
    algorithm: &'static str,
}

impl SimulationSpan {
    pub fn new(algorithm: &'static str, processes: usize) -> Self {
        let span = span!(
            Level::INFO,
            "simulation",
            algorithm = algorithm,
            processes = processes,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            algorithm,
        }
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);
        info!(
            algorithm = self.algorithm,
            duration_us = duration.as_micros() as u64,
            "simulation span closed"
        );
    }
}
