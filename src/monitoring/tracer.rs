/*!
 * Simulation Tracing
 * Structured tracing for engine runs using the tracing crate
 *
 * Features:
 * - Run ID generation for correlating the events of one simulation
 * - JSON-formatted logs for structured parsing
 * - Elapsed time and outcome recorded on each run span
 */

use crate::core::limits::{DEFAULT_LOG_FILTER, TRACE_JSON_ENV};
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - OSVIZ_TRACE_JSON: Enable JSON output (default: false)
///
/// Output goes to stderr so that simulation results on stdout stay parseable.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
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
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique run ID for correlating one simulation's events
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one engine run, from validation to result
pub struct SimulationSpan {
    span: tracing::Span,
    start: Instant,
    engine: &'static str,
    run_id: String,
}

impl SimulationSpan {
    pub fn new(engine: &'static str, policy: &str) -> Self {
        let run_id = generate_run_id();

        let span = span!(
            Level::INFO,
            "simulation",
            run_id = %run_id,
            engine = engine,
            policy = policy,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(engine, policy, "simulation started");
        drop(_entered);

        Self {
            span,
            start: Instant::now(),
            engine,
            run_id,
        }
    }

    /// Get the run ID for this simulation
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span context so engine events nest under it
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record a successful run
    pub fn record_success(&self) {
        self.span.record("result", "success");
    }

    /// Record a rejected run
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
        let _entered = self.span.enter();
        warn!(engine = self.engine, error, "simulation rejected input");
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_micros() as u64;
        self.span.record("duration_us", elapsed);
        let _entered = self.span.enter();
        debug!(
            run_id = %self.run_id,
            engine = self.engine,
            duration_us = elapsed,
            "simulation finished"
        );
    }
}
