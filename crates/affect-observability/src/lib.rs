//! # affect-observability
//!
//! Structured tracing setup, one log event per analytics outcome, and
//! lock-free counters for analyses run by an engine.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{AnalyticsMetrics, MetricsSnapshot};
pub use tracing_setup::{init_tracing, init_tracing_with_config};
