//! Decode counters.
//!
//! Counters are atomics keyed by label sets and can be rendered in the
//! Prometheus text format by whatever endpoint the transport exposes.

pub mod metrics;

pub use metrics::{CodecMetrics, CounterVec};
