//! Diagnostic channels consumed by actions.
//!
//! Two channels exist: a reporting channel for structural problems in
//! description data, and an output channel for what `print`-style effects
//! and dumps produce. Both are traits so hosts and tests can inject their
//! own sinks.

mod capture;
mod sink;

pub use capture::{CapturedDiagnostics, Channel, DiagnosticRecord};
pub use sink::{LogDiagnostics, OutputSink, Reporter, StdoutSink};
