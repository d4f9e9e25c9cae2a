//! In-memory diagnostics, for tests and tooling.

use super::sink::{OutputSink, Reporter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which channel a captured record came through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Report,
    Output,
}

/// One captured diagnostic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub channel: Channel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Captures both channels in order of arrival.
///
/// # Example
///
/// ```rust
/// use stagehand::diagnostics::{CapturedDiagnostics, OutputSink, Reporter};
///
/// let mut diag = CapturedDiagnostics::new();
/// diag.report("region 'hand' not found");
/// diag.emit(&["hello", "world"]);
///
/// assert_eq!(diag.reports(), vec!["region 'hand' not found"]);
/// assert_eq!(diag.lines(), vec!["hello world"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CapturedDiagnostics {
    records: Vec<DiagnosticRecord>,
}

impl CapturedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    /// Messages received through the reporting channel.
    pub fn reports(&self) -> Vec<&str> {
        self.messages(Channel::Report)
    }

    /// Lines received through the output channel.
    pub fn lines(&self) -> Vec<&str> {
        self.messages(Channel::Output)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn messages(&self, channel: Channel) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.channel == channel)
            .map(|r| r.message.as_str())
            .collect()
    }

    fn push(&mut self, channel: Channel, message: String) {
        self.records.push(DiagnosticRecord {
            channel,
            message,
            timestamp: Utc::now(),
        });
    }
}

impl Reporter for CapturedDiagnostics {
    fn report(&mut self, message: &str) {
        self.push(Channel::Report, message.to_string());
    }
}

impl OutputSink for CapturedDiagnostics {
    fn emit(&mut self, values: &[&str]) {
        self.push(Channel::Output, values.join(" "));
    }
}
