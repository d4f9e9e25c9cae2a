//! Reporting and output channels.

/// Channel for structural problems in description data.
///
/// Reports are non-fatal: the caller has already degraded to a safe
/// fallback by the time it reports.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

/// Channel for diagnostic output produced by `print`, `print_event` and
/// dumps.
pub trait OutputSink {
    /// Emit one line made of several values, separated by spaces.
    fn emit(&mut self, values: &[&str]);
}

/// Routes reports to `log::warn!` and output to `log::info!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Reporter for LogDiagnostics {
    fn report(&mut self, message: &str) {
        log::warn!(target: "stagehand", "{message}");
    }
}

impl OutputSink for LogDiagnostics {
    fn emit(&mut self, values: &[&str]) {
        log::info!(target: "stagehand", "{}", values.join(" "));
    }
}

/// Writes output lines to standard output, console style.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, values: &[&str]) {
        println!("{}", values.join(" "));
    }
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn report(&mut self, message: &str) {
        (**self).report(message);
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn emit(&mut self, values: &[&str]) {
        (**self).emit(values);
    }
}
