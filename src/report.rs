use std::sync::Mutex;

/// Logging sink injected into the repository reader and the validator.
///
/// Per-match success lines and contextual diagnostics go through this trait;
/// fatal conditions travel as `Err` values and are reported once by the
/// caller that decides the exit code.
pub trait Reporter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Routes messages to the `tracing` subscriber installed by the binary.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Captures messages in memory so tests can assert on exactly what was
/// reported, and in what order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<(Severity, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Debug,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All info-level messages, in emission order.
    pub fn infos(&self) -> Vec<String> {
        self.by_severity(Severity::Info)
    }

    /// All error-level messages, in emission order.
    pub fn errors(&self) -> Vec<String> {
        self.by_severity(Severity::Error)
    }

    /// All debug-level messages, in emission order.
    pub fn debugs(&self) -> Vec<String> {
        self.by_severity(Severity::Debug)
    }

    fn by_severity(&self, severity: Severity) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Severity::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Severity::Error, message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Severity::Debug, message.to_string()));
    }
}
