//! Append-only, thread-safe diagnostic log (spec §4.5).
//!
//! Consulted by the scanner and the symbol table to record recoverable
//! issues — unterminated strings, invalid bytes, duplicate insertions
//! when the caller chooses to log rather than fail. Writes are totally
//! ordered by the guarding mutex; nothing is ever removed except by an
//! explicit [`DiagnosticLog::flush`].

use std::sync::Mutex;

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single recoverable issue observed during scanning or symbol-table
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// 1-based source line, when the diagnostic has one.
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, line: Option<usize>) -> Self {
        Self { severity, message: message.into(), line }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match self.line {
            Some(line) => write!(f, "{tag}: {} (line {line})", self.message),
            None => write!(f, "{tag}: {}", self.message),
        }
    }
}

/// Thread-safe append-only log.
///
/// Writers never block each other for long: each [`DiagnosticLog::record`]
/// call acquires the lock only long enough to push one entry.
#[derive(Default)]
pub struct DiagnosticLog {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self { entries: Mutex::new(Vec::new()) }
    }

    /// Append one diagnostic. Also mirrors it to the `log` facade at a
    /// level matching its severity, so it is visible without draining
    /// the structured log.
    pub fn record(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Info => log::debug!("{diagnostic}"),
            Severity::Warning => log::warn!("{diagnostic}"),
            Severity::Error => log::error!("{diagnostic}"),
        }
        self.entries.lock().unwrap().push(diagnostic);
    }

    /// Number of diagnostics recorded so far.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if any recorded diagnostic is at `Severity::Error`.
    pub fn has_errors(&self) -> bool {
        self.entries.lock().unwrap().iter().any(|d| d.severity == Severity::Error)
    }

    /// Drain and return all recorded diagnostics in insertion order.
    pub fn flush(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap())
    }

    /// Snapshot the current entries without clearing them.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.lock().unwrap().clone()
    }
}
