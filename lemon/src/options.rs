//! Driver-facing configuration.

/// Options threaded through a compilation unit's scan.
#[derive(Debug, Clone)]
pub struct Options {
    /// Capacity of the token channel between the scanner and its
    /// consumer. Spec.md recommends 8-64; 32 is a reasonable default
    /// that keeps the scanner well ahead of a typical parser without
    /// buffering an unbounded amount of lookahead.
    pub channel_capacity: usize,
    /// Whether the scanner should mirror recoverable lexical issues to
    /// a [`lemon_diagnostics::DiagnosticLog`].
    pub log_diagnostics: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { channel_capacity: 32, log_diagnostics: true }
    }
}
