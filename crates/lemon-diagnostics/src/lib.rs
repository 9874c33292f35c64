//! Diagnostics hook for the Lemon front-end core.
//!
//! An append-only, thread-safe log consulted by the scanner and the
//! symbol table, plus the core's error taxonomy. See spec §4.5 and §7.

mod error;
mod log;

pub use error::CoreError;
pub use log::{Diagnostic, DiagnosticLog, Severity};
