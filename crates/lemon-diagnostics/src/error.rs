//! Core error taxonomy (spec §7).
//!
//! Kinds, not type names: the taxonomy distinguishes *why* an operation
//! failed, not which Rust type carries the failure. `Undefined` is a
//! sentinel for uninitialized error slots in the source material this
//! core descends from; it must never be constructed as an actual
//! return value and exists only so the enum has a name for "this slot
//! hasn't been assigned yet" when that bookkeeping is needed upstream.

use std::fmt;

/// A core-level failure, independent of the diagnostic log.
///
/// `SUCCESS` from spec §7 has no variant here — success is `Ok(())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Allocation failed (map grow, buffer allocation).
    Nomem,
    /// Driver-level I/O failure. External to the core; surfaced here
    /// only so callers can propagate it through the same error type.
    FileError,
    /// Driver-level CLI parsing failure. External to the core.
    OptionError,
    /// The parser observed an `INVALID` token or a nonzero error flag.
    ParseError,
    /// A scanner worker could not be spawned.
    ThreadError,
    /// Sentinel for an uninitialized error slot. Never returned.
    Undefined,
}

impl CoreError {
    /// One-line human-readable summary, suitable for the observable
    /// diagnostic output described in spec §6.
    pub fn summary(&self) -> &'static str {
        match self {
            CoreError::Nomem => "allocation failed",
            CoreError::FileError => "file I/O error",
            CoreError::OptionError => "invalid command-line options",
            CoreError::ParseError => "source contains invalid tokens",
            CoreError::ThreadError => "failed to spawn scanner worker",
            CoreError::Undefined => "undefined error (internal bug)",
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl std::error::Error for CoreError {}
