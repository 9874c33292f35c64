//! Owned, null-terminated source buffers (spec §3).

/// A compilation unit's source text, owned by the driver and
/// null-terminated so the scanner can test for end-of-input with a
/// single byte comparison instead of tracking a separate length.
pub struct SourceBuffer {
    bytes: Box<[u8]>,
}

impl SourceBuffer {
    /// Copy `source` into an owned, null-terminated buffer.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let mut bytes = source.as_ref().to_vec();
        bytes.push(0);
        Self { bytes: bytes.into_boxed_slice() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Leak this buffer for the remainder of the process.
    ///
    /// The scanner worker is a detached thread with no join point a
    /// borrow could be scoped against, so spec.md's "lexemes valid as
    /// long as the source buffer lives" is only sound here if the
    /// buffer outlives every thread that might still be scanning —
    /// in practice, the rest of the process. This is the chosen
    /// lexeme-borrowing policy: one buffer leaked per compilation
    /// unit, reclaimed only at process exit.
    pub fn leak(self) -> &'static [u8] {
        Box::leak(self.bytes)
    }
}
