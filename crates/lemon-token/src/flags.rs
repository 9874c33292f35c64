//! Per-token status flags (spec §3).

use bitflags::bitflags;

bitflags! {
    /// Flags attached to a token at emission time.
    ///
    /// `BAD_STRING` and `BAD_NUMBER` mark lexically-malformed literals
    /// that the scanner recovered from rather than halting on; see
    /// [`crate::TokenKind::Invalid`] for the string case and the weak
    /// numeric consumer for the (currently unused) number case.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TokenFlags: u8 {
        const OKAY = 0b0000_0001;
        const BAD_STRING = 0b0000_0010;
        const BAD_NUMBER = 0b0000_0100;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn okay_is_distinct_from_bad_string() {
        assert!(TokenFlags::OKAY != TokenFlags::BAD_STRING);
        assert!(!TokenFlags::OKAY.contains(TokenFlags::BAD_STRING));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(TokenFlags::default(), TokenFlags::empty());
    }
}
