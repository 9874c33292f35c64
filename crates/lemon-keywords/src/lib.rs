//! Reserved-word recognition (spec §4.1).
//!
//! The keyword set is fixed and known at compile time, so the lookup
//! table is built once by the `phf` macro rather than populated at
//! process start: it is collision-free by construction, immutable,
//! and safe to share across the scanner's worker thread without any
//! synchronization.

use lemon_token::TokenKind;

/// Reserved word → `(kind, canonical spelling)`.
///
/// The spelling is always the map key itself; it's returned alongside
/// the kind so callers don't need to re-derive it from the lexeme.
static KEYWORDS: phf::Map<&'static str, (TokenKind, &'static str)> = phf::phf_map! {
    "for" => (TokenKind::For, "for"),
    "while" => (TokenKind::While, "while"),
    "break" => (TokenKind::Break, "break"),
    "continue" => (TokenKind::Continue, "continue"),
    "if" => (TokenKind::If, "if"),
    "else" => (TokenKind::Else, "else"),
    "switch" => (TokenKind::Switch, "switch"),
    "case" => (TokenKind::Case, "case"),
    "default" => (TokenKind::Default, "default"),
    "fallthrough" => (TokenKind::Fallthrough, "fallthrough"),
    "goto" => (TokenKind::Goto, "goto"),
    "label" => (TokenKind::Label, "label"),
    "let" => (TokenKind::Let, "let"),
    "mut" => (TokenKind::Mut, "mut"),
    "struct" => (TokenKind::Struct, "struct"),
    "import" => (TokenKind::Import, "import"),
    "self" => (TokenKind::SelfKw, "self"),
    "func" => (TokenKind::Func, "func"),
    "priv" => (TokenKind::Priv, "priv"),
    "pub" => (TokenKind::Pub, "pub"),
    "return" => (TokenKind::Return, "return"),
    "void" => (TokenKind::Void, "void"),
    "null" => (TokenKind::Null, "null"),
    "true" => (TokenKind::True, "true"),
    "false" => (TokenKind::False, "false"),
};

/// Look up `bytes` as a reserved word. Case-sensitive; returns `None`
/// for anything not in the fixed keyword set (the caller should then
/// emit an `IDENTIFIER` token).
pub fn lookup(bytes: &[u8]) -> Option<(TokenKind, &'static str)> {
    let word = std::str::from_utf8(bytes).ok()?;
    KEYWORDS.get(word).copied()
}

/// Number of reserved words in the map. Exposed for tests that want
/// to assert completeness against spec.md's word list.
pub fn len() -> usize {
    KEYWORDS.len()
}
