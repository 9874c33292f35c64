//! Lemon front-end core.
//!
//! Ties together the four pieces spec.md describes: a keyword map, a
//! bounded token channel, a scanner worker, and a spaghetti-stack
//! symbol table. A driver using this crate:
//!
//! 1. Builds a [`Compiler`] (or calls [`global::global_init`] once per
//!    process, if it needs the literal §6 driver contract instead).
//! 2. Loads source into a [`SourceBuffer`] and leaks it for the scan.
//! 3. Calls [`start_scan`] to spin up the scanner worker and get back
//!    a [`Receiver`] of tokens.
//! 4. Drains the receiver until it returns `None`, feeding tokens (and
//!    the symbol table) to a parser this crate does not provide.

mod options;
mod source;

use std::sync::Arc;

pub use lemon_channel::{channel, ChannelState, Receiver, SendResult, Sender};
pub use lemon_diagnostics::{CoreError, Diagnostic, DiagnosticLog, Severity};
pub use lemon_scanner::{scanner_init, ScannerOptions};
pub use lemon_symtab::{global, AstRef, Compiler, ScopeId, ScopeKind, Symbol, SymbolTable};
pub use lemon_token::{OwnedToken, Span, Token, TokenFlags, TokenKind};

pub use options::Options;
pub use source::SourceBuffer;

/// Start a scan over `source`: builds the token channel and spawns
/// the scanner worker, returning the consumer end.
///
/// This is the §6 driver contract collapsed into one call: the
/// worker is already running by the time this returns, and the
/// caller's only remaining job is to drain the returned [`Receiver`].
pub fn start_scan(
    source: SourceBuffer,
    options: &Options,
    diagnostics: Option<Arc<DiagnosticLog>>,
) -> Result<Receiver<Token<'static>>, CoreError> {
    let src = source.leak();
    let (tx, rx) = channel(options.channel_capacity);
    let scanner_opts = ScannerOptions {
        diagnostics: if options.log_diagnostics { diagnostics } else { None },
    };
    scanner_init(scanner_opts, src, tx)?;
    Ok(rx)
}
