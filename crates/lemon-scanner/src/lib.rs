//! Lexical scanner for Lemon (spec §4.3).
//!
//! [`scanner_init`] spawns a detached worker thread that lexes a
//! source buffer and publishes tokens over a [`lemon_channel`]
//! channel, closing it once it emits the synthetic `EOF`. The worker
//! is never joined — its completion is observable only through the
//! channel reaching end-of-stream, matching spec.md's "detached
//! worker" concurrency model.

mod scanner;

use std::sync::Arc;

use lemon_channel::{SendResult, Sender};
use lemon_diagnostics::{CoreError, DiagnosticLog};
use lemon_token::Token;

use scanner::Scanner;

/// Configuration for a scan. `diagnostics`, when set, receives a
/// human-readable entry for every unterminated string and invalid
/// byte run the scanner recovers from.
#[derive(Clone, Default)]
pub struct ScannerOptions {
    pub diagnostics: Option<Arc<DiagnosticLog>>,
}

/// Spawn the scanner worker over `src`, publishing tokens to
/// `channel` until it emits `EOF` and closes the channel.
///
/// `src` must be null-terminated (its last byte is `0`) and must
/// outlive every token the worker produces; `'static` is required
/// because the worker is a detached thread with no join point the
/// caller can use to bound its lifetime. Callers typically satisfy
/// this by reading the whole compilation unit once at process start
/// and keeping it alive for the process's lifetime.
///
/// Returns [`CoreError::ThreadError`] if the OS fails to spawn the
/// worker thread; this is the scanner's only fatal condition; every
/// lexical error becomes an `INVALID` token instead of halting the
/// scan.
pub fn scanner_init(
    options: ScannerOptions,
    src: &'static [u8],
    channel: Sender<Token<'static>>,
) -> Result<(), CoreError> {
    assert_eq!(src.last(), Some(&0), "source buffer must be null-terminated");
    let diagnostics = options.diagnostics;
    std::thread::Builder::new()
        .name("lemon-scanner".to_string())
        .spawn(move || run(src, channel, diagnostics))
        .map(|_handle| ())
        .map_err(|err| {
            log::error!("failed to spawn scanner worker: {err}");
            CoreError::ThreadError
        })
}

fn run(src: &'static [u8], channel: Sender<Token<'static>>, diagnostics: Option<Arc<DiagnosticLog>>) {
    let mut scanner = Scanner::new(src);
    loop {
        let token = scanner.next_token(diagnostics.as_deref());
        let is_eof = token.kind == lemon_token::TokenKind::Eof;
        match channel.send(token) {
            SendResult::Sent => {}
            SendResult::Closed => {
                log::debug!("scanner worker stopping: consumer closed the channel");
                return;
            }
        }
        if is_eof {
            channel.close();
            return;
        }
    }
}
