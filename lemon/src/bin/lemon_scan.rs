//! Tiny demonstration driver: scans one file and prints its tokens.
//!
//! Deliberately minimal — CLI parsing and file/REPL I/O drivers are
//! out of scope for this core; this binary exists only so the
//! scanner can be smoke-tested by hand.

use std::process::ExitCode;
use std::sync::Arc;

use lemon::{start_scan, CoreError, DiagnosticLog, Options, SourceBuffer};

fn run() -> Result<bool, CoreError> {
    let path = std::env::args().nth(1).ok_or(CoreError::OptionError)?;
    let text = std::fs::read_to_string(&path).map_err(|err| {
        log::error!("failed to read {path}: {err}");
        CoreError::FileError
    })?;

    let diagnostics = Arc::new(DiagnosticLog::new());
    let rx = start_scan(SourceBuffer::new(text), &Options::default(), Some(Arc::clone(&diagnostics)))?;

    while let Some(token) = rx.recv() {
        println!("{:>4} {:<16?} {:?}", token.line, token.kind, String::from_utf8_lossy(token.lexeme));
    }

    for entry in diagnostics.flush() {
        eprintln!("{entry}");
    }
    Ok(diagnostics.has_errors())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => {
            eprintln!("compilation finished with errors");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", err.summary());
            ExitCode::FAILURE
        }
    }
}
