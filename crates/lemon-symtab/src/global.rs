//! Process-wide global symbol table singleton (spec §4.4, §6).
//!
//! This is the literal driver contract — `global_init()`/`global_free()`
//! called exactly once per process, guarded by a single mutex so the
//! only concurrency the global scope ever sees (its own init/teardown)
//! is safe. Prefer [`crate::Compiler`] in new code: it carries its own
//! table by reference and needs no mutex at all. This module exists so
//! a driver written against spec.md §6 verbatim has somewhere to call.

use std::sync::{Mutex, OnceLock};

use crate::SymbolTable;

static GLOBAL: OnceLock<Mutex<Option<SymbolTable>>> = OnceLock::new();

fn cell() -> &'static Mutex<Option<SymbolTable>> {
    GLOBAL.get_or_init(|| Mutex::new(None))
}

/// Configure the process-global symbol table. Asserts it isn't already
/// configured.
pub fn global_init() {
    let mut guard = cell().lock().unwrap();
    assert!(guard.is_none(), "global symbol table already initialized");
    let mut table = SymbolTable::new();
    table.global_init();
    *guard = Some(table);
}

/// Tear down the process-global symbol table. Asserts it was
/// configured.
pub fn global_free() {
    let mut guard = cell().lock().unwrap();
    assert!(guard.is_some(), "global symbol table not initialized");
    *guard = None;
}

/// Run `f` with shared read access to the global table.
pub fn with_global<R>(f: impl FnOnce(&SymbolTable) -> R) -> R {
    let guard = cell().lock().unwrap();
    let table = guard.as_ref().expect("global symbol table not initialized");
    f(table)
}

/// Run `f` with exclusive access to the global table, for `Spawn`/
/// `Insert`/`MarkReferenced` against the global scope.
pub fn with_global_mut<R>(f: impl FnOnce(&mut SymbolTable) -> R) -> R {
    let mut guard = cell().lock().unwrap();
    let table = guard.as_mut().expect("global symbol table not initialized");
    f(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A single test exercising the whole lifecycle: the singleton is
    // one process-wide resource, so splitting this across several
    // `#[test]` functions would race under the default parallel test
    // runner.
    #[test]
    fn lifecycle_round_trip() {
        global_init();
        with_global(|table| {
            assert!(table.lookup(SymbolTable::GLOBAL, "addr").is_some());
        });
        global_free();

        global_init();
        with_global(|table| {
            assert!(table.lookup(SymbolTable::GLOBAL, "print").is_some());
        });
        global_free();
    }
}
