//! Scope storage: the arena of scopes a [`crate::SymbolTable`] owns.

use std::collections::HashMap;

use crate::Symbol;

/// Index into a [`crate::SymbolTable`]'s scope arena.
///
/// `ScopeId` is lookup-only, never an owner: the scope it names lives
/// in the table's arena for as long as the table does, regardless of
/// how many `ScopeId`s point at it. This sidesteps the cycles a
/// pointer-based "spaghetti stack" would need `Weak` references to
/// avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) u32);

/// What kind of declaration introduced a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    File,
    Function,
    Method,
    Udt,
}

pub(crate) struct Scope {
    pub kind: ScopeKind,
    /// `None` only for the global scope, which roots every spaghetti
    /// stack.
    pub parent: Option<ScopeId>,
    pub entries: HashMap<String, Symbol>,
}

impl Scope {
    pub fn new(kind: ScopeKind, parent: Option<ScopeId>) -> Self {
        Self { kind, parent, entries: HashMap::new() }
    }
}
