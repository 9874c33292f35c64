//! `SymbolTable`: the arena-backed spaghetti stack (spec §4.4).

use crate::scope::{Scope, ScopeKind};
use crate::symbol::{AstRef, Symbol};
use crate::ScopeId;

/// Native type name, size in bytes — exactly the set spec.md requires
/// present in every configured global scope.
const NATIVE_TYPES: &[(&str, u32)] = &[
    ("bool", 1),
    ("byte", 1),
    ("addr", 8),
    ("int8", 1),
    ("int16", 2),
    ("int32", 4),
    ("int64", 8),
    ("uint8", 1),
    ("uint16", 2),
    ("uint32", 4),
    ("uint64", 8),
    ("float32", 4),
    ("float64", 8),
    ("complex64", 8),
    ("complex128", 16),
    ("string", 8),
];

/// Built-in functions seeded into the global scope, each with an empty
/// parameter/body scope of its own.
const BUILTIN_FUNCTIONS: &[&str] = &["assert", "print", "sizeof", "typeof"];

/// An arena of scopes forming a forest rooted at the global scope.
///
/// A fresh `SymbolTable` is unconfigured (no global scope exists) until
/// [`SymbolTable::global_init`] is called; every other operation that
/// touches the global scope assumes it has been.
pub struct SymbolTable {
    scopes: Vec<Scope>,
    configured: bool,
}

impl SymbolTable {
    /// The global scope always lives at this index once configured.
    pub const GLOBAL: ScopeId = ScopeId(0);

    pub fn new() -> Self {
        Self { scopes: Vec::new(), configured: false }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Populate the global scope with native types and built-ins.
    /// Asserts the table isn't already configured; pair with
    /// [`SymbolTable::global_free`] before calling again.
    pub fn global_init(&mut self) {
        assert!(!self.configured, "global scope already configured");
        self.scopes.clear();
        self.scopes.push(Scope::new(ScopeKind::Global, None));
        for &(name, byte_size) in NATIVE_TYPES {
            self.insert(Self::GLOBAL, name, Symbol::Native { byte_size });
        }
        for &name in BUILTIN_FUNCTIONS {
            let table = self.spawn(Self::GLOBAL, ScopeKind::Function);
            self.insert(
                Self::GLOBAL,
                name,
                Symbol::Function { table, node: AstRef::BUILTIN, referenced: false },
            );
        }
        self.configured = true;
    }

    /// Tear down the global scope and every scope spawned from it.
    /// Asserts the table was configured.
    pub fn global_free(&mut self) {
        assert!(self.configured, "global scope not configured");
        self.scopes.clear();
        self.configured = false;
    }

    /// Create a new child scope under `parent`.
    pub fn spawn(&mut self, parent: ScopeId, kind: ScopeKind) -> ScopeId {
        assert!(kind != ScopeKind::Global, "only one global scope may exist");
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::new(kind, Some(parent)));
        id
    }

    pub fn kind_of(&self, scope: ScopeId) -> ScopeKind {
        self.scopes[scope.0 as usize].kind
    }

    pub fn parent_of(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0 as usize].parent
    }

    /// Bind `name` to `symbol` in `scope`. Returns `false` without
    /// mutating the scope if `name` is already bound there; duplicate
    /// insertion is the caller's error to report, not a silent
    /// overwrite.
    pub fn insert(&mut self, scope: ScopeId, name: impl Into<String>, symbol: Symbol) -> bool {
        let entries = &mut self.scopes[scope.0 as usize].entries;
        let name = name.into();
        if entries.contains_key(&name) {
            return false;
        }
        entries.insert(name, symbol);
        true
    }

    /// Look up `name` in `scope` only, without walking to parents.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.scopes[scope.0 as usize].entries.get(name)
    }

    /// Look up `name` in `scope`, then each ancestor in turn. The
    /// global scope is always the final scope consulted, since every
    /// parent chain terminates there.
    pub fn lookup_recursive(&self, scope: ScopeId, name: &str) -> Option<(&Symbol, ScopeId)> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = &self.scopes[id.0 as usize];
            if let Some(sym) = s.entries.get(name) {
                return Some((sym, id));
            }
            current = s.parent;
        }
        None
    }

    /// Set the `referenced` flag on the nearest binding of `name`
    /// reachable from `scope`. Returns `false` if no binding is found
    /// in any ancestor.
    pub fn mark_referenced(&mut self, scope: ScopeId, name: &str) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = &mut self.scopes[id.0 as usize];
            if let Some(sym) = s.entries.get_mut(name) {
                sym.mark_referenced();
                return true;
            }
            current = s.parent;
        }
        false
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_init_seeds_native_types() {
        let mut table = SymbolTable::new();
        table.global_init();
        let (sym, scope) = table.lookup_recursive(SymbolTable::GLOBAL, "int32").unwrap();
        assert_eq!(scope, SymbolTable::GLOBAL);
        assert_eq!(sym, &Symbol::Native { byte_size: 4 });
    }

    #[test]
    fn global_init_seeds_builtin_functions_with_empty_scopes() {
        let mut table = SymbolTable::new();
        table.global_init();
        let (sym, _) = table.lookup_recursive(SymbolTable::GLOBAL, "print").unwrap();
        match sym {
            Symbol::Function { table: inner, node, referenced } => {
                assert_eq!(*node, AstRef::BUILTIN);
                assert!(!referenced);
                assert_eq!(table.kind_of(*inner), ScopeKind::Function);
            }
            other => panic!("expected Function, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "already configured")]
    fn double_init_without_free_panics() {
        let mut table = SymbolTable::new();
        table.global_init();
        table.global_init();
    }

    #[test]
    fn init_free_init_matches_single_init() {
        let mut table = SymbolTable::new();
        table.global_init();
        table.global_free();
        table.global_init();
        assert!(table.lookup(SymbolTable::GLOBAL, "int32").is_some());
        assert!(table.lookup(SymbolTable::GLOBAL, "print").is_some());
    }

    #[test]
    fn duplicate_insert_is_rejected_without_overwrite() {
        let mut table = SymbolTable::new();
        table.global_init();
        let file = table.spawn(SymbolTable::GLOBAL, ScopeKind::File);
        assert!(table.insert(file, "x", Symbol::Variable { node: AstRef(1), referenced: false, parameter: false }));
        assert!(!table.insert(file, "x", Symbol::Variable { node: AstRef(2), referenced: false, parameter: false }));
        let sym = table.lookup(file, "x").unwrap();
        assert_eq!(sym, &Symbol::Variable { node: AstRef(1), referenced: false, parameter: false });
    }

    #[test]
    fn lookup_recursive_walks_parent_chain_to_global() {
        let mut table = SymbolTable::new();
        table.global_init();
        let file = table.spawn(SymbolTable::GLOBAL, ScopeKind::File);
        let func = table.spawn(file, ScopeKind::Function);
        table.insert(file, "helper", Symbol::Function { table: func, node: AstRef(7), referenced: false });
        let (sym, scope) = table.lookup_recursive(func, "helper").unwrap();
        assert_eq!(scope, file);
        assert!(matches!(sym, Symbol::Function { .. }));

        let (sym, scope) = table.lookup_recursive(func, "int32").unwrap();
        assert_eq!(scope, SymbolTable::GLOBAL);
        assert_eq!(sym, &Symbol::Native { byte_size: 4 });
    }

    #[test]
    fn lookup_recursive_prefers_nearest_ancestor() {
        let mut table = SymbolTable::new();
        table.global_init();
        table.insert(SymbolTable::GLOBAL, "shadowed", Symbol::Native { byte_size: 1 });
        let file = table.spawn(SymbolTable::GLOBAL, ScopeKind::File);
        table.insert(file, "shadowed", Symbol::Variable { node: AstRef(3), referenced: false, parameter: false });
        let (sym, scope) = table.lookup_recursive(file, "shadowed").unwrap();
        assert_eq!(scope, file);
        assert!(matches!(sym, Symbol::Variable { .. }));
    }

    #[test]
    fn mark_referenced_sets_flag_on_nearest_match() {
        let mut table = SymbolTable::new();
        table.global_init();
        let file = table.spawn(SymbolTable::GLOBAL, ScopeKind::File);
        table.insert(file, "x", Symbol::Variable { node: AstRef(1), referenced: false, parameter: false });
        assert!(table.mark_referenced(file, "x"));
        let sym = table.lookup(file, "x").unwrap();
        assert!(sym.is_referenced());
    }

    #[test]
    fn mark_referenced_missing_name_returns_false() {
        let mut table = SymbolTable::new();
        table.global_init();
        assert!(!table.mark_referenced(SymbolTable::GLOBAL, "nope"));
    }

    #[test]
    fn local_lookup_does_not_see_parent_bindings() {
        let mut table = SymbolTable::new();
        table.global_init();
        let file = table.spawn(SymbolTable::GLOBAL, ScopeKind::File);
        assert!(table.lookup(file, "int32").is_none());
        assert!(table.lookup_recursive(file, "int32").is_some());
    }
}
