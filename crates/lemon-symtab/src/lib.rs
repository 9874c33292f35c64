//! Spaghetti-stack symbol table for the Lemon front-end core (spec §3,
//! §4.4).
//!
//! A [`SymbolTable`] is an arena of [`scope::Scope`]s addressed by
//! [`ScopeId`], forming a forest rooted at one global scope. Parent
//! links are lookup-only: ownership of a scope lives in the arena, not
//! in whatever AST node introduced it, so there's no cycle risk to
//! guard against with `Weak` references.

mod compiler;
pub mod global;
mod scope;
mod symbol;
mod table;

pub use compiler::Compiler;
pub use scope::{ScopeId, ScopeKind};
pub use symbol::{AstRef, Symbol};
pub use table::SymbolTable;
