#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type-algebra layer for the scalarbox registry.
//!
//! Two parts:
//! - **Capability** (`TypeLattice`): the join/subtype surface a registry needs
//!   from a type checker's type representation.
//! - **Reference lattice** (`UnionLattice`): a small interned union lattice over
//!   an enumerated atom universe, for tests and for embedders without a type
//!   representation of their own.

mod interner;
mod invariants;
mod lattice;
pub mod union;

#[cfg(test)]
mod union_tests;

pub use interner::{Interner, Symbol};
pub use lattice::{ScalarKind, TypeLattice};
pub use union::{
    Atom, TYPE_BOOLEAN, TYPE_BOTTOM, TYPE_NUMBER, TYPE_STRING, TYPE_UNKNOWN, TypeId, TypeShape,
    UnionLattice,
};
