//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::union::{TypeId, TypeShape, UnionLattice};

impl UnionLattice {
    pub(crate) fn ensure_shape(&self, id: TypeId) -> &TypeShape {
        self.get_type(id).unwrap_or_else(|| {
            panic!(
                "UnionLattice: type id {} not found \
                 (TypeIds are only valid for the lattice that issued them)",
                id.0
            )
        })
    }
}
