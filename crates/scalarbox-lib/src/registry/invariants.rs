//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use scalarbox_core::{ScalarKind, TypeLattice};

use super::canonical::CanonicalTypes;

impl<T> CanonicalTypes<T> {
    /// Every scalar and every known instance sits below its composite, and
    /// the number/string composites sit below `num_or_str`.
    ///
    /// A failure here means the lattice's join is not an upper bound.
    pub(super) fn assert_lattice_laws<L>(&self, lattice: &L)
    where
        L: TypeLattice<Type = T>,
    {
        for kind in ScalarKind::ALL {
            let composite = self.scalar_or_instance(kind);

            let scalar = lattice.scalar(kind);
            assert!(
                lattice.is_subtype(&scalar, composite),
                "CanonicalTypes: {kind} scalar is not below its composite {}",
                lattice.display(composite)
            );

            let instance = self.instance(kind);
            if !lattice.is_unknown(instance) {
                assert!(
                    lattice.is_subtype(instance, composite),
                    "CanonicalTypes: {kind} instance {} is not below its composite {}",
                    lattice.display(instance),
                    lattice.display(composite)
                );
            }
        }

        for kind in [ScalarKind::Number, ScalarKind::String] {
            let composite = self.scalar_or_instance(kind);
            assert!(
                lattice.is_subtype(composite, self.num_or_str()),
                "CanonicalTypes: {kind} composite {} is not below {}",
                lattice.display(composite),
                lattice.display(self.num_or_str())
            );
        }
    }
}
