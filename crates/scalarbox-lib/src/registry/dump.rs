//! Text rendering of a frozen registry, one line per slot.

use std::fmt::Write as _;

use scalarbox_core::{ScalarKind, TypeLattice};

use super::canonical::CanonicalTypes;

impl<T> CanonicalTypes<T> {
    /// Render as `kind: instance => composite` lines plus the num/str line.
    pub fn dump<L>(&self, lattice: &L) -> String
    where
        L: TypeLattice<Type = T>,
    {
        let mut out = String::new();
        for kind in ScalarKind::ALL {
            writeln!(
                out,
                "{kind}: {} => {}",
                lattice.display(self.instance(kind)),
                lattice.display(self.scalar_or_instance(kind))
            )
            .unwrap();
        }
        writeln!(out, "num_or_str: {}", lattice.display(self.num_or_str())).unwrap();
        out
    }
}
