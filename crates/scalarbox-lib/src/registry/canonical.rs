//! CanonicalTypes: the frozen registry and its membership predicates.

use scalarbox_core::{ScalarKind, TypeLattice};

/// Boxed instance types and their derived "scalar or boxed object" composites.
///
/// Only `RegistryBuilder::freeze` constructs this, so every composite is
/// present. The value is immutable and can be shared across threads whenever
/// `T` can.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalTypes<T> {
    instances: [T; 3],
    /// `scalar ∪ instance` per kind, indexed by `ScalarKind::index`.
    composites: [T; 3],
    /// number composite ∪ string composite.
    num_or_str: T,
}

impl<T> CanonicalTypes<T> {
    pub(super) fn new(instances: [T; 3], composites: [T; 3], num_or_str: T) -> Self {
        Self {
            instances,
            composites,
            num_or_str,
        }
    }

    /// The boxed instance type registered for `kind`.
    pub fn instance(&self, kind: ScalarKind) -> &T {
        &self.instances[kind.index()]
    }

    /// The composite `scalar ∪ instance` for `kind`.
    pub fn scalar_or_instance(&self, kind: ScalarKind) -> &T {
        &self.composites[kind.index()]
    }

    /// Union of the number and string composites.
    pub fn num_or_str(&self) -> &T {
        &self.num_or_str
    }

    /// Whether `ty` is a number scalar or a boxed number.
    pub fn is_number_scalar_or_obj<L>(&self, lattice: &L, ty: &T) -> bool
    where
        L: TypeLattice<Type = T>,
    {
        self.is_scalar_or_obj(lattice, ScalarKind::Number, ty)
    }

    /// Whether `ty` is a string scalar or a boxed string.
    pub fn is_string_scalar_or_obj<L>(&self, lattice: &L, ty: &T) -> bool
    where
        L: TypeLattice<Type = T>,
    {
        self.is_scalar_or_obj(lattice, ScalarKind::String, ty)
    }

    /// Whether `ty` is a boolean scalar or a boxed boolean.
    pub fn is_boolean_scalar_or_obj<L>(&self, lattice: &L, ty: &T) -> bool
    where
        L: TypeLattice<Type = T>,
    {
        self.is_scalar_or_obj(lattice, ScalarKind::Boolean, ty)
    }

    /// Whether `ty` fits within number-or-string, boxed or not.
    ///
    /// Mixed types such as `number|StringObject` qualify.
    pub fn is_num_str_scalar_or_obj<L>(&self, lattice: &L, ty: &T) -> bool
    where
        L: TypeLattice<Type = T>,
    {
        lattice.is_subtype(ty, &self.num_or_str)
    }

    pub fn is_scalar_or_obj<L>(&self, lattice: &L, kind: ScalarKind, ty: &T) -> bool
    where
        L: TypeLattice<Type = T>,
    {
        lattice.is_subtype(ty, self.scalar_or_instance(kind))
    }
}
