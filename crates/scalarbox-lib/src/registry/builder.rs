//! RegistryBuilder: the set-once phase of the registry.
//!
//! Each slot moves from unset to set exactly once. `freeze` derives every
//! composite in one step and hands out the immutable `CanonicalTypes`.

use std::fmt::Debug;

use scalarbox_core::{ScalarKind, TypeLattice};

use super::canonical::CanonicalTypes;
use super::error::RegistryError;

/// Accumulates the three boxed instance types.
#[derive(Clone, Debug)]
pub struct RegistryBuilder<T> {
    instances: [Option<T>; 3],
}

impl<T> Default for RegistryBuilder<T> {
    fn default() -> Self {
        Self {
            instances: [None, None, None],
        }
    }
}

impl<T: Debug> RegistryBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_number_instance(&mut self, ty: T) -> Result<(), RegistryError> {
        self.set_instance(ScalarKind::Number, Some(ty))
    }

    pub fn set_string_instance(&mut self, ty: T) -> Result<(), RegistryError> {
        self.set_instance(ScalarKind::String, Some(ty))
    }

    pub fn set_boolean_instance(&mut self, ty: T) -> Result<(), RegistryError> {
        self.set_instance(ScalarKind::Boolean, Some(ty))
    }

    /// Set the boxed instance for `kind`.
    ///
    /// Fails if the slot is already set (even to an identical type) or if
    /// `ty` is absent. A failed call leaves the builder unchanged.
    pub fn set_instance(&mut self, kind: ScalarKind, ty: Option<T>) -> Result<(), RegistryError> {
        let slot = &mut self.instances[kind.index()];
        if slot.is_some() {
            return Err(RegistryError::AlreadySet(kind));
        }
        let Some(ty) = ty else {
            return Err(RegistryError::AbsentInstance(kind));
        };

        tracing::debug!(%kind, instance = ?ty, "boxed instance set");
        *slot = Some(ty);
        Ok(())
    }

    pub fn is_set(&self, kind: ScalarKind) -> bool {
        self.instances[kind.index()].is_some()
    }

    /// Kinds still unset, in slot order.
    pub fn pending(&self) -> impl Iterator<Item = ScalarKind> + '_ {
        ScalarKind::ALL
            .into_iter()
            .filter(|&kind| !self.is_set(kind))
    }

    /// Derive all composites and freeze the registry.
    ///
    /// Fails with `Unset` for the first missing slot in slot order.
    pub fn freeze<L>(self, lattice: &mut L) -> Result<CanonicalTypes<T>, RegistryError>
    where
        L: TypeLattice<Type = T>,
    {
        let [number, string, boolean] = self.instances;
        let number = number.ok_or(RegistryError::Unset(ScalarKind::Number))?;
        let string = string.ok_or(RegistryError::Unset(ScalarKind::String))?;
        let boolean = boolean.ok_or(RegistryError::Unset(ScalarKind::Boolean))?;

        let number_or_obj = scalar_or_instance(lattice, ScalarKind::Number, &number);
        let string_or_obj = scalar_or_instance(lattice, ScalarKind::String, &string);
        let boolean_or_obj = scalar_or_instance(lattice, ScalarKind::Boolean, &boolean);
        let num_or_str = lattice.join(&number_or_obj, &string_or_obj);

        let types = CanonicalTypes::new(
            [number, string, boolean],
            [number_or_obj, string_or_obj, boolean_or_obj],
            num_or_str,
        );

        if cfg!(debug_assertions) {
            types.assert_lattice_laws(lattice);
        }

        tracing::debug!(
            number = %lattice.display(types.scalar_or_instance(ScalarKind::Number)),
            string = %lattice.display(types.scalar_or_instance(ScalarKind::String)),
            boolean = %lattice.display(types.scalar_or_instance(ScalarKind::Boolean)),
            num_or_str = %lattice.display(types.num_or_str()),
            "canonical types frozen"
        );
        Ok(types)
    }
}

/// `scalar ∪ instance`; an unknown instance yields the bare scalar.
fn scalar_or_instance<L: TypeLattice>(
    lattice: &mut L,
    kind: ScalarKind,
    instance: &L::Type,
) -> L::Type {
    let scalar = lattice.scalar(kind);
    if lattice.is_unknown(instance) {
        return scalar;
    }
    lattice.join(&scalar, instance)
}
