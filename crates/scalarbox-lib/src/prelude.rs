//! Seeding the registry from standard-library declarations.
//!
//! The producer looks each wrapper class up by its configured name. Missing
//! wrappers are handled per `MissingWrapper`.

use indexmap::IndexMap;

use scalarbox_core::{ScalarKind, TypeLattice};

use crate::config::{Config, MissingWrapper};
use crate::registry::{CanonicalTypes, RegistryBuilder, RegistryError};

/// Declared type names, in declaration order.
pub type Declarations<T> = IndexMap<String, T>;

/// Set every boxed instance on `builder` from `decls`.
///
/// Stops at the first contract violation; slots set before it stay set.
pub fn seed_from_declarations<L: TypeLattice>(
    builder: &mut RegistryBuilder<L::Type>,
    lattice: &L,
    decls: &Declarations<L::Type>,
    config: &Config,
) -> Result<(), RegistryError> {
    for kind in ScalarKind::ALL {
        let name = config.wrapper_name(kind);
        let instance = match decls.get(name) {
            Some(ty) => Some(ty.clone()),
            None => missing_wrapper(lattice, kind, name, config.on_missing_wrapper()),
        };
        builder.set_instance(kind, instance)?;
    }
    Ok(())
}

/// Seed a fresh builder from `decls` and freeze it.
pub fn canonical_types_from_declarations<L: TypeLattice>(
    lattice: &mut L,
    decls: &Declarations<L::Type>,
    config: &Config,
) -> Result<CanonicalTypes<L::Type>, RegistryError> {
    let mut builder = RegistryBuilder::new();
    seed_from_declarations(&mut builder, lattice, decls, config)?;
    builder.freeze(lattice)
}

fn missing_wrapper<L: TypeLattice>(
    lattice: &L,
    kind: ScalarKind,
    name: &str,
    policy: MissingWrapper,
) -> Option<L::Type> {
    match policy {
        MissingWrapper::Unknown => {
            tracing::warn!(%kind, wrapper = name, "wrapper class not declared, using unknown");
            Some(lattice.unknown())
        }
        MissingWrapper::Reject => None,
    }
}
