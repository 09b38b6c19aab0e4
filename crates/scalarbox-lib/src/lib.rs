#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Canonical boxed-scalar type registry for static type checkers.
//!
//! Holds the boxed object types of the number, string and boolean scalars and
//! answers "is this the scalar or its boxed form?" for the rest of a checker.
//!
//! # Example
//!
//! ```
//! use scalarbox_lib::{RegistryBuilder, ScalarKind, TypeLattice, UnionLattice};
//!
//! let mut lattice = UnionLattice::new();
//! let number_obj = lattice.object("Number");
//! let string_obj = lattice.object("String");
//! let boolean_obj = lattice.object("Boolean");
//!
//! let mut builder = RegistryBuilder::new();
//! builder.set_number_instance(number_obj)?;
//! builder.set_string_instance(string_obj)?;
//! builder.set_boolean_instance(boolean_obj)?;
//! let types = builder.freeze(&mut lattice)?;
//!
//! assert!(types.is_number_scalar_or_obj(&lattice, &number_obj));
//! assert!(!types.is_string_scalar_or_obj(&lattice, &number_obj));
//!
//! let string = lattice.scalar(ScalarKind::String);
//! assert!(types.is_num_str_scalar_or_obj(&lattice, &string));
//! # Ok::<(), scalarbox_lib::RegistryError>(())
//! ```

pub mod config;
pub mod prelude;
pub mod registry;

#[cfg(test)]
mod config_tests;

pub use config::{Config, MissingWrapper};
pub use prelude::{Declarations, canonical_types_from_declarations, seed_from_declarations};
pub use registry::{CanonicalTypes, RegistryBuilder, RegistryError};

pub use scalarbox_core::{ScalarKind, TypeId, TypeLattice, UnionLattice};
