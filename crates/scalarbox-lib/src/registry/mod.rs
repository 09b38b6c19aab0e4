//! Canonical boxed-scalar type registry.
//!
//! Two phases:
//! - **Build** (`RegistryBuilder`): the producer sets each boxed instance once.
//! - **Frozen** (`CanonicalTypes`): composites derived once, predicates only.
//!
//! Predicates do not exist until `freeze` succeeds, so a query can never see a
//! half-populated registry.

mod builder;
mod canonical;
mod dump;
mod error;
mod invariants;


pub use builder::RegistryBuilder;
pub use canonical::CanonicalTypes;
pub use error::RegistryError;
