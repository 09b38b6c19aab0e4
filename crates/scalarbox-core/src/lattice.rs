//! The type-algebra capability consumed by the registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three primitive scalar kinds that have a boxed object form.
///
/// Declaration order is the slot order used everywhere a kind is iterated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Number,
    String,
    Boolean,
}

impl ScalarKind {
    /// All kinds, in slot order.
    pub const ALL: [Self; 3] = [Self::Number, Self::String, Self::Boolean];

    /// Slot index (0..3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as the scalar type is spelled in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join/subtype operations over a type lattice.
///
/// Implementations must provide:
/// - a reflexive, transitive `is_subtype`
/// - a commutative, idempotent `join` (least upper bound)
/// - a distinguished top type (`unknown`) that absorbs every join
/// - one distinguished scalar type per `ScalarKind`
///
/// `join` takes `&mut self` because interning lattices allocate new types.
pub trait TypeLattice {
    /// Handle to a type. Cheap to clone; equality is type identity.
    type Type: Clone + Eq + fmt::Debug;

    /// The scalar (unboxed) type for `kind`.
    fn scalar(&self, kind: ScalarKind) -> Self::Type;

    /// The unknown/top type.
    fn unknown(&self) -> Self::Type;

    fn is_unknown(&self, ty: &Self::Type) -> bool;

    /// Least upper bound of `a` and `b`.
    fn join(&mut self, a: &Self::Type, b: &Self::Type) -> Self::Type;

    fn is_subtype(&self, sub: &Self::Type, sup: &Self::Type) -> bool;

    /// Human-readable rendering, used in logs and dumps.
    fn display(&self, ty: &Self::Type) -> String;
}
