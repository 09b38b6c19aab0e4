//! UnionLattice: a finite union lattice with interned types.
//!
//! Every type is either the unknown (top) type or a set of atoms. Join is set
//! union, subtyping is set inclusion, and the empty set is the bottom type.
//! Types are interned, so `TypeId` equality is type equality.

use std::collections::{BTreeSet, HashMap};

use crate::interner::{Interner, Symbol};
use crate::lattice::{ScalarKind, TypeLattice};

/// Interned type identifier.
///
/// Values 0-4 are reserved for builtins (Unknown, Bottom, Number, String,
/// Boolean); everything else starts at index 5.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TypeId(pub u32);

pub const TYPE_UNKNOWN: TypeId = TypeId(0);
pub const TYPE_BOTTOM: TypeId = TypeId(1);
pub const TYPE_NUMBER: TypeId = TypeId(2);
pub const TYPE_STRING: TypeId = TypeId(3);
pub const TYPE_BOOLEAN: TypeId = TypeId(4);

impl TypeId {
    pub fn is_builtin(self) -> bool {
        self.0 <= TYPE_BOOLEAN.0
    }
}

/// An indivisible member of a union.
///
/// Derived ordering puts scalars first, then objects in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Atom {
    Number,
    String,
    Boolean,
    Null,
    Undefined,
    /// Nominal object type, e.g. a boxed wrapper class.
    Object(Symbol),
}

impl From<ScalarKind> for Atom {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Number => Self::Number,
            ScalarKind::String => Self::String,
            ScalarKind::Boolean => Self::Boolean,
        }
    }
}

/// The structure behind a `TypeId`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeShape {
    /// No information; absorbs every join.
    Unknown,
    /// Union of atoms. Empty means bottom.
    Union(BTreeSet<Atom>),
}

impl TypeShape {
    fn single(atom: Atom) -> Self {
        Self::Union(BTreeSet::from([atom]))
    }
}

/// Interned union lattice.
#[derive(Clone, Debug)]
pub struct UnionLattice {
    types: Vec<TypeShape>,
    type_map: HashMap<TypeShape, TypeId>,
    names: Interner,
}

impl Default for UnionLattice {
    fn default() -> Self {
        Self::new()
    }
}

impl UnionLattice {
    pub fn new() -> Self {
        let mut lattice = Self {
            types: Vec::new(),
            type_map: HashMap::new(),
            names: Interner::new(),
        };

        // Pre-register builtin types at their expected IDs
        let unknown_id = lattice.intern_type(TypeShape::Unknown);
        debug_assert_eq!(unknown_id, TYPE_UNKNOWN);

        let bottom_id = lattice.intern_type(TypeShape::Union(BTreeSet::new()));
        debug_assert_eq!(bottom_id, TYPE_BOTTOM);

        for (kind, expected) in ScalarKind::ALL
            .into_iter()
            .zip([TYPE_NUMBER, TYPE_STRING, TYPE_BOOLEAN])
        {
            let id = lattice.intern_type(TypeShape::single(kind.into()));
            debug_assert_eq!(id, expected);
        }

        lattice
    }

    /// Intern a type, returning its ID. Deduplicates identical shapes.
    pub fn intern_type(&mut self, shape: TypeShape) -> TypeId {
        if let Some(&id) = self.type_map.get(&shape) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        self.types.push(shape.clone());
        self.type_map.insert(shape, id);
        id
    }

    /// Get the TypeShape for a TypeId.
    pub fn get_type(&self, id: TypeId) -> Option<&TypeShape> {
        self.types.get(id.0 as usize)
    }

    /// Intern the single-atom type for `atom`.
    pub fn atom(&mut self, atom: Atom) -> TypeId {
        self.intern_type(TypeShape::single(atom))
    }

    pub fn null(&mut self) -> TypeId {
        self.atom(Atom::Null)
    }

    pub fn undefined(&mut self) -> TypeId {
        self.atom(Atom::Undefined)
    }

    /// Declare (or fetch) the nominal object type called `name`.
    pub fn object(&mut self, name: &str) -> TypeId {
        let sym = self.names.intern(name);
        self.atom(Atom::Object(sym))
    }

    /// Find a previously declared nominal object type.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        let sym = self.names.get(name)?;
        self.type_map
            .get(&TypeShape::single(Atom::Object(sym)))
            .copied()
    }

    /// Join all `members`. The empty list yields bottom.
    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        members
            .iter()
            .fold(TYPE_BOTTOM, |acc, member| self.join(&acc, member))
    }

    /// Name of an object atom.
    pub fn object_name(&self, sym: Symbol) -> &str {
        self.names.resolve(sym)
    }

    /// Number of interned types, builtins included.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    fn render_atom(&self, atom: Atom) -> &str {
        match atom {
            Atom::Number => "number",
            Atom::String => "string",
            Atom::Boolean => "boolean",
            Atom::Null => "null",
            Atom::Undefined => "undefined",
            Atom::Object(sym) => self.names.resolve(sym),
        }
    }
}

impl TypeLattice for UnionLattice {
    type Type = TypeId;

    fn scalar(&self, kind: ScalarKind) -> TypeId {
        match kind {
            ScalarKind::Number => TYPE_NUMBER,
            ScalarKind::String => TYPE_STRING,
            ScalarKind::Boolean => TYPE_BOOLEAN,
        }
    }

    fn unknown(&self) -> TypeId {
        TYPE_UNKNOWN
    }

    fn is_unknown(&self, ty: &TypeId) -> bool {
        *ty == TYPE_UNKNOWN
    }

    fn join(&mut self, a: &TypeId, b: &TypeId) -> TypeId {
        if a == b {
            return *a;
        }

        let merged = match (self.ensure_shape(*a), self.ensure_shape(*b)) {
            (TypeShape::Unknown, _) | (_, TypeShape::Unknown) => return TYPE_UNKNOWN,
            (TypeShape::Union(lhs), TypeShape::Union(rhs)) => {
                lhs.union(rhs).copied().collect::<BTreeSet<_>>()
            }
        };
        self.intern_type(TypeShape::Union(merged))
    }

    fn is_subtype(&self, sub: &TypeId, sup: &TypeId) -> bool {
        if sub == sup {
            return true;
        }

        match (self.ensure_shape(*sub), self.ensure_shape(*sup)) {
            (_, TypeShape::Unknown) => true,
            (TypeShape::Unknown, _) => false,
            (TypeShape::Union(lhs), TypeShape::Union(rhs)) => lhs.is_subset(rhs),
        }
    }

    fn display(&self, ty: &TypeId) -> String {
        match self.ensure_shape(*ty) {
            TypeShape::Unknown => "?".to_owned(),
            TypeShape::Union(atoms) if atoms.is_empty() => "bottom".to_owned(),
            TypeShape::Union(atoms) => atoms
                .iter()
                .map(|&atom| self.render_atom(atom))
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}
