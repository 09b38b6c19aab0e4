use std::collections::BTreeSet;

use crate::{
    Atom, ScalarKind, TYPE_BOOLEAN, TYPE_BOTTOM, TYPE_NUMBER, TYPE_STRING, TYPE_UNKNOWN, TypeId,
    TypeLattice, TypeShape, UnionLattice,
};

#[test]
fn builtin_types_have_correct_ids() {
    let lattice = UnionLattice::new();

    assert_eq!(lattice.get_type(TYPE_UNKNOWN), Some(&TypeShape::Unknown));
    assert_eq!(
        lattice.get_type(TYPE_BOTTOM),
        Some(&TypeShape::Union(BTreeSet::new()))
    );
    assert_eq!(
        lattice.get_type(TYPE_NUMBER),
        Some(&TypeShape::Union(BTreeSet::from([Atom::Number])))
    );
    assert_eq!(lattice.type_count(), 5);
    assert!(TYPE_BOOLEAN.is_builtin());
    assert!(!TypeId(5).is_builtin());
}

#[test]
fn scalars_map_to_builtins() {
    let lattice = UnionLattice::new();

    assert_eq!(lattice.scalar(ScalarKind::Number), TYPE_NUMBER);
    assert_eq!(lattice.scalar(ScalarKind::String), TYPE_STRING);
    assert_eq!(lattice.scalar(ScalarKind::Boolean), TYPE_BOOLEAN);
    assert_eq!(lattice.unknown(), TYPE_UNKNOWN);
    assert!(lattice.is_unknown(&TYPE_UNKNOWN));
    assert!(!lattice.is_unknown(&TYPE_NUMBER));
}

#[test]
fn interning_deduplicates() {
    let mut lattice = UnionLattice::new();

    let a = lattice.object("NumberObject");
    let b = lattice.object("NumberObject");
    assert_eq!(a, b);

    let n = lattice.atom(Atom::Number);
    assert_eq!(n, TYPE_NUMBER);
}

#[test]
fn lookup_finds_declared_objects_only() {
    let mut lattice = UnionLattice::new();
    let date = lattice.object("Date");

    assert_eq!(lattice.lookup("Date"), Some(date));
    assert_eq!(lattice.lookup("RegExp"), None);
}

#[test]
fn join_is_commutative_and_idempotent() {
    let mut lattice = UnionLattice::new();
    let obj = lattice.object("NumberObject");

    let ab = lattice.join(&TYPE_NUMBER, &obj);
    let ba = lattice.join(&obj, &TYPE_NUMBER);
    assert_eq!(ab, ba);

    let again = lattice.join(&ab, &ab);
    assert_eq!(again, ab);

    let absorbed = lattice.join(&ab, &TYPE_NUMBER);
    assert_eq!(absorbed, ab);
}

#[test]
fn unknown_absorbs_join() {
    let mut lattice = UnionLattice::new();
    let obj = lattice.object("StringObject");

    assert_eq!(lattice.join(&TYPE_STRING, &TYPE_UNKNOWN), TYPE_UNKNOWN);
    assert_eq!(lattice.join(&TYPE_UNKNOWN, &obj), TYPE_UNKNOWN);
}

#[test]
fn bottom_is_join_identity() {
    let mut lattice = UnionLattice::new();

    assert_eq!(lattice.join(&TYPE_BOTTOM, &TYPE_BOOLEAN), TYPE_BOOLEAN);
    assert_eq!(lattice.union(&[]), TYPE_BOTTOM);
}

#[test]
fn subtype_follows_inclusion() {
    let mut lattice = UnionLattice::new();
    let obj = lattice.object("NumberObject");
    let num_or_obj = lattice.join(&TYPE_NUMBER, &obj);

    assert!(lattice.is_subtype(&TYPE_NUMBER, &num_or_obj));
    assert!(lattice.is_subtype(&obj, &num_or_obj));
    assert!(!lattice.is_subtype(&num_or_obj, &TYPE_NUMBER));
    assert!(!lattice.is_subtype(&TYPE_STRING, &num_or_obj));
    assert!(lattice.is_subtype(&TYPE_BOTTOM, &TYPE_STRING));
}

#[test]
fn unknown_is_top_only() {
    let mut lattice = UnionLattice::new();
    let obj = lattice.object("BooleanObject");

    assert!(lattice.is_subtype(&obj, &TYPE_UNKNOWN));
    assert!(lattice.is_subtype(&TYPE_UNKNOWN, &TYPE_UNKNOWN));
    assert!(!lattice.is_subtype(&TYPE_UNKNOWN, &TYPE_BOOLEAN));
}

#[test]
fn union_joins_all_members() {
    let mut lattice = UnionLattice::new();
    let null = lattice.null();
    let undefined = lattice.undefined();

    let nullish = lattice.union(&[null, undefined, null]);
    assert_eq!(
        lattice.get_type(nullish),
        Some(&TypeShape::Union(BTreeSet::from([
            Atom::Null,
            Atom::Undefined
        ])))
    );
}

#[test]
fn display_orders_scalars_before_objects() {
    let mut lattice = UnionLattice::new();
    let num_obj = lattice.object("NumberObject");
    let str_obj = lattice.object("StringObject");
    let null = lattice.null();

    let mixed = lattice.union(&[str_obj, TYPE_STRING, num_obj, null, TYPE_NUMBER]);
    assert_eq!(
        lattice.display(&mixed),
        "number|string|null|NumberObject|StringObject"
    );
    assert_eq!(lattice.display(&TYPE_UNKNOWN), "?");
    assert_eq!(lattice.display(&TYPE_BOTTOM), "bottom");
}

#[test]
fn object_names_resolve() {
    let mut lattice = UnionLattice::new();
    let obj = lattice.object("NumberObject");

    let Some(TypeShape::Union(atoms)) = lattice.get_type(obj) else {
        panic!("expected union");
    };
    let Some(&Atom::Object(sym)) = atoms.first() else {
        panic!("expected object atom");
    };
    assert_eq!(lattice.object_name(sym), "NumberObject");
}

#[test]
#[should_panic(expected = "type id 99 not found")]
fn foreign_type_id_panics() {
    let lattice = UnionLattice::new();
    lattice.is_subtype(&TypeId(99), &TYPE_NUMBER);
}
