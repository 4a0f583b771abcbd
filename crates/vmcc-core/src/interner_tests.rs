use crate::{ContextKey, Interner, Keyword};

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("foo");
    let b = interner.intern("foo");
    let c = interner.intern("bar");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = Interner::new();

    let kw = interner.intern("hello");
    assert_eq!(interner.resolve(kw), "hello");
    assert_eq!(interner.try_resolve(Keyword::from_raw(7)), None);
}

#[test]
fn intern_owned_avoids_clone_on_hit() {
    let mut interner = Interner::new();

    let a = interner.intern("test");
    let b = interner.intern_owned("test".to_string());

    assert_eq!(a, b);
    assert_eq!(interner.len(), 1);
}

#[test]
fn keyword_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    // z was inserted first, so z < a by insertion order
    assert!(z < a);
}

#[test]
fn lookup_does_not_intern() {
    let mut interner = Interner::new();
    interner.intern("present");

    assert!(interner.lookup("present").is_some());
    assert!(interner.lookup("absent").is_none());
    assert_eq!(interner.len(), 1);
}

#[test]
fn iter_yields_all_strings() {
    let mut interner = Interner::new();
    let a = interner.intern("alpha");
    let b = interner.intern("beta");

    let items: Vec<_> = interner.iter().collect();
    assert_eq!(items, vec![(a, "alpha"), (b, "beta")]);
}

#[test]
fn equal_paths_share_identity() {
    let mut interner = Interner::new();

    let a = interner.key_path(&["std", "Foo"]);
    let std = interner.key_str(ContextKey::ROOT, "std");
    let b = interner.key_str(std, "Foo");

    assert_eq!(a, b);
    assert_ne!(a, std);
    assert_eq!(interner.key_parent(a), Some(std));
    assert_eq!(interner.key_parent(std), Some(ContextKey::ROOT));
    assert_eq!(interner.key_parent(ContextKey::ROOT), None);
}

#[test]
fn same_name_under_different_parents_differs() {
    let mut interner = Interner::new();

    let a = interner.key_path(&["a", "Node"]);
    let b = interner.key_path(&["b", "Node"]);

    assert_ne!(a, b);
    assert_eq!(interner.key_name(a), interner.key_name(b));
}

#[test]
fn display_key_renders_path() {
    let mut interner = Interner::new();
    let key = interner.key_path(&["ns", "inner", "Foo"]);

    assert_eq!(interner.display_key(key), "::ns::inner::Foo");
    assert_eq!(interner.display_key(ContextKey::ROOT), "::");
    assert_eq!(interner.key_strings(key), vec!["ns", "inner", "Foo"]);
}

#[test]
#[should_panic(expected = "context key 99 not found")]
fn foreign_key_panics() {
    let mut interner = Interner::new();
    let mut other = Interner::new();
    for i in 0..98 {
        other.key_str(ContextKey::ROOT, &format!("k{i}"));
    }
    let foreign = other.key_str(ContextKey::ROOT, "last");

    interner.key_str(foreign, "x");
}
