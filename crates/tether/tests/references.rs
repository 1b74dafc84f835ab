// Reference semantics tests
//
// Pointers, map handles, closures and block scopes: which operations are
// seen by every holder and which stay local.

mod common;

#[cfg(test)]
mod pointer_tests {
    use super::common::{contents, int_heap};
    use tether::{Error, Heap, Pointer};

    fn reassign_parameter(heap: &mut Heap<i64>, mut ptr: Pointer<i64>) -> Pointer<i64> {
        assert!(!ptr.is_nil());
        ptr = heap.make_pointer(99);
        ptr
    }

    #[test]
    fn test_reassigning_a_pointer_copy_leaves_the_caller() {
        let mut heap = int_heap();
        let p = heap.make_pointer(37);

        let other = reassign_parameter(&mut heap, p);

        assert_ne!(other, p);
        assert_eq!(heap.deref(p).unwrap(), 37);
        assert_eq!(heap.deref(other).unwrap(), 99);
    }

    #[test]
    fn test_storing_through_a_pointer_copy_reaches_the_caller() {
        let mut heap = int_heap();
        let p = heap.make_pointer(37);
        let copy = p;

        heap.store(copy, 99).unwrap();
        assert_eq!(heap.deref(p).unwrap(), 99);
    }

    #[test]
    fn test_pointer_into_view_sees_view_writes() {
        let mut heap = int_heap();
        let s = heap.alloc_slice([1, 2, 3]);
        let p = heap.address_of(s, 2).unwrap();

        heap.set(s, 2, 30).unwrap();
        assert_eq!(heap.deref(p).unwrap(), 30);

        heap.update(p, |v| *v += 1).unwrap();
        assert_eq!(contents(&heap, s), vec![1, 2, 31]);
    }

    #[test]
    fn test_nil_dereference_is_distinct_from_default() {
        let mut heap = int_heap();
        let zero = heap.make_pointer(0);
        let nil: Pointer<i64> = Pointer::nil();

        assert_eq!(heap.deref(zero).unwrap(), 0);
        let err = heap.deref(nil).unwrap_err();
        assert!(matches!(err, Error::NilDereference { .. }));
        assert!(err.to_string().contains("nil pointer dereference"));
    }
}

#[cfg(test)]
mod map_tests {
    use tether::Map;

    fn bump(scores: Map<&'static str, i32>) {
        scores.increment("seen");
    }

    #[test]
    fn test_passing_a_map_aliases_it() {
        let scores = Map::new();
        bump(scores.clone());
        bump(scores.clone());

        assert_eq!(scores.lookup("seen"), (2, true));
    }

    #[test]
    fn test_lookup_then_insert() {
        let scores: Map<&str, i32> = Map::new();
        assert_eq!(scores.lookup("k"), (0, false));

        scores.insert("k", 4);
        assert_eq!(scores.lookup("k"), (4, true));
    }

    #[test]
    fn test_deep_copy_breaks_aliasing() {
        let a = Map::from_iter([("Alice", 5)]);
        let alias = a.clone();
        let copy = a.deep_copy();

        a.delete("Alice");

        assert!(alias.is_empty());
        assert_eq!(copy.lookup("Alice"), (5, true));
    }
}

#[cfg(test)]
mod closure_tests {
    use tether::{Closure, SharedCell, make_closure};

    fn counter() -> Closure<i64, i64> {
        make_closure(5, |a| {
            *a += 1;
            *a
        })
    }

    #[test]
    fn test_same_instance_accumulates() {
        let next = counter();
        assert_eq!(next.call(), 6);
        assert_eq!(next.call(), 7);
    }

    #[test]
    fn test_independent_instances_diverge() {
        let a = counter();
        let b = counter();

        assert_eq!(a.call(), b.call());
        assert_eq!(a.call(), 7);
        assert_eq!(b.state(), 6);
    }

    #[test]
    fn test_captured_cell_outlives_enclosing_scope() {
        let closure = {
            let captured = SharedCell::new(String::from("a"));
            Closure::capturing(&captured, |s: &mut String| {
                s.push('!');
                s.len()
            })
        };

        assert_eq!(closure.call(), 2);
        assert_eq!(closure.state(), "a!");
    }
}

#[cfg(test)]
mod scope_tests {
    use super::common::int_heap;
    use tether::{Env, Error};

    #[test]
    fn test_shadow_then_restore() {
        let mut heap = int_heap();
        let mut env = Env::new();
        let outer = env.declare(&mut heap, "n", 10);

        let inner = env
            .block(|env| -> tether::Result<i64> {
                env.declare(&mut heap, "n", 5);
                env.load(&heap, "n")
            })
            .unwrap();

        assert_eq!(inner, 5);
        assert_eq!(env.load(&heap, "n").unwrap(), 10);
        assert_eq!(heap.deref(outer).unwrap(), 10);
    }

    #[test]
    fn test_undefined_name() {
        let heap = int_heap();
        let env: Env<i64> = Env::new();

        let err = env.load(&heap, "ghost").unwrap_err();
        assert!(matches!(err, Error::UndefinedName { .. }));
        assert_eq!(err.to_string(), "undefined: ghost");
    }

    #[test]
    fn test_manual_enter_exit() {
        let mut heap = int_heap();
        let mut env = Env::new();

        env.enter_block();
        env.declare(&mut heap, "scoped", 1);
        assert_eq!(env.depth(), 2);
        env.exit_block();

        assert!(!env.is_declared("scoped"));
    }
}
