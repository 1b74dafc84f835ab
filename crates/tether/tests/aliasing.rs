// View aliasing and detach tests
//
// These tests check when two views observe each other's writes and when an
// append severs that sharing.

mod common;

#[cfg(test)]
mod aliasing_tests {
    use super::common::{contents, counting_slice, exact_heap, int_heap};
    use tether::{Error, FixedArray, GrowthPolicy, View};

    /// Appending within capacity overwrites cells another view still addresses
    #[test]
    fn test_append_within_cap_is_visible_through_parent() {
        let mut heap = int_heap();
        let s = counting_slice(&mut heap, 5);
        let head = heap.view(s, 0, 2).unwrap();

        let grown = heap.append(head, [70, 80]).unwrap();

        assert!(grown.shares_storage(&s));
        assert_eq!(contents(&heap, s), vec![0, 1, 70, 80, 4]);
    }

    /// Appending past capacity detaches the result from the original
    #[test]
    fn test_append_past_cap_detaches() {
        let mut heap = int_heap();
        let s = counting_slice(&mut heap, 3);

        let grown = heap.append(s, [3]).unwrap();
        heap.set(grown, 0, 100).unwrap();

        assert!(!grown.shares_storage(&s));
        assert_eq!(contents(&heap, s), vec![0, 1, 2]);
        assert_eq!(heap.reallocations(), 1);
    }

    /// Two appends to the same full view produce two independent stores
    #[test]
    fn test_sibling_appends_do_not_alias() {
        let mut heap = int_heap();
        let s = counting_slice(&mut heap, 2);

        let a = heap.append(s, [10]).unwrap();
        let b = heap.append(s, [20]).unwrap();

        assert_eq!(contents(&heap, a), vec![0, 1, 10]);
        assert_eq!(contents(&heap, b), vec![0, 1, 20]);
    }

    /// Two appends to the same view with spare capacity clobber each other
    #[test]
    fn test_sibling_appends_within_cap_share_cells() {
        let mut heap = int_heap();
        let s = heap.make(1, 4).unwrap();

        let a = heap.append(s, [10]).unwrap();
        let b = heap.append(s, [20]).unwrap();

        assert_eq!(contents(&heap, a), vec![0, 20]);
        assert_eq!(contents(&heap, b), vec![0, 20]);
    }

    #[test]
    fn test_growth_policies() {
        let mut doubling = int_heap();
        let s = counting_slice(&mut doubling, 3);
        assert_eq!(doubling.append(s, [3, 4]).unwrap().cap(), 6);
        assert_eq!(doubling.policy(), GrowthPolicy::Doubling);

        let mut exact = exact_heap();
        let s = counting_slice(&mut exact, 3);
        assert_eq!(exact.append(s, [3, 4]).unwrap().cap(), 5);
    }

    #[test]
    fn test_view_bounds() {
        let mut heap = int_heap();
        let s = heap.make(2, 5).unwrap();

        assert!(matches!(
            heap.view(s, 2, 1),
            Err(Error::OutOfRange { lo: 2, hi: 1, .. })
        ));
        assert!(matches!(
            heap.view(s, 0, 3),
            Err(Error::OutOfRange { len: 2, .. })
        ));

        let tail = heap.view(s, 1, 2).unwrap();
        assert_eq!((tail.len(), tail.cap()), (1, 4));
    }

    #[test]
    fn test_clear_is_visible_through_overlaps() {
        let mut heap = int_heap();
        let s = heap.alloc_slice([1, 2, 3, 4]);
        let mid = heap.view(s, 1, 3).unwrap();

        heap.clear(mid).unwrap();

        assert_eq!(contents(&heap, s), vec![1, 0, 0, 4]);
        assert_eq!((mid.len(), mid.cap()), (2, 3));
    }

    #[test]
    fn test_copy_between_overlapping_views() {
        let mut heap = int_heap();
        let s = heap.alloc_slice([1, 2, 3, 4, 5]);
        let dst = heap.view(s, 1, 5).unwrap();
        let src = heap.view(s, 0, 4).unwrap();

        assert_eq!(heap.copy(dst, src).unwrap(), 4);
        assert_eq!(contents(&heap, s), vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_array_views_alias_and_array_copies_do_not() {
        let mut heap = int_heap();
        let original = FixedArray::new([1, 2, 3]);
        let var = heap.alloc_array(original);
        let tail = heap.view_array(var, 1, 3).unwrap();

        heap.set(tail, 0, 9).unwrap();

        assert_eq!(heap.load_array(var).unwrap(), FixedArray::new([1, 9, 3]));
        assert_eq!(original, FixedArray::new([1, 2, 3]));
    }

    #[test]
    fn test_array_and_view_equality_rules() {
        let mut heap = int_heap();
        let mut a = FixedArray::new([1, 2, 3]);
        let b = FixedArray::from([1, 2, 3]);
        assert_eq!(a, b);

        a.set(1, 9).unwrap();
        assert_ne!(a, b);

        let va = heap.alloc_array(a).as_view();
        let vb = heap.alloc_array(b).as_view();
        assert!(!heap.equal(va, vb).unwrap());

        let short = heap.view(vb, 0, 2).unwrap();
        assert!(!heap.equal(short, vb).unwrap());
    }

    #[test]
    fn test_nil_view() {
        let mut heap = int_heap();
        let nil = View::nil();

        assert!(nil.is_nil());
        assert_eq!(heap.render(nil).unwrap(), "[]");

        let grown = heap.append(nil, [1]).unwrap();
        assert!(!grown.is_nil());
        assert_eq!(contents(&heap, grown), vec![1]);
    }

    /// Handles are bound to the heap that issued them
    #[test]
    fn test_view_is_rejected_by_another_heap() {
        let mut first = int_heap();
        let mut second = int_heap();
        let theirs = first.alloc_slice([1, 2, 3]);
        let ours = second.alloc_slice([7, 8, 9, 10]);

        assert!(matches!(
            second.set(theirs, 0, 99),
            Err(Error::InvalidStorage { .. })
        ));
        assert_eq!(contents(&second, ours), vec![7, 8, 9, 10]);
        assert_eq!(contents(&first, theirs), vec![1, 2, 3]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut heap = int_heap();
        let s = heap.make(1, 4).unwrap();

        assert!(matches!(
            heap.get(s, 1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(heap.set(s, 3, 1).is_err());
    }
}
