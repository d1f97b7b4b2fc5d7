use proptest::prelude::*;

/// The exclusive upper bound of generated elements.
const VALUE_MAX: u32 = 1_000;

/// The exclusive upper bound of elements targeted by generated operations.
///
/// A small value domain encourages multiple operations to act on the same
/// element.
const OP_VALUE_MAX: u32 = 20;

/// The maximum number of elements generated for a single tree.
pub(crate) const N_VALUES: usize = 200;

/// Generate arbitrary elements from [0..[`VALUE_MAX`]).
pub(crate) fn arbitrary_element() -> impl Strategy<Value = u32> {
    0..VALUE_MAX
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Insert(u32),
    Search(u32),
    Delete(u32),
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..OP_VALUE_MAX).prop_map(Op::Insert),
        (0..OP_VALUE_MAX).prop_map(Op::Search),
        (0..OP_VALUE_MAX).prop_map(Op::Delete),
    ]
}

/// The greatest height an AVL tree holding `n` (> 0) elements can have.
///
/// The sparsest AVL tree of height `h` holds `N(h) = N(h-1) + N(h-2) + 1`
/// nodes, with `N(-1) = 0` and `N(0) = 1`.
pub(crate) fn max_avl_height(n: usize) -> i32 {
    let (mut prev, mut cur, mut h) = (0, 1, 0);

    loop {
        let next = cur + prev + 1;
        if next > n {
            return h;
        }
        prev = cur;
        cur = next;
        h += 1;
    }
}

#[test]
fn test_max_avl_height() {
    assert_eq!(max_avl_height(1), 0);
    assert_eq!(max_avl_height(2), 1);
    assert_eq!(max_avl_height(3), 1);
    assert_eq!(max_avl_height(4), 2);
    assert_eq!(max_avl_height(7), 3);
    assert_eq!(max_avl_height(12), 4);
}
