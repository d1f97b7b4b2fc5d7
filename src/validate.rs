use thiserror::Error;

use crate::{iter::Iter, node::Node};

/// A violated structural invariant, reported by
/// [`Bst::validate()`](crate::Bst::validate) and
/// [`AvlTree::validate()`](crate::AvlTree::validate).
///
/// The mutation API never produces a tree that fails validation; an error
/// indicates a bug in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The in-order sequence of elements is not strictly ascending.
    #[error("element at in-order position {position} is not greater than its predecessor")]
    Unordered {
        /// Index of the offending element in the in-order sequence.
        position: usize,
    },

    /// The recorded element count differs from the number of nodes.
    #[error("tree records {recorded} elements but {reachable} nodes are reachable")]
    SizeMismatch {
        /// The size recorded by the tree.
        recorded: usize,
        /// The number of nodes reachable from the root.
        reachable: usize,
    },

    /// A node caches a height that differs from the height of its subtree.
    #[error("node at depth {depth} caches height {cached}, subtree height is {computed}")]
    StaleHeight {
        /// Distance of the node from the root.
        depth: usize,
        /// The height stored in the node.
        cached: i32,
        /// The height of the subtree rooted at the node.
        computed: i32,
    },

    /// The subtree heights of a node differ by more than 1.
    #[error("node at depth {depth} has balance factor {factor}")]
    Unbalanced {
        /// Distance of the node from the root.
        depth: usize,
        /// Right subtree height minus left subtree height.
        factor: i32,
    },
}

/// Assert every element is strictly greater than its in-order predecessor,
/// which holds if and only if the binary search property holds at every
/// node.
pub(crate) fn ordering<E>(root: Option<&Node<E>>) -> Result<(), StructureError>
where
    E: Ord,
{
    let mut iter = Iter::new(root);
    let Some(mut last) = iter.next() else {
        return Ok(());
    };

    for (i, v) in iter.enumerate() {
        if v <= last {
            return Err(StructureError::Unordered { position: i + 1 });
        }
        last = v;
    }

    Ok(())
}

pub(crate) fn size<E>(root: Option<&Node<E>>, recorded: usize) -> Result<(), StructureError> {
    let reachable = Iter::new(root).count();
    if reachable != recorded {
        return Err(StructureError::SizeMismatch {
            recorded,
            reachable,
        });
    }
    Ok(())
}

/// Recompute the height of every subtree from scratch (ignoring the cached
/// values) and assert the cached heights match and the AVL balance condition
/// holds at every node.
///
/// Returns the height of the tree, or -1 when empty.
pub(crate) fn heights<E>(root: Option<&Node<E>>) -> Result<i32, StructureError> {
    subtree_height(root, 0)
}

fn subtree_height<E>(n: Option<&Node<E>>, depth: usize) -> Result<i32, StructureError> {
    let Some(n) = n else {
        return Ok(-1);
    };

    let left = subtree_height(n.left(), depth + 1)?;
    let right = subtree_height(n.right(), depth + 1)?;
    let computed = 1 + left.max(right);

    if n.height() != computed {
        return Err(StructureError::StaleHeight {
            depth,
            cached: n.height(),
            computed,
        });
    }

    let factor = right - left;
    if factor.abs() > 1 {
        return Err(StructureError::Unbalanced { depth, factor });
    }

    Ok(computed)
}
