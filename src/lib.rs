//! An ordered set of unique elements stored in an AVL tree.
//!
//! The crate is layered in two parts:
//!
//! * [`Bst`] is a plain, unbalanced binary search tree. Every element in the
//!   left subtree of a node is strictly less than the node's element, and
//!   every element in the right subtree strictly greater. Its height, and so
//!   the cost of each operation, depends on the insertion order.
//!
//! * [`AvlTree`] reuses the [`Bst`] algorithms to place and unlink nodes, then
//!   walks the path to the affected node from the bottom up, recomputing the
//!   cached subtree heights and applying the LL, LR, RR or RL rotation at any
//!   node whose subtree heights differ by 2. The height of an [`AvlTree`] is
//!   always `O(log n)`.
//!
//! Both implement [`SearchTree`], and both offer in-order, pre-order,
//! post-order and level-order traversals.
//!
//! ```
//! use avlset::{AvlTree, Bst};
//!
//! let avl = (1..=7).collect::<AvlTree<_>>();
//! let bst = (1..=7).collect::<Bst<_>>();
//!
//! // The unbalanced tree degenerates into a list of 7 levels.
//! assert_eq!(bst.levels().count(), 7);
//!
//! // While the AVL tree is perfectly balanced.
//! let levels = avl.levels().collect::<Vec<_>>();
//! assert_eq!(levels, [vec![&4], vec![&2, &6], vec![&1, &3, &5, &7]]);
//! ```
//!
//! Rebalancing rotations are reported as `TRACE` level [`tracing`] events.
//!
//! [`tracing`]: https://docs.rs/tracing

mod avl;
mod bst;
mod iter;
mod node;
mod tree;
mod validate;

#[cfg(test)]
mod test_utils;

pub use avl::AvlTree;
pub use bst::Bst;
pub use iter::{IntoIter, Iter, Levels, Postorder, Preorder};
pub use tree::SearchTree;
pub use validate::StructureError;
