use std::fmt::Debug;

use crate::{
    bst::Bst,
    iter::{IntoIter, Iter, Levels, Postorder, Preorder},
    node::{rebalance, Direction, Link, Node},
    tree::SearchTree,
    validate::{self, StructureError},
};

/// A self-balancing binary search tree holding a set of unique, totally
/// ordered elements.
///
/// An [`AvlTree`] is a [`Bst`] that repairs the height balance of every
/// subtree affected by an insertion or removal, so that for every node the
/// heights of its two subtrees differ by at most 1. This bounds the height of
/// the tree to `O(log n)`, and with it the cost of [`search()`],
/// [`insert()`] and [`delete()`].
///
/// ```
/// use avlset::AvlTree;
///
/// let mut t = AvlTree::new();
/// for v in 1..=7 {
///     assert!(t.insert(v));
/// }
///
/// // Ascending input does not degenerate the tree.
/// assert_eq!(t.height(), Some(2));
///
/// assert!(t.delete(&4));
/// assert!(!t.search(&4));
/// assert_eq!(t.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
/// ```
///
/// [`search()`]: AvlTree::search
/// [`insert()`]: AvlTree::insert
/// [`delete()`]: AvlTree::delete
#[derive(Clone)]
pub struct AvlTree<E>(Bst<E>);

impl<E> Default for AvlTree<E> {
    fn default() -> Self {
        Self(Bst::default())
    }
}

impl<E> AvlTree<E> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The height of the tree: 0 for a single element, [`None`] when empty.
    pub fn height(&self) -> Option<i32> {
        self.0.root().map(Node::height)
    }

    /// Remove all elements from the tree.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, E> {
        self.0.iter()
    }

    /// Visit the elements in-order (ascending).
    pub fn inorder(&self) -> Iter<'_, E> {
        self.0.inorder()
    }

    /// Visit each element before the elements of its left and right subtrees.
    pub fn preorder(&self) -> Preorder<'_, E> {
        self.0.preorder()
    }

    /// Visit each element after the elements of its left and right subtrees.
    pub fn postorder(&self) -> Postorder<'_, E> {
        self.0.postorder()
    }

    /// Yield the elements one depth level at a time, starting with the root.
    pub fn levels(&self) -> Levels<'_, E> {
        self.0.levels()
    }
}

impl<E> AvlTree<E>
where
    E: Ord,
{
    /// Returns true if an element equal to `element` is in the tree.
    pub fn search(&self, element: &E) -> bool {
        self.0.search(element)
    }

    /// Returns a reference to the stored element equal to `element`, if any.
    pub fn get(&self, element: &E) -> Option<&E> {
        self.0.get(element)
    }

    /// The elements of the nodes visited when searching for `element`, from
    /// the root down.
    pub fn path(&self, element: &E) -> Vec<&E> {
        self.0.path(element)
    }

    /// Insert `element` into the tree, rebalancing every ancestor of the new
    /// node.
    ///
    /// Returns false, leaving the tree unchanged, if an equal element is
    /// already present.
    pub fn insert(&mut self, element: E) -> bool {
        let Some(trail) = self.0.insert_traced(element) else {
            return false;
        };

        balance_path(self.0.root_link_mut(), trail.steps());
        true
    }

    /// Remove the element equal to `element` from the tree, rebalancing every
    /// ancestor of the unlinked node.
    ///
    /// If the node holding `element` has a left child, it takes the element
    /// of its in-order predecessor and the predecessor node is unlinked
    /// instead. Returns false if no such element exists.
    pub fn delete(&mut self, element: &E) -> bool {
        let Some(trail) = self.0.delete_traced(element) else {
            return false;
        };

        balance_path(self.0.root_link_mut(), trail.steps());
        true
    }

    /// Retain only the elements for which `keep` returns true, visiting every
    /// element once in ascending order.
    ///
    /// If `keep` panics, the elements it has not yet rejected (including the
    /// one it panicked on) remain in the tree.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&E) -> bool,
    {
        let old = std::mem::take(self);
        let mut guard = Retain {
            tree: self,
            rest: old.into_iter().peekable(),
        };

        while let Some(v) = guard.rest.peek() {
            let kept = keep(v);
            let Some(v) = guard.rest.next() else {
                break;
            };
            if kept {
                guard.tree.insert(v);
            }
        }
    }

    /// Check the binary search tree and AVL invariants, recomputing every
    /// subtree height from scratch.
    pub fn validate(&self) -> Result<(), StructureError> {
        self.0.validate()?;
        validate::heights(self.0.root()).map(|_| ())
    }
}

/// Puts the unvisited elements back into the tree when dropped, so a
/// [`AvlTree::retain()`] predicate that panics leaves them in place.
struct Retain<'a, E>
where
    E: Ord,
{
    tree: &'a mut AvlTree<E>,
    rest: std::iter::Peekable<IntoIter<E>>,
}

impl<E> Drop for Retain<'_, E>
where
    E: Ord,
{
    fn drop(&mut self) {
        for v in self.rest.by_ref() {
            self.tree.insert(v);
        }
    }
}

/// Restore the AVL property of every node along the path described by
/// `steps`, from the deepest node up to the root in the slot `link`.
///
/// Descendants of each node are balanced before the node itself, so a single
/// pass leaves the whole path balanced.
fn balance_path<E>(link: &mut Link<E>, steps: &[Direction]) {
    let Some(v) = link.as_mut() else {
        return;
    };

    if let Some((&dir, rest)) = steps.split_first() {
        balance_path(v.link_mut(dir), rest);
    }

    rebalance(v);
}

impl<E> SearchTree<E> for AvlTree<E>
where
    E: Ord,
{
    fn search(&self, element: &E) -> bool {
        AvlTree::search(self, element)
    }

    fn insert(&mut self, element: E) -> bool {
        AvlTree::insert(self, element)
    }

    fn delete(&mut self, element: &E) -> bool {
        AvlTree::delete(self, element)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }
}

impl<E> Debug for AvlTree<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<E> Extend<E> for AvlTree<E>
where
    E: Ord,
{
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<E> FromIterator<E> for AvlTree<E>
where
    E: Ord,
{
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<E> IntoIterator for AvlTree<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a AvlTree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
