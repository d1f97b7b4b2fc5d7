use std::{cmp::Ordering, fmt::Debug};

use tracing::trace;

use crate::{
    iter::{IntoIter, Iter, Levels, Postorder, Preorder},
    node::{self, Direction, Link, Node, Trail},
    tree::SearchTree,
    validate::{self, StructureError},
};

/// An unbalanced binary search tree holding a set of unique, totally ordered
/// elements.
///
/// Elements are placed exactly where a plain descent by comparison leads, so
/// the height of the tree depends on the insertion order: inserting sorted
/// input produces a tree shaped like a linked list. Use
/// [`AvlTree`](crate::AvlTree) for guaranteed logarithmic height.
pub struct Bst<E> {
    root: Link<E>,
    size: usize,
}

impl<E> Default for Bst<E> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<E> Bst<E> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true when the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Remove all elements from the tree.
    pub fn clear(&mut self) {
        drop(std::mem::take(self));
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.root())
    }

    /// Visit the elements in-order (ascending).
    ///
    /// This is the same sequence as produced by [`Bst::iter()`].
    pub fn inorder(&self) -> Iter<'_, E> {
        self.iter()
    }

    /// Visit each element before the elements of its left and right subtrees.
    pub fn preorder(&self) -> Preorder<'_, E> {
        Preorder::new(self.root())
    }

    /// Visit each element after the elements of its left and right subtrees.
    pub fn postorder(&self) -> Postorder<'_, E> {
        Postorder::new(self.root())
    }

    /// Yield the elements one depth level at a time, starting with the root.
    ///
    /// Each level lists its elements from left to right.
    pub fn levels(&self) -> Levels<'_, E> {
        Levels::new(self.root())
    }

    pub(crate) fn root(&self) -> Option<&Node<E>> {
        self.root.as_deref()
    }

    pub(crate) fn root_link_mut(&mut self) -> &mut Link<E> {
        &mut self.root
    }

    #[cfg(test)]
    pub(crate) fn from_parts(root: Node<E>, size: usize) -> Self {
        Self {
            root: Some(Box::new(root)),
            size,
        }
    }
}

impl<E> Bst<E>
where
    E: Ord,
{
    /// Returns true if an element equal to `element` is in the tree.
    pub fn search(&self, element: &E) -> bool {
        self.get(element).is_some()
    }

    /// Returns a reference to the stored element equal to `element`, if any.
    pub fn get(&self, element: &E) -> Option<&E> {
        let mut ptr = self.root();

        while let Some(v) = ptr {
            ptr = match element.cmp(v.element()) {
                Ordering::Less => v.left(),
                Ordering::Equal => return Some(v.element()),
                Ordering::Greater => v.right(),
            };
        }

        None
    }

    /// Insert `element` into the tree.
    ///
    /// Returns false, leaving the tree unchanged, if an equal element is
    /// already present.
    pub fn insert(&mut self, element: E) -> bool {
        self.insert_traced(element).is_some()
    }

    /// Remove the element equal to `element` from the tree.
    ///
    /// Returns false if no such element exists.
    pub fn delete(&mut self, element: &E) -> bool {
        self.delete_traced(element).is_some()
    }

    /// The elements of the nodes visited when searching for `element`, from
    /// the root down.
    ///
    /// The path ends at the node holding `element` if it exists, otherwise at
    /// the node beneath which `element` would be inserted.
    pub fn path(&self, element: &E) -> Vec<&E> {
        let mut path = Vec::new();
        let mut ptr = self.root();

        while let Some(v) = ptr {
            path.push(v.element());
            ptr = match element.cmp(v.element()) {
                Ordering::Less => v.left(),
                Ordering::Equal => break,
                Ordering::Greater => v.right(),
            };
        }

        path
    }

    /// Check the binary search tree invariants, independently of any cached
    /// state.
    pub fn validate(&self) -> Result<(), StructureError> {
        validate::ordering(self.root())?;
        validate::size(self.root(), self.size)
    }

    /// Insert `element` as a new leaf, returning the path to the new node.
    pub(crate) fn insert_traced(&mut self, element: E) -> Option<Trail> {
        let mut trail = Trail::default();
        let mut link = &mut self.root;

        while let Some(v) = link {
            let dir = match element.cmp(v.element()) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => {
                    trace!(size = self.size, "element already present");
                    return None;
                }
            };
            trail.push(dir);
            link = v.link_mut(dir);
        }

        *link = Some(Box::new(Node::new(element)));
        self.size += 1;

        trace!(size = self.size, depth = trail.steps().len(), "inserted element");
        Some(trail)
    }

    /// Unlink the node holding `element`, returning the path to the parent of
    /// the node that was physically removed from the tree.
    ///
    /// When the target node has a left child, its in-order predecessor (the
    /// right-most node of the left subtree) is the node unlinked, and the
    /// predecessor's element replaces the target's element.
    pub(crate) fn delete_traced(&mut self, element: &E) -> Option<Trail> {
        let mut trail = Trail::default();
        let mut link = &mut self.root;

        // Descend to the link that owns the target node.
        loop {
            let dir = match link.as_deref().map(|v| element.cmp(v.element())) {
                None => {
                    trace!(size = self.size, "element not present");
                    return None;
                }
                Some(Ordering::Equal) => break,
                Some(Ordering::Less) => Direction::Left,
                Some(Ordering::Greater) => Direction::Right,
            };
            trail.push(dir);
            link = link.as_mut()?.link_mut(dir);
        }

        let target = link.as_mut()?;
        if target.left().is_none() {
            // Promote the right subtree (if any) into the slot of the target.
            let right = target.take_right();
            *link = right;
        } else {
            trail.push(Direction::Left);
            let predecessor = take_max(target.link_mut(Direction::Left), &mut trail)?;
            target.replace_element(predecessor.into_element());
        }

        // The trail leads to the unlinked node; the rebalancing starts at its
        // parent.
        trail.pop();
        self.size -= 1;

        trace!(size = self.size, "removed element");
        Some(trail)
    }
}

/// Unlink the right-most node of the subtree owned by `link`, promoting its
/// left child (if any) into its place.
///
/// Each branch taken to reach the extracted node is appended to `trail`.
fn take_max<E>(mut link: &mut Link<E>, trail: &mut Trail) -> Option<Box<Node<E>>> {
    while link.as_deref()?.right().is_some() {
        trail.push(Direction::Right);
        link = link.as_mut()?.link_mut(Direction::Right);
    }

    let mut max = link.take()?;
    *link = max.take_left();

    // Invariant: the extracted node is detached from the tree.
    debug_assert!(max.left().is_none() && max.right().is_none());
    Some(max)
}

impl<E> Drop for Bst<E> {
    fn drop(&mut self) {
        // Unlink nodes one at a time, so that dropping a degenerate tree does
        // not recurse once per level.
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut v) = stack.pop() {
            stack.extend(v.take_left());
            stack.extend(v.take_right());
        }
    }
}

impl<E> Clone for Bst<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(self.root()),
            size: self.size,
        }
    }
}

impl<E> SearchTree<E> for Bst<E>
where
    E: Ord,
{
    fn search(&self, element: &E) -> bool {
        Bst::search(self, element)
    }

    fn insert(&mut self, element: E) -> bool {
        Bst::insert(self, element)
    }

    fn delete(&mut self, element: &E) -> bool {
        Bst::delete(self, element)
    }

    fn len(&self) -> usize {
        self.size
    }
}

impl<E> Debug for Bst<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E> Extend<E> for Bst<E>
where
    E: Ord,
{
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<E> FromIterator<E> for Bst<E>
where
    E: Ord,
{
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<E> IntoIterator for Bst<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}

impl<'a, E> IntoIterator for &'a Bst<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
