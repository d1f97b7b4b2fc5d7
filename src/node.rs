use tracing::trace;

/// An owning, possibly empty, child pointer.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// The branch taken when descending from a [`Node`] to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

/// A path from the root of a tree, recorded as the branches taken at each
/// level.
///
/// Following every step from the root lands on the last node of the path.
/// An empty [`Trail`] refers to the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Trail(Vec<Direction>);

impl Trail {
    pub(crate) fn push(&mut self, dir: Direction) {
        self.0.push(dir);
    }

    /// Shorten the path by one step, so that it refers to the parent of the
    /// node it previously referred to.
    pub(crate) fn pop(&mut self) -> Option<Direction> {
        self.0.pop()
    }

    pub(crate) fn steps(&self) -> &[Direction] {
        &self.0
    }
}

pub(crate) struct Node<E> {
    /// Child nodes pointers.
    left: Link<E>,
    right: Link<E>,

    /// The height of the subtree rooted at this node.
    ///
    /// A leaf has a height of 0, and a missing child is considered to have a
    /// height of -1. Only the balancing layer keeps this value up to date.
    height: i32,

    element: E,
}

impl<E> Node<E> {
    pub(crate) fn new(element: E) -> Self {
        Self {
            element,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub(crate) fn element(&self) -> &E {
        &self.element
    }

    /// Overwrite the element held by this node, returning the old one.
    pub(crate) fn replace_element(&mut self, element: E) -> E {
        std::mem::replace(&mut self.element, element)
    }

    pub(crate) fn into_element(self) -> E {
        self.element
    }

    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The child pointer in the given direction.
    pub(crate) fn link_mut(&mut self, dir: Direction) -> &mut Link<E> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<E> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<E> {
        self.right.take()
    }

    /// Recompute the cached height of this node from its children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }

    /// Compute the balance factor of the subtree rooted at `self`.
    ///
    /// Returns a negative number when left heavy, and a positive number when
    /// right heavy. The cached height of `self` must be current.
    pub(crate) fn balance_factor(&self) -> i32 {
        match (self.left(), self.right()) {
            (_, None) => -self.height,
            (None, Some(_)) => self.height,
            (Some(l), Some(r)) => r.height - l.height,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_left(&mut self, n: Node<E>) -> &mut Node<E> {
        self.left.insert(Box::new(n))
    }

    #[cfg(test)]
    pub(crate) fn set_right(&mut self, n: Node<E>) -> &mut Node<E> {
        self.right.insert(Box::new(n))
    }

    #[cfg(test)]
    pub(crate) fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}

// Only the node's own fields are printed, so formatting a degenerate tree (or
// an iterator stack holding its nodes) never recurses.
impl<E> std::fmt::Debug for Node<E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Deep copy the subtree rooted at `root`, preserving the cached heights.
///
/// Nodes are copied from an explicit stack of (source, destination slot)
/// pairs, so the depth of the subtree does not bound the call stack.
pub(crate) fn clone_subtree<E>(root: Option<&Node<E>>) -> Link<E>
where
    E: Clone,
{
    let mut out = None;
    let mut stack = Vec::new();
    if let Some(root) = root {
        stack.push((root, &mut out));
    }

    while let Some((src, slot)) = stack.pop() {
        let dst = slot.insert(Box::new(Node {
            left: None,
            right: None,
            height: src.height,
            element: src.element.clone(),
        }));

        let Node { left, right, .. } = &mut **dst;
        if let Some(l) = src.left() {
            stack.push((l, left));
        }
        if let Some(r) = src.right() {
            stack.push((r, right));
        }
    }

    out
}

/// The height of `n`, where an absent node has height -1.
pub(crate) fn height<E>(n: Option<&Node<E>>) -> i32 {
    n.map(Node::height).unwrap_or(-1)
}

/// Restore the AVL property at `a`, assuming every descendant of `a` already
/// satisfies it.
///
/// Recomputes the height of `a` and, if the balance factor is -2 or +2,
/// applies the single or double rotation that corrects it. The subtree root
/// in the slot referenced by `a` may change.
pub(crate) fn rebalance<E>(a: &mut Box<Node<E>>) {
    a.update_height();

    match a.balance_factor() {
        // Left-heavy
        factor @ ..=-2 => {
            if a.left().map(Node::balance_factor).unwrap_or_default() <= 0 {
                trace!(rotation = "LL", factor, "rebalancing subtree");
                rotate_ll(a);
            } else {
                trace!(rotation = "LR", factor, "rebalancing subtree");
                rotate_lr(a);
            }
        }
        // Right-heavy
        factor @ 2.. => {
            if a.right().map(Node::balance_factor).unwrap_or_default() >= 0 {
                trace!(rotation = "RR", factor, "rebalancing subtree");
                rotate_rr(a);
            } else {
                trace!(rotation = "RL", factor, "rebalancing subtree");
                rotate_rl(a);
            }
        }
        -1..=1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between subtree heights cannot
    // exceed 1 once the subtree rooted at "a" has been rebalanced.
    debug_assert!(a.balance_factor().abs() <= 1);
}

/// Right rotate the subtree rooted at `a` around its left child `B`.
///
/// ```text
///          A
///         / \                           B
///        B   4        LL              /   \
///       / \      --------------->    x     A
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `a` has no left child.
fn rotate_ll<E>(a: &mut Box<Node<E>>) {
    let Some(mut b) = a.left.take() else {
        unreachable!("LL rotation of a node without a left child");
    };

    a.left = b.right.take();
    a.update_height();

    // "a" now holds B, and "b" holds the old subtree root A.
    std::mem::swap(a, &mut b);
    a.right = Some(b);
    a.update_height();
}

/// Left rotate the subtree rooted at `a` around its right child `B`.
///
/// ```text
///      A
///     / \                               B
///    1   B            RR              /   \
///       / \      --------------->    A     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `a` has no right child.
fn rotate_rr<E>(a: &mut Box<Node<E>>) {
    let Some(mut b) = a.right.take() else {
        unreachable!("RR rotation of a node without a right child");
    };

    a.right = b.left.take();
    a.update_height();

    std::mem::swap(a, &mut b);
    a.left = Some(b);
    a.update_height();
}

/// Promote the right child `C` of the left child `B` of `a` to be the root of
/// the subtree.
///
/// ```text
///          A
///         / \                           C
///        B   4        LR              /   \
///       / \      --------------->    B     A
///      1   C                        / \   / \
///         / \                      1   2 3   4
///        2   3
/// ```
///
/// # Panics
///
/// Panics if `a` has no left child, or that child has no right child.
fn rotate_lr<E>(a: &mut Box<Node<E>>) {
    let Some(mut b) = a.left.take() else {
        unreachable!("LR rotation of a node without a left child");
    };
    let Some(mut c) = b.right.take() else {
        unreachable!("LR rotation of a left child without a right child");
    };

    a.left = c.right.take();
    b.right = c.left.take();
    a.update_height();
    b.update_height();

    // "a" now holds C, and "c" holds the old subtree root A.
    std::mem::swap(a, &mut c);
    a.left = Some(b);
    a.right = Some(c);
    a.update_height();
}

/// Promote the left child `C` of the right child `B` of `a` to be the root of
/// the subtree.
///
/// ```text
///      A
///     / \                               C
///    1   B            RL              /   \
///       / \      --------------->    A     B
///      C   4                        / \   / \
///     / \                          1   2 3   4
///    2   3
/// ```
///
/// # Panics
///
/// Panics if `a` has no right child, or that child has no left child.
fn rotate_rl<E>(a: &mut Box<Node<E>>) {
    let Some(mut b) = a.right.take() else {
        unreachable!("RL rotation of a node without a right child");
    };
    let Some(mut c) = b.left.take() else {
        unreachable!("RL rotation of a right child without a left child");
    };

    a.right = c.left.take();
    b.left = c.right.take();
    a.update_height();
    b.update_height();

    std::mem::swap(a, &mut c);
    a.left = Some(c);
    a.right = Some(b);
    a.update_height();
}
