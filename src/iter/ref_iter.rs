use crate::node::Node;

/// An in-order (ascending) iterator over the elements of a tree.
///
/// Created by [`Bst::iter()`](crate::Bst::iter) and
/// [`AvlTree::iter()`](crate::AvlTree::iter).
#[derive(Debug)]
pub struct Iter<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<E>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v.element())
    }
}
