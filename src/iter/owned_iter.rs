use crate::node::{Link, Node};

/// An iterator of owned elements in ascending order, as the underlying tree
/// `into_iter()` impl.
#[derive(Debug)]
pub struct IntoIter<E> {
    stack: Vec<Box<Node<E>>>,
}

impl<E> IntoIter<E> {
    pub(crate) fn new(root: Link<E>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<E>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<E> Drop for IntoIter<E> {
    fn drop(&mut self) {
        // The stacked nodes may still own deep right subtrees.
        while let Some(mut v) = self.stack.pop() {
            self.stack.extend(v.take_left());
            self.stack.extend(v.take_right());
        }
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        Some(v.into_element())
    }
}
