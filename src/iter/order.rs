use crate::node::Node;

/// A depth-first iterator yielding each element before those of its left
/// subtree, and then its right subtree.
#[derive(Debug)]
pub struct Preorder<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Preorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, E> Iterator for Preorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // The left child is pushed last so that it is visited first.
        self.stack.extend(v.right().into_iter().chain(v.left()));

        Some(v.element())
    }
}

/// A depth-first iterator yielding each element after those of its left
/// subtree and its right subtree.
#[derive(Debug)]
pub struct Postorder<'a, E> {
    /// Nodes pending a visit, paired with whether their children have already
    /// been pushed.
    stack: Vec<(&'a Node<E>, bool)>,
}

impl<'a, E> Postorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        Self {
            stack: root.map(|v| (v, false)).into_iter().collect(),
        }
    }
}

impl<'a, E> Iterator for Postorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, expanded) = self.stack.pop()?;
            if expanded {
                return Some(v.element());
            }

            // Revisit "v" once both subtrees have been yielded.
            self.stack.push((v, true));
            self.stack.extend(v.right().map(|r| (r, false)));
            self.stack.extend(v.left().map(|l| (l, false)));
        }
    }
}
