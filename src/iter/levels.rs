use std::collections::VecDeque;

use crate::node::Node;

/// A breadth-first iterator yielding the elements of one depth level of a
/// tree at a time, from the root level down.
///
/// Each level is ordered from left to right.
#[derive(Debug)]
pub struct Levels<'a, E> {
    queue: VecDeque<&'a Node<E>>,
}

impl<'a, E> Levels<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, E> Iterator for Levels<'a, E> {
    type Item = Vec<&'a E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        // Every node currently queued is at the same depth.
        let width = self.queue.len();
        let mut level = Vec::with_capacity(width);

        for _ in 0..width {
            let v = self.queue.pop_front()?;
            level.push(v.element());
            self.queue.extend(v.left().into_iter().chain(v.right()));
        }

        Some(level)
    }
}
