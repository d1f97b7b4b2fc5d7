/// The set operations shared by the unbalanced [`Bst`](crate::Bst) and the
/// self-balancing [`AvlTree`](crate::AvlTree).
///
/// Neither layer stores duplicate elements: inserting an element equal to one
/// already held is a no-op, as is deleting an element that is not held. Both
/// are reported by returning false.
pub trait SearchTree<E>
where
    E: Ord,
{
    /// Returns true if an element equal to `element` is held.
    fn search(&self, element: &E) -> bool;

    /// Insert `element`, returning false if an equal element is already
    /// held.
    fn insert(&mut self, element: E) -> bool;

    /// Remove the element equal to `element`, returning false if there is no
    /// such element.
    fn delete(&mut self, element: &E) -> bool;

    /// The number of elements held.
    fn len(&self) -> usize;

    /// Returns true if no elements are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
