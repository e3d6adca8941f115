use crate::deque::Deque;
use crate::error::DequeError;
use crate::slot::NIL;
use std::iter::FusedIterator;

/// A forward, single-pass iterator over the deque from front to back. It
/// is constructed from the [`iter`] method on `Deque`.
///
/// The iterator holds a shared borrow of its deque, so the deque cannot be
/// modified while the iterator is alive.
///
/// [`iter`]: struct.Deque.html#method.iter
pub struct Iter<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
    remaining: usize,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize, remaining: usize) -> Self {
        Self {
            target,
            next_index,
            remaining,
        }
    }

    /// Removal through the iterator is not supported; this always fails
    /// with [`DequeError::UnsupportedOperation`] and leaves both the
    /// iterator and the deque as they were.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let d: Deque<u8> = (1..=2).collect();
    /// let mut it = d.iter().unwrap();
    ///
    /// assert_eq!(Some(&1), it.next());
    /// assert_eq!(Err(DequeError::UnsupportedOperation), it.remove());
    /// assert_eq!(Some(&2), it.next());
    /// assert_eq!(2, d.len());
    /// ```
    pub fn remove(&mut self) -> Result<T, DequeError> {
        Err(DequeError::UnsupportedOperation)
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if NIL != self.next_index {
            let n = self.target.slots[self.next_index]
                .node()
                .expect("self.target.slots[self.next_index] is expected to be used");
            // The node is yielded before its missing successor ends the
            // traversal, so the last element is never skipped.
            self.next_index = n.next();
            self.remaining -= 1;
            Some(n.value())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, T> ExactSizeIterator for Iter<'l, T> {}

impl<'l, T> FusedIterator for Iter<'l, T> {}

/// An owning iterator that drains the deque from front to back. It is
/// constructed by the `IntoIterator` implementation on `Deque`.
///
/// # Examples
///
/// ```
/// use linked_deque::Deque;
///
/// let mut d = Deque::new();
/// d.push_back(Some(1)).unwrap();
/// d.push_back(Some(2)).unwrap();
/// d.push_front(Some(0)).unwrap();
///
/// let v: Vec<i32> = d.into_iter().collect();
/// assert_eq!(vec![0, 1, 2], v);
/// ```
pub struct IntoIter<T> {
    target: Deque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(target: Deque<T>) -> Self {
        Self { target }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn filter_can_find_items() {
        let mut d = Deque::new();
        d.push_front(Some(10u8)).unwrap();
        d.push_front(Some(11u8)).unwrap();
        d.push_front(Some(12u8)).unwrap();

        assert_eq!(Some(&10), d.iter().unwrap().find(|i| **i == 10));
        assert_eq!(Some(&11), d.iter().unwrap().find(|i| **i == 11));
        assert_eq!(Some(&12), d.iter().unwrap().find(|i| **i == 12));
        assert_eq!(None, d.iter().unwrap().find(|i| **i == 13));
    }

    #[test]
    fn iter_visits_front_to_back() {
        let mut d = Deque::new();
        d.push_front(Some(10u8)).unwrap();
        d.push_front(Some(11u8)).unwrap();
        d.push_back(Some(12u8)).unwrap();

        assert_eq!(vec![&11, &10, &12], d.iter().unwrap().collect::<Vec<&u8>>());

        d.pop_front().unwrap();
        assert_eq!(vec![&10, &12], d.iter().unwrap().collect::<Vec<&u8>>());
    }

    #[test]
    fn single_element_is_yielded_before_exhaustion() {
        let mut d = Deque::new();
        d.push_back(Some(7u8)).unwrap();

        let mut it = d.iter().unwrap();
        assert_eq!(1, it.len());
        assert_eq!(Some(&7), it.next());
        assert_eq!(0, it.len());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn last_element_is_yielded() {
        let d: Deque<u8> = (0..4).collect();
        let mut it = d.iter().unwrap();

        assert_eq!(Some(&0), it.next());
        assert_eq!(Some(&1), it.next());
        assert_eq!(Some(&2), it.next());
        assert_eq!(Some(&3), it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn iteration_does_not_consume() {
        let d: Deque<u8> = (0..3).collect();
        assert_eq!(3, d.iter().unwrap().count());
        assert_eq!(3, d.iter().unwrap().count());
        assert_eq!(3, d.len());
    }

    #[test]
    fn remove_is_refused_at_every_step() {
        let d: Deque<u8> = (0..2).collect();
        let mut it = d.iter().unwrap();

        assert_eq!(Err(DequeError::UnsupportedOperation), it.remove());
        it.next();
        it.next();
        assert_eq!(Err(DequeError::UnsupportedOperation), it.remove());
        d.check_links();
        assert_eq!(2, d.len());
    }

    #[test]
    fn into_iter_drains_and_reports_length() {
        let d: Deque<u8> = (0..3).collect();
        let mut it = d.into_iter();

        assert_eq!(3, it.len());
        assert_eq!(Some(0), it.next());
        assert_eq!(2, it.len());
        assert_eq!(vec![1, 2], it.collect::<Vec<u8>>());
    }

    #[test]
    fn into_iter_of_empty_deque_is_empty() {
        let d: Deque<u8> = Deque::new();
        assert_eq!(0, d.into_iter().count());
    }
}
