use crate::deque::Deque;
use crate::error::DequeError;
use crate::slot::{Slot, NIL};

/// A forward position in a `Deque` that does not borrow it. It is
/// constructed from the [`position`] method on `Deque`.
///
/// Positions can be stored in other data structures alongside the deque.
/// Every change to the deque's chain invalidates positions taken before
/// it, and advancing an invalidated position fails with
/// [`DequeError::ConcurrentModification`] instead of reading a stale
/// chain.
///
/// While the type system allows it, advancing a `Position` against a deque
/// other than the one that created it will result in (likely) unexpected
/// behavior.
///
/// [`position`]: struct.Deque.html#method.position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    next_index: usize,
    stamp: usize,
}

impl Position {
    pub(crate) fn new(next_index: usize, stamp: usize) -> Self {
        Self { next_index, stamp }
    }

    /// Return the element at this position and step towards the back.
    /// Once the last element has been returned, `Ok(None)` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let d: Deque<u8> = (1..=2).collect();
    /// let mut pos = d.position().unwrap();
    ///
    /// assert_eq!(Ok(Some(&1)), pos.advance(&d));
    /// assert_eq!(Ok(Some(&2)), pos.advance(&d));
    /// assert_eq!(Ok(None), pos.advance(&d));
    /// ```
    pub fn advance<'l, T>(&mut self, target: &'l Deque<T>) -> Result<Option<&'l T>, DequeError> {
        if self.stamp != target.stamp {
            return Err(DequeError::ConcurrentModification);
        }
        if NIL == self.next_index {
            return Ok(None);
        }

        let n = target
            .slots
            .get(self.next_index)
            .and_then(Slot::node)
            .ok_or(DequeError::ConcurrentModification)?;
        self.next_index = n.next();
        Ok(Some(n.value()))
    }

    /// True once every element has been returned by
    /// [`advance`](Position::advance).
    pub fn is_exhausted(&self) -> bool {
        NIL == self.next_index
    }

    /// Removal through a position is not supported; this always fails
    /// with [`DequeError::UnsupportedOperation`].
    pub fn remove(&mut self) -> Result<(), DequeError> {
        Err(DequeError::UnsupportedOperation)
    }
}
