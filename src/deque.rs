use crate::error::DequeError;
use crate::iterators::{IntoIter, Iter};
use crate::position::Position;
use crate::slot::{Node, Slot, NIL};
use std::fmt;
use std::iter::FromIterator;

/// A double-ended queue built from doubly-linked nodes. Elements can be
/// added and removed at either end in constant time.
#[derive(Clone)]
pub struct Deque<T> {
    // Index of the first slot on the free list. NIL when the free list
    // is empty.
    free_list: usize,
    // The index of the first node. NIL when the deque is empty.
    pub(crate) first: usize,
    // The index of the last node. NIL when the deque is empty.
    pub(crate) last: usize,
    // Bumped on every link or unlink so detached positions can notice
    // that the chain changed underneath them.
    pub(crate) stamp: usize,
    // The number of linked nodes.
    len: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    // Arena holding every node, linked and free.
    pub(crate) slots: Vec<Slot<T>>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list()
            .entries(Iter::new(self, self.first, self.len))
            .finish()
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`. No allocations are performed until
    /// values are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            free_list: NIL,
            first: NIL,
            last: NIL,
            stamp: 0,
            len: 0,
            len_free: 0,
            slots: Vec::new(),
        }
    }

    /// Create a new `Deque` whose free list already holds `capacity`
    /// slots, so the first `capacity` insertions do not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::with_capacity(16);
    /// assert_eq!(16, deque.len_freelist());
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        let mut slots = Vec::with_capacity(capacity);

        let mut next = NIL;
        for i in 0..capacity {
            slots.push(Slot::new_free(next));
            next = i;
        }

        Deque {
            free_list: next,
            first: NIL,
            last: NIL,
            stamp: 0,
            len: 0,
            len_free: capacity,
            slots,
        }
    }

    /// Reserves room for at least `additional` more slots in the backing
    /// `Vec`. The reserved room is not added to the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u32> = Deque::new();
    /// d.reserve(16);
    /// assert!(d.capacity() >= 16);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    /// How many nodes could be held without growing the backing `Vec`.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_front(Some(1)).unwrap();
    /// d.push_back(Some(2)).unwrap();
    /// assert_eq!(2, d.len());
    ///
    /// d.pop_front().unwrap();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the deque holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// assert!(d.is_empty());
    ///
    /// d.push_front(Some(1)).unwrap();
    /// assert!(!d.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    /// The number of released slots waiting to be reused.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_front(Some(1)).unwrap();
    /// assert_eq!(0, d.len_freelist());
    ///
    /// d.pop_front().unwrap();
    /// assert_eq!(1, d.len_freelist());
    ///
    /// d.push_front(Some(2)).unwrap();
    /// assert_eq!(0, d.len_freelist());
    /// ```
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `value` at the front of the deque. `None` is refused with
    /// [`DequeError::InvalidArgument`] and the deque is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut d = Deque::new();
    /// d.push_front(Some(10)).unwrap();
    /// d.push_front(Some(20)).unwrap();
    ///
    /// assert_eq!(Err(DequeError::InvalidArgument), d.push_front(None));
    /// assert_eq!(Some(&20), d.front());
    /// assert_eq!(2, d.len());
    /// ```
    pub fn push_front(&mut self, value: Option<T>) -> Result<(), DequeError> {
        let value = value.ok_or(DequeError::InvalidArgument)?;
        self.link_front(value);
        Ok(())
    }

    /// Insert `value` at the back of the deque. `None` is refused with
    /// [`DequeError::InvalidArgument`] and the deque is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut d = Deque::new();
    /// d.push_back(Some(10)).unwrap();
    /// d.push_back(Some(20)).unwrap();
    ///
    /// assert_eq!(Err(DequeError::InvalidArgument), d.push_back(None));
    /// assert_eq!(Some(&20), d.back());
    /// assert_eq!(2, d.len());
    /// ```
    pub fn push_back(&mut self, value: Option<T>) -> Result<(), DequeError> {
        let value = value.ok_or(DequeError::InvalidArgument)?;
        self.link_back(value);
        Ok(())
    }

    /// Remove the first element and return it. An empty deque yields
    /// [`DequeError::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut d = Deque::new();
    /// d.push_back(Some(10)).unwrap();
    /// d.push_back(Some(20)).unwrap();
    ///
    /// assert_eq!(Ok(10), d.pop_front());
    /// assert_eq!(Ok(20), d.pop_front());
    /// assert_eq!(Err(DequeError::Empty), d.pop_front());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }

        let (prev, value, next) = self.release(self.first).take();
        debug_assert_eq!(NIL, prev);

        if NIL != next {
            self.node_mut(next).set_prev(NIL);
        } else {
            self.last = NIL;
        }
        self.first = next;

        // With one node left both ends must name it.
        if 1 == self.len {
            self.last = self.first;
        }

        Ok(value)
    }

    /// Remove the last element and return it. An empty deque yields
    /// [`DequeError::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut d = Deque::new();
    /// d.push_front(Some(10)).unwrap();
    /// d.push_front(Some(20)).unwrap();
    ///
    /// assert_eq!(Ok(10), d.pop_back());
    /// assert_eq!(Ok(20), d.pop_back());
    /// assert_eq!(Err(DequeError::Empty), d.pop_back());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }

        let (prev, value, next) = self.release(self.last).take();
        debug_assert_eq!(NIL, next);

        if NIL != prev {
            self.node_mut(prev).set_next(NIL);
        } else {
            self.first = NIL;
        }
        self.last = prev;

        if 1 == self.len {
            self.first = self.last;
        }

        Ok(value)
    }

    /// Get the first element, or `None` when the deque is empty.
    pub fn front(&self) -> Option<&T> {
        self.slots
            .get(self.first)
            .and_then(Slot::node)
            .map(Node::value)
    }

    /// Get the first element as a mutable reference, or `None` when the
    /// deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(Some(10)).unwrap();
    ///
    /// if let Some(v) = d.front_mut() {
    ///     *v += 10;
    /// }
    ///
    /// assert_eq!(Some(&20), d.front());
    /// ```
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.first;
        self.slots
            .get_mut(first)
            .and_then(Slot::node_mut)
            .map(Node::value_mut)
    }

    /// Get the last element, or `None` when the deque is empty.
    pub fn back(&self) -> Option<&T> {
        self.slots
            .get(self.last)
            .and_then(Slot::node)
            .map(Node::value)
    }

    /// Get the last element as a mutable reference, or `None` when the
    /// deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.last;
        self.slots
            .get_mut(last)
            .and_then(Slot::node_mut)
            .map(Node::value_mut)
    }

    /// Create a forward, single-pass iterator over the deque from front to
    /// back. Traversing again needs a fresh call. Asking for an iterator
    /// over an empty deque yields [`DequeError::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// assert_eq!(Some(DequeError::Empty), d.iter().err());
    ///
    /// d.push_back(Some(1)).unwrap();
    /// d.push_back(Some(2)).unwrap();
    /// d.push_back(Some(3)).unwrap();
    ///
    /// let v: Vec<&u8> = d.iter().unwrap().collect();
    /// assert_eq!(vec![&1, &2, &3], v);
    /// ```
    pub fn iter(&self) -> Result<Iter<'_, T>, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }
        Ok(Iter::new(self, self.first, self.len))
    }

    /// Take a detached position at the front of the deque. Unlike
    /// [`iter`](Deque::iter) the position does not borrow the deque; it
    /// refuses to advance once the deque has been modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut d = Deque::new();
    /// d.push_back(Some('a')).unwrap();
    /// d.push_back(Some('b')).unwrap();
    ///
    /// let mut pos = d.position().unwrap();
    /// assert_eq!(Ok(Some(&'a')), pos.advance(&d));
    ///
    /// d.push_back(Some('c')).unwrap();
    /// assert_eq!(Err(DequeError::ConcurrentModification), pos.advance(&d));
    /// ```
    pub fn position(&self) -> Result<Position, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }
        Ok(Position::new(self.first, self.stamp))
    }

    fn link_front(&mut self, value: T) {
        let ix = self.allocate(NIL, self.first, value);

        // Point the old first node back at the node we just inserted.
        if NIL != self.first {
            let first = self.first;
            self.node_mut(first).set_prev(ix);
        }
        self.first = ix;

        // If the deque was empty, the new node is both ends.
        if NIL == self.last {
            self.last = ix;
        }
    }

    fn link_back(&mut self, value: T) {
        let ix = self.allocate(self.last, NIL, value);

        // Point the old last node forward at the node we just inserted.
        if NIL != self.last {
            let last = self.last;
            self.node_mut(last).set_next(ix);
        }
        self.last = ix;

        // If the deque was empty, the new node is both ends.
        if NIL == self.first {
            self.first = ix;
        }
    }

    fn node_mut(&mut self, ix: usize) -> &mut Node<T> {
        self.slots[ix]
            .node_mut()
            .expect("linked index is expected to refer to a used slot")
    }

    fn allocate(&mut self, prev: usize, next: usize, value: T) -> usize {
        self.stamp = self.stamp.wrapping_add(1);
        self.len += 1;

        let s = Slot::new_used(prev, next, value);

        if NIL == self.free_list {
            self.slots.push(s);
            self.slots.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.slots[ix]
                .free()
                .expect("free list is expected to hold free slots")
                .next();
            self.slots[ix] = s;
            self.len_free -= 1;
            ix
        }
    }

    // Put the slot at `ix` on the free list and hand back the node that
    // lived there. Its neighbours still point at `ix` until the caller
    // relinks them.
    fn release(&mut self, ix: usize) -> Node<T> {
        debug_assert!(self.slots[ix].node().is_some());

        self.stamp = self.stamp.wrapping_add(1);
        self.len -= 1;

        let mut s = Slot::new_free(self.free_list);
        std::mem::swap(&mut s, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;

        s.into_node()
            .expect("released slot is expected to have been used")
    }

    /// Walk the chain in both directions and the free list, asserting
    /// every structural invariant of the deque.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        match self.len {
            0 => {
                assert_eq!(NIL, self.first);
                assert_eq!(NIL, self.last);
            }
            1 => {
                assert_eq!(self.first, self.last);
                let n = self.slots[self.first].node().unwrap();
                assert_eq!(NIL, n.prev());
                assert_eq!(NIL, n.next());
            }
            _ => assert_ne!(self.first, self.last),
        }

        let mut seen = 0;
        let mut prev = NIL;
        let mut ix = self.first;
        while NIL != ix {
            assert!(seen < self.len, "forward walk exceeds len");
            let n = self.slots[ix].node().unwrap();
            assert_eq!(prev, n.prev());
            prev = ix;
            ix = n.next();
            seen += 1;
        }
        assert_eq!(self.len, seen);
        assert_eq!(self.last, prev);

        let mut seen = 0;
        let mut next = NIL;
        let mut ix = self.last;
        while NIL != ix {
            assert!(seen < self.len, "backward walk exceeds len");
            let n = self.slots[ix].node().unwrap();
            assert_eq!(next, n.next());
            next = ix;
            ix = n.prev();
            seen += 1;
        }
        assert_eq!(self.len, seen);
        assert_eq!(self.first, next);

        let mut free = 0;
        let mut ix = self.free_list;
        while NIL != ix {
            ix = self.slots[ix].free().unwrap().next();
            free += 1;
        }
        assert_eq!(self.len_free, free);
        assert_eq!(self.slots.len(), self.len + self.len_free);
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = Self::new();
        for v in iter {
            d.link_back(v);
        }
        d
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
