/// Marks an absent link: no previous node, no next node, an empty end of
/// the deque, or an empty free list.
pub(crate) const NIL: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Free {
    // The next free slot.
    next: usize,
}

impl Free {
    pub(crate) fn next(&self) -> usize {
        self.next
    }
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    // The index of the node before this one.
    prev: usize,
    // The index of the node after this one.
    next: usize,
    value: T,
}

impl<T> Node<T> {
    pub(crate) fn prev(&self) -> usize {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: usize) {
        self.prev = prev;
    }

    pub(crate) fn next(&self) -> usize {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: usize) {
        self.next = next;
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub(crate) fn take(self) -> (usize, T, usize) {
        let Node { prev, value, next } = self;
        (prev, value, next)
    }
}

/// One cell of the arena backing a `Deque`. A slot either holds a linked
/// node or sits on the free list waiting to be reused.
#[derive(Clone)]
pub(crate) enum Slot<T> {
    Free(Free),
    Used(Node<T>),
}

impl<T> Slot<T> {
    pub(crate) fn new_free(next: usize) -> Slot<T> {
        Slot::Free(Free { next })
    }

    pub(crate) fn new_used(prev: usize, next: usize, value: T) -> Slot<T> {
        Slot::Used(Node { prev, next, value })
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        if let Slot::Used(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        if let Slot::Used(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub(crate) fn free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_node(self) -> Option<Node<T>> {
        if let Slot::Used(node) = self {
            Some(node)
        } else {
            None
        }
    }
}
