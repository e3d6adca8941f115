use std::error::Error;
use std::fmt;

/// The ways an operation on a `Deque` can be refused. A refused operation
/// never modifies the deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// `None` was offered where an element was required.
    InvalidArgument,
    /// The deque holds no elements to remove or traverse.
    Empty,
    /// Removal was attempted through a read-only traversal.
    UnsupportedOperation,
    /// A `Position` was advanced after its deque had been modified.
    ConcurrentModification,
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DequeError::InvalidArgument => write!(f, "cannot add an absent item to the deque"),
            DequeError::Empty => write!(f, "deque is empty"),
            DequeError::UnsupportedOperation => {
                write!(f, "removal is not supported while traversing the deque")
            }
            DequeError::ConcurrentModification => {
                write!(f, "deque was modified after the position was taken")
            }
        }
    }
}

impl Error for DequeError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!("deque is empty", DequeError::Empty.to_string());
        assert_eq!(
            "cannot add an absent item to the deque",
            DequeError::InvalidArgument.to_string()
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let e: Box<dyn Error> = Box::new(DequeError::UnsupportedOperation);
        assert!(e.to_string().contains("not supported"));
    }
}
