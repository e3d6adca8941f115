//! A double-ended queue (deque) built from doubly-linked nodes, with
//! constant-time insertion and removal at the front and the back, and a
//! forward-only iterator.
//!
//! Internally, the nodes live in a `Vec` and link to their neighbours by
//! index. Removed nodes release their slot onto an internal free list,
//! which later insertions reuse before the `Vec` is grown.
//!
//! The element type is never nullable: insertion takes an `Option<T>` and
//! refuses `None`, and every refused operation is reported through
//! [`DequeError`] without changing the deque.

mod deque;
mod error;
mod iterators;
mod position;
mod slot;

pub use crate::deque::Deque;
pub use crate::error::DequeError;
pub use crate::iterators::{IntoIter, Iter};
pub use crate::position::Position;
