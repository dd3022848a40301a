//! Error type for heap operations

use std::fmt;

/// Error type for heap operations
///
/// Every failure is local to the call that produced it: the heap is left in
/// the valid state it held before the call, with no partial mutation
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Inserting would grow the heap past its fixed capacity
    CapacityExceeded,
    /// Peek or removal on a heap with no records
    EmptyHeap,
    /// The requested record or index is not present in the heap
    NotFound,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityExceeded => {
                write!(f, "insert would exceed the heap's fixed capacity")
            }
            HeapError::EmptyHeap => write!(f, "the heap contains no records"),
            HeapError::NotFound => write!(f, "record is not present in the heap"),
        }
    }
}

impl std::error::Error for HeapError {}
