//! Error types for heap array operations
//!
//! Every checked operation reports its outcome through [`HeapError`]. Each
//! variant maps to exactly one triggering condition, so callers can tell a
//! locked heap from a full one without inspecting state.

use crate::config::HeapMode;
use thiserror::Error;

/// Result type alias using [`HeapError`].
pub type Result<T> = std::result::Result<T, HeapError>;

/// Error type for heap array operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap was configured with `NOEXPAND`, so its capacity cannot change
    #[error("heap is configured with NOEXPAND; capacity cannot change")]
    NoExpand,

    /// The heap is locked; insertions are rejected until it is unlocked
    #[error("heap is locked; insertion rejected")]
    Locked,

    /// A max insertion was attempted on a min heap, or vice versa
    #[error("wrong heap mode: operation requires {expected:?} but heap is {actual:?}")]
    WrongMode {
        /// Mode the operation requires
        expected: HeapMode,
        /// Mode the heap was constructed with
        actual: HeapMode,
    },

    /// The heap is full; call `resize` or `grow` before inserting again
    #[error("heap capacity exhausted ({capacity} elements)")]
    CapacityExhausted {
        /// Capacity at the time of the failed insertion
        capacity: usize,
    },

    /// The backing storage could not be reallocated
    #[error("failed to allocate storage for {requested} elements")]
    AllocationFailure {
        /// Capacity that was requested
        requested: usize,
    },

    /// Arity must be at least 2
    #[error("invalid arity {arity}: a d-ary heap needs at least 2 children per node")]
    InvalidArity {
        /// The rejected arity
        arity: usize,
    },
}

/// Broad classification of a [`HeapError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Lock engaged, wrong mode, expansion disallowed, or bad arity
    Configuration,
    /// Insertion attempted at full capacity
    Capacity,
    /// Reallocation failed
    Allocation,
}

impl HeapError {
    /// Returns the category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeapError::NoExpand
            | HeapError::Locked
            | HeapError::WrongMode { .. }
            | HeapError::InvalidArity { .. } => ErrorKind::Configuration,
            HeapError::CapacityExhausted { .. } => ErrorKind::Capacity,
            HeapError::AllocationFailure { .. } => ErrorKind::Allocation,
        }
    }
}
