//! Heap configuration: flags, ordering mode, and construction parameters
//!
//! A heap is configured once at construction through [`HeapConfig`]. The
//! ordering mode is an exhaustive [`HeapMode`] so a heap is always exactly
//! one of max or min. Run-time switches that may change during the heap's
//! life (expansion policy and the cooperative lock) live in [`HeapFlags`].
//!
//! # Example
//!
//! ```rust
//! use rust_heap_array::{HeapArray, HeapConfig, HeapFlags, HeapMode};
//!
//! let config = HeapConfig::new(4)
//!     .with_mode(HeapMode::Min)
//!     .with_capacity(16)
//!     .with_flags(HeapFlags::NOEXPAND);
//!
//! let heap: HeapArray<()> = HeapArray::new(config).unwrap();
//! assert_eq!(heap.arity(), 4);
//! assert_eq!(heap.capacity(), 16);
//! assert!(heap.flags().contains(HeapFlags::NOEXPAND));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bitset of run-time heap switches
///
/// The bit values match the classic C encoding (`NOEXPAND = 0x01`,
/// `LOCK = 0x02`) so flag words can be exchanged with existing tooling.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "u8", into = "u8"))]
pub struct HeapFlags(u8);

impl HeapFlags {
    /// No flags set
    pub const NONE: HeapFlags = HeapFlags(0);
    /// Checked resizes always fail with [`HeapError::NoExpand`](crate::HeapError::NoExpand)
    pub const NOEXPAND: HeapFlags = HeapFlags(0x01);
    /// Checked insertions are rejected with [`HeapError::Locked`](crate::HeapError::Locked)
    pub const LOCK: HeapFlags = HeapFlags(0x02);

    const ALL: u8 = Self::NOEXPAND.0 | Self::LOCK.0;

    /// Returns the raw bit value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds flags from raw bits, dropping any bit that is not a known flag
    pub const fn from_bits_truncate(bits: u8) -> Self {
        HeapFlags(bits & Self::ALL)
    }

    /// Returns true if every flag in `other` is also set in `self`
    pub const fn contains(self, other: HeapFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets every flag in `other`
    pub fn insert(&mut self, other: HeapFlags) {
        self.0 |= other.0;
    }

    /// Clears every flag in `other`
    pub fn remove(&mut self, other: HeapFlags) {
        self.0 &= !other.0;
    }
}

impl From<u8> for HeapFlags {
    fn from(bits: u8) -> Self {
        HeapFlags::from_bits_truncate(bits)
    }
}

impl From<HeapFlags> for u8 {
    fn from(flags: HeapFlags) -> Self {
        flags.bits()
    }
}

impl BitOr for HeapFlags {
    type Output = HeapFlags;

    fn bitor(self, rhs: HeapFlags) -> HeapFlags {
        HeapFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for HeapFlags {
    fn bitor_assign(&mut self, rhs: HeapFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for HeapFlags {
    type Output = HeapFlags;

    fn bitand(self, rhs: HeapFlags) -> HeapFlags {
        HeapFlags(self.0 & rhs.0)
    }
}

impl fmt::Debug for HeapFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "HeapFlags(NONE)");
        }
        let mut names = Vec::with_capacity(2);
        if self.contains(HeapFlags::NOEXPAND) {
            names.push("NOEXPAND");
        }
        if self.contains(HeapFlags::LOCK) {
            names.push("LOCK");
        }
        write!(f, "HeapFlags({})", names.join(" | "))
    }
}

/// Ordering mode of a heap, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeapMode {
    /// Every parent key is greater than or equal to its children
    #[default]
    Max,
    /// Every parent key is less than or equal to its children
    Min,
}

impl HeapMode {
    /// Returns true if `key` belongs at or above `other` in this ordering.
    ///
    /// Equality counts, which drives both the non-stable sift-up and the
    /// strict invariant checker.
    #[inline(always)]
    pub(crate) fn outranks<K: Ord>(self, key: &K, other: &K) -> bool {
        match self {
            HeapMode::Max => key >= other,
            HeapMode::Min => key <= other,
        }
    }
}

/// Construction parameters for a [`HeapArray`](crate::HeapArray)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeapConfig {
    /// Children per internal node; must be at least 2
    pub arity: usize,
    /// Ordering mode
    pub mode: HeapMode,
    /// Initial flag word
    pub flags: HeapFlags,
    /// Number of elements to allocate up front
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Binary arity used by [`HeapConfig::default`]
    pub const DEFAULT_ARITY: usize = 2;

    /// Creates a max-heap configuration with the given arity, no flags and no
    /// pre-allocated storage
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            mode: HeapMode::Max,
            flags: HeapFlags::NONE,
            initial_capacity: 0,
        }
    }

    pub fn with_mode(mut self, mode: HeapMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_flags(mut self, flags: HeapFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ARITY)
    }
}
