//! Array-backed d-ary heap with explicit capacity management
//!
//! [`HeapArray`] stores its elements in one contiguous buffer and addresses
//! the tree implicitly: the parent of slot `i > 0` is `(i - 1) / d` and the
//! children of slot `i` are `i*d + 1 ..= i*d + d`.
//!
//! The heap is insert-only. Capacity never changes on its own; callers grow
//! it with [`resize`](HeapArray::resize) or [`grow`](HeapArray::grow) so that
//! insertion cost can be measured separately from allocation cost.
//!
//! # Checked and unchecked operations
//!
//! Every mutating operation comes in two forms:
//!
//! | Checked | Unchecked | Guards skipped |
//! |---------|-----------|----------------|
//! | [`insert_max`](HeapArray::insert_max) | [`insert_max_unchecked`](HeapArray::insert_max_unchecked) | lock, mode, capacity |
//! | [`insert_min`](HeapArray::insert_min) | [`insert_min_unchecked`](HeapArray::insert_min_unchecked) | lock, mode, capacity |
//! | [`insert`](HeapArray::insert) | [`insert_unchecked`](HeapArray::insert_unchecked) | lock, capacity |
//! | [`resize`](HeapArray::resize) | [`force_resize`](HeapArray::force_resize) | `NOEXPAND` |
//!
//! The unchecked insertions are `unsafe`: they append without a capacity
//! check. Lock and mode are not memory-safety conditions, so ignoring them
//! only breaks the ordering, which [`is_valid`](HeapArray::is_valid) reports.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert_*` | O(log_d n) |
//! | `resize`   | O(n)       |
//! | `is_*_heap` | O(n)      |
//! | `peek`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_heap_array::{Element, HeapArray};
//!
//! let mut heap = HeapArray::max_heap(2).unwrap();
//! heap.resize(6).unwrap();
//!
//! for key in [5u64, 3, 8, 1, 9, 2] {
//!     heap.insert_max(Element::new(key, "item")).unwrap();
//! }
//!
//! assert_eq!(heap.len(), 6);
//! assert!(heap.is_max_heap());
//! assert_eq!(heap.peek().map(|e| e.key), Some(9));
//! ```

use crate::config::{HeapConfig, HeapFlags, HeapMode};
use crate::element::Element;
use crate::error::{HeapError, Result};
use tracing::{debug, trace};

/// A d-ary max- or min-heap stored in a manually sized array
///
/// `T` is the payload type and `K` the ordering key (`u64` by default).
#[derive(Debug)]
pub struct HeapArray<T, K = u64> {
    /// Children per internal node, fixed at construction
    arity: usize,
    /// Logical capacity; `data.capacity()` is always at least this large
    capacity: usize,
    mode: HeapMode,
    flags: HeapFlags,
    data: Vec<Element<T, K>>,
}

impl<T, K: Ord> HeapArray<T, K> {
    /// Creates a heap from a configuration
    ///
    /// # Errors
    /// - [`HeapError::InvalidArity`] if `config.arity < 2`
    /// - [`HeapError::AllocationFailure`] if the initial storage cannot be allocated
    pub fn new(config: HeapConfig) -> Result<Self> {
        if config.arity < 2 {
            return Err(HeapError::InvalidArity {
                arity: config.arity,
            });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(config.initial_capacity)
            .map_err(|_| HeapError::AllocationFailure {
                requested: config.initial_capacity,
            })?;

        Ok(Self {
            arity: config.arity,
            capacity: config.initial_capacity,
            mode: config.mode,
            flags: config.flags,
            data,
        })
    }

    /// Creates an empty max heap with zero capacity
    pub fn max_heap(arity: usize) -> Result<Self> {
        Self::new(HeapConfig::new(arity).with_mode(HeapMode::Max))
    }

    /// Creates an empty min heap with zero capacity
    pub fn min_heap(arity: usize) -> Result<Self> {
        Self::new(HeapConfig::new(arity).with_mode(HeapMode::Min))
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the heap can hold before it must be resized
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn flags(&self) -> HeapFlags {
        self.flags
    }

    /// Replaces the flag word
    pub fn set_flags(&mut self, flags: HeapFlags) {
        self.flags = flags;
    }

    /// Sets `LOCK`; checked insertions fail until [`unlock`](Self::unlock)
    pub fn lock(&mut self) {
        self.flags.insert(HeapFlags::LOCK);
    }

    pub fn unlock(&mut self) {
        self.flags.remove(HeapFlags::LOCK);
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(HeapFlags::LOCK)
    }

    /// Returns the root element: the maximum of a max heap, the minimum of a
    /// min heap (provided the ordering invariant holds)
    pub fn peek(&self) -> Option<&Element<T, K>> {
        self.data.first()
    }

    /// The backing array in heap order
    pub fn as_slice(&self) -> &[Element<T, K>] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<T, K>> {
        self.data.iter()
    }

    // ========================================================================
    // Capacity management
    // ========================================================================

    /// Sets the capacity to exactly `new_capacity` elements
    ///
    /// Shrinking below the current length truncates the array. Any prefix of
    /// a heap array is itself a heap, so the ordering invariant survives.
    ///
    /// On allocation failure the existing elements and capacity are left
    /// untouched.
    ///
    /// # Errors
    /// - [`HeapError::NoExpand`] if `NOEXPAND` is set
    /// - [`HeapError::AllocationFailure`] if the storage cannot be grown
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        self.check_expand()?;
        self.reallocate(new_capacity)
    }

    /// Adds `additional` slots to the current capacity
    ///
    /// # Errors
    /// Same as [`resize`](Self::resize); an overflowing request is reported
    /// as [`HeapError::AllocationFailure`].
    pub fn grow(&mut self, additional: usize) -> Result<()> {
        self.check_expand()?;
        let requested = self
            .capacity
            .checked_add(additional)
            .ok_or(HeapError::AllocationFailure {
                requested: usize::MAX,
            })?;
        self.reallocate(requested)
    }

    /// Like [`resize`](Self::resize) but ignores `NOEXPAND`
    ///
    /// # Errors
    /// [`HeapError::AllocationFailure`] if the storage cannot be grown.
    pub fn force_resize(&mut self, new_capacity: usize) -> Result<()> {
        self.reallocate(new_capacity)
    }

    fn check_expand(&self) -> Result<()> {
        if self.flags.contains(HeapFlags::NOEXPAND) {
            trace!(capacity = self.capacity, "resize rejected: NOEXPAND");
            return Err(HeapError::NoExpand);
        }
        Ok(())
    }

    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.data.len() {
            debug!(
                len = self.data.len(),
                new_capacity, "truncating heap to new capacity"
            );
            self.data.truncate(new_capacity);
        }

        if new_capacity > self.data.capacity() {
            let additional = new_capacity - self.data.len();
            if let Err(err) = self.data.try_reserve_exact(additional) {
                debug!(
                    capacity = self.capacity,
                    new_capacity,
                    error = %err,
                    "heap reallocation failed"
                );
                return Err(HeapError::AllocationFailure {
                    requested: new_capacity,
                });
            }
        } else {
            self.data.shrink_to(new_capacity);
        }

        debug!(
            old_capacity = self.capacity,
            new_capacity, "heap resized"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    // ========================================================================
    // Checked insertion
    // ========================================================================

    /// Inserts into a max heap
    ///
    /// A rejected call leaves the heap untouched.
    ///
    /// # Errors
    /// Guards are evaluated in this order:
    /// 1. [`HeapError::Locked`] if `LOCK` is set
    /// 2. [`HeapError::WrongMode`] if the heap is a min heap
    /// 3. [`HeapError::CapacityExhausted`] if `len() >= capacity()`
    pub fn insert_max(&mut self, element: Element<T, K>) -> Result<()> {
        self.check_insert(HeapMode::Max)?;
        // SAFETY: check_insert established len < capacity
        unsafe { self.append_and_sift(element, HeapMode::Max) };
        Ok(())
    }

    /// Inserts into a min heap
    ///
    /// # Errors
    /// Mirror of [`insert_max`](Self::insert_max) with the mode guard
    /// requiring [`HeapMode::Min`].
    pub fn insert_min(&mut self, element: Element<T, K>) -> Result<()> {
        self.check_insert(HeapMode::Min)?;
        // SAFETY: check_insert established len < capacity
        unsafe { self.append_and_sift(element, HeapMode::Min) };
        Ok(())
    }

    /// Inserts using the heap's own mode; never fails with `WrongMode`
    pub fn insert(&mut self, element: Element<T, K>) -> Result<()> {
        match self.mode {
            HeapMode::Max => self.insert_max(element),
            HeapMode::Min => self.insert_min(element),
        }
    }

    fn check_insert(&self, requested: HeapMode) -> Result<()> {
        if self.flags.contains(HeapFlags::LOCK) {
            trace!(len = self.data.len(), "insert rejected: heap locked");
            return Err(HeapError::Locked);
        }
        if self.mode != requested {
            trace!(?requested, mode = ?self.mode, "insert rejected: wrong mode");
            return Err(HeapError::WrongMode {
                expected: requested,
                actual: self.mode,
            });
        }
        if self.data.len() >= self.capacity {
            trace!(capacity = self.capacity, "insert rejected: capacity exhausted");
            return Err(HeapError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Unchecked insertion
    // ========================================================================

    /// Max-heap sift-up insertion with every guard skipped
    ///
    /// `LOCK` and the heap's mode are ignored. Calling this on a min heap
    /// breaks its ordering.
    ///
    /// # Safety
    /// `self.len() < self.capacity()` must hold.
    pub unsafe fn insert_max_unchecked(&mut self, element: Element<T, K>) {
        self.append_and_sift(element, HeapMode::Max);
    }

    /// Min-heap sift-up insertion with every guard skipped
    ///
    /// # Safety
    /// `self.len() < self.capacity()` must hold.
    pub unsafe fn insert_min_unchecked(&mut self, element: Element<T, K>) {
        self.append_and_sift(element, HeapMode::Min);
    }

    /// Inserts using the heap's own mode with lock and capacity guards skipped
    ///
    /// # Safety
    /// `self.len() < self.capacity()` must hold.
    pub unsafe fn insert_unchecked(&mut self, element: Element<T, K>) {
        let mode = self.mode;
        self.append_and_sift(element, mode);
    }

    /// # Safety
    /// `self.len() < self.capacity()`, which implies spare room in `data`.
    #[inline]
    unsafe fn append_and_sift(&mut self, element: Element<T, K>, mode: HeapMode) {
        let len = self.data.len();
        debug_assert!(len < self.capacity, "insert past heap capacity");
        debug_assert!(len < self.data.capacity());
        std::ptr::write(self.data.as_mut_ptr().add(len), element);
        self.data.set_len(len + 1);
        self.sift_up(len, mode);
    }

    /// Moves the element at `child` toward the root while it outranks its
    /// parent. Ties move up too, so equal keys are not kept in insertion order.
    fn sift_up(&mut self, mut child: usize, mode: HeapMode) {
        while child > 0 {
            let parent = (child - 1) / self.arity;
            if !mode.outranks(&self.data[child].key, &self.data[parent].key) {
                break;
            }
            self.data.swap(child, parent);
            child = parent;
        }
    }

    // ========================================================================
    // Invariant checks
    // ========================================================================

    /// Returns true if no child key is greater than or equal to its parent's
    ///
    /// Equal parent and child keys count as a violation.
    pub fn is_max_heap(&self) -> bool {
        self.satisfies(HeapMode::Max)
    }

    /// Returns true if no child key is less than or equal to its parent's
    ///
    /// Equal parent and child keys count as a violation.
    pub fn is_min_heap(&self) -> bool {
        self.satisfies(HeapMode::Min)
    }

    /// Checks the invariant of the heap's own mode
    pub fn is_valid(&self) -> bool {
        self.satisfies(self.mode)
    }

    fn satisfies(&self, mode: HeapMode) -> bool {
        let len = self.data.len();
        for parent in 0..len {
            let first = parent.saturating_mul(self.arity).saturating_add(1);
            if first >= len {
                break;
            }
            let end = first.saturating_add(self.arity).min(len);
            for child in first..end {
                if mode.outranks(&self.data[child].key, &self.data[parent].key) {
                    return false;
                }
            }
        }
        true
    }
}

// A derived Clone would size the new Vec to `len`, dropping the spare room
// that unchecked insertion relies on.
impl<T: Clone, K: Clone> Clone for HeapArray<T, K> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            arity: self.arity,
            capacity: self.capacity,
            mode: self.mode,
            flags: self.flags,
            data,
        }
    }
}

impl<'a, T, K> IntoIterator for &'a HeapArray<T, K> {
    type Item = &'a Element<T, K>;
    type IntoIter = std::slice::Iter<'a, Element<T, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<T>(heap: &HeapArray<T>) -> Vec<u64> {
        heap.iter().map(|e| e.key).collect()
    }

    #[test]
    fn test_reference_insertion_sequence() {
        let mut heap = HeapArray::max_heap(2).unwrap();
        heap.resize(6).unwrap();

        for key in [5u64, 3, 8, 1, 9, 2] {
            heap.insert_max(Element::bare(key)).unwrap();
            assert!(heap.is_max_heap());
        }

        assert_eq!(heap.len(), 6);
        assert_eq!(keys(&heap), vec![9, 8, 5, 1, 3, 2]);
    }

    #[test]
    fn test_min_insertion_sequence() {
        let mut heap = HeapArray::min_heap(3).unwrap();
        heap.resize(7).unwrap();

        for key in [5u64, 3, 8, 1, 9, 2, 7] {
            heap.insert_min(Element::bare(key)).unwrap();
            assert!(heap.is_min_heap());
        }

        assert_eq!(heap.peek().map(|e| e.key), Some(1));
        assert_eq!(keys(&heap), vec![1, 2, 8, 3, 9, 5, 7]);
    }

    #[test]
    fn test_first_insert_goes_to_root() {
        let mut heap = HeapArray::max_heap(4).unwrap();
        heap.grow(1).unwrap();
        heap.insert_max(Element::new(42, "root")).unwrap();
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.peek(), Some(&Element::new(42, "root")));
    }

    #[test]
    fn test_equal_keys_bubble_to_root() {
        let mut heap = HeapArray::max_heap(2).unwrap();
        heap.resize(2).unwrap();

        heap.insert_max(Element::new(5, "first")).unwrap();
        heap.insert_max(Element::new(5, "second")).unwrap();

        assert_eq!(heap.as_slice()[0].payload, "second");
        assert_eq!(heap.as_slice()[1].payload, "first");
    }

    #[test]
    fn test_equal_keys_fail_strict_checker() {
        let mut heap = HeapArray::min_heap(2).unwrap();
        heap.resize(2).unwrap();
        heap.insert_min(Element::bare(7)).unwrap();
        heap.insert_min(Element::bare(7)).unwrap();
        assert!(!heap.is_min_heap());
        assert!(!heap.is_max_heap());
    }

    #[test]
    fn test_invalid_arity() {
        assert_eq!(
            HeapArray::<()>::max_heap(1).unwrap_err(),
            HeapError::InvalidArity { arity: 1 }
        );
        assert_eq!(
            HeapArray::<()>::min_heap(0).unwrap_err(),
            HeapError::InvalidArity { arity: 0 }
        );
    }

    #[test]
    fn test_empty_heap_checks() {
        let heap = HeapArray::<()>::max_heap(2).unwrap();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 0);
        assert_eq!(heap.peek(), None);
        assert!(heap.is_max_heap());
        assert!(heap.is_min_heap());
        assert!(heap.is_valid());
    }

    #[test]
    fn test_insert_at_zero_capacity() {
        let mut heap = HeapArray::<()>::max_heap(2).unwrap();
        assert_eq!(
            heap.insert_max(Element::bare(1)),
            Err(HeapError::CapacityExhausted { capacity: 0 })
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn test_guard_order() {
        let mut heap = HeapArray::<()>::new(
            HeapConfig::new(2)
                .with_mode(HeapMode::Min)
                .with_flags(HeapFlags::LOCK),
        )
        .unwrap();

        // Lock is reported before wrong mode and before capacity
        assert_eq!(heap.insert_max(Element::bare(1)), Err(HeapError::Locked));

        heap.unlock();
        assert_eq!(
            heap.insert_max(Element::bare(1)),
            Err(HeapError::WrongMode {
                expected: HeapMode::Max,
                actual: HeapMode::Min
            })
        );

        assert_eq!(
            heap.insert_min(Element::bare(1)),
            Err(HeapError::CapacityExhausted { capacity: 0 })
        );
    }

    #[test]
    fn test_insert_dispatches_on_mode() {
        let mut max = HeapArray::max_heap(2).unwrap();
        let mut min = HeapArray::min_heap(2).unwrap();
        max.resize(3).unwrap();
        min.resize(3).unwrap();

        for key in [2u64, 7, 4] {
            max.insert(Element::bare(key)).unwrap();
            min.insert(Element::bare(key)).unwrap();
        }

        assert_eq!(max.peek().map(|e| e.key), Some(7));
        assert_eq!(min.peek().map(|e| e.key), Some(2));
        assert!(max.is_valid());
        assert!(min.is_valid());
    }

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut heap = HeapArray::<()>::max_heap(2).unwrap();
        heap.resize(10).unwrap();
        assert_eq!(heap.capacity(), 10);
        heap.grow(8).unwrap();
        assert_eq!(heap.capacity(), 18);
        heap.resize(4).unwrap();
        assert_eq!(heap.capacity(), 4);
        heap.resize(0).unwrap();
        assert_eq!(heap.capacity(), 0);
    }

    #[test]
    fn test_grow_overflow() {
        let mut heap = HeapArray::<()>::max_heap(2).unwrap();
        heap.resize(1).unwrap();
        assert_eq!(
            heap.grow(usize::MAX),
            Err(HeapError::AllocationFailure {
                requested: usize::MAX
            })
        );
        assert_eq!(heap.capacity(), 1);
    }

    #[test]
    fn test_failed_allocation_keeps_elements() {
        let mut heap = HeapArray::max_heap(2).unwrap();
        heap.resize(3).unwrap();
        for key in [1u64, 2, 3] {
            heap.insert_max(Element::bare(key)).unwrap();
        }

        let err = heap.resize(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            HeapError::AllocationFailure {
                requested: usize::MAX
            }
        );
        assert_eq!(heap.capacity(), 3);
        assert_eq!(keys(&heap), vec![3, 1, 2]);
    }

    #[test]
    fn test_shrink_truncates_and_keeps_invariant() {
        let mut heap = HeapArray::max_heap(3).unwrap();
        heap.resize(10).unwrap();
        for key in [4u64, 10, 7, 1, 12, 9, 3, 8, 6, 2] {
            heap.insert_max(Element::bare(key)).unwrap();
        }
        let prefix: Vec<u64> = keys(&heap)[..4].to_vec();

        heap.resize(4).unwrap();
        assert_eq!(heap.len(), 4);
        assert_eq!(keys(&heap), prefix);
        assert!(heap.is_max_heap());
        assert_eq!(
            heap.insert_max(Element::bare(100)),
            Err(HeapError::CapacityExhausted { capacity: 4 })
        );
    }

    #[test]
    fn test_force_resize_ignores_noexpand() {
        let mut heap = HeapArray::<()>::new(
            HeapConfig::new(2).with_flags(HeapFlags::NOEXPAND),
        )
        .unwrap();
        assert_eq!(heap.resize(4), Err(HeapError::NoExpand));
        assert_eq!(heap.grow(4), Err(HeapError::NoExpand));
        assert_eq!(heap.capacity(), 0);

        heap.force_resize(4).unwrap();
        assert_eq!(heap.capacity(), 4);
        assert!(heap.flags().contains(HeapFlags::NOEXPAND));
    }

    #[test]
    fn test_unchecked_matches_checked() {
        let input = [17u64, 4, 99, 23, 56, 1, 88, 42, 15, 64];
        let mut checked = HeapArray::min_heap(4).unwrap();
        let mut unchecked = HeapArray::min_heap(4).unwrap();
        checked.resize(input.len()).unwrap();
        unchecked.resize(input.len()).unwrap();

        for key in input {
            checked.insert_min(Element::bare(key)).unwrap();
            unsafe { unchecked.insert_min_unchecked(Element::bare(key)) };
        }

        assert_eq!(keys(&checked), keys(&unchecked));
        assert!(unchecked.is_min_heap());
    }

    #[test]
    fn test_unchecked_ignores_lock_and_mode() {
        let mut heap = HeapArray::max_heap(2).unwrap();
        heap.resize(3).unwrap();
        heap.insert_max(Element::bare(9)).unwrap();
        heap.lock();

        unsafe { heap.insert_unchecked(Element::bare(5)) };
        assert_eq!(heap.len(), 2);
        assert!(heap.is_max_heap());

        // Min-mode sift on a max heap: 20 <= 9 is false, so it stays a leaf
        unsafe { heap.insert_min_unchecked(Element::bare(20)) };
        assert_eq!(heap.len(), 3);
        assert!(!heap.is_max_heap());
        assert!(!heap.is_valid());
    }

    #[test]
    fn test_lock_unlock() {
        let mut heap = HeapArray::max_heap(2).unwrap();
        heap.resize(2).unwrap();
        heap.lock();
        assert!(heap.is_locked());
        assert_eq!(heap.insert(Element::bare(1)), Err(HeapError::Locked));
        heap.unlock();
        assert!(!heap.is_locked());
        heap.insert(Element::bare(1)).unwrap();
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_checker_detects_deep_violation() {
        // Build a valid heap, then corrupt a leaf through an unchecked max
        // insertion into a min heap
        let mut heap = HeapArray::min_heap(2).unwrap();
        heap.resize(8).unwrap();
        for key in [10u64, 20, 30, 40, 50, 60, 70] {
            heap.insert_min(Element::bare(key)).unwrap();
        }
        assert!(heap.is_min_heap());

        // 5 >= 40 fails immediately, so 5 is left under 40
        unsafe { heap.insert_max_unchecked(Element::bare(5)) };
        assert_eq!(heap.as_slice()[7].key, 5);
        assert!(!heap.is_min_heap());
    }

    #[test]
    fn test_clone_keeps_spare_capacity() {
        let mut heap = HeapArray::max_heap(2).unwrap();
        heap.resize(4).unwrap();
        heap.insert_max(Element::bare(3u64)).unwrap();

        let mut copy = heap.clone();
        assert_eq!(copy.capacity(), 4);
        assert!(copy.data.capacity() >= 4);
        for key in [1u64, 5, 2] {
            unsafe { copy.insert_max_unchecked(Element::bare(key)) };
        }
        assert_eq!(keys(&copy), vec![5, 2, 3, 1]);
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_generic_key() {
        let mut heap: HeapArray<&str, i32> = HeapArray::min_heap(2).unwrap();
        heap.resize(3).unwrap();
        heap.insert(Element::new(-5, "neg")).unwrap();
        heap.insert(Element::new(10, "pos")).unwrap();
        heap.insert(Element::new(0, "zero")).unwrap();
        assert_eq!(heap.peek().map(|e| e.payload), Some("neg"));
        assert!(heap.is_min_heap());
    }
}
