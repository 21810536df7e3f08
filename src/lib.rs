//! Array-backed d-ary heaps for Rust
//!
//! This crate provides [`HeapArray`], an insert-only d-ary heap stored in a
//! single contiguous buffer. It supports both max and min ordering, any arity
//! of 2 or more, and leaves every allocation decision to the caller.
//!
//! # Features
//!
//! - **Configurable arity**: binary, ternary, quaternary... heaps from one type
//! - **Max or min ordering**: chosen once at construction via [`HeapMode`]
//! - **Manual capacity**: storage only grows through [`HeapArray::resize`] /
//!   [`HeapArray::grow`], never behind the caller's back
//! - **Checked and unchecked insertion**: checked calls validate lock, mode and
//!   capacity and report a [`HeapError`]; `unsafe` `_unchecked` variants skip
//!   every guard for benchmark-grade throughput
//! - **Invariant checker**: [`HeapArray::is_max_heap`] / [`HeapArray::is_min_heap`]
//!   verify the whole array in O(n)
//!
//! # Example
//!
//! ```rust
//! use rust_heap_array::{Element, HeapArray, HeapError};
//!
//! let mut heap = HeapArray::min_heap(4).unwrap();
//! assert_eq!(
//!     heap.insert(Element::new(3u64, "three")),
//!     Err(HeapError::CapacityExhausted { capacity: 0 })
//! );
//!
//! heap.grow(8).unwrap();
//! heap.insert(Element::new(3, "three")).unwrap();
//! heap.insert(Element::new(1, "one")).unwrap();
//! heap.insert(Element::new(2, "two")).unwrap();
//!
//! assert_eq!(heap.peek().map(|e| e.payload), Some("one"));
//! assert!(heap.is_min_heap());
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod heap_array;

pub use config::{HeapConfig, HeapFlags, HeapMode};
pub use element::Element;
pub use error::{ErrorKind, HeapError, Result};
pub use heap_array::HeapArray;
