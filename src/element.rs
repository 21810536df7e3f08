//! Heap elements: a sort key paired with a caller payload

/// A single heap slot
///
/// The heap orders elements by `key` only. `payload` is carried along
/// untouched; use a reference or a handle type for `T` when the payload's
/// lifetime is managed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element<T, K = u64> {
    /// The ordering key
    pub key: K,
    /// Caller data, never inspected by the heap
    pub payload: T,
}

impl<T, K> Element<T, K> {
    pub fn new(key: K, payload: T) -> Self {
        Self { key, payload }
    }

    /// Splits the element into `(key, payload)`
    pub fn into_parts(self) -> (K, T) {
        (self.key, self.payload)
    }
}

impl<K> Element<(), K> {
    /// An element with no payload, as used by throughput benchmarks
    pub fn bare(key: K) -> Self {
        Self { key, payload: () }
    }
}

impl<T, K> From<(K, T)> for Element<T, K> {
    fn from((key, payload): (K, T)) -> Self {
        Self { key, payload }
    }
}
