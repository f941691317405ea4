//! Array construction parameters.

/// Configuration for an [`OwningArray`](crate::OwningArray).
///
/// Only the initial slot count is configurable; growth policy is fixed
/// (see [`grown_capacity`](crate::growth::grown_capacity)).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of empty slots allocated at construction.
    ///
    /// Default: 32. Zero is valid; the first write then allocates exactly
    /// the slots it needs.
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default initial slot count.
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Create a config with the given initial slot count.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Size of the initial slot allocation in bytes for element type `T`.
    pub fn slot_bytes<T>(&self) -> usize {
        self.initial_capacity
            .saturating_mul(std::mem::size_of::<Option<T>>())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
