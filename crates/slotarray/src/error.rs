//! Array error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while growing or writing an array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Backing storage could not be grown to the requested slot count.
    ///
    /// The array is left exactly as it was before the call.
    AllocationFailed {
        /// Slot count the array tried to grow to.
        requested: usize,
        /// Slot count at the time of the failure.
        capacity: usize,
    },
    /// The slot count needed to address `index` does not fit in `usize`.
    CapacityOverflow {
        /// The index that could not be addressed.
        index: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "slot allocation failed: requested {requested} slots, capacity {capacity} slots"
                )
            }
            Self::CapacityOverflow { index } => {
                write!(f, "index {index} exceeds the addressable slot range")
            }
        }
    }
}

impl Error for ArrayError {}

/// A write that the array refused, handing the element back.
///
/// Returned by [`put`](crate::OwningArray::put),
/// [`add`](crate::OwningArray::add) and
/// [`insert_at`](crate::OwningArray::insert_at). The array never took
/// ownership of `element`, so its releaser was not run on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    error: ArrayError,
    element: T,
}

impl<T> Rejected<T> {
    pub(crate) fn new(error: ArrayError, element: T) -> Self {
        Self { error, element }
    }

    /// Why the write failed.
    pub fn error(&self) -> &ArrayError {
        &self.error
    }

    /// Take the element back.
    pub fn into_element(self) -> T {
        self.element
    }

    /// Split into the error and the element.
    pub fn into_parts(self) -> (ArrayError, T) {
        (self.error, self.element)
    }
}

// Elements are opaque; only the error is shown.
impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "write rejected: {}", self.error)
    }
}

impl<T> Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Rejected<T>> for ArrayError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}
