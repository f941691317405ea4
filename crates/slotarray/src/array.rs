//! The owning slot array.
//!
//! [`OwningArray`] stores elements in a `Vec<Option<T>>` whose length is the
//! array's capacity: every allocated slot exists and is either empty or
//! occupied. The logical length `len` bounds the addressable indices. Slots
//! at or above `len` are always empty; slots below it are empty only when a
//! sparse write skipped over them (holes).

use std::cmp::Ordering;
use std::fmt;

use crate::config::ArrayConfig;
use crate::error::{ArrayError, Rejected};
use crate::growth::grown_capacity;
use crate::release::{DropRelease, Release};

/// A growable, index-addressable array that owns its elements.
///
/// Every element accepted by a write is released exactly once through the
/// array's releaser `R`: when [`put`](Self::put) overwrites it, when
/// [`delete_at`](Self::delete_at) removes it, or when the array is dropped.
/// A write that fails hands the element back in a [`Rejected`] instead, so
/// the caller keeps ownership. [`take`](Self::take) is the one way out that
/// skips the releaser: it moves the element back to the caller, who then
/// owns its disposal.
///
/// The array is not synchronised. Mutation goes through `&mut self`.
pub struct OwningArray<T, R: Release<T> = DropRelease> {
    /// One entry per allocated slot; `slots.len()` is the capacity.
    slots: Vec<Option<T>>,
    /// Logical length. `slots[len..]` is all `None`.
    len: usize,
    releaser: R,
}

impl<T, R: Release<T>> OwningArray<T, R> {
    /// Create an empty array with the default capacity of
    /// [`ArrayConfig::DEFAULT_CAPACITY`] slots.
    ///
    /// Returns `Err(ArrayError::AllocationFailed)` if the initial slots
    /// cannot be allocated.
    pub fn new(releaser: R) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::default(), releaser)
    }

    /// Create an empty array with `config.initial_capacity` slots.
    pub fn with_config(config: ArrayConfig, releaser: R) -> Result<Self, ArrayError> {
        let mut slots = Vec::new();
        if slots.try_reserve_exact(config.initial_capacity).is_err() {
            log::warn!(
                "failed to allocate {} initial slots ({} bytes)",
                config.initial_capacity,
                config.slot_bytes::<T>()
            );
            return Err(ArrayError::AllocationFailed {
                requested: config.initial_capacity,
                capacity: 0,
            });
        }
        slots.resize_with(config.initial_capacity, || None);
        Ok(Self {
            slots,
            len: 0,
            releaser,
        })
    }

    /// Logical length: one past the highest index ever written, minus
    /// deletions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Never decreases.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots below the logical length.
    pub fn occupied(&self) -> usize {
        self.slots[..self.len].iter().filter(|s| s.is_some()).count()
    }

    /// Whether `index` is a hole: below the length but never written.
    pub fn is_hole(&self, index: usize) -> bool {
        index < self.len && self.slots[index].is_none()
    }

    /// The installed release policy.
    pub fn releaser(&self) -> &R {
        &self.releaser
    }

    /// The element at `index`.
    ///
    /// Returns `None` for holes and for `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_ref()
    }

    /// Mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_mut()
    }

    /// Store `element` at `index`, growing and extending the array as needed.
    ///
    /// An element already at `index` is released first. Writing at or past
    /// `len()` sets the length to `index + 1`; any slots skipped between the
    /// old length and `index` become holes.
    ///
    /// On failure the array is unchanged and the element is returned inside
    /// the [`Rejected`].
    pub fn put(&mut self, index: usize, element: T) -> Result<(), Rejected<T>> {
        let required = match slots_through(index) {
            Ok(required) => required,
            Err(error) => return Err(Rejected::new(error, element)),
        };
        if let Err(error) = self.ensure_capacity(required) {
            return Err(Rejected::new(error, element));
        }

        if let Some(old) = self.slots[index].take() {
            self.releaser.release(old);
        }
        self.slots[index] = Some(element);
        if index >= self.len {
            self.len = required;
        }
        Ok(())
    }

    /// Append `element` at index `len()`.
    pub fn add(&mut self, element: T) -> Result<(), Rejected<T>> {
        self.put(self.len, element)
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Shifted elements are relocated, not released. When `index >= len()`
    /// nothing is shifted and the call behaves like [`put`](Self::put) on an
    /// empty slot, possibly leaving holes; that degenerate case is
    /// intentional.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<(), Rejected<T>> {
        let required = match slots_through(index.max(self.len)) {
            Ok(required) => required,
            Err(error) => return Err(Rejected::new(error, element)),
        };
        if let Err(error) = self.ensure_capacity(required) {
            return Err(Rejected::new(error, element));
        }

        if index < self.len {
            // slots[len] is empty because capacity > len; rotating brings it
            // down to `index`.
            self.slots[index..=self.len].rotate_right(1);
        }
        debug_assert!(self.slots[index].is_none());
        self.slots[index] = Some(element);
        self.len = required;
        Ok(())
    }

    /// Release the element at `index` and close the gap.
    ///
    /// Elements in `(index, len)` shift one slot left and the length drops
    /// by one. Deleting a hole shifts without releasing anything. Out of
    /// range indices are ignored.
    pub fn delete_at(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if let Some(old) = self.slots[index].take() {
            self.releaser.release(old);
        }
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        debug_assert!(self.slots[self.len].is_none());
    }

    /// Move the element at `index` out without releasing it.
    ///
    /// The slot becomes a hole; the length is unchanged. Ownership passes
    /// back to the caller.
    pub fn take(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].take()
    }

    /// Sort `[0, len)` in place with `compare`.
    ///
    /// The sort is unstable. Holes are ordered after every element, so a
    /// sorted array keeps its holes at the tail.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.slots[..self.len].sort_unstable_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }

    /// Binary search `[0, len)` for an element matching `key`.
    ///
    /// `compare(element, key)` must report how `element` orders relative to
    /// `key`, consistently with the order the array was sorted in. Holes
    /// compare greater than any key. On an unsorted array the result is
    /// unspecified but the call is still safe.
    pub fn bsearch_by<K, F>(&self, key: &K, mut compare: F) -> Option<&T>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        let live = &self.slots[..self.len];
        let found = live
            .binary_search_by(|slot| match slot {
                Some(element) => compare(element, key),
                None => Ordering::Greater,
            })
            .ok()?;
        live[found].as_ref()
    }

    /// Explicitly tear the array down, releasing every remaining element.
    ///
    /// Equivalent to dropping it.
    pub fn destroy(self) {
        drop(self);
    }

    /// Grow the slot storage so that at least `required` slots exist.
    ///
    /// Reservation happens before any slot is touched, so on failure the
    /// array is exactly as it was.
    fn ensure_capacity(&mut self, required: usize) -> Result<(), ArrayError> {
        let current = self.slots.len();
        let target = grown_capacity(current, required);
        if target == current {
            return Ok(());
        }
        if self.slots.try_reserve_exact(target - current).is_err() {
            log::warn!("failed to grow slot storage from {current} to {target} slots");
            return Err(ArrayError::AllocationFailed {
                requested: target,
                capacity: current,
            });
        }
        self.slots.resize_with(target, || None);
        log::trace!("grew slot storage from {current} to {target} slots");
        Ok(())
    }
}

impl<T: Ord, R: Release<T>> OwningArray<T, R> {
    /// Sort `[0, len)` by the element type's total order.
    pub fn sort(&mut self) {
        self.sort_by(Ord::cmp);
    }

    /// Binary search a sorted array for an element equal to `key`.
    pub fn bsearch(&self, key: &T) -> Option<&T> {
        self.bsearch_by(key, Ord::cmp)
    }
}

impl<T, R: Release<T>> Drop for OwningArray<T, R> {
    fn drop(&mut self) {
        let Self {
            slots,
            len,
            releaser,
        } = self;
        let mut released = 0usize;
        for slot in &mut slots[..*len] {
            if let Some(element) = slot.take() {
                releaser.release(element);
                released += 1;
            }
        }
        log::debug!("released {released} elements on teardown");
    }
}

impl<T: fmt::Debug, R: Release<T>> fmt::Debug for OwningArray<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwningArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("slots", &&self.slots[..self.len])
            .finish()
    }
}

/// Slot count needed for `index` to be addressable.
fn slots_through(index: usize) -> Result<usize, ArrayError> {
    index
        .checked_add(1)
        .ok_or(ArrayError::CapacityOverflow { index })
}
