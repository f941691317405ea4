//! Test fixtures for slotarray release accounting.
//!
//! - [`RecordingReleaser`] records every element handed to a releaser.
//! - [`DropCounter`] mints [`Tracked`] elements that count their own drops,
//!   so tests can assert that nothing leaked and nothing was freed twice.
//!
//! Releasers are handed out as plain closures, which every slotarray
//! release policy accepts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Shared log of released elements, in release order.
pub struct RecordingReleaser<T> {
    released: Arc<Mutex<Vec<T>>>,
}

impl<T> RecordingReleaser<T> {
    pub fn new() -> Self {
        Self {
            released: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A release closure that appends to this log.
    pub fn releaser(&self) -> impl FnMut(T) + 'static
    where
        T: 'static,
    {
        let sink = Arc::clone(&self.released);
        move |element| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(element)
        }
    }

    /// Project every released element through `f`, in release order.
    pub fn map_released<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.lock().iter().map(f).collect()
    }

    /// Number of elements released so far.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        self.released.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> RecordingReleaser<T> {
    /// Snapshot of the released elements, in release order.
    pub fn released(&self) -> Vec<T> {
        self.lock().clone()
    }
}

impl<T: Clone + Ord> RecordingReleaser<T> {
    /// Released elements sorted, for order-insensitive assertions.
    pub fn released_sorted(&self) -> Vec<T> {
        let mut released = self.released();
        released.sort();
        released
    }
}

impl<T> Default for RecordingReleaser<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mints [`Tracked`] elements and counts how many of them were dropped.
#[derive(Clone, Default)]
pub struct DropCounter {
    drops: Arc<AtomicUsize>,
    minted: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new element tagged with `id`.
    pub fn track(&self, id: u32) -> Tracked {
        self.minted.fetch_add(1, Ordering::SeqCst);
        Tracked {
            id,
            drops: Arc::clone(&self.drops),
        }
    }

    /// Elements dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    /// Elements minted so far.
    pub fn minted(&self) -> usize {
        self.minted.load(Ordering::SeqCst)
    }

    /// Elements minted but not yet dropped.
    pub fn live(&self) -> usize {
        self.minted() - self.drops()
    }
}

/// An element that bumps its [`DropCounter`] when dropped.
///
/// Not `Clone`: each `Tracked` is a unique owned resource.
pub struct Tracked {
    id: u32,
    drops: Arc<AtomicUsize>,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}
