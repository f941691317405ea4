//! Owning, growable arrays of element slots.
//!
//! [`OwningArray`] is a contiguous, index-addressable container that owns
//! every element placed in it. Each slot is either empty or holds one
//! element. Elements leave the container through exactly one release path:
//! being overwritten, being deleted, or the container being dropped. Every
//! such departure runs the array's [`Release`] policy once.
//!
//! # Layout
//!
//! ```text
//! OwningArray<T, R>
//! ├── slots: Vec<Option<T>>   (capacity-many slots, all empty at index >= len)
//! ├── len                     (exclusive upper bound of addressable indices)
//! └── releaser: R             (runs once per departing element)
//! ```
//!
//! # Index-mutation modes
//!
//! - **Overwrite** ([`OwningArray::put`]): writes a slot, releasing what was
//!   there. Writing past the end extends the length and leaves holes.
//! - **Append** ([`OwningArray::add`]): overwrite at `len`.
//! - **Insert** ([`OwningArray::insert_at`]): shifts the tail right by one.
//! - **Delete** ([`OwningArray::delete_at`]): releases and shifts the tail left.
//!
//! Capacity only grows, doubling with a floor of the requested size. The
//! container is not synchronised; `&mut self` serialises all mutation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod growth;
pub mod release;

// Public re-exports for the primary API surface.
pub use array::OwningArray;
pub use config::ArrayConfig;
pub use error::{ArrayError, Rejected};
pub use release::{DropRelease, Release};
