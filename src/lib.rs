//! A non-owning ring buffer over caller-supplied storage.
//!
//! The central type, [`RingSpan`], imposes bounded queue/deque semantics
//! (`O(1)` push and pop at both ends, `O(1)` indexing) on a contiguous block
//! of memory that the caller allocates and continues to own. The span only
//! keeps the wraparound bookkeeping: the physical index of the logical front
//! and an explicit element count, so empty and full never collide and the
//! whole storage length is usable as capacity.
//!
//! Two policies, chosen by type parameter, keep the index arithmetic shared
//! while the slot-touching primitive varies:
//!
//! - [`Assign`] (the default): storage is `&mut [T]` whose slots are live for
//!   the span's whole lifetime. Pushes assign over old values; pops are pure
//!   bookkeeping. The span never constructs or destroys an element.
//! - [`Emplace`]: storage is `&mut [MaybeUninit<T>]`. Pushes construct in
//!   place, pops destroy in place, and only slots inside the logical window
//!   ever hold live values.
//!
//! What a pop hands back is an [`Evictor`] strategy: [`Discard`] returns
//! nothing, [`MoveOut`] returns the element itself, and [`CopyReplace`]
//! returns a copy while seeding the vacated slot with a replacement value.
//!
//! [`FixedRing`] is the owning convenience on top: an inline array plus a
//! `RingSpan` re-derived over it for every operation.
//!
//! # Feature Flags
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; disable for `no_std` builds
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `FixedRing` storage
//!
//! # Overflow semantics
//!
//! Both overflow disciplines are always available, chosen per call:
//! `push_back`/`push_front` displace the oldest element of a full ring (a
//! bounded history), while `try_push_back`/`try_push_front` refuse and hand
//! the element back (a bounded queue).
//!
//! ```
//! use ringspan::RingSpan;
//!
//! let mut samples = [0i16; 4];
//! let mut history = RingSpan::from_partial(&mut samples, 0, 0);
//!
//! for s in [3, 1, 4, 1, 5, 9] {
//!     history.push_back(s);
//! }
//!
//! let latest: Vec<i16> = history.iter().copied().collect();
//! assert_eq!(latest, vec![4, 1, 5, 9]);
//! ```
//!
//! # Non-owning means non-dropping
//!
//! A `RingSpan` never frees its storage and never drops elements when it
//! goes away; both belong to whoever allocated the storage. Under the
//! [`Emplace`] lifecycle, pop or `clear()` the contents first if the
//! elements must not leak.
//!
//! # Concurrency
//!
//! The span is strictly single-threaded: no locking, no atomics, nothing
//! blocks. Producer/consumer hand-off is the caller's business, typically a
//! mutex plus condition variable around the whole span; `Send`/`Sync` are
//! implemented with the usual bounds so such wrappers work.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

mod array;
mod eviction;
mod fixedring;
mod lifecycle;
mod ringspan;
mod utils;

pub mod error;

pub use crate::array::Array;
pub use crate::error::CapacityError;
pub use crate::eviction::{CopyReplace, Discard, Evictor, MoveOut};
pub use crate::fixedring::FixedRing;
pub use crate::lifecycle::{Assign, Emplace, Lifecycle};
pub use crate::ringspan::{Iter, IterMut, RingSpan};
