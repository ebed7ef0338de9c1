//! Eviction strategies for [`RingSpan`](crate::RingSpan).
//!
//! A strategy decides what a removal hands back to the caller, whether the
//! removal is an explicit pop or a push displacing the oldest element of a
//! full ring. It always runs on the live value *before* the slot is
//! overwritten or retired, and it is orthogonal to the lifecycle policy.

use core::mem;

/// Decides what a removal hands back to the caller.
pub trait Evictor<T> {
    /// The value a pop (or an evicting push) produces.
    type Output;

    /// Runs on the element that is leaving the ring.
    ///
    /// The slot must still hold a valid `T` when this returns; the ring
    /// overwrites or retires it afterwards.
    fn evict(&mut self, slot: &mut T) -> Self::Output;
}

/// Ignores the outgoing value.
///
/// Pops return `()`; the departing element is simply overwritten (or, under
/// the emplace lifecycle, dropped in place).
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl<T> Evictor<T> for Discard {
    type Output = ();

    #[inline]
    fn evict(&mut self, _slot: &mut T) {}
}

/// Moves the outgoing value out and returns it.
///
/// The slot is left holding `T::default()`, which keeps it destructible no
/// matter which lifecycle policy the ring runs under.
///
/// # Examples
///
/// ```
/// use ringspan::{MoveOut, RingSpan};
///
/// let mut storage = [String::from("a"), String::from("b")];
/// let mut ring = RingSpan::from_full(&mut storage).with_evictor(MoveOut);
///
/// assert_eq!(ring.pop_front(), "a");
/// assert_eq!(ring.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveOut;

impl<T: Default> Evictor<T> for MoveOut {
    type Output = T;

    #[inline]
    fn evict(&mut self, slot: &mut T) -> T {
        mem::take(slot)
    }
}

/// Hands back a copy of the outgoing value and assigns a seed into the slot.
///
/// Useful for element types that must never be "empty", e.g. a rolling buffer
/// of non-null handles: the vacated slot always holds the seed, never a
/// moved-from husk.
///
/// # Examples
///
/// ```
/// use ringspan::{CopyReplace, RingSpan};
///
/// let mut storage = [7, 8, 9];
/// {
///     let mut ring = RingSpan::from_full(&mut storage)
///         .with_evictor(CopyReplace { seed: 0 });
///     assert_eq!(ring.pop_front(), 7);
/// }
/// // The vacated physical slot now holds the seed.
/// assert_eq!(storage[0], 0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyReplace<T> {
    /// The replacement value assigned into each vacated slot.
    pub seed: T,
}

impl<T: Clone> Evictor<T> for CopyReplace<T> {
    type Output = T;

    #[inline]
    fn evict(&mut self, slot: &mut T) -> T {
        mem::replace(slot, self.seed.clone())
    }
}
