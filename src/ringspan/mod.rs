use core::marker::PhantomData;
use core::mem::MaybeUninit;

use crate::error::CapacityError;
use crate::eviction::{Discard, Evictor};
use crate::lifecycle::{Assign, Emplace, Lifecycle};

mod internal;
mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::{Iter, IterMut};

/// A non-owning ring buffer over caller-supplied storage.
///
/// `RingSpan` imposes bounded queue/deque semantics on a contiguous block of
/// memory it does not own: the caller supplies the storage, the span supplies
/// the wraparound bookkeeping. The span tracks the physical index of the
/// logical front (`head`) and an explicit element count, so the whole storage
/// length is usable as capacity and "empty" never collides with "full".
///
/// Two orthogonal policies shape every span:
///
/// - the [`Lifecycle`] parameter `L` decides how slots come to life.
///   [`Assign`] spans are built over `&mut [T]` whose slots stay live for the
///   span's whole lifetime; pushes assign and pops are pure bookkeeping.
///   [`Emplace`] spans are built over `&mut [MaybeUninit<T>]`; pushes
///   construct in place and pops destroy in place.
/// - the [`Evictor`] parameter `E` decides what a removal hands back:
///   nothing ([`Discard`]), the moved-out value ([`MoveOut`]), or a copy with
///   a seed left behind ([`CopyReplace`]).
///
/// Overflow semantics are chosen per call, not per span: `push_back` and
/// `push_front` displace the oldest element of a full ring, while
/// `try_push_back` and `try_push_front` reject the new one instead.
///
/// Dropping a span never drops elements. Element teardown belongs to
/// whichever adapter owns the storage; for [`Emplace`] spans, pop or
/// [`clear`](RingSpan::clear) the contents before letting the span go if the
/// elements must not leak.
///
/// # Examples
///
/// ```
/// use ringspan::RingSpan;
///
/// let mut storage = [0u32; 8];
/// let mut queue = RingSpan::from_partial(&mut storage, 0, 0);
///
/// assert!(queue.try_push_back(1).is_ok());
/// assert!(queue.try_push_back(2).is_ok());
/// assert_eq!(queue.len(), 2);
///
/// queue.pop_front();
/// assert_eq!(queue.front(), &2);
/// ```
///
/// [`MoveOut`]: crate::MoveOut
/// [`CopyReplace`]: crate::CopyReplace
pub struct RingSpan<'a, T, L: Lifecycle = Assign, E: Evictor<T> = Discard> {
    ptr: *mut T,
    cap: usize,
    head: usize,
    len: usize,
    evictor: E,
    marker: PhantomData<(&'a mut T, L)>,
}

unsafe impl<T: Send, L: Lifecycle, E: Evictor<T> + Send> Send for RingSpan<'_, T, L, E> {}
unsafe impl<T: Sync, L: Lifecycle, E: Evictor<T> + Sync> Sync for RingSpan<'_, T, L, E> {}

impl<'a, T> RingSpan<'a, T, Assign, Discard> {
    /// Creates a span over storage whose every slot is a live element.
    ///
    /// The span starts full: `len() == capacity()`, with the element at
    /// physical slot 0 as the logical front.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::RingSpan;
    ///
    /// let mut storage = [1, 2, 3];
    /// let ring = RingSpan::from_full(&mut storage);
    ///
    /// assert!(ring.is_full());
    /// assert_eq!(ring.front(), &1);
    /// assert_eq!(ring.back(), &3);
    /// ```
    pub fn from_full(storage: &'a mut [T]) -> Self {
        let cap = storage.len();
        RingSpan::from_partial(storage, 0, cap)
    }

    /// Creates a span that adopts an existing arrangement of `storage`.
    ///
    /// The logical window covers `initial_size` elements beginning at
    /// physical slot `head_offset`, wrapping around the end of the storage.
    /// Use this to resume a ring whose window does not start at slot 0, e.g.
    /// after the backing storage has been copied to a new address.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty, `head_offset` is not a valid slot index,
    /// or `initial_size` exceeds the storage length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::RingSpan;
    ///
    /// let mut storage = [10, 20, 30, 40];
    /// let ring = RingSpan::from_partial(&mut storage, 2, 3);
    ///
    /// let logical: Vec<_> = ring.iter().copied().collect();
    /// assert_eq!(logical, vec![30, 40, 10]);
    /// ```
    pub fn from_partial(storage: &'a mut [T], head_offset: usize, initial_size: usize) -> Self {
        let cap = storage.len();
        assert!(cap > 0, "cannot form a ring over zero-length storage");
        assert!(head_offset < cap, "head offset {} out of range for capacity {}", head_offset, cap);
        assert!(initial_size <= cap, "initial size {} exceeds capacity {}", initial_size, cap);
        RingSpan {
            ptr: storage.as_mut_ptr(),
            cap,
            head: head_offset,
            len: initial_size,
            evictor: Discard,
            marker: PhantomData,
        }
    }
}

impl<'a, T> RingSpan<'a, T, Emplace, Discard> {
    /// Creates a span over uninitialized storage.
    ///
    /// The span starts empty. Pushes construct elements in place and pops
    /// destroy them; slots outside the logical window are never touched as
    /// live values.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::mem::MaybeUninit;
    /// use ringspan::RingSpan;
    ///
    /// let mut slots: [MaybeUninit<String>; 3] = core::array::from_fn(|_| MaybeUninit::uninit());
    /// let mut ring = RingSpan::from_empty(&mut slots);
    ///
    /// ring.push_back(String::from("alpha"));
    /// ring.push_back(String::from("beta"));
    /// assert_eq!(ring.front(), "alpha");
    ///
    /// // The span does not drop elements; release them before it goes away.
    /// ring.clear();
    /// ```
    pub fn from_empty(storage: &'a mut [MaybeUninit<T>]) -> Self {
        let cap = storage.len();
        assert!(cap > 0, "cannot form a ring over zero-length storage");
        RingSpan {
            ptr: storage.as_mut_ptr() as *mut T,
            cap,
            head: 0,
            len: 0,
            evictor: Discard,
            marker: PhantomData,
        }
    }

    /// Adopts an existing window of initialized slots in otherwise
    /// uninitialized storage.
    ///
    /// The counterpart of [`from_partial`](RingSpan::from_partial) for the
    /// emplace lifecycle, used to resume a ring over storage whose window was
    /// populated earlier.
    ///
    /// # Safety
    ///
    /// Every slot whose physical index lies within `initial_size` steps of
    /// `head_offset` (wrapping around the storage length) must hold an
    /// initialized `T`; no other slot may be relied on being initialized.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty, `head_offset` is not a valid slot index,
    /// or `initial_size` exceeds the storage length.
    pub unsafe fn from_partial_unchecked(
        storage: &'a mut [MaybeUninit<T>],
        head_offset: usize,
        initial_size: usize,
    ) -> Self {
        let cap = storage.len();
        assert!(cap > 0, "cannot form a ring over zero-length storage");
        assert!(head_offset < cap, "head offset {} out of range for capacity {}", head_offset, cap);
        assert!(initial_size <= cap, "initial size {} exceeds capacity {}", initial_size, cap);
        RingSpan {
            ptr: storage.as_mut_ptr() as *mut T,
            cap,
            head: head_offset,
            len: initial_size,
            evictor: Discard,
            marker: PhantomData,
        }
    }
}

impl<'a, T, L: Lifecycle, E: Evictor<T>> RingSpan<'a, T, L, E> {
    /// Replaces the eviction strategy, preserving the window.
    ///
    /// Constructors pin the strategy to [`Discard`]; rebuild the span with
    /// this when pops should hand values back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::{MoveOut, RingSpan};
    ///
    /// let mut storage = [String::from("x"), String::from("y")];
    /// let mut ring = RingSpan::from_full(&mut storage).with_evictor(MoveOut);
    ///
    /// assert_eq!(ring.pop_back(), "y");
    /// ```
    pub fn with_evictor<P: Evictor<T>>(self, evictor: P) -> RingSpan<'a, T, L, P> {
        RingSpan {
            ptr: self.ptr,
            cap: self.cap,
            head: self.head,
            len: self.len,
            evictor,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements in the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots in the backing storage.
    ///
    /// Fixed at construction; the explicit element count means no slot is
    /// sacrificed to disambiguate empty from full.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns true if the ring contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot of the backing storage is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.cap
    }

    /// Returns the physical slot index of the logical front.
    ///
    /// Together with [`len`](RingSpan::len) this is everything needed to
    /// re-derive an equivalent span over the same (or relocated) storage via
    /// `from_partial`.
    #[inline]
    pub fn head_offset(&self) -> usize {
        self.head
    }

    /// Retrieves an element by logical index, front first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::RingSpan;
    ///
    /// let mut storage = [3, 4, 5];
    /// let ring = RingSpan::from_full(&mut storage);
    /// assert_eq!(ring.get(1), Some(&4));
    /// assert_eq!(ring.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let idx = self.wrap_add(self.head, index);
            unsafe { Some(&*self.slot(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element mutably by logical index, front first.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.wrap_add(self.head, index);
            unsafe { Some(&mut *self.slot(idx)) }
        } else {
            None
        }
    }

    /// Returns a reference to the logical front.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty; there is no sentinel value.
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front on an empty ring");
        unsafe { &*self.slot(self.head) }
    }

    /// Returns a mutable reference to the logical front.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front on an empty ring");
        unsafe { &mut *self.slot(self.head) }
    }

    /// Returns a reference to the logical back.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back on an empty ring");
        let idx = self.wrap_add(self.head, self.len - 1);
        unsafe { &*self.slot(idx) }
    }

    /// Returns a mutable reference to the logical back.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back on an empty ring");
        let idx = self.wrap_add(self.head, self.len - 1);
        unsafe { &mut *self.slot(idx) }
    }

    /// Returns a front-to-back iterator.
    ///
    /// Logical position `i` reads the physical slot `(head + i) % capacity`,
    /// so iteration order is independent of where the window sits.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::RingSpan;
    ///
    /// let mut storage = [0; 4];
    /// let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
    /// for i in 1..=6 {
    ///     ring.push_back(i);
    /// }
    ///
    /// let logical: Vec<_> = ring.iter().copied().collect();
    /// assert_eq!(logical, vec![3, 4, 5, 6]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.ptr, self.cap, self.head, self.len)
    }

    /// Returns a front-to-back iterator of mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.ptr, self.cap, self.head, self.len)
    }

    /// Returns a pair of slices covering, in order, the contents of the ring.
    ///
    /// When the window wraps, the first slice runs from the front to the end
    /// of the storage and the second continues from slot 0. Callers who need
    /// one flat range (for sorting, searching, etc.) can linearize by copying
    /// the two slices out in order; the ring itself never shuffles slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::RingSpan;
    ///
    /// let mut storage = [0; 4];
    /// let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
    /// ring.extend(1..=5);
    ///
    /// assert_eq!(ring.as_slices(), (&[2, 3, 4][..], &[5][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first_len = core::cmp::min(self.len, self.cap - self.head);
        unsafe {
            let first = core::slice::from_raw_parts(self.ptr.add(self.head), first_len);
            let second = core::slice::from_raw_parts(self.ptr, self.len - first_len);
            (first, second)
        }
    }

    /// Returns a pair of mutable slices covering, in order, the contents of
    /// the ring.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let first_len = core::cmp::min(self.len, self.cap - self.head);
        unsafe {
            let first = core::slice::from_raw_parts_mut(self.ptr.add(self.head), first_len);
            let second = core::slice::from_raw_parts_mut(self.ptr, self.len - first_len);
            (first, second)
        }
    }

    /// Adds an element to the back of the ring, displacing the front when
    /// full.
    ///
    /// Returns `None` while there is room. On a full ring the oldest element
    /// is evicted to make space: the active [`Evictor`] runs on it first and
    /// its product is returned as `Some`.
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> None
    /// [1, _, _] <-(+)- 2 => [1, 2, _] -> None
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3] -> None
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Some(evicted 1)
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::RingSpan;
    ///
    /// let mut storage = [0; 3];
    /// let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
    ///
    /// assert_eq!(ring.push_back(1), None);
    /// assert_eq!(ring.push_back(2), None);
    /// assert_eq!(ring.push_back(3), None);
    /// assert_eq!(ring.push_back(4), Some(()));
    ///
    /// assert_eq!(ring.front(), &2);
    /// assert_eq!(ring.back(), &4);
    /// ```
    pub fn push_back(&mut self, element: T) -> Option<E::Output> {
        if self.is_full() {
            let slot = unsafe { self.slot(self.head) };
            let evicted = self.evictor.evict(unsafe { &mut *slot });
            unsafe { *slot = element };
            self.head = self.wrap_add(self.head, 1);
            Some(evicted)
        } else {
            let tail = self.tail();
            unsafe { L::install(self.slot(tail), element) };
            self.len += 1;
            None
        }
    }

    /// Adds an element to the front of the ring, displacing the back when
    /// full.
    ///
    /// The mirror image of [`push_back`](RingSpan::push_back): overflow
    /// evicts from the tail end, and both ends keep the size pinned at
    /// capacity while full.
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [1, _, _] -> None
    /// 2 -(+)-> [1, _, _] => [2, 1, _] -> None
    /// 3 -(+)-> [2, 1, _] => [3, 2, 1] -> None
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2] -> Some(evicted 1)
    /// ```
    pub fn push_front(&mut self, element: T) -> Option<E::Output> {
        let new_head = self.wrap_sub(self.head, 1);
        if self.is_full() {
            // on a full ring the slot before head is the physical back
            let slot = unsafe { self.slot(new_head) };
            let evicted = self.evictor.evict(unsafe { &mut *slot });
            unsafe { *slot = element };
            self.head = new_head;
            Some(evicted)
        } else {
            unsafe { L::install(self.slot(new_head), element) };
            self.head = new_head;
            self.len += 1;
            None
        }
    }

    /// Adds an element to the back of the ring unless it is full.
    ///
    /// A full ring is an expected condition for a bounded queue, so this
    /// reports it as an error carrying the rejected element instead of
    /// evicting; nothing is mutated on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringspan::RingSpan;
    ///
    /// let mut storage = [1, 2];
    /// let mut ring = RingSpan::from_full(&mut storage);
    ///
    /// let err = ring.try_push_back(3).unwrap_err();
    /// assert_eq!(err.element, 3);
    /// assert_eq!(ring.back(), &2);
    /// ```
    pub fn try_push_back(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        let tail = self.tail();
        unsafe { L::install(self.slot(tail), element) };
        self.len += 1;
        Ok(())
    }

    /// Adds an element to the front of the ring unless it is full.
    ///
    /// See [`try_push_back`](RingSpan::try_push_back); reject-on-full and
    /// evict-on-full are chosen per call, not per ring.
    pub fn try_push_front(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        let new_head = self.wrap_sub(self.head, 1);
        unsafe { L::install(self.slot(new_head), element) };
        self.head = new_head;
        self.len += 1;
        Ok(())
    }

    /// Removes the logical front and returns whatever the active [`Evictor`]
    /// makes of it.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
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
    pub fn pop_front(&mut self) -> E::Output {
        assert!(!self.is_empty(), "pop_front on an empty ring");
        let slot = unsafe { self.slot(self.head) };
        let out = self.evictor.evict(unsafe { &mut *slot });
        unsafe { L::retire(slot) };
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        out
    }

    /// Removes the logical back and returns whatever the active [`Evictor`]
    /// makes of it.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    pub fn pop_back(&mut self) -> E::Output {
        assert!(!self.is_empty(), "pop_back on an empty ring");
        let idx = self.wrap_add(self.head, self.len - 1);
        let slot = unsafe { self.slot(idx) };
        let out = self.evictor.evict(unsafe { &mut *slot });
        unsafe { L::retire(slot) };
        self.len -= 1;
        out
    }

    /// Pops every element, front to back, discarding the evictor's output.
    ///
    /// Under the [`Emplace`] lifecycle this is the supported way to destroy
    /// the live contents before the span (which never drops elements) goes
    /// away.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            self.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eviction::{CopyReplace, MoveOut};
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[test]
    fn from_full_starts_full() {
        let mut storage = [1, 2, 3];
        let ring = RingSpan::from_full(&mut storage);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.capacity(), 3);
        assert!(ring.is_full());
        assert_eq!(ring.front(), &1);
        assert_eq!(ring.back(), &3);
    }

    #[test]
    fn from_partial_adopts_window() {
        let mut storage = [10, 20, 30, 40];
        let ring = RingSpan::from_partial(&mut storage, 2, 3);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.head_offset(), 2);
        let logical: Vec<_> = ring.iter().copied().collect();
        assert_eq!(logical, vec![30, 40, 10]);
    }

    #[test]
    #[should_panic]
    fn zero_capacity_storage() {
        let mut storage: [u8; 0] = [];
        let _ = RingSpan::from_full(&mut storage);
    }

    #[test]
    #[should_panic]
    fn oversized_window() {
        let mut storage = [1, 2];
        let _ = RingSpan::from_partial(&mut storage, 0, 3);
    }

    #[test]
    #[should_panic]
    fn head_offset_out_of_range() {
        let mut storage = [1, 2];
        let _ = RingSpan::from_partial(&mut storage, 2, 0);
    }

    #[test]
    fn push_back_evicts_oldest_when_full() {
        let mut storage = [0; 4];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        for i in 1..=4 {
            assert_eq!(ring.push_back(i), None);
        }
        assert_eq!(ring.push_back(5), Some(()));
        assert_eq!(ring.push_back(6), Some(()));
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.front(), &3);
        assert_eq!(ring.back(), &6);
        let logical: Vec<_> = ring.iter().copied().collect();
        assert_eq!(logical, vec![3, 4, 5, 6]);
    }

    #[test]
    fn push_front_evicts_back_when_full() {
        let mut storage = [0; 3];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.push_front(1);
        ring.push_front(2);
        ring.push_front(3);
        assert_eq!(ring.push_front(4), Some(()));
        assert_eq!(ring.len(), 3);
        let logical: Vec<_> = ring.iter().copied().collect();
        assert_eq!(logical, vec![4, 3, 2]);
    }

    #[test]
    fn second_push_is_the_first_survivor() {
        // cap + 1 evicting pushes: the first element is gone, nothing else
        let mut storage = [0; 4];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        for i in 1..=5 {
            ring.push_back(i);
        }
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.front(), &2);
        assert_eq!(ring.back(), &5);
    }

    #[test]
    fn try_push_rejects_when_full() {
        let mut storage = [1, 2, 3];
        let mut ring = RingSpan::from_full(&mut storage);
        assert_eq!(ring.try_push_back(9), Err(CapacityError { element: 9 }));
        assert_eq!(ring.try_push_front(9), Err(CapacityError { element: 9 }));
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.front(), &1);
        assert_eq!(ring.back(), &3);
    }

    #[test]
    fn try_push_fills_both_ends() {
        let mut storage = [0; 2];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        assert_eq!(ring.try_push_back(1), Ok(()));
        assert_eq!(ring.try_push_front(0), Ok(()));
        assert!(ring.try_push_back(2).is_err());
        let logical: Vec<_> = ring.iter().copied().collect();
        assert_eq!(logical, vec![0, 1]);
    }

    #[test]
    fn pop_both_ends() {
        let mut storage = [1, 2, 3, 4];
        let mut ring = RingSpan::from_full(&mut storage);
        ring.pop_front();
        ring.pop_back();
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.front(), &2);
        assert_eq!(ring.back(), &3);
    }

    #[test]
    fn queue_scenario() {
        let mut storage = [0; 4];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        for i in 1..=6 {
            ring.push_back(i);
        }
        ring.pop_front();
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.front(), &4);
        assert_eq!(ring.back(), &6);
    }

    #[test]
    #[should_panic]
    fn pop_front_empty() {
        let mut storage = [0; 2];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.pop_front();
    }

    #[test]
    #[should_panic]
    fn front_empty() {
        let mut storage = [0; 2];
        let ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.front();
    }

    #[test]
    #[should_panic]
    fn back_empty() {
        let mut storage = [0; 2];
        let ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.back();
    }

    #[test]
    fn head_offset_tracks_front_slot() {
        let mut storage = [1, 2, 3];
        let mut ring = RingSpan::from_full(&mut storage);
        assert_eq!(ring.head_offset(), 0);
        ring.pop_front();
        assert_eq!(ring.head_offset(), 1);
        ring.push_back(4);
        assert_eq!(ring.head_offset(), 1);
        ring.push_back(5);
        assert_eq!(ring.head_offset(), 2);
    }

    #[test]
    fn get_and_index() {
        let mut storage = [0; 4];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.push_back(1);
        ring.push_back(2);
        ring.push_back(3);
        assert_eq!(ring.get(1), Some(&2));
        assert_eq!(ring.get(3), None);
        assert_eq!(ring[0], 1);
        ring[1] = 7;
        assert_eq!(ring.get(1), Some(&7));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mut storage = [0; 4];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.push_back(1);
        ring.push_back(2);
        ring[2];
    }

    #[test]
    fn front_back_mut() {
        let mut storage = [1, 2, 3];
        let mut ring = RingSpan::from_full(&mut storage);
        *ring.front_mut() = 10;
        *ring.back_mut() = 30;
        let logical: Vec<_> = ring.iter().copied().collect();
        assert_eq!(logical, vec![10, 2, 30]);
    }

    #[test]
    fn iter_double_ended_and_nth() {
        let mut storage = [0; 5];
        let mut ring = RingSpan::from_partial(&mut storage, 3, 0);
        for i in 1..=5 {
            ring.push_back(i);
        }
        let mut iter = ring.iter();
        assert_eq!(iter.size_hint(), (5, Some(5)));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.nth(1), Some(&3));
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn iter_mut_wraps() {
        let mut storage = [0; 3];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        for i in 1..=4 {
            ring.push_back(i);
        }
        for elem in ring.iter_mut() {
            *elem *= 10;
        }
        let logical: Vec<_> = ring.iter().copied().collect();
        assert_eq!(logical, vec![20, 30, 40]);
    }

    #[test]
    fn as_slices_contiguous_and_wrapped() {
        let mut storage = [0; 4];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.push_back(1);
        ring.push_back(2);
        ring.push_back(3);
        assert_eq!(ring.as_slices(), (&[1, 2, 3][..], &[][..]));
        ring.push_back(4);
        ring.push_back(5);
        assert_eq!(ring.as_slices(), (&[2, 3, 4][..], &[5][..]));
        ring.as_mut_slices().1[0] = 50;
        assert_eq!(ring.back(), &50);
    }

    #[test]
    fn move_out_leaves_default_in_slot() {
        let mut storage = [String::from("a"), String::from("b"), String::from("c")];
        {
            let mut ring = RingSpan::from_full(&mut storage).with_evictor(MoveOut);
            assert_eq!(ring.pop_front(), "a");
            assert_eq!(ring.len(), 2);
        }
        assert_eq!(storage[0], "");
        assert_eq!(storage[1], "b");
    }

    #[test]
    fn copy_replace_seeds_vacated_slots() {
        let mut storage = [1, 2, 3, 4];
        {
            let mut ring = RingSpan::from_partial(&mut storage, 0, 4)
                .with_evictor(CopyReplace { seed: 0 });
            assert_eq!(ring.pop_front(), 1);
            assert_eq!(ring.pop_back(), 4);
            assert_eq!(ring.len(), 2);
        }
        // re-adopt the surviving window and look at the seeded slots
        let ring = RingSpan::from_partial(&mut storage, 1, 2);
        assert_eq!(ring.front(), &2);
        assert_eq!(ring.back(), &3);
        assert_eq!(storage[0], 0);
        assert_eq!(storage[3], 0);
    }

    struct Token<'c> {
        drops: &'c Cell<usize>,
    }

    impl Drop for Token<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn emplace_balances_installs_and_drops() {
        let drops = Cell::new(0);
        let mut slots = core::array::from_fn::<_, 4, _>(|_| MaybeUninit::uninit());
        let mut ring = RingSpan::from_empty(&mut slots);
        for _ in 0..4 {
            ring.push_back(Token { drops: &drops });
        }
        assert!(ring.is_full());
        assert_eq!(drops.get(), 0);
        for _ in 0..4 {
            ring.pop_front();
        }
        assert!(ring.is_empty());
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn emplace_evicting_push_drops_displaced() {
        let drops = Cell::new(0);
        let mut slots = core::array::from_fn::<_, 3, _>(|_| MaybeUninit::uninit());
        let mut ring = RingSpan::from_empty(&mut slots);
        for _ in 0..3 {
            ring.push_back(Token { drops: &drops });
        }
        assert_eq!(ring.push_back(Token { drops: &drops }), Some(()));
        assert_eq!(drops.get(), 1);
        ring.clear();
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn emplace_wraps_like_assign() {
        let mut slots = core::array::from_fn::<_, 3, _>(|_| MaybeUninit::uninit());
        let mut ring = RingSpan::from_empty(&mut slots);
        assert_eq!(ring.try_push_back(String::from("a")), Ok(()));
        ring.push_back(String::from("b"));
        ring.push_back(String::from("c"));
        ring.pop_front();
        ring.push_back(String::from("d"));
        let logical: Vec<_> = ring.iter().cloned().collect();
        assert_eq!(logical, vec!["b", "c", "d"]);
        ring.clear();
    }

    #[test]
    fn eq_ignores_physical_layout() {
        let mut a = [1, 2, 3];
        let mut b = [0, 1, 2, 3];
        let ra = RingSpan::from_full(&mut a);
        let rb = RingSpan::from_partial(&mut b, 1, 3);
        assert_eq!(ra, rb);
    }

    #[test]
    fn debug_prints_logical_order() {
        let mut storage = [0; 3];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        for i in 1..=4 {
            ring.push_back(i);
        }
        assert_eq!(format!("{:?}", ring), "[2, 3, 4]");
    }

    #[test]
    fn extend_displaces_oldest() {
        let mut storage = [0; 3];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        ring.extend(1..=5);
        let logical: Vec<_> = ring.iter().copied().collect();
        assert_eq!(logical, vec![3, 4, 5]);
    }

    #[test]
    fn model_matches_vecdeque() {
        let mut storage = [0usize; 8];
        let mut ring = RingSpan::from_partial(&mut storage, 0, 0);
        let mut model: VecDeque<usize> = VecDeque::new();
        let mut state: usize = 0x2545_f491_4f6c_dd1d;
        for step in 0..2000 {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            match state >> 60 {
                0..=5 => {
                    if ring.try_push_back(step).is_ok() {
                        model.push_back(step);
                    }
                }
                6..=9 => {
                    if ring.try_push_front(step).is_ok() {
                        model.push_front(step);
                    }
                }
                10..=12 => {
                    if !ring.is_empty() {
                        ring.pop_front();
                        model.pop_front();
                    }
                }
                _ => {
                    if !ring.is_empty() {
                        ring.pop_back();
                        model.pop_back();
                    }
                }
            }
            assert_eq!(ring.len(), model.len());
            assert!(ring.len() <= ring.capacity());
        }
        let logical: Vec<_> = ring.iter().copied().collect();
        let expected: Vec<_> = model.iter().copied().collect();
        assert_eq!(logical, expected);
    }
}
