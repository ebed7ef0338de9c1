use super::RingSpan;
use crate::eviction::Evictor;
use crate::lifecycle::Lifecycle;
use crate::utils;

impl<'a, T, L: Lifecycle, E: Evictor<T>> RingSpan<'a, T, L, E> {
    #[inline]
    pub(crate) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        utils::wrap_add(index, addend, self.cap)
    }

    #[inline]
    pub(crate) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        utils::wrap_sub(index, subtrahend, self.cap)
    }

    /// The physical index one past the logical back; derived, never stored.
    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.wrap_add(self.head, self.len)
    }

    /// Raw pointer to a physical slot.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index < self.cap);
        self.ptr.add(index)
    }
}
