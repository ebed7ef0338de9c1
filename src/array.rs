//! Fixed-size backing arrays.

use core::slice;

/// Trait for fixed size arrays that can back a [`FixedRing`](crate::FixedRing).
///
/// # Safety
///
/// Implementors must be laid out as exactly `capacity()` contiguous `Item`s,
/// with `as_ptr`/`as_mut_ptr` pointing at the first of them.
pub unsafe trait Array {
    /// The array's element type.
    type Item;

    /// Returns a raw pointer to the array's buffer.
    fn as_ptr(&self) -> *const Self::Item;

    /// Returns an unsafe mutable pointer to the array's buffer.
    fn as_mut_ptr(&mut self) -> *mut Self::Item;

    /// Returns the number of elements the array can hold.
    fn capacity() -> usize;

    /// Converts the array to an immutable slice.
    #[inline(always)]
    fn as_slice(&self) -> &[Self::Item] {
        unsafe { slice::from_raw_parts(self.as_ptr(), Self::capacity()) }
    }

    /// Converts the array to a mutable slice.
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [Self::Item] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), Self::capacity()) }
    }
}

unsafe impl<T, const N: usize> Array for [T; N] {
    type Item = T;

    fn as_ptr(&self) -> *const T {
        <[T]>::as_ptr(self)
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        <[T]>::as_mut_ptr(self)
    }

    fn capacity() -> usize {
        N
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::{ArrayLength, GenericArray};

    unsafe impl<T, N> Array for GenericArray<T, N>
    where
        N: ArrayLength<T>,
    {
        type Item = T;

        #[inline(always)]
        fn as_ptr(&self) -> *const T {
            self.as_slice().as_ptr()
        }

        #[inline(always)]
        fn as_mut_ptr(&mut self) -> *mut T {
            self.as_mut_slice().as_mut_ptr()
        }

        #[inline(always)]
        fn capacity() -> usize {
            N::to_usize()
        }

        #[inline(always)]
        fn as_slice(&self) -> &[T] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [T] {
            GenericArray::as_mut_slice(self)
        }
    }
}
